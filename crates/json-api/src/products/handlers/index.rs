//! Product Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Product Index Handler
///
/// Returns every stored product as a JSON array.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = 200, description = "Stored products"),
        (status_code = 503, description = "Document store unavailable"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let products = depot
        .app_or_500()?
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
