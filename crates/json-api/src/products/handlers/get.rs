//! Get Product Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use product_service_app::products::records::{ProductId, ProductRecord};

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The store-assigned identifier of the product
    pub id: String,

    /// The product name
    pub name: String,

    /// The product description, possibly empty
    pub description: String,

    /// The exact decimal price, rendered as a string
    #[salvo(schema(value_type = String))]
    pub price: Decimal,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.to_hex(),
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = 200, description = "Product found"),
        (status_code = 400, description = "Malformed product id"),
        (status_code = 404, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let id = id.into_inner().parse::<ProductId>().or_400("Invalid product id")?;

    let product = depot
        .app_or_500()?
        .products
        .get_product(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
