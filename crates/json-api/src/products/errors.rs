//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use product_service_app::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Unavailable(source) => {
            error!("document store unavailable: {source}");

            StatusError::service_unavailable().brief("Document store unavailable")
        }
        ProductsServiceError::Storage(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::MissingInsertedId => {
            error!("product stored without an object id");

            StatusError::internal_server_error()
        }
    }
}
