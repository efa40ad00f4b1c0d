//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use product_service_app::context::AppContext;

use crate::state::State;

/// Access to values injected into the depot by hoops.
pub(crate) trait DepotExt {
    /// Shared application context, or a logged 500 when the state hoop is missing.
    fn app_or_500(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn app_or_500(&self) -> Result<&AppContext, StatusError> {
        self.obtain::<Arc<State>>()
            .map(|state| &state.app)
            .map_err(|_missing| {
                error!("application state missing from depot");

                StatusError::internal_server_error()
            })
    }
}
