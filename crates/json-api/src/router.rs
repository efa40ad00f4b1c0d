//! App Router

use salvo::Router;

use crate::{healthcheck, observability::metrics_handler, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("healthcheck")
                .get(healthcheck::handler)
                .push(Router::with_path("ready").get(healthcheck::ready)),
        )
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("api/product")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
}
