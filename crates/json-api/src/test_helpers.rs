//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use product_service_app::{
    context::AppContext,
    database::MockHealthCheck,
    products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::state::State;

fn strict_health_mock() -> MockHealthCheck {
    let mut health = MockHealthCheck::new();

    health.expect_ping().never();

    health
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(products),
        Arc::new(strict_health_mock()),
    ))
}

pub(crate) fn state_with_health(health: MockHealthCheck) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(strict_products_mock()),
        Arc::new(health),
    ))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn make_product(name: &str, price: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(),
        name: name.to_string(),
        description: format!("{name} description"),
        price: Decimal::from(price),
    }
}

/// Shared `MongoDB` container for end-to-end router tests.
pub(crate) mod mongo {
    use std::{
        sync::atomic::{AtomicU64, Ordering},
        thread,
    };

    use mongodb::Client;
    use once_cell::sync::Lazy;
    use testcontainers_modules::{
        mongo::Mongo,
        testcontainers::{ContainerAsync, runners::AsyncRunner},
    };
    use tokio::{
        runtime,
        sync::{OnceCell, mpsc},
    };

    const MONGO_PORT: u16 = 27017;

    struct SharedMongo {
        _container: ContainerAsync<Mongo>,
        uri: String,
    }

    static MONGO_CONTAINER: Lazy<OnceCell<SharedMongo>> = Lazy::new(OnceCell::new);

    static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> =
        Lazy::new(OnceCell::new);

    static DATABASE_COUNTER: AtomicU64 = AtomicU64::new(0);

    async fn start() -> SharedMongo {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(MONGO_PORT)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        SharedMongo {
            _container: container,
            uri: format!("mongodb://{host}:{port}"),
        }
    }

    /// Drops queued databases on a thread and runtime that outlive any single test.
    fn start_cleanup_worker(uri: String) -> mpsc::UnboundedSender<String> {
        let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

        thread::spawn(move || {
            let runtime = runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to start cleanup runtime");

            runtime.block_on(async move {
                let client = Client::with_uri_str(&uri)
                    .await
                    .expect("Failed to connect cleanup client");

                while let Some(database) = receiver.recv().await {
                    if let Err(err) = client.database(&database).drop().await {
                        eprintln!("Failed to cleanup database '{database}': {err}");
                    }
                }
            });
        });

        sender
    }

    /// URI of the shared container, started on first use.
    pub(crate) async fn uri() -> String {
        let uri = MONGO_CONTAINER.get_or_init(start).await.uri.clone();

        CLEANUP_SENDER
            .get_or_init(|| async { start_cleanup_worker(uri.clone()) })
            .await;

        uri
    }

    /// Queue a database to be dropped in the background.
    pub(crate) fn drop_database(database: &str) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _ = sender.send(database.to_string());
        }
    }

    /// A database name no other test in this process uses.
    pub(crate) fn unique_database_name() -> String {
        format!(
            "product_service_json_test_{}_{}",
            std::process::id(),
            DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed)
        )
    }
}
