//! Products service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::MongoProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MongoProductsService {
    repository: MongoProductsRepository,
}

impl MongoProductsService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: MongoProductsRepository::new(db),
        }
    }
}

fn validate(product: &NewProduct) -> Result<(), ProductsServiceError> {
    if product.name.trim().is_empty() {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    if product.price < Decimal::ZERO {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

#[async_trait]
impl ProductsService for MongoProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.repository.find_products().await
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .find_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate(&product)?;

        let created = self.repository.insert_product(product).await?;

        info!(product = %created.id, name = %created.name, "product created");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates and stores a new product, returning it with its assigned ID.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{Document, doc};
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn iphone(name: &str, price: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: name.to_lowercase(),
            price: Decimal::from(price),
        }
    }

    #[test]
    fn validate_accepts_zero_price() {
        assert!(validate(&iphone("Freebie", 0)).is_ok());
    }

    #[test]
    fn validate_accepts_empty_description() {
        let product = NewProduct {
            description: String::new(),
            ..iphone("iPhone13", 1300)
        };

        assert!(validate(&product).is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert!(matches!(
            validate(&iphone("   ", 1300)),
            Err(ProductsServiceError::MissingRequiredData)
        ));
    }

    #[test]
    fn validate_rejects_negative_price() {
        assert!(matches!(
            validate(&iphone("iPhone13", -1)),
            Err(ProductsServiceError::InvalidData)
        ));
    }

    #[tokio::test]
    async fn create_product_returns_generated_id_and_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(NewProduct {
                name: "iPhone13".to_string(),
                description: "iphone 13".to_string(),
                price: Decimal::from(1300),
            })
            .await?;

        assert_eq!(product.name, "iPhone13");
        assert_eq!(product.description, "iphone 13");
        assert_eq!(product.price, Decimal::from(1300));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_keeps_exact_decimal_price() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(NewProduct {
                price: Decimal::new(129_999, 2),
                ..iphone("iPhone15", 0)
            })
            .await?;

        let fetched = ctx.products.get_product(created.id).await?;

        assert_eq!(fetched.price, Decimal::new(129_999, 2));
        assert_eq!(fetched.price.to_string(), "1299.99");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_invalid_input_persists_nothing() -> TestResult {
        let ctx = TestContext::new().await;

        let blank = ctx.products.create_product(iphone("", 1300)).await;
        let negative = ctx.products.create_product(iphone("iPhone13", -5)).await;

        assert!(
            matches!(blank, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {blank:?}"
        );
        assert!(
            matches!(negative, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {negative:?}"
        );

        let stored = ctx
            .db
            .db()
            .database()
            .collection::<Document>("products")
            .count_documents(doc! {})
            .await?;

        assert_eq!(stored, 0);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_returns_created_products_with_distinct_ids() -> TestResult {
        let ctx = TestContext::new().await;

        let a = ctx.products.create_product(iphone("iPhone13", 1300)).await?;
        let b = ctx.products.create_product(iphone("iPhone14", 1400)).await?;

        let products = ctx.products.list_products().await?;
        let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();

        assert_eq!(products.len(), 2, "expected two products");
        assert!(ids.contains(&a.id), "product A should be in the list");
        assert!(ids.contains(&b.id), "product B should be in the list");
        assert_ne!(a.id, b.id);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_is_stable_without_writes() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(iphone("iPhone13", 1300)).await?;
        ctx.products.create_product(iphone("iPhone14", 1400)).await?;

        let first = ctx.products.list_products().await?;
        let second = ctx.products.list_products().await?;

        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(iphone("iPhone13", 1300)).await?;
        let fetched = ctx.products.get_product(created.id).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
