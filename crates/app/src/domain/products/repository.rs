//! Products Repository

use futures::TryStreamExt as _;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
    },
};

pub(crate) const PRODUCTS_COLLECTION: &str = "products";

/// Stored product document. Prices are kept as decimal strings.
#[derive(Debug, Clone, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
}

/// Product document as written; `_id` is left for the store to assign.
#[derive(Debug, Clone, Serialize)]
struct NewProductDocument {
    name: String,
    description: String,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
}

impl From<NewProduct> for NewProductDocument {
    fn from(product: NewProduct) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

impl From<ProductDocument> for ProductRecord {
    fn from(document: ProductDocument) -> Self {
        Self {
            id: ProductId::from_object_id(document.id),
            name: document.name,
            description: document.description,
            price: document.price,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MongoProductsRepository {
    products: Collection<ProductDocument>,
}

impl MongoProductsRepository {
    #[must_use]
    pub(crate) fn new(db: &Db) -> Self {
        Self {
            products: db.database().collection(PRODUCTS_COLLECTION),
        }
    }

    pub(crate) async fn insert_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let document = NewProductDocument::from(product);

        let inserted = self
            .products
            .clone_with_type::<NewProductDocument>()
            .insert_one(&document)
            .await?;

        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or(ProductsServiceError::MissingInsertedId)?;

        Ok(ProductRecord {
            id: ProductId::from_object_id(id),
            name: document.name,
            description: document.description,
            price: document.price,
        })
    }

    pub(crate) async fn find_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let documents: Vec<ProductDocument> = self
            .products
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    pub(crate) async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let document = self
            .products
            .find_one(doc! { "_id": product.into_object_id() })
            .await?;

        Ok(document.map(Into::into))
    }
}
