//! Product service domain and document-store persistence.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod ids;

pub use domain::products;
