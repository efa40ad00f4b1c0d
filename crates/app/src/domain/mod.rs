//! Product Service Domain Concerns

pub mod products;
