//! Catalog Store - durable keyed collection of product records

mod store;

pub use store::{CatalogStore, StorageError, StorageResult};
