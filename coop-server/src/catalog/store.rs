//! redb-based storage layer for the product catalog
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `products` | product id | JSON-serialized `Product` | Catalog records |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: a record is
//! persistent as soon as `commit()` returns, and the database file stays in a
//! consistent state across power loss.
//!
//! # Concurrency
//!
//! `update` is a request-scoped read-modify-write with no cross-request
//! coordination: two concurrent updates to the same id interleave with
//! last-write-wins semantics.

use chrono::{SecondsFormat, Utc};
use rand::Rng;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use shared::error::AppError;
use shared::models::{Product, ProductDraft, ProductPatch};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for catalog records: key = product id, value = JSON-serialized Product
const PRODUCTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("products");

/// Key prefix for every product record
pub(crate) const PRODUCT_KEY_PREFIX: &str = "product:";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ProductNotFound(_) => AppError::product_not_found(),
            StorageError::Serialization(e) => AppError::internal(e.to_string()),
            other => AppError::database(other.to_string()),
        }
    }
}

/// Product catalog backed by redb
#[derive(Clone)]
pub struct CatalogStore {
    db: Arc<Database>,
}

impl CatalogStore {
    /// Open or create the catalog database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table up front so reads on a fresh database succeed
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PRODUCTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Fetch a product by id
    pub fn get(&self, id: &str) -> StorageResult<Option<Product>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Store a product under the given id (blind upsert, no merge)
    pub fn set(&self, id: &str, product: &Product) -> StorageResult<()> {
        let bytes = serde_json::to_vec(product)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PRODUCTS_TABLE)?;
            table.insert(id, bytes.as_slice())?;
        }
        write_txn.commit()?;

        Ok(())
    }

    /// Delete a product by id, failing if it is absent
    pub fn delete(&self, id: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(PRODUCTS_TABLE)?;
            table.remove(id)?.is_some()
        };
        write_txn.commit()?;

        if removed {
            Ok(())
        } else {
            Err(StorageError::ProductNotFound(id.to_string()))
        }
    }

    /// List all products whose key starts with the given prefix
    ///
    /// No ordering guarantee; callers must not rely on the return order.
    pub fn list_by_prefix(&self, prefix: &str) -> StorageResult<Vec<Product>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;

        let mut products = Vec::new();
        for entry in table.range(prefix..)? {
            let (key, value) = entry?;
            if !key.value().starts_with(prefix) {
                break;
            }
            products.push(serde_json::from_slice(value.value())?);
        }

        Ok(products)
    }

    /// List the whole catalog
    pub fn list(&self) -> StorageResult<Vec<Product>> {
        self.list_by_prefix(PRODUCT_KEY_PREFIX)
    }

    /// Create a new product from the canonical draft
    ///
    /// Generates the id, stamps `createdAt`, then persists via [`Self::set`].
    pub fn create(&self, draft: ProductDraft) -> StorageResult<Product> {
        let id = generate_product_id();
        let created_at = now_stamp();
        let product = draft.into_product(id.clone(), created_at);

        self.set(&id, &product)?;
        Ok(product)
    }

    /// Merge a partial patch over an existing record
    ///
    /// Fails with `ProductNotFound` when the id is unknown; otherwise
    /// preserves `id` and `createdAt`, stamps `updatedAt`, and persists.
    pub fn update(&self, id: &str, patch: ProductPatch) -> StorageResult<Product> {
        let mut product = self
            .get(id)?
            .ok_or_else(|| StorageError::ProductNotFound(id.to_string()))?;

        patch.apply(&mut product);
        product.updated_at = Some(now_stamp());

        self.set(id, &product)?;
        Ok(product)
    }

    /// Number of records in the catalog
    pub fn count(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;
        Ok(table.len()?)
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.count()? == 0)
    }
}

/// Generate an opaque product id: `product:{millis}-{random alnum x9}`
///
/// Collision risk across the same millisecond is carried by the 9-char
/// base-36 suffix.
fn generate_product_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    format!("{}{}-{}", PRODUCT_KEY_PREFIX, Utc::now().timestamp_millis(), suffix)
}

/// RFC 3339 timestamp with millisecond precision, UTC
fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
