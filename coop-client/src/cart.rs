//! Cart Engine
//!
//! Session-resident ordered ledger mapping product id to purchase quantity.
//! Lines hold the product snapshot taken at add-time; the snapshot is never
//! re-synchronized against later catalog changes (price/stock drift is
//! accepted). A single logical mutator drives the engine, so every mutation
//! runs to completion and flushes the whole cart to the slot before
//! returning.

use serde::{Deserialize, Serialize};
use shared::models::Product;

use crate::checkout::{self, CheckoutSummary};
use crate::error::ClientResult;
use crate::slot::CartSlot;

/// One cart line: a product snapshot plus a positive quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

/// The session cart
pub struct CartEngine {
    lines: Vec<CartLine>,
    slot: Box<dyn CartSlot>,
}

impl CartEngine {
    /// Rehydrate the cart from the slot (read once at session start)
    pub fn load(slot: Box<dyn CartSlot>) -> ClientResult<Self> {
        let lines = slot.load()?.unwrap_or_default();
        Ok(Self { lines, slot })
    }

    /// Start with an empty cart on the given slot
    pub fn empty(slot: Box<dyn CartSlot>) -> Self {
        Self {
            lines: Vec::new(),
            slot,
        }
    }

    /// Add a product snapshot to the cart
    ///
    /// An existing line for the same id has the quantity added onto it; no
    /// stock clamp happens at merge time (clamping is a caller concern that
    /// reads `product.stock` before calling in). A zero quantity is a no-op:
    /// a line never exists with quantity 0.
    pub fn add(&mut self, product: &Product, quantity: u32) -> ClientResult<()> {
        if quantity == 0 {
            return Ok(());
        }
        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
        self.flush()
    }

    /// Drop the line for the given product id; no-op if absent
    pub fn remove(&mut self, product_id: &str) -> ClientResult<()> {
        self.lines.retain(|line| line.product.id != product_id);
        self.flush()
    }

    /// Replace a line's quantity verbatim; zero collapses to removal
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> ClientResult<()> {
        if quantity == 0 {
            return self.remove(product_id);
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
        {
            line.quantity = quantity;
        }
        self.flush()
    }

    /// Empty the cart
    pub fn clear(&mut self) -> ClientResult<()> {
        self.lines.clear();
        self.flush()
    }

    /// Current lines, in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derive the checkout summary from the current lines
    pub fn summary(&self) -> CheckoutSummary {
        checkout::summarize(&self.lines)
    }

    /// Flush the full serialized cart to the slot
    fn flush(&self) -> ClientResult<()> {
        self.slot.store(&self.lines)?;
        Ok(())
    }
}
