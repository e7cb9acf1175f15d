//! Checkout summary
//!
//! Pure derivation over the cart lines. Nothing here mutates the cart or
//! talks to the server; order placement is out of scope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// Flat delivery fee charged on any non-empty cart
const DELIVERY_FEE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub subtotal: Decimal,
    pub delivery: Decimal,
    pub total: Decimal,
}

/// Derive subtotal, delivery fee and total from the cart lines
///
/// Prices come from the line snapshots, not the live catalog. An empty cart
/// yields an all-zero summary with no delivery fee.
pub fn summarize(lines: &[CartLine]) -> CheckoutSummary {
    let subtotal: Decimal = lines
        .iter()
        .map(|line| line.product.price * Decimal::from(line.quantity))
        .sum();
    let delivery = if subtotal > Decimal::ZERO {
        Decimal::from(DELIVERY_FEE)
    } else {
        Decimal::ZERO
    };
    CheckoutSummary {
        subtotal,
        delivery,
        total: subtotal + delivery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductDraft;

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        let product = ProductDraft {
            name: format!("Product {}", id),
            category: "Eggs".into(),
            subcategory: String::new(),
            price: Decimal::from(price),
            unit: "dozen".into(),
            description: String::new(),
            image: String::new(),
            stock: 100,
        }
        .into_product(format!("product:1-{}", id), "2025-01-01T00:00:00Z".into());
        CartLine { product, quantity }
    }

    #[test]
    fn test_summary_sums_lines_and_adds_delivery() {
        let lines = vec![line("a", 100, 2), line("b", 50, 3)];
        let summary = summarize(&lines);

        assert_eq!(summary.subtotal, Decimal::from(350));
        assert_eq!(summary.delivery, Decimal::from(50));
        assert_eq!(summary.total, Decimal::from(400));
    }

    #[test]
    fn test_empty_cart_has_no_delivery_fee() {
        let summary = summarize(&[]);

        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.delivery, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_prices_keep_exact_arithmetic() {
        let mut half = line("a", 0, 3);
        half.product.price = Decimal::new(105, 1); // 10.5
        let summary = summarize(&[half]);

        assert_eq!(summary.subtotal, Decimal::new(315, 1));
        assert_eq!(summary.total, Decimal::new(815, 1));
    }

    #[test]
    fn test_delivery_applies_once_regardless_of_line_count() {
        let one = summarize(&[line("a", 100, 1)]);
        let many = summarize(&[line("a", 100, 1), line("b", 100, 1), line("c", 100, 1)]);

        assert_eq!(one.delivery, many.delivery);
    }
}
