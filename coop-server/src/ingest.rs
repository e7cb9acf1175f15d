//! Product ingestion
//!
//! Admin submissions arrive in two encodings and both normalize into the one
//! canonical [`ProductDraft`] before the Catalog Store sees anything:
//!
//! - **Structured**: a JSON body with typed fields and `image` already a URI.
//! - **Field-set**: multipart form fields as strings plus an optional binary
//!   image part. The image, when present, is uploaded to the blob sink under
//!   `{millis}-{original filename}` and the returned URI becomes `image`;
//!   upload failure aborts the whole creation.
//!
//! Non-numeric `price`/`stock` strings in the field-set encoding are rejected
//! with a validation error.

use axum::extract::Multipart;
use chrono::Utc;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::ProductDraft;
use std::collections::HashMap;

use crate::blob::BlobSink;

/// Maximum accepted image size (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Field name carrying the binary image part
const IMAGE_FIELD: &str = "image";

/// Validate a canonical draft, whichever encoding produced it
pub fn validate_draft(draft: ProductDraft) -> AppResult<ProductDraft> {
    if draft.name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    if draft.category.trim().is_empty() {
        return Err(AppError::validation("category is required"));
    }
    if draft.price.is_sign_negative() {
        return Err(AppError::validation("price must be non-negative"));
    }
    Ok(draft)
}

/// Normalize the multipart field-set encoding into a canonical draft
///
/// Performs at most one blob upload; the `?` on it is what aborts the
/// creation when the sink fails.
pub async fn draft_from_multipart(
    mut multipart: Multipart,
    sink: &dyn BlobSink,
) -> AppResult<ProductDraft> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image_part: Option<ImagePart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or(IMAGE_FIELD).to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read image: {}", e)))?;

            // An empty file input counts as "no image"
            if bytes.is_empty() {
                continue;
            }
            if bytes.len() > MAX_IMAGE_SIZE {
                return Err(AppError::validation(format!(
                    "Image too large. Maximum size is {}MB",
                    MAX_IMAGE_SIZE / 1024 / 1024
                )));
            }

            image_part = Some(ImagePart {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read field: {}", e)))?;
            fields.insert(name, value);
        }
    }

    let price = parse_price(&required(&mut fields, "price")?)?;
    let stock = parse_stock(&required(&mut fields, "stock")?)?;

    let image = match image_part {
        Some(part) => {
            let object_name = format!("{}-{}", Utc::now().timestamp_millis(), part.file_name);
            sink.store(&object_name, part.bytes, &part.content_type)
                .await?
        }
        None => String::new(),
    };

    validate_draft(ProductDraft {
        name: fields.remove("name").unwrap_or_default(),
        category: fields.remove("category").unwrap_or_default(),
        subcategory: fields.remove("subcategory").unwrap_or_default(),
        price,
        unit: fields.remove("unit").unwrap_or_default(),
        description: fields.remove("description").unwrap_or_default(),
        image,
        stock,
    })
}

struct ImagePart {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

fn required(fields: &mut HashMap<String, String>, key: &str) -> AppResult<String> {
    fields
        .remove(key)
        .ok_or_else(|| AppError::validation(format!("{} is required", key)))
}

fn parse_price(raw: &str) -> AppResult<Decimal> {
    let price: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("price is not a number: {:?}", raw)))?;
    if price.is_sign_negative() {
        return Err(AppError::validation("price must be non-negative"));
    }
    Ok(price)
}

fn parse_stock(raw: &str) -> AppResult<u32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("stock is not a non-negative integer: {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_accepts_decimals() {
        assert_eq!(parse_price("450").unwrap(), Decimal::from(450));
        assert_eq!(parse_price(" 12.50 ").unwrap(), "12.50".parse().unwrap());
    }

    #[test]
    fn test_parse_price_rejects_garbage_and_negatives() {
        assert!(parse_price("cheap").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("-5").is_err());
    }

    #[test]
    fn test_parse_stock_rejects_non_integers() {
        assert_eq!(parse_stock("20").unwrap(), 20);
        assert!(parse_stock("plenty").is_err());
        assert!(parse_stock("-1").is_err());
        assert!(parse_stock("2.5").is_err());
    }

    #[test]
    fn test_validate_draft_requires_name_and_category() {
        let draft = ProductDraft {
            name: String::new(),
            category: "Eggs".into(),
            subcategory: String::new(),
            price: Decimal::from(90),
            unit: "dozen".into(),
            description: String::new(),
            image: String::new(),
            stock: 50,
        };
        assert!(validate_draft(draft.clone()).is_err());

        let draft = ProductDraft {
            name: "Farm Eggs".into(),
            ..draft
        };
        assert!(validate_draft(draft).is_ok());
    }
}
