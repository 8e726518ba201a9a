//! Partial updates.
//!
//! A patch names only the fields to change. Absent fields keep their stored value;
//! nested seller/dimensions patches apply field by field. Unknown fields are
//! rejected at deserialization, and the merged result goes through the full
//! validator before it can replace the stored record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use catalog_core::{DomainError, DomainResult, ProductId, SellerId};

use crate::product::{Currency, Dimensions, Product, ProductDraft, Seller};
use crate::validation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SellerPatch {
    pub id: Option<SellerId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<Url>,
}

impl SellerPatch {
    pub fn apply(self, seller: &mut Seller) {
        if let Some(id) = self.id {
            seller.id = id;
        }
        if let Some(name) = self.name {
            seller.name = name;
        }
        if let Some(email) = self.email {
            seller.email = email;
        }
        if let Some(website) = self.website {
            seller.website = website;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionsPatch {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl DimensionsPatch {
    pub fn apply(self, dimensions: &mut Dimensions) {
        if let Some(length) = self.length {
            dimensions.length = length;
        }
        if let Some(width) = self.width {
            dimensions.width = width;
        }
        if let Some(height) = self.height {
            dimensions.height = height;
        }
    }
}

/// Partial update document for a product.
///
/// `id` and `created_at` may be echoed back unchanged; any other value is an error.
/// A `null` value is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    pub id: Option<ProductId>,
    pub created_at: Option<DateTime<Utc>>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<Currency>,
    pub discount_percent: Option<i64>,
    pub stock: Option<i64>,
    pub is_active: Option<bool>,
    pub rating: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub image_urls: Option<Vec<Url>>,
    pub seller: Option<SellerPatch>,
    pub dimensions: Option<DimensionsPatch>,
}

impl ProductPatch {
    /// Overwrite every field present in the patch.
    pub fn apply(self, draft: &mut ProductDraft) {
        if let Some(sku) = self.sku {
            draft.sku = sku;
        }
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(brand) = self.brand {
            draft.brand = brand;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(currency) = self.currency {
            draft.currency = currency;
        }
        if let Some(discount_percent) = self.discount_percent {
            draft.discount_percent = discount_percent;
        }
        if let Some(stock) = self.stock {
            draft.stock = stock;
        }
        if let Some(is_active) = self.is_active {
            draft.is_active = is_active;
        }
        if let Some(rating) = self.rating {
            draft.rating = rating;
        }
        if let Some(tags) = self.tags {
            draft.tags = Some(tags);
        }
        if let Some(image_urls) = self.image_urls {
            draft.image_urls = image_urls;
        }
        if let Some(seller) = self.seller {
            seller.apply(&mut draft.seller);
        }
        if let Some(dimensions) = self.dimensions {
            dimensions.apply(&mut draft.dimensions);
        }
    }
}

/// Apply `patch` onto a copy of `existing` and re-validate the result.
///
/// `existing` is never modified; on error nothing changes.
pub fn merge(existing: &Product, patch: ProductPatch) -> DomainResult<Product> {
    if patch.id.is_some_and(|id| id != existing.id_typed()) {
        return Err(DomainError::ImmutableField("id"));
    }
    if patch
        .created_at
        .is_some_and(|created_at| created_at != existing.created_at())
    {
        return Err(DomainError::ImmutableField("created_at"));
    }

    let mut draft = existing.to_draft();
    patch.apply(&mut draft);

    let canonical = validation::validate(draft)?;
    Ok(Product::from_canonical(
        existing.id_typed(),
        canonical,
        existing.created_at(),
    ))
}
