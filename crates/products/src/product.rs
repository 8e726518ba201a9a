use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use catalog_core::{DomainError, Entity, ProductId, SellerId, ValueObject};

use crate::validation;

/// Pricing currency. The catalog is single-currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
}

/// Seller embedded in a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub email: String,
    pub website: Url,
}

impl ValueObject for Seller {}

/// Physical dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    pub fn volume(&self) -> f64 {
        round2(self.length * self.width * self.height)
    }
}

/// Caller-supplied product fields: everything except identity, creation time and
/// derived values.
///
/// This is the candidate shape the validator checks, both for a fresh create and
/// for the result of merging a patch onto a stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub discount_percent: i64,
    pub stock: i64,
    pub is_active: bool,
    pub rating: f64,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub image_urls: Vec<Url>,
    pub seller: Seller,
    pub dimensions: Dimensions,
}

/// Values computed from a draft, never accepted from input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFields {
    pub final_price: f64,
    pub volume: f64,
}

/// Compute every derived field of a product from its current inputs.
pub fn derive_fields(draft: &ProductDraft) -> DerivedFields {
    DerivedFields {
        final_price: round2(draft.price * (1.0 - draft.discount_percent as f64 / 100.0)),
        volume: draft.dimensions.volume(),
    }
}

/// A draft that passed validation, together with its freshly derived fields.
///
/// Only [`validation::validate`] constructs this type.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalProduct {
    draft: ProductDraft,
    derived: DerivedFields,
}

impl CanonicalProduct {
    pub(crate) fn from_validated(draft: ProductDraft) -> Self {
        let derived = derive_fields(&draft);
        Self { draft, derived }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn final_price(&self) -> f64 {
        self.derived.final_price
    }

    pub fn volume(&self) -> f64 {
        self.derived.volume
    }
}

/// A stored catalog record: identity + creation time + canonical fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ProductRecord", try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    canonical: CanonicalProduct,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Validate `draft` and stamp it with a new identity.
    pub fn create(
        id: ProductId,
        draft: ProductDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let canonical = validation::validate(draft)?;
        Ok(Self::from_canonical(id, canonical, created_at))
    }

    pub fn from_canonical(
        id: ProductId,
        canonical: CanonicalProduct,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            canonical,
            created_at,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn details(&self) -> &ProductDraft {
        self.canonical.draft()
    }

    pub fn sku(&self) -> &str {
        &self.canonical.draft().sku
    }

    pub fn final_price(&self) -> f64 {
        self.canonical.final_price()
    }

    pub fn volume(&self) -> f64 {
        self.canonical.volume()
    }

    /// Copy the caller-editable fields out, e.g. as the base of a merge.
    pub fn to_draft(&self) -> ProductDraft {
        self.canonical.draft().clone()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wire/persisted shape of a product (flat JSON object).
///
/// Derived fields are written for readers but never read back: a record is
/// re-validated and its derived fields recomputed when loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductRecord {
    id: ProductId,
    sku: String,
    name: String,
    description: String,
    category: String,
    brand: String,
    price: f64,
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    discount_percent: i64,
    stock: i64,
    is_active: bool,
    rating: f64,
    #[serde(default)]
    tags: Option<Vec<String>>,
    image_urls: Vec<Url>,
    seller: Seller,
    dimensions: Dimensions,
    #[serde(skip_deserializing)]
    final_price: f64,
    #[serde(skip_deserializing)]
    volume: f64,
    created_at: DateTime<Utc>,
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        let final_price = product.final_price();
        let volume = product.volume();
        let ProductDraft {
            sku,
            name,
            description,
            category,
            brand,
            price,
            currency,
            discount_percent,
            stock,
            is_active,
            rating,
            tags,
            image_urls,
            seller,
            dimensions,
        } = product.canonical.draft;

        Self {
            id: product.id,
            sku,
            name,
            description,
            category,
            brand,
            price,
            currency,
            discount_percent,
            stock,
            is_active,
            rating,
            tags,
            image_urls,
            seller,
            dimensions,
            final_price,
            volume,
            created_at: product.created_at,
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let draft = ProductDraft {
            sku: record.sku,
            name: record.name,
            description: record.description,
            category: record.category,
            brand: record.brand,
            price: record.price,
            currency: record.currency,
            discount_percent: record.discount_percent,
            stock: record.stock,
            is_active: record.is_active,
            rating: record.rating,
            tags: record.tags,
            image_urls: record.image_urls,
            seller: record.seller,
            dimensions: record.dimensions,
        };
        Product::create(record.id, draft, record.created_at)
    }
}

/// Round to two decimal places, ties to even.
///
/// Magnitudes too large to scale by 100 are returned unchanged.
pub(crate) fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / 100.0
}
