//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage):
//! - `product`: the record shape, embedded seller/dimensions, derived fields
//! - `validation`: the ordered rule list every candidate record must pass
//! - `merge`: typed partial updates applied onto an existing record

pub mod merge;
pub mod product;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use merge::{DimensionsPatch, ProductPatch, SellerPatch, merge};
pub use product::{
    CanonicalProduct, Currency, DerivedFields, Dimensions, Product, ProductDraft, Seller,
    derive_fields,
};
pub use validation::{ALLOWED_EMAIL_DOMAINS, validate};
