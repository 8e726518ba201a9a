//! Product record validation.
//!
//! A candidate is checked against a fixed, ordered list of rules. Each rule is a
//! pure function that either passes or names the first violation it finds; the
//! first failing rule wins. Store-level rules (SKU uniqueness) are not checked here.

use catalog_core::{DomainError, DomainResult};
use validator::ValidateEmail;

use crate::product::{CanonicalProduct, ProductDraft, derive_fields};

/// Seller email domains accepted by the catalog (compared case-insensitively).
pub const ALLOWED_EMAIL_DOMAINS: &[&str] = &["gmail.com", "outlook.com", "yahoo.com"];

const MAX_TAGS: usize = 10;
const IMAGE_URLS: usize = 1;
const MAX_DISCOUNT_PERCENT: i64 = 90;
const MAX_RATING: f64 = 5.0;
const SKU_DIGITS: usize = 3;

type Rule = fn(&ProductDraft) -> DomainResult<()>;

/// Evaluation order matters: callers see the first violated rule only.
const RULES: &[Rule] = &[
    check_field_bounds,
    check_sku_format,
    check_seller_email_domain,
    check_stock_activation,
    check_discount_rating,
];

/// Validate a candidate record and derive its computed fields.
pub fn validate(candidate: ProductDraft) -> DomainResult<CanonicalProduct> {
    for rule in RULES {
        rule(&candidate)?;
    }
    Ok(CanonicalProduct::from_validated(candidate))
}

fn check_field_bounds(p: &ProductDraft) -> DomainResult<()> {
    check_len("sku", &p.sku, 1, 20)?;
    check_len("name", &p.name, 3, 80)?;
    check_len("description", &p.description, 0, 200)?;
    check_len("category", &p.category, 3, 30)?;
    check_len("brand", &p.brand, 2, 40)?;

    check_positive("price", p.price)?;

    if !(0..=MAX_DISCOUNT_PERCENT).contains(&p.discount_percent) {
        return Err(DomainError::bounds(
            "discount_percent",
            format!("must be between 0 and {MAX_DISCOUNT_PERCENT}"),
        ));
    }

    if p.stock < 0 {
        return Err(DomainError::bounds("stock", "must be greater than or equal to 0"));
    }

    if !p.rating.is_finite() || !(0.0..=MAX_RATING).contains(&p.rating) {
        return Err(DomainError::bounds(
            "rating",
            format!("must be between 0 and {MAX_RATING}"),
        ));
    }

    if let Some(tags) = &p.tags {
        if tags.len() > MAX_TAGS {
            return Err(DomainError::bounds(
                "tags",
                format!("at most {MAX_TAGS} tags are allowed"),
            ));
        }
    }

    if p.image_urls.len() != IMAGE_URLS {
        return Err(DomainError::bounds(
            "image_urls",
            format!("exactly {IMAGE_URLS} image url is required"),
        ));
    }

    check_len("seller.name", &p.seller.name, 3, 50)?;
    check_email_shape(&p.seller.email)?;

    check_positive("dimensions.length", p.dimensions.length)?;
    check_positive("dimensions.width", p.dimensions.width)?;
    check_positive("dimensions.height", p.dimensions.height)?;

    // Each input can be in range while the product of them overflows.
    let derived = derive_fields(p);
    if !derived.final_price.is_finite() {
        return Err(DomainError::bounds("price", "final price is out of range"));
    }
    if !derived.volume.is_finite() {
        return Err(DomainError::bounds("dimensions", "volume is out of range"));
    }

    Ok(())
}

fn check_sku_format(p: &ProductDraft) -> DomainResult<()> {
    let Some((_, last)) = p.sku.rsplit_once('-') else {
        return Err(DomainError::sku_format(&p.sku, "SKU must contain '-'"));
    };

    if last.chars().count() != SKU_DIGITS || !last.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::sku_format(
            &p.sku,
            "SKU must end with a 3 digit sequence like -234",
        ));
    }

    Ok(())
}

fn check_seller_email_domain(p: &ProductDraft) -> DomainResult<()> {
    let domain = email_domain(&p.seller.email).to_ascii_lowercase();
    if ALLOWED_EMAIL_DOMAINS.contains(&domain.as_str()) {
        Ok(())
    } else {
        Err(DomainError::email_domain(domain))
    }
}

fn check_stock_activation(p: &ProductDraft) -> DomainResult<()> {
    if p.stock == 0 && p.is_active {
        return Err(DomainError::business_rule(
            "if stock is 0, is_active must be false",
        ));
    }
    Ok(())
}

fn check_discount_rating(p: &ProductDraft) -> DomainResult<()> {
    if p.discount_percent > 0 && p.rating == 0.0 {
        return Err(DomainError::business_rule(
            "discounted product must have a rating (rating != 0)",
        ));
    }
    Ok(())
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        let reason = if min == 0 {
            format!("must be at most {max} characters")
        } else {
            format!("must be between {min} and {max} characters")
        };
        return Err(DomainError::bounds(field, reason));
    }
    Ok(())
}

fn check_positive(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::bounds(field, "must be greater than 0"));
    }
    Ok(())
}

fn check_email_shape(email: &str) -> DomainResult<()> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(DomainError::bounds("seller.email", "must be a valid email address"))
    }
}

/// Substring after the final `@`.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or(email, |(_, domain)| domain)
}
