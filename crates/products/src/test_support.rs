use url::Url;
use uuid::Uuid;

use catalog_core::SellerId;

use crate::product::{Currency, Dimensions, ProductDraft, Seller};

fn url(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

/// A draft that passes every rule.
pub(crate) fn sample_draft() -> ProductDraft {
    ProductDraft {
        sku: "PHN-001".to_string(),
        name: "Xiaomi Model Pro".to_string(),
        description: "6.7 inch display, 256 GB storage".to_string(),
        category: "mobiles".to_string(),
        brand: "Xiaomi".to_string(),
        price: 24999.0,
        currency: Currency::Inr,
        discount_percent: 10,
        stock: 25,
        is_active: true,
        rating: 4.5,
        tags: Some(vec!["mobile".to_string(), "5g".to_string()]),
        image_urls: vec![url("https://cdn.example.com/phone.png")],
        seller: Seller {
            id: SellerId::from_uuid(Uuid::from_u128(1)),
            name: "Acme Retail".to_string(),
            email: "sales@gmail.com".to_string(),
            website: url("https://acme.example.com"),
        },
        dimensions: Dimensions {
            length: 15.5,
            width: 7.25,
            height: 0.8,
        },
    }
}
