use chrono::Utc;
use url::Url;
use uuid::Uuid;

use catalog_core::{ProductId, SellerId};
use catalog_products::{Currency, Dimensions, Product, ProductDraft, Seller};

pub(crate) fn draft() -> ProductDraft {
    ProductDraft {
        sku: "LAP-100".to_string(),
        name: "Apple Model X".to_string(),
        description: "13 inch laptop".to_string(),
        category: "laptops".to_string(),
        brand: "Apple".to_string(),
        price: 1000.0,
        currency: Currency::Inr,
        discount_percent: 10,
        stock: 5,
        is_active: true,
        rating: 4.0,
        tags: None,
        image_urls: vec![Url::parse("https://img.example.com/x.png").unwrap()],
        seller: Seller {
            id: SellerId::from_uuid(Uuid::from_u128(7)),
            name: "Laptop Hub".to_string(),
            email: "hub@yahoo.com".to_string(),
            website: Url::parse("https://hub.example.com").unwrap(),
        },
        dimensions: Dimensions {
            length: 30.0,
            width: 20.0,
            height: 1.5,
        },
    }
}

pub(crate) fn product_with_sku(sku: &str) -> Product {
    let mut draft = draft();
    draft.sku = sku.to_string();
    Product::create(ProductId::new(), draft, Utc::now()).unwrap()
}

pub(crate) fn product() -> Product {
    product_with_sku("LAP-100")
}
