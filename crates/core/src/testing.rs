//! Fixtures shared by the unit tests

use crate::types::Product;

pub fn product(id: &str) -> Product {
    Product {
        id: id.into(),
        title: format!("Product {id}"),
        category: "tea".into(),
        origin_price: 100.0,
        price: 80.0,
        unit: "box".into(),
        is_enabled: true,
        description: format!("About {id}"),
        content: "200g".into(),
        image_url: format!("https://img.example/{id}.png"),
        images_url: Vec::new(),
    }
}
