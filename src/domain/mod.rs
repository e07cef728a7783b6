use serde::{Deserialize, Serialize};

/// One catalog item. `id` is assigned by the service on create and is never
/// accepted from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    /// `dd/mm/yyyy`
    pub expiration: String,
    pub price: f64,
}

/// The client-writable fields of a product. Create and full-update requests
/// bind to this shape; the repository pairs it with an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    #[serde(default)]
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl ProductFields {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration: self.expiration,
            price: self.price,
        }
    }
}
