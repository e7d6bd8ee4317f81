use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub is_active: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    // decimal string as sent by the API, e.g. "1250.00"
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub is_active: bool,
    pub category: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HeroImage {
    pub id: i64,
    pub hero_image: String,
    pub is_active: bool,
}

/// Body of `POST /api/contact/`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Name, email and message must be non-blank; phone is optional.
    pub fn has_required_fields(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Query string of the products page. `id` stays raw so a malformed value
/// closes the detail panel instead of rejecting the request.
#[derive(Deserialize, Debug, Default)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub id: Option<String>,
}

impl CatalogQuery {
    pub fn product_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|raw| raw.trim().parse().ok())
    }
}
