use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::models::Drink;

/// `description`, `image` and `category` may be `null` but must be present.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDrinkRequest {
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub image: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub category: Option<String>,
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct DrinkList {
    pub items: Vec<Drink>,
}

// `deserialize_with` turns off serde's missing-key-means-None rule for `Option`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
