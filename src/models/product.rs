use serde::Serialize;

use super::{InfluProduct, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i32,
    pub influ_product_id: Option<i32>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: Option<f32>,
    #[serde(rename = "like")]
    pub likes: Option<i32>,
    pub name: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influ_product: Option<InfluProduct>,
}
