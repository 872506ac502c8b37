use serde::Serialize;
use sqlx::FromRow;

use super::Timestamp;

/// A creator profile; the root of the catalog hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Influencer {
    pub id: i32,
    pub name: String,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    pub dp: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}
