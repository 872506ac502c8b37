use serde::Serialize;

use super::{Influencer, Timestamp};

/// A curated listing attributed to one influencer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluProduct {
    pub id: i32,
    pub influ_id: Option<i32>,
    pub poster: Option<String>,
    pub name: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    // Snapshot taken by the join; omitted when the reference did not resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influencer: Option<Influencer>,
}
