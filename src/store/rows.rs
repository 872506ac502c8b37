//! Flat join rows and their conversion into nested records.
//!
//! Each struct mirrors the select list of one query in `postgres.rs`, in
//! order. Columns are aliased with the table prefix (`p_`, `ip_`, `i_`) so
//! the three `id`/`name`/timestamp columns do not collide. Every column that
//! comes from the right side of a `LEFT JOIN` is optional: a missing parent
//! produces a row whose parent columns are all NULL.

use sqlx::FromRow;

use crate::models::{InfluProduct, Influencer, Product, Timestamp};

/// `influ_products ip LEFT JOIN influencers i`
#[derive(Debug, Clone, FromRow)]
pub struct InfluProductJoinRow {
    pub ip_id: i32,
    pub ip_influ_id: Option<i32>,
    pub ip_poster: Option<String>,
    pub ip_name: String,
    pub ip_created_at: Option<Timestamp>,
    pub ip_updated_at: Option<Timestamp>,
    pub i_id: Option<i32>,
    pub i_name: Option<String>,
    pub i_description: Option<String>,
    pub i_dp: Option<String>,
    pub i_created_at: Option<Timestamp>,
    pub i_updated_at: Option<Timestamp>,
}

/// `products p LEFT JOIN influ_products ip LEFT JOIN influencers i`
#[derive(Debug, Clone, FromRow)]
pub struct ProductJoinRow {
    pub p_id: i32,
    pub p_influ_product_id: Option<i32>,
    pub p_image: Option<String>,
    pub p_description: Option<String>,
    pub p_price: Option<f32>,
    pub p_likes: Option<i32>,
    pub p_name: String,
    pub p_created_at: Option<Timestamp>,
    pub p_updated_at: Option<Timestamp>,
    pub ip_id: Option<i32>,
    pub ip_influ_id: Option<i32>,
    pub ip_poster: Option<String>,
    pub ip_name: Option<String>,
    pub ip_created_at: Option<Timestamp>,
    pub ip_updated_at: Option<Timestamp>,
    pub i_id: Option<i32>,
    pub i_name: Option<String>,
    pub i_description: Option<String>,
    pub i_dp: Option<String>,
    pub i_created_at: Option<Timestamp>,
    pub i_updated_at: Option<Timestamp>,
}

/// The influencer tail of a join row. A NULL id means the join found nothing.
fn embedded_influencer(
    id: Option<i32>,
    name: Option<String>,
    description: Option<String>,
    dp: Option<String>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
) -> Option<Influencer> {
    Some(Influencer {
        id: id?,
        name: name.unwrap_or_default(),
        description,
        dp,
        created_at,
        updated_at,
    })
}

impl From<InfluProductJoinRow> for InfluProduct {
    fn from(row: InfluProductJoinRow) -> Self {
        let influencer = embedded_influencer(
            row.i_id,
            row.i_name,
            row.i_description,
            row.i_dp,
            row.i_created_at,
            row.i_updated_at,
        );

        Self {
            id: row.ip_id,
            influ_id: row.ip_influ_id,
            poster: row.ip_poster,
            name: row.ip_name,
            created_at: row.ip_created_at,
            updated_at: row.ip_updated_at,
            influencer,
        }
    }
}

impl From<ProductJoinRow> for Product {
    fn from(row: ProductJoinRow) -> Self {
        let influencer = embedded_influencer(
            row.i_id,
            row.i_name,
            row.i_description,
            row.i_dp,
            row.i_created_at,
            row.i_updated_at,
        );

        let influ_product = row.ip_id.map(|ip_id| InfluProduct {
            id: ip_id,
            influ_id: row.ip_influ_id,
            poster: row.ip_poster,
            name: row.ip_name.unwrap_or_default(),
            created_at: row.ip_created_at,
            updated_at: row.ip_updated_at,
            influencer,
        });

        Self {
            id: row.p_id,
            influ_product_id: row.p_influ_product_id,
            image: row.p_image,
            description: row.p_description,
            price: row.p_price,
            likes: row.p_likes,
            name: row.p_name,
            created_at: row.p_created_at,
            updated_at: row.p_updated_at,
            influ_product,
        }
    }
}
