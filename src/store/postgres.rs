use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use super::rows::{InfluProductJoinRow, ProductJoinRow};
use super::{collect_rows, CatalogStore, RowErrorPolicy, StoreResult};
use crate::models::{InfluProduct, Influencer, Product};

const LIST_INFLUENCERS: &str = r#"
    SELECT id, name, description, dp, created_at, updated_at
    FROM influencers
    ORDER BY id
"#;

const LIST_INFLU_PRODUCTS: &str = r#"
    SELECT
        ip.id AS ip_id, ip.influ_id AS ip_influ_id, ip.poster AS ip_poster,
        ip.name AS ip_name, ip.created_at AS ip_created_at, ip.updated_at AS ip_updated_at,
        i.id AS i_id, i.name AS i_name, i.description AS i_description,
        i.dp AS i_dp, i.created_at AS i_created_at, i.updated_at AS i_updated_at
    FROM influ_products ip
    LEFT JOIN influencers i ON ip.influ_id = i.id
    ORDER BY ip.id
"#;

// Shared by the list and single-row product queries; callers append the filter.
const PRODUCT_SELECT: &str = r#"
    SELECT
        p.id AS p_id, p.influ_product_id AS p_influ_product_id, p.image AS p_image,
        p.description AS p_description, p.price AS p_price, p.likes AS p_likes,
        p.name AS p_name, p.created_at AS p_created_at, p.updated_at AS p_updated_at,
        ip.id AS ip_id, ip.influ_id AS ip_influ_id, ip.poster AS ip_poster,
        ip.name AS ip_name, ip.created_at AS ip_created_at, ip.updated_at AS ip_updated_at,
        i.id AS i_id, i.name AS i_name, i.description AS i_description,
        i.dp AS i_dp, i.created_at AS i_created_at, i.updated_at AS i_updated_at
    FROM products p
    LEFT JOIN influ_products ip ON p.influ_product_id = ip.id
    LEFT JOIN influencers i ON ip.influ_id = i.id
"#;

/// [`CatalogStore`] backed by a Postgres pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
    row_error_policy: RowErrorPolicy,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool, row_error_policy: RowErrorPolicy) -> Self {
        Self {
            pool,
            row_error_policy,
        }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    #[instrument(skip(self))]
    async fn list_influencers(&self) -> StoreResult<Vec<Influencer>> {
        let rows = sqlx::query(LIST_INFLUENCERS).fetch_all(&self.pool).await?;

        collect_rows::<Influencer, Influencer, _>(
            rows.iter().map(Influencer::from_row),
            self.row_error_policy,
            "influencer",
        )
    }

    #[instrument(skip(self))]
    async fn list_influ_products(&self) -> StoreResult<Vec<InfluProduct>> {
        let rows = sqlx::query(LIST_INFLU_PRODUCTS).fetch_all(&self.pool).await?;

        collect_rows(
            rows.iter().map(InfluProductJoinRow::from_row),
            self.row_error_policy,
            "influ_product",
        )
    }

    #[instrument(skip(self))]
    async fn list_products_by_influ_product(&self, influ_product_id: i32) -> StoreResult<Vec<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.influ_product_id = $1 ORDER BY p.id");
        let rows = sqlx::query(&sql)
            .bind(influ_product_id)
            .fetch_all(&self.pool)
            .await?;

        collect_rows(
            rows.iter().map(ProductJoinRow::from_row),
            self.row_error_policy,
            "product",
        )
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: i32) -> StoreResult<Option<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProductJoinRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }
}
