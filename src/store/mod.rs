//! Read-only data access for the catalog.
//!
//! Handlers depend on [`CatalogStore`] rather than on a pool directly so the
//! router can be driven against a mock in tests.

pub mod postgres;
pub mod rows;

use async_trait::async_trait;
use tracing::warn;

use crate::models::{InfluProduct, Influencer, Product};

pub use postgres::PgCatalogStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// What a list query does when a single row fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowErrorPolicy {
    /// Log the row and leave it out of the result.
    #[default]
    Skip,
    /// Fail the whole query with the first decode error.
    Abort,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All influencers, ascending by id.
    async fn list_influencers(&self) -> StoreResult<Vec<Influencer>>;

    /// All listings with their influencer embedded, ascending by listing id.
    async fn list_influ_products(&self) -> StoreResult<Vec<InfluProduct>>;

    /// Products of one listing, each with listing and influencer embedded,
    /// ascending by product id.
    async fn list_products_by_influ_product(&self, influ_product_id: i32) -> StoreResult<Vec<Product>>;

    /// A single product with its full parent chain, `None` when absent.
    async fn get_product(&self, id: i32) -> StoreResult<Option<Product>>;
}

/// Applies `policy` to a sequence of decoded rows and converts the survivors.
pub fn collect_rows<R, T, I>(rows: I, policy: RowErrorPolicy, entity: &'static str) -> StoreResult<Vec<T>>
where
    I: IntoIterator<Item = StoreResult<R>>,
    R: Into<T>,
{
    let mut out = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Ok(row) => out.push(row.into()),
            Err(e) => match policy {
                RowErrorPolicy::Skip => {
                    warn!(error = %e, entity, row = index, "Skipping row that failed to decode");
                }
                RowErrorPolicy::Abort => return Err(e),
            },
        }
    }
    Ok(out)
}
