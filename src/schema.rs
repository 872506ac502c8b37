// src/schema.rs
use sqlx::PgPool;
use tracing::info;

/// Table and index definitions, in dependency order. Every statement is
/// `IF NOT EXISTS`, so running the list again is a no-op.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS influencers (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        dp TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )"#,
    r#"CREATE TABLE IF NOT EXISTS influ_products (
        id SERIAL PRIMARY KEY,
        influ_id INTEGER REFERENCES influencers(id) ON DELETE CASCADE,
        poster TEXT,
        name TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )"#,
    r#"CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        influ_product_id INTEGER REFERENCES influ_products(id) ON DELETE CASCADE,
        image TEXT,
        description TEXT,
        price REAL DEFAULT 0 CHECK (price >= 0),
        likes INTEGER DEFAULT 0 CHECK (likes >= 0),
        name TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_influ_products_influ_id ON influ_products (influ_id)",
    "CREATE INDEX IF NOT EXISTS idx_products_influ_product_id ON products (influ_product_id)",
];

/// Creates the catalog tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Tables created/verified");
    Ok(())
}
