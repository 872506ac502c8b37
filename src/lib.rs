//! Read-only REST API over the influencer → listing → product catalog.

pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;
