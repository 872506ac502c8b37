pub mod influencer;
pub mod influ_product;
pub mod product;
pub mod timestamp;

pub use influ_product::InfluProduct;
pub use influencer::Influencer;
pub use product::Product;
pub use timestamp::Timestamp;
