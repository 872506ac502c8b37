pub mod influ_product;
pub mod influencer;
pub mod product;
