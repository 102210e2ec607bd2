// Core algorithm exports
pub mod recommender;

pub use recommender::Recommender;
