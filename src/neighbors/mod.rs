//! Similarity-based neighbor search over lag windows.
//!
//! Used to pick the competence region: the historical windows that look most
//! like the window being forecast from.

mod ranking;
mod similarity;

pub use ranking::{competence_region, rank_neighbors, Neighbor};
pub use similarity::{
    cosine_similarity, dot, euclidean_distance, squared_distance, SimilarityMetric,
};
