use crate::models::{Recommendation, UserProfile};
use rand::Rng;

/// Scores and ranks the product catalog for a single request
///
/// Every catalog entry gets an independent uniform score in [0, 1) and
/// the entries come back sorted by score descending. The profile is
/// accepted for future conditioning (e.g. on risk tolerance) but does
/// not influence scoring yet.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Vec<String>,
}

impl Recommender {
    pub fn new(catalog: Vec<String>) -> Self {
        Self { catalog }
    }

    /// The product names eligible for recommendation
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Rank the catalog for a profile using the thread-local RNG
    pub fn recommend(&self, profile: &UserProfile) -> Vec<Recommendation> {
        self.recommend_with_rng(profile, &mut rand::thread_rng())
    }

    /// Rank the catalog with a caller-provided RNG
    ///
    /// Tests pass a seeded `StdRng` here to make the ranking
    /// reproducible.
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        _profile: &UserProfile,
        rng: &mut R,
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = self
            .catalog
            .iter()
            .map(|name| Recommendation {
                product_name: name.clone(),
                score: rng.gen_range(0.0..1.0),
            })
            .collect();

        // Sort by score (descending); exact ties keep catalog order
        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        recommendations
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(crate::config::CatalogSettings::default().products)
    }
}
