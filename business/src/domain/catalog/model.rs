use std::collections::HashMap;

use super::pricing::{self, PricedTier};

/// A catalog product with per-weight-tier prices and optional promotions.
///
/// The catalog owns these records; the cart only reads them and copies a
/// snapshot of the fields it needs at add time.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub farm: String,
    pub category: String,
    pub image: String,
    pub video: Option<String>,
    pub description: Option<String>,
    /// Weight-tier label ("5g", "10g", ...) to unit price.
    pub prices: HashMap<String, f64>,
    /// Weight-tier label to discount percentage. Absent tier means 0%.
    pub promotions: HashMap<String, f64>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: String,
        name: String,
        farm: String,
        category: String,
        image: String,
        video: Option<String>,
        description: Option<String>,
        prices: HashMap<String, f64>,
        promotions: HashMap<String, f64>,
    ) -> Self {
        Self {
            id,
            name,
            farm,
            category,
            image,
            video,
            description,
            prices,
            promotions,
        }
    }

    /// The tiers this product can actually be sold at, sorted for display.
    /// Tiers without a valid positive price are excluded, never defaulted.
    pub fn offerable_tiers(&self) -> Vec<PricedTier> {
        pricing::priced_tiers(&self.prices, &self.promotions)
    }
}
