use poem_openapi::Object;

use business::domain::catalog::model::Product;
use business::domain::catalog::pricing::PricedTier;

/// One orderable weight tier with its resolved pricing.
#[derive(Debug, Clone, Object)]
pub struct PricedTierResponse {
    /// Weight label (e.g. "5g", "10g")
    pub weight: String,
    /// Catalog price before promotions
    pub original_price: f64,
    /// Effective price after the promotion discount
    pub final_price: f64,
    /// Discount percentage applied, 0 when the tier has no promotion
    pub discount_percent: f64,
}

impl From<PricedTier> for PricedTierResponse {
    fn from(tier: PricedTier) -> Self {
        Self {
            weight: tier.weight,
            original_price: tier.original_price,
            final_price: tier.final_price,
            discount_percent: tier.discount_percent,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Producing farm
    pub farm: String,
    /// Catalog category
    pub category: String,
    /// Main image URL
    pub image: String,
    /// Optional video URL
    #[oai(skip_serializing_if_is_none)]
    pub video: Option<String>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Orderable tiers, sorted by ascending weight. Tiers without a valid
    /// price are excluded.
    pub tiers: Vec<PricedTierResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let tiers = product
            .offerable_tiers()
            .into_iter()
            .map(|tier| tier.into())
            .collect();

        Self {
            id: product.id,
            name: product.name,
            farm: product.farm,
            category: product.category,
            image: product.image,
            video: product.video,
            description: product.description,
            tiers,
        }
    }
}
