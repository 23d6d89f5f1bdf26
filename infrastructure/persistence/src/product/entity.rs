use std::collections::HashMap;

use serde_json::Value;
use sqlx::FromRow;

use business::domain::catalog::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub farm: String,
    pub category: String,
    pub image: String,
    pub video: Option<String>,
    pub description: Option<String>,
    pub prices: Value,
    pub promotions: Value,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.farm,
            self.category,
            self.image,
            self.video,
            self.description,
            numeric_map(self.prices),
            numeric_map(self.promotions),
        )
    }
}

/// Maps a JSONB tier table into the domain shape, keeping only entries with
/// a finite numeric value. The source data carries strings, nulls and empty
/// values in these maps; they must never reach the pricing resolver.
fn numeric_map(value: Value) -> HashMap<String, f64> {
    let Value::Object(map) = value else {
        return HashMap::new();
    };

    map.into_iter()
        .filter_map(|(weight, v)| coerce_number(&v).map(|n| (weight, n)))
        .collect()
}

fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        // The original admin tool stored some prices as strings ("15").
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    n.is_finite().then_some(n)
}
