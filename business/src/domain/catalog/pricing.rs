use std::collections::HashMap;

/// Effective unit price for one weight tier after applying its promotion.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrice {
    pub original_price: f64,
    pub final_price: f64,
    pub discount_percent: f64,
}

/// One offerable tier of a product, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedTier {
    pub weight: String,
    pub original_price: f64,
    pub final_price: f64,
    pub discount_percent: f64,
}

/// Resolves the effective unit price of `weight`.
///
/// Returns `None` when the tier has no usable price (absent, non-finite or
/// not strictly positive): such a tier is unavailable and must not be offered
/// for selection.
///
/// The discount defaults to 0 when the promotion table has no entry for the
/// tier and is clamped to [0, 100]. The final price keeps full `f64`
/// precision; rounding to 2 decimals happens only at display boundaries so
/// quantity multiplication does not compound rounding error.
pub fn resolve_price(
    prices: &HashMap<String, f64>,
    promotions: &HashMap<String, f64>,
    weight: &str,
) -> Option<ResolvedPrice> {
    let original_price = *prices.get(weight)?;
    if !original_price.is_finite() || original_price <= 0.0 {
        return None;
    }

    let discount_percent = match promotions.get(weight).copied() {
        Some(d) if d.is_finite() => d.clamp(0.0, 100.0),
        _ => 0.0,
    };

    Some(ResolvedPrice {
        original_price,
        final_price: original_price * (1.0 - discount_percent / 100.0),
        discount_percent,
    })
}

/// All offerable tiers, sorted by the numeric portion of the weight label
/// ascending ("5g" before "10g" before "25g"). Labels without a parseable
/// numeric portion sort last, in a stable order among themselves.
pub fn priced_tiers(
    prices: &HashMap<String, f64>,
    promotions: &HashMap<String, f64>,
) -> Vec<PricedTier> {
    // The price table is an unordered map, so fix a deterministic base order
    // before the stable sort by weight.
    let mut labels: Vec<&String> = prices.keys().collect();
    labels.sort();

    let mut tiers: Vec<PricedTier> = labels
        .into_iter()
        .filter_map(|weight| {
            resolve_price(prices, promotions, weight).map(|resolved| PricedTier {
                weight: weight.clone(),
                original_price: resolved.original_price,
                final_price: resolved.final_price,
                discount_percent: resolved.discount_percent,
            })
        })
        .collect();

    tiers.sort_by(|a, b| match (weight_ordinal(&a.weight), weight_ordinal(&b.weight)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    tiers
}

/// Extracts the numeric portion of a tier label ("10g" -> 10, "0.5kg" -> 0.5).
/// Non-numeric characters are stripped; a second decimal point ends the
/// number. Returns `None` when nothing numeric remains.
fn weight_ordinal(label: &str) -> Option<f64> {
    let mut numeric = String::new();
    let mut seen_dot = false;
    for c in label.chars() {
        if c.is_ascii_digit() {
            numeric.push(c);
        } else if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
            numeric.push(c);
        }
    }

    numeric.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_promotion_to_unit_price() {
        let prices = HashMap::from([("5g".to_string(), 10.0)]);
        let promotions = HashMap::from([("5g".to_string(), 20.0)]);

        let resolved = resolve_price(&prices, &promotions, "5g").unwrap();

        assert_eq!(resolved.original_price, 10.0);
        assert_eq!(resolved.final_price, 8.0);
        assert_eq!(resolved.discount_percent, 20.0);
    }

    #[test]
    fn should_default_discount_to_zero_when_no_promotion() {
        let prices = HashMap::from([("10g".to_string(), 45.0)]);

        let resolved = resolve_price(&prices, &HashMap::new(), "10g").unwrap();

        assert_eq!(resolved.final_price, 45.0);
        assert_eq!(resolved.discount_percent, 0.0);
    }

    #[test]
    fn should_clamp_discount_into_percentage_range() {
        let prices = HashMap::from([("5g".to_string(), 10.0)]);
        let over = HashMap::from([("5g".to_string(), 150.0)]);
        let under = HashMap::from([("5g".to_string(), -5.0)]);

        assert_eq!(resolve_price(&prices, &over, "5g").unwrap().final_price, 0.0);
        assert_eq!(
            resolve_price(&prices, &under, "5g").unwrap().final_price,
            10.0
        );
    }

    #[test]
    fn should_not_resolve_missing_zero_or_negative_tiers() {
        let prices = HashMap::from([
            ("5g".to_string(), 0.0),
            ("10g".to_string(), -3.0),
            ("25g".to_string(), f64::NAN),
        ]);

        assert!(resolve_price(&prices, &HashMap::new(), "5g").is_none());
        assert!(resolve_price(&prices, &HashMap::new(), "10g").is_none());
        assert!(resolve_price(&prices, &HashMap::new(), "25g").is_none());
        assert!(resolve_price(&prices, &HashMap::new(), "50g").is_none());
    }

    #[test]
    fn should_exclude_invalid_tiers_from_offer_list() {
        let prices = HashMap::from([
            ("5g".to_string(), 0.0),
            ("10g".to_string(), 15.0),
        ]);

        let tiers = priced_tiers(&prices, &HashMap::new());

        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].weight, "10g");
    }

    #[test]
    fn should_sort_tiers_by_numeric_weight_ascending() {
        let prices = HashMap::from([
            ("10g".to_string(), 28.0),
            ("5g".to_string(), 15.0),
            ("25g".to_string(), 60.0),
        ]);

        let tiers = priced_tiers(&prices, &HashMap::new());

        let order: Vec<&str> = tiers.iter().map(|t| t.weight.as_str()).collect();
        assert_eq!(order, vec!["5g", "10g", "25g"]);
    }

    #[test]
    fn should_sort_decimal_weights_correctly() {
        let prices = HashMap::from([
            ("1g".to_string(), 12.0),
            ("0.5g".to_string(), 7.0),
        ]);

        let tiers = priced_tiers(&prices, &HashMap::new());

        assert_eq!(tiers[0].weight, "0.5g");
        assert_eq!(tiers[1].weight, "1g");
    }

    #[test]
    fn should_sort_non_numeric_labels_last() {
        let prices = HashMap::from([
            ("sample".to_string(), 5.0),
            ("10g".to_string(), 28.0),
            ("bulk".to_string(), 99.0),
        ]);

        let tiers = priced_tiers(&prices, &HashMap::new());

        assert_eq!(tiers[0].weight, "10g");
        // Stable among themselves: base order is alphabetical.
        assert_eq!(tiers[1].weight, "bulk");
        assert_eq!(tiers[2].weight, "sample");
    }

    #[test]
    fn should_parse_weight_ordinals() {
        assert_eq!(weight_ordinal("10g"), Some(10.0));
        assert_eq!(weight_ordinal("0.5kg"), Some(0.5));
        assert_eq!(weight_ordinal("x2x5"), Some(25.0));
        assert_eq!(weight_ordinal("bulk"), None);
        assert_eq!(weight_ordinal(""), None);
    }
}
