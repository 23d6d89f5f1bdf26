use chrono::{DateTime, Utc};

use crate::domain::cart::model::Cart;

/// Renders the order summary handed to the messaging channel.
///
/// Pure text construction, no I/O. Per line item, in cart order: 1-based
/// index, product name, quantity x weight, unit original price, line total
/// (2 decimals) and the discount annotation when one applies. Ends with the
/// grand total, always to exactly 2 decimals.
///
/// Callers must not invoke this for an empty cart; submission of an empty
/// cart is rejected upstream.
pub fn format_order(shop_title: &str, cart: &Cart, placed_at: DateTime<Utc>) -> String {
    let mut message = format!("🌿 *COMMANDE {}* 🌿\n\n", shop_title.to_uppercase());
    message.push_str(&format!(
        "📅 Date: {} à {}\n",
        placed_at.format("%d/%m/%Y"),
        placed_at.format("%H:%M")
    ));
    message.push_str("📱 Via: Mini-App Catalogue\n\n");
    message.push_str("🛒 *DÉTAIL DE LA COMMANDE:*\n\n");

    for (index, item) in cart.items().iter().enumerate() {
        message.push_str(&format!("{}. 🍒 {}\n", index + 1, item.product_name));
        message.push_str(&format!(
            "   • Quantité: {}x {}\n",
            item.quantity, item.weight
        ));
        message.push_str(&format!("   • Prix unitaire: {}€\n", item.original_price));
        message.push_str(&format!("   • Total: {:.2}€\n", item.line_total()));

        if item.discount_percent > 0.0 {
            message.push_str(&format!(
                "   • Remise: -{}% (prix dégressif)\n",
                item.discount_percent
            ));
        }

        message.push('\n');
    }

    message.push_str(&format!("💰 *TOTAL: {:.2}€*\n\n", cart.total_price()));
    message.push_str(
        "📞 Merci de confirmer cette commande et les modalités de livraison/paiement.\n",
    );
    message.push_str("🚚 Livraison disponible ou retrait sur place.");

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::LineItemSnapshot;
    use chrono::TimeZone;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(LineItemSnapshot {
            product_id: "A".to_string(),
            product_name: "Cerises de Montagne".to_string(),
            farm: "Ferme du Valais".to_string(),
            image: "img-a".to_string(),
            weight: "5g".to_string(),
            unit_price: 8.0,
            original_price: 10.0,
            discount_percent: 20.0,
        });
        cart.update_quantity("A", "5g", 2);
        cart.add(LineItemSnapshot {
            product_id: "B".to_string(),
            product_name: "Abricots du Verger".to_string(),
            farm: "Ferme du Lac".to_string(),
            image: "img-b".to_string(),
            weight: "10g".to_string(),
            unit_price: 28.0,
            original_price: 28.0,
            discount_percent: 0.0,
        });
        cart
    }

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 18, 5, 0).unwrap()
    }

    #[test]
    fn should_list_items_in_cart_order_with_indexes() {
        let message = format_order("FreshSwiss", &sample_cart(), placed_at());

        let first = message.find("1. 🍒 Cerises de Montagne").unwrap();
        let second = message.find("2. 🍒 Abricots du Verger").unwrap();
        assert!(first < second);
    }

    #[test]
    fn should_render_quantity_weight_and_line_totals() {
        let message = format_order("FreshSwiss", &sample_cart(), placed_at());

        assert!(message.contains("• Quantité: 2x 5g"));
        assert!(message.contains("• Prix unitaire: 10€"));
        assert!(message.contains("• Total: 16.00€"));
        assert!(message.contains("• Quantité: 1x 10g"));
        assert!(message.contains("• Total: 28.00€"));
    }

    #[test]
    fn should_annotate_discount_only_when_present() {
        let message = format_order("FreshSwiss", &sample_cart(), placed_at());

        assert_eq!(message.matches("Remise:").count(), 1);
        assert!(message.contains("• Remise: -20% (prix dégressif)"));
    }

    #[test]
    fn should_render_grand_total_with_two_decimals() {
        let message = format_order("FreshSwiss", &sample_cart(), placed_at());

        // 2 x 8.0 + 1 x 28.0, discounted prices.
        assert!(message.contains("💰 *TOTAL: 44.00€*"));
    }

    #[test]
    fn should_render_header_with_shop_title_and_date() {
        let message = format_order("FreshSwiss", &sample_cart(), placed_at());

        assert!(message.starts_with("🌿 *COMMANDE FRESHSWISS* 🌿"));
        assert!(message.contains("📅 Date: 14/03/2024 à 18:05"));
    }
}
