use serde::{Deserialize, Serialize};

/// Snapshot of a product tier as it goes into the cart. Denormalized on
/// purpose: the cart must survive later catalog changes.
#[derive(Debug, Clone)]
pub struct LineItemSnapshot {
    pub product_id: String,
    pub product_name: String,
    pub farm: String,
    pub image: String,
    pub weight: String,
    /// Effective (post-discount) unit price at add time.
    pub unit_price: f64,
    pub original_price: f64,
    pub discount_percent: f64,
}

/// One (product, weight tier) entry in the cart.
///
/// `(product_id, weight)` is the unique key; `quantity` is always >= 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: String,
    pub product_name: String,
    pub farm: String,
    pub image: String,
    pub weight: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub original_price: f64,
    pub discount_percent: f64,
}

impl CartLineItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    fn matches(&self, product_id: &str, weight: &str) -> bool {
        self.product_id == product_id && self.weight == weight
    }
}

/// The session cart: an insertion-ordered list of line items.
///
/// All mutations are total over well-formed state. Unknown keys are no-ops,
/// never errors: the cart is a client-side projection with no external
/// consistency to violate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of the given tier. Merging an already-present
    /// `(product_id, weight)` pair only increments its quantity: the stored
    /// price is authoritative (price-at-first-add), the snapshot's price
    /// fields are ignored on merge.
    pub fn add(&mut self, snapshot: LineItemSnapshot) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&snapshot.product_id, &snapshot.weight))
        {
            existing.quantity += 1;
            return;
        }

        self.items.push(CartLineItem {
            product_id: snapshot.product_id,
            product_name: snapshot.product_name,
            farm: snapshot.farm,
            image: snapshot.image,
            weight: snapshot.weight,
            quantity: 1,
            unit_price: snapshot.unit_price,
            original_price: snapshot.original_price,
            discount_percent: snapshot.discount_percent,
        });
    }

    /// Sets the quantity of a line item. A quantity <= 0 removes the line
    /// instead of storing a non-positive quantity. Unknown keys are a no-op.
    pub fn update_quantity(&mut self, product_id: &str, weight: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id, weight);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, weight))
        {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Removes the matching line item if present. Idempotent.
    pub fn remove(&mut self, product_id: &str, weight: &str) {
        self.items.retain(|item| !item.matches(product_id, weight));
    }

    /// Empties the cart. Always succeeds.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all line items. Recomputed on every call.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of effective price x quantity across all line items.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }
}
