use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLineItem};
use business::domain::order::messenger::OrderHandoff;
use business::domain::order::use_cases::submit::OrderReceipt;

/// Request to add one unit of a weight tier to the cart.
#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product unique identifier
    pub product_id: String,
    /// Weight tier label (e.g. "5g")
    pub weight: String,
}

/// Request to set the quantity of an existing line item.
#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemQuantityRequest {
    /// Product unique identifier
    pub product_id: String,
    /// Weight tier label
    pub weight: String,
    /// New quantity. Zero or negative removes the line item.
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product unique identifier
    pub product_id: String,
    /// Product name at add time
    pub product_name: String,
    /// Producing farm at add time
    pub farm: String,
    /// Image URL at add time
    pub image: String,
    /// Weight tier label
    pub weight: String,
    /// Units of this tier in the cart
    pub quantity: u32,
    /// Effective unit price locked at first add
    pub unit_price: f64,
    /// Catalog price before promotion, locked at first add
    pub original_price: f64,
    /// Discount percentage locked at first add
    pub discount_percent: f64,
    /// unit_price x quantity
    pub line_total: f64,
}

impl From<&CartLineItem> for CartItemResponse {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            farm: item.farm.clone(),
            image: item.image.clone(),
            weight: item.weight.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            original_price: item.original_price,
            discount_percent: item.discount_percent,
            line_total: item.line_total(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Line items in insertion order
    pub items: Vec<CartItemResponse>,
    /// Sum of quantities across all line items
    pub total_items: u64,
    /// Sum of effective price x quantity across all line items
    pub total_price: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items().iter().map(|item| item.into()).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// Result of submitting the cart as an order.
#[derive(Debug, Clone, Object)]
pub struct SubmitOrderResponse {
    /// "sent" when the order was pushed to the channel, "redirect" when the
    /// client must open the deep link itself
    pub status: String,
    /// Deep link to open, present only when status is "redirect"
    #[oai(skip_serializing_if_is_none)]
    pub redirect_url: Option<String>,
}

impl From<OrderReceipt> for SubmitOrderResponse {
    fn from(receipt: OrderReceipt) -> Self {
        match receipt.handoff {
            OrderHandoff::Sent => Self {
                status: "sent".to_string(),
                redirect_url: None,
            },
            OrderHandoff::Redirect { url } => Self {
                status: "redirect".to_string(),
                redirect_url: Some(url),
            },
        }
    }
}
