pub mod bot_api;
pub mod client;
pub mod deep_link;
