pub mod cart;
pub mod error;
pub mod health;
pub mod product;
pub mod settings;
pub mod tags;
