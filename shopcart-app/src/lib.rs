pub mod app_config;
pub mod checkout;

pub use app_config::Config;
pub use checkout::{default_cart, price_items, run};
