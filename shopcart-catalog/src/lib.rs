pub mod item;
pub mod visitor;
pub mod pricing;

pub use item::{Book, Fruit, Item, ItemElement};
pub use visitor::Visitor;
pub use pricing::{ShoppingCartVisitor, TotalVisitor};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Price overflow for {name}: {price_per_kg} x {weight}")]
    FruitCostOverflow {
        name: String,
        price_per_kg: i64,
        weight: i64,
    },
    #[error("Cart total overflow: {total} + {cost}")]
    TotalOverflow { total: i64, cost: i64 },
    #[error("Failed to write receipt line: {0}")]
    Output(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
