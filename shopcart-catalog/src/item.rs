use serde::{Deserialize, Serialize};
use crate::visitor::Visitor;

/// Anything that can be routed through a [`Visitor`].
///
/// Each implementer picks the visitor method matching its own concrete type,
/// so callers never branch on the item kind themselves.
pub trait ItemElement {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output;
}

/// A book sold at a fixed total price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    title: String,
    price: i64,
}

impl Book {
    pub fn new(title: impl Into<String>, price: i64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

impl ItemElement for Book {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_book(self)
    }
}

/// Fruit sold by weight. The cost is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fruit {
    name: String,
    price_per_kg: i64,
    weight: i64,
}

impl Fruit {
    pub fn new(name: impl Into<String>, price_per_kg: i64, weight: i64) -> Self {
        Self {
            name: name.into(),
            price_per_kg,
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_per_kg(&self) -> i64 {
        self.price_per_kg
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }
}

impl ItemElement for Fruit {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_fruit(self)
    }
}

/// The closed set of purchasable items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Item {
    Book(Book),
    Fruit(Fruit),
}

impl ItemElement for Item {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Item::Book(book) => book.accept(visitor),
            Item::Fruit(fruit) => fruit.accept(visitor),
        }
    }
}

impl From<Book> for Item {
    fn from(book: Book) -> Self {
        Item::Book(book)
    }
}

impl From<Fruit> for Item {
    fn from(fruit: Fruit) -> Self {
        Item::Fruit(fruit)
    }
}
