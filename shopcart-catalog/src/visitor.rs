use crate::item::{Book, Fruit};

/// One operation per item variant.
///
/// New behaviors over items are added by implementing this trait, never by
/// touching the item types. Adding a variant means adding a method here, and
/// every implementer then fails to build until it handles the new variant.
pub trait Visitor {
    type Output;

    fn visit_book(&mut self, book: &Book) -> Self::Output;

    fn visit_fruit(&mut self, fruit: &Fruit) -> Self::Output;
}
