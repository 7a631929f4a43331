use std::io::Write;

use crate::item::{Book, Fruit};
use crate::visitor::Visitor;
use crate::{CatalogError, CatalogResult};

/// A book's price is already its total cost
pub fn book_cost(book: &Book) -> i64 {
    book.price()
}

/// Price per kg times weight, in whole currency units
pub fn fruit_cost(fruit: &Fruit) -> CatalogResult<i64> {
    fruit
        .price_per_kg()
        .checked_mul(fruit.weight())
        .ok_or_else(|| CatalogError::FruitCostOverflow {
            name: fruit.name().to_string(),
            price_per_kg: fruit.price_per_kg(),
            weight: fruit.weight(),
        })
}

/// Prints one receipt line per visited item
pub struct ShoppingCartVisitor<W: Write> {
    out: W,
}

impl<W: Write> ShoppingCartVisitor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> CatalogResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visitor for ShoppingCartVisitor<W> {
    type Output = CatalogResult<()>;

    fn visit_book(&mut self, book: &Book) -> Self::Output {
        let cost = book_cost(book);
        tracing::debug!(title = book.title(), cost, "Pricing book");
        writeln!(self.out, "Book: {} costs {}", book.title(), cost)?;
        Ok(())
    }

    fn visit_fruit(&mut self, fruit: &Fruit) -> Self::Output {
        let cost = fruit_cost(fruit)?;
        tracing::debug!(
            name = fruit.name(),
            price_per_kg = fruit.price_per_kg(),
            weight = fruit.weight(),
            cost,
            "Pricing fruit"
        );
        writeln!(self.out, "Fruit: {} costs {}", fruit.name(), cost)?;
        Ok(())
    }
}

/// Sums item costs. Each visit returns that item's cost.
#[derive(Debug, Default)]
pub struct TotalVisitor {
    total: i64,
}

impl TotalVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    fn add(&mut self, cost: i64) -> CatalogResult<i64> {
        self.total = self
            .total
            .checked_add(cost)
            .ok_or(CatalogError::TotalOverflow {
                total: self.total,
                cost,
            })?;
        Ok(cost)
    }
}

impl Visitor for TotalVisitor {
    type Output = CatalogResult<i64>;

    fn visit_book(&mut self, book: &Book) -> Self::Output {
        self.add(book_cost(book))
    }

    fn visit_fruit(&mut self, fruit: &Fruit) -> Self::Output {
        let cost = fruit_cost(fruit)?;
        self.add(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemElement};

    fn receipt(items: &[Item]) -> String {
        let mut visitor = ShoppingCartVisitor::new(Vec::new());
        for item in items {
            item.accept(&mut visitor).unwrap();
        }
        String::from_utf8(visitor.into_inner()).unwrap()
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_book_line() {
        let output = receipt(&[Book::new("The Rust Book", 3999).into()]);
        assert_eq!(output, "Book: The Rust Book costs 3999\n");
    }

    #[test]
    fn test_fruit_line() {
        let output = receipt(&[Fruit::new("Banana", 120, 7).into()]);
        assert_eq!(output, "Fruit: Banana costs 840\n");
    }

    #[test]
    fn test_cart_lines_in_order() {
        let output = receipt(&[
            Book::new("Design Patterns", 5000).into(),
            Fruit::new("Apple", 200, 3).into(),
        ]);
        assert_eq!(
            output,
            "Book: Design Patterns costs 5000\nFruit: Apple costs 600\n"
        );
    }

    #[test]
    fn test_visiting_twice_is_idempotent() {
        let apple: Item = Fruit::new("Apple", 200, 3).into();
        let output = receipt(&[apple.clone(), apple]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["Fruit: Apple costs 600", "Fruit: Apple costs 600"]);
    }

    #[test]
    fn test_fruit_overflow_is_reported() {
        let fruit = Fruit::new("Durian", i64::MAX, 2);
        let mut visitor = ShoppingCartVisitor::new(Vec::new());

        let result = fruit.accept(&mut visitor);
        assert!(matches!(
            result,
            Err(CatalogError::FruitCostOverflow { ref name, price_per_kg: i64::MAX, weight: 2 })
                if name == "Durian"
        ));
        assert!(visitor.into_inner().is_empty());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut visitor = ShoppingCartVisitor::new(BrokenPipe);
        let result = Book::new("Design Patterns", 5000).accept(&mut visitor);
        assert!(matches!(result, Err(CatalogError::Output(_))));
    }

    #[test]
    fn test_total_visitor_reports_fruit_overflow() {
        let mut totals = TotalVisitor::new();
        let result = Fruit::new("Saffron", i64::MIN, 2).accept(&mut totals);
        assert!(matches!(result, Err(CatalogError::FruitCostOverflow { .. })));
        assert_eq!(totals.total(), 0);
    }

    #[test]
    fn test_negative_fruit_cost() {
        assert_eq!(fruit_cost(&Fruit::new("Coupon", -50, 4)).unwrap(), -200);
    }

    #[test]
    fn test_total_visitor() {
        let items: Vec<Item> = vec![
            Book::new("Design Patterns", 5000).into(),
            Fruit::new("Apple", 200, 3).into(),
        ];

        let mut totals = TotalVisitor::new();
        let costs: Vec<i64> = items
            .iter()
            .map(|item| item.accept(&mut totals).unwrap())
            .collect();

        assert_eq!(costs, vec![5000, 600]);
        assert_eq!(totals.total(), 5600);
    }

    #[test]
    fn test_total_overflow() {
        let mut totals = TotalVisitor::new();
        Book::new("Expensive", i64::MAX).accept(&mut totals).unwrap();

        let result = Book::new("One more", 1).accept(&mut totals);
        assert!(matches!(
            result,
            Err(CatalogError::TotalOverflow { total: i64::MAX, cost: 1 })
        ));
        assert_eq!(totals.total(), i64::MAX);
    }
}
