use std::io::Write;

use shopcart_catalog::{
    Book, CatalogResult, Fruit, Item, ItemElement, ShoppingCartVisitor, TotalVisitor, Visitor,
};

/// The fixed cart priced on every run
pub fn default_cart() -> Vec<Item> {
    vec![
        Book::new("Design Patterns", 5000).into(),
        Fruit::new("Apple", 200, 3).into(),
    ]
}

/// Route each item through `visitor`, in order. Items are visited lazily,
/// so a short-circuiting consumer stops visiting at the first failure.
pub fn price_items<'a, V: Visitor>(
    items: &'a [Item],
    visitor: &'a mut V,
) -> impl Iterator<Item = V::Output> + 'a {
    items.iter().map(move |item| item.accept(visitor))
}

/// Print one receipt line per item of the default cart to `out`
pub fn run<W: Write>(out: W) -> CatalogResult<()> {
    let items = default_cart();
    tracing::info!("Pricing {} items", items.len());

    let mut receipt = ShoppingCartVisitor::new(out);
    price_items(&items, &mut receipt).collect::<CatalogResult<Vec<_>>>()?;
    receipt.flush()?;

    let mut totals = TotalVisitor::new();
    price_items(&items, &mut totals).collect::<CatalogResult<Vec<_>>>()?;
    tracing::info!(total = totals.total(), "Cart priced");

    Ok(())
}
