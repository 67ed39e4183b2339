//! In-memory shopping cart.
//!
//! An ordered collection with one line per product id. Quantity never
//! drops below 1: decrementing floors there, and a line only disappears
//! through an explicit remove. Driven synchronously by UI events; no
//! persistence across restarts.

/// One cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub title: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub image: String,
}

/// The cart container. Lines keep insertion order.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add an item. If a line for the product already exists its quantity
    /// grows by the new item's quantity, keeping one line per product.
    pub fn add(&mut self, item: CartItem) {
        let quantity = item.quantity.max(1);
        match self.find_mut(&item.product_id) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(CartItem { quantity, ..item }),
        }
    }

    /// Increase a line's quantity by one. No-op when the product is absent.
    pub fn increment(&mut self, product_id: &str) {
        if let Some(item) = self.find_mut(product_id) {
            item.quantity += 1;
        }
    }

    /// Decrease a line's quantity by one, flooring at 1. No-op when the
    /// product is absent.
    pub fn decrement(&mut self, product_id: &str) {
        if let Some(item) = self.find_mut(product_id) {
            if item.quantity > 1 {
                item.quantity -= 1;
            }
        }
    }

    /// Remove a line entirely. No-op when the product is absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Sum of unit price times quantity across all lines.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.unit_price * f64::from(item.quantity))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            title: format!("Product {}", product_id),
            unit_price: price,
            quantity,
            image: format!("/uploads/{}.jpg", product_id),
        }
    }

    #[test]
    fn add_keeps_one_line_per_product() {
        let mut cart = Cart::new();
        cart.add(item("7", 2.5, 1));
        cart.add(item("8", 1.0, 2));
        cart.add(item("7", 2.5, 3));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.items()[1].quantity, 2);
    }

    #[test]
    fn decrement_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(item("7", 2.5, 1));

        cart.decrement("7");
        assert_eq!(cart.items()[0].quantity, 1);

        // Repeated decrements converge to 1 and stay there.
        for _ in 0..10 {
            cart.decrement("7");
        }
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn increment_then_decrement_returns_to_one() {
        let mut cart = Cart::new();
        cart.add(item("7", 2.5, 1));

        cart.increment("7");
        assert_eq!(cart.items()[0].quantity, 2);
        cart.decrement("7");
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn operations_on_absent_products_are_no_ops() {
        let mut cart = Cart::new();
        cart.add(item("7", 2.5, 1));

        cart.increment("404");
        cart.decrement("404");
        cart.remove("404");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn remove_deletes_the_line() {
        let mut cart = Cart::new();
        cart.add(item("7", 2.5, 1));
        cart.add(item("8", 1.0, 1));

        cart.remove("7");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product_id, "8");
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(item("7", 2.5, 2));
        cart.add(item("8", 1.0, 3));

        assert!((cart.total() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_normalizes_zero_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add(item("7", 2.5, 0));
        assert_eq!(cart.items()[0].quantity, 1);
    }
}
