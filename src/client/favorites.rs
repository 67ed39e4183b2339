//! In-memory favorites list.
//!
//! Append-only by design: `add` does not check for an existing entry, so
//! the same product may appear more than once. Callers that want set
//! semantics can consult [`Favorites::contains`] before adding.

/// One favorited product.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteProduct {
    pub product_id: String,
    pub title: String,
    pub unit_price: f64,
    pub image: String,
}

/// The favorites container. Entries keep insertion order.
#[derive(Debug, Default)]
pub struct Favorites {
    entries: Vec<FavoriteProduct>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FavoriteProduct] {
        &self.entries
    }

    /// Append a product to the favorites.
    pub fn add(&mut self, product: FavoriteProduct) {
        self.entries.push(product);
    }

    /// Remove every entry for the product. No-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|entry| entry.product_id != product_id);
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(product_id: &str) -> FavoriteProduct {
        FavoriteProduct {
            product_id: product_id.to_string(),
            title: format!("Product {}", product_id),
            unit_price: 2.5,
            image: format!("/uploads/{}.jpg", product_id),
        }
    }

    #[test]
    fn add_appends_without_deduplicating() {
        let mut favorites = Favorites::new();
        favorites.add(product("7"));
        favorites.add(product("7"));

        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains("7"));
    }

    #[test]
    fn remove_clears_every_entry_for_the_product() {
        let mut favorites = Favorites::new();
        favorites.add(product("7"));
        favorites.add(product("8"));
        favorites.add(product("7"));

        favorites.remove("7");
        assert_eq!(favorites.len(), 1);
        assert!(!favorites.contains("7"));
        assert!(favorites.contains("8"));

        // Removing an absent product is a no-op.
        favorites.remove("404");
        assert_eq!(favorites.len(), 1);
    }
}
