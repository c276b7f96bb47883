//! # Product Catalog
//!
//! Read-only, in-memory view over the product list.
//!
//! The catalog is an external collaborator from the cart's point of view:
//! the aggregator copies product fields at add time and never calls back in.
//! Within this system's scope the catalog is immutable, which is why cart
//! lines are not re-synced against it.
//!
//! ## Key Operations
//! - Lookup by id
//! - Case-insensitive title search
//! - Category listing/filtering
//!
//! `demo_products()` ships the small fixed catalog the storefront demo and
//! the tests run against.

use crate::types::Product;

/// An immutable product catalog.
///
/// ## Usage
/// ```rust
/// use moda_core::catalog::{demo_products, Catalog};
///
/// let catalog = Catalog::new(demo_products());
///
/// let shirt = catalog.get("1").unwrap();
/// assert_eq!(shirt.price_cents, 21299);
///
/// let hits = catalog.search("dress");
/// assert!(!hits.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog over the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns all products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Returns the distinct category labels in first-encounter order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Returns the products in a category.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over product titles.
    ///
    /// An empty query returns the full catalog, matching the home screen's
    /// empty search box.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The fixed demo catalog: four clothing products.
///
/// Prices are in cents; every product carries a pre-discount reference
/// price, so the discount line on the cart screen is non-zero.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            title: "Modern Light Clothes".to_string(),
            category: "T-Shirt".to_string(),
            price_cents: 21299,
            old_price_cents: Some(25000),
            rating: 5.0,
            image_url: "assets/images/2.png".to_string(),
            description: Some(
                "A modern, lightweight t-shirt perfect for everyday wear. Breathable and stylish."
                    .to_string(),
            ),
            sizes: vec!["S", "M", "L", "XL"].into_iter().map(String::from).collect(),
            colors: vec!["#000", "#E5C9A8", "#D9D9D9"]
                .into_iter()
                .map(String::from)
                .collect(),
            reviews: None,
        },
        Product {
            id: "2".to_string(),
            title: "Light Dress Bless".to_string(),
            category: "Dress modern".to_string(),
            price_cents: 16299,
            old_price_cents: Some(19099),
            rating: 5.0,
            image_url: "assets/images/1.png".to_string(),
            description: Some(
                "Its simple and elegant shape makes it perfect for those who want minimalist clothes."
                    .to_string(),
            ),
            sizes: vec!["S", "M", "L", "XL"].into_iter().map(String::from).collect(),
            colors: vec!["#000", "#E5C9A8", "#D9D9D9"]
                .into_iter()
                .map(String::from)
                .collect(),
            reviews: None,
        },
        Product {
            id: "3".to_string(),
            title: "Classic Polo Shirt".to_string(),
            category: "Polo".to_string(),
            price_cents: 9999,
            old_price_cents: Some(12000),
            rating: 4.5,
            image_url: "https://imagescdn.simons.ca/images/9659-29624105-10-A1_3/embroidered-logo-classic-polo.jpg"
                .to_string(),
            description: Some(
                "A timeless polo shirt for a smart-casual look. Available in multiple colors."
                    .to_string(),
            ),
            sizes: vec!["S", "M", "L", "XL"].into_iter().map(String::from).collect(),
            colors: vec!["#000", "#E5C9A8", "#D9D9D9"]
                .into_iter()
                .map(String::from)
                .collect(),
            reviews: None,
        },
        Product {
            id: "4".to_string(),
            title: "Elegant Summer Dress".to_string(),
            category: "Dress".to_string(),
            price_cents: 18000,
            old_price_cents: Some(21000),
            rating: 4.8,
            image_url: "https://fashion-nora.com/cdn/shop/files/Summer-Dress-Flutter-Sleeve.webp"
                .to_string(),
            description: Some(
                "A breezy summer dress for all occasions. Comfortable and chic.".to_string(),
            ),
            sizes: vec!["S", "M", "L", "XL"].into_iter().map(String::from).collect(),
            colors: vec!["#000", "#E5C9A8", "#D9D9D9"]
                .into_iter()
                .map(String::from)
                .collect(),
            reviews: None,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(demo_products());
        assert_eq!(catalog.get("1").unwrap().title, "Modern Light Clothes");
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_categories_in_first_encounter_order() {
        let catalog = Catalog::new(demo_products());
        assert_eq!(
            catalog.categories(),
            vec!["T-Shirt", "Dress modern", "Polo", "Dress"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::new(demo_products());

        let hits = catalog.search("DRESS");
        assert_eq!(hits.len(), 2);

        // Empty query returns everything
        assert_eq!(catalog.search("  ").len(), catalog.len());

        assert!(catalog.search("sneaker").is_empty());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::new(demo_products());
        let polos = catalog.by_category("Polo");
        assert_eq!(polos.len(), 1);
        assert_eq!(polos[0].id, "3");
    }

    #[test]
    fn test_demo_products_all_discounted() {
        for product in demo_products() {
            assert!(product.is_discounted(), "{} should be on sale", product.id);
        }
    }
}
