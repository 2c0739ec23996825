use crate::domain::{Product, ProductId};

/// Read-only ordered product catalog.
///
/// Supplied to the system at startup and never mutated afterwards; there are
/// no mutating methods. Iteration order is the order products were given in.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The hardcoded demo collection.
    pub fn demo() -> Self {
        Self::new(vec![
            Product::new(1, "Product A", 120_00),
            Product::new(2, "Product B", 160_00),
            Product::new(3, "Product C", 220_00),
            Product::new(4, "Product D", 270_00),
            Product::new(5, "Product E", 330_00),
            Product::new(6, "Product F", 400_00),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
