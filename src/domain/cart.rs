use crate::domain::{Product, ProductId};

/// A product entry in the cart, annotated with quantity.
///
/// Created by copying a [`Product`]'s fields; `quantity` is always >= 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl CartLine {
    /// Builds the line a product gets on first add.
    pub fn first_of(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Line total in minor units.
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// The cart: an ordered sequence of lines, at most one per product id.
///
/// Values of this type are never mutated in place; every transition in
/// [`crate::cart::reduce`] returns a fresh value, so a caller holding the
/// previous state can detect change by comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    pub cart: Vec<CartLine>,
}

impl CartState {
    /// Looks up the line for a product id, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}
