use crate::domain::{CartLine, CartState, Product, ProductId};

/// The empty cart every session starts from.
pub const INITIAL_STATE: CartState = CartState { cart: Vec::new() };

/// A request to transition cart state.
///
/// Matching is always by product id. Removal and quantity changes only need
/// the id, so those variants carry a [`ProductId`] rather than a full line.
/// Because this is a closed enum there is no "unrecognized action" case to
/// fall through to; every variant is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddToCart(Product),
    RemoveFromCart(ProductId),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
}

impl Action {
    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::IncreaseQuantity(_) => "increase_quantity",
            Action::DecreaseQuantity(_) => "decrease_quantity",
        }
    }
}

/// Applies one action to the cart, returning the new state.
///
/// Total, pure and deterministic: no I/O, never mutates `state`, and
/// references to absent cart lines are no-ops rather than errors. Relative
/// order of lines is preserved by every transition; a product's line sits at
/// the position of its first add.
///
/// Invariants maintained: at most one line per product id, and every
/// quantity stays >= 1 — decrementing a quantity-1 line leaves it unchanged
/// rather than removing it.
pub fn reduce(state: &CartState, action: &Action) -> CartState {
    match action {
        Action::AddToCart(product) => {
            if state.line(product.id).is_some() {
                CartState {
                    cart: state
                        .cart
                        .iter()
                        .map(|line| {
                            if line.id == product.id {
                                CartLine {
                                    quantity: line.quantity + 1,
                                    ..line.clone()
                                }
                            } else {
                                line.clone()
                            }
                        })
                        .collect(),
                }
            } else {
                let mut cart = state.cart.clone();
                cart.push(CartLine::first_of(product));
                CartState { cart }
            }
        }
        Action::RemoveFromCart(id) => CartState {
            cart: state
                .cart
                .iter()
                .filter(|line| line.id != *id)
                .cloned()
                .collect(),
        },
        Action::IncreaseQuantity(id) => CartState {
            cart: state
                .cart
                .iter()
                .map(|line| {
                    if line.id == *id {
                        CartLine {
                            quantity: line.quantity + 1,
                            ..line.clone()
                        }
                    } else {
                        line.clone()
                    }
                })
                .collect(),
        },
        Action::DecreaseQuantity(id) => CartState {
            cart: state
                .cart
                .iter()
                .map(|line| {
                    if line.id == *id && line.quantity > 1 {
                        CartLine {
                            quantity: line.quantity - 1,
                            ..line.clone()
                        }
                    } else {
                        line.clone()
                    }
                })
                .collect(),
        },
    }
}
