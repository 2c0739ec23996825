use crate::domain::CartState;

/// Snapshot of the two cart aggregates, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub items: u32,
    pub price: u64,
}

/// Sum of quantities over all lines. 0 for an empty cart.
pub fn total_items(state: &CartState) -> u32 {
    state.cart.iter().map(|line| line.quantity).sum()
}

/// Sum of price × quantity over all lines, in minor units. 0 for an empty
/// cart. Exact: no floating point is involved anywhere in the computation.
pub fn total_price(state: &CartState) -> u64 {
    state.cart.iter().map(|line| line.line_total()).sum()
}

/// Both aggregates at once, recomputed from `state.cart` so they can never
/// drift from it.
pub fn totals(state: &CartState) -> CartTotals {
    CartTotals {
        items: total_items(state),
        price: total_price(state),
    }
}
