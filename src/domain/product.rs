/// Unique identifier for a product in the catalog.
pub type ProductId = u32;

/// A product as supplied by the catalog. Read-only at runtime.
///
/// Prices are held in integer minor units (cents) so cart totals stay
/// exact under multiplication and summation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
