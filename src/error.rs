use thiserror::Error;

use crate::domain::ProductId;

/// Errors at the cart service boundary.
///
/// The reducer itself is total: every action is defined for every state, and
/// references to absent cart lines are no-ops. Failures can only come from
/// the surrounding plumbing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
