use tokio::sync::oneshot;

use crate::cart::{Action, CartTotals};
use crate::domain::CartState;
use crate::error::CartError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by the cart service. Each request variant carries a
/// oneshot channel for the response.
#[derive(Debug)]
pub enum CartRequest {
    /// Apply one action to the cart and respond with the new state.
    Dispatch {
        action: Action,
        respond_to: ServiceResponse<CartState, CartError>,
    },
    GetState {
        respond_to: ServiceResponse<CartState, CartError>,
    },
    GetTotals {
        respond_to: ServiceResponse<CartTotals, CartError>,
    },
    Shutdown,
    #[cfg(test)]
    GetActionCount {
        respond_to: ServiceResponse<u64, CartError>,
    },
}
