use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::cart::{reduce, totals, Action, CartTotals, INITIAL_STATE};
use crate::clients::CartClient;
use crate::domain::CartState;
use crate::error::CartError;
use crate::messages::{CartRequest, ServiceResponse};

// =============================================================================
// CART SERVICE
// =============================================================================

/// The single writer of cart state.
///
/// Owns the one live [`CartState`] value and processes requests from its
/// channel one at a time, so actions are applied in exactly the order they
/// were dispatched and each transition completes before the next begins.
/// The resulting state is always the left-fold of the dispatched actions
/// over the empty cart.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    state: CartState,
    actions_applied: u64,
}

impl CartService {
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            state: INITIAL_STATE,
            actions_applied: 0,
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Dispatch { action, respond_to } => {
                    self.handle_dispatch(action, respond_to);
                }
                CartRequest::GetState { respond_to } => {
                    self.handle_get_state(respond_to);
                }
                CartRequest::GetTotals { respond_to } => {
                    self.handle_get_totals(respond_to);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
                #[cfg(test)]
                CartRequest::GetActionCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.actions_applied));
                }
            }
        }
        info!("CartService stopped");
    }

    #[instrument(fields(action = action.kind()), skip(self, action, respond_to))]
    fn handle_dispatch(&mut self, action: Action, respond_to: ServiceResponse<CartState, CartError>) {
        debug!("Processing dispatch request");

        // The reducer returns a fresh value; the old state is replaced, never
        // edited in place.
        self.state = reduce(&self.state, &action);
        self.actions_applied += 1;

        info!(
            seq = self.actions_applied,
            lines = self.state.cart.len(),
            items = totals(&self.state).items,
            "Action applied"
        );
        let _ = respond_to.send(Ok(self.state.clone()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_state(&self, respond_to: ServiceResponse<CartState, CartError>) {
        debug!("Processing get_state request");
        let _ = respond_to.send(Ok(self.state.clone()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_totals(&self, respond_to: ServiceResponse<CartTotals, CartError>) {
        debug!("Processing get_totals request");
        // Recomputed from the current cart on every request; never cached.
        let _ = respond_to.send(Ok(totals(&self.state)));
    }
}
