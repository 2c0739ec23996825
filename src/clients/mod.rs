use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::cart::{Action, CartTotals};
use crate::domain::CartState;
use crate::error::CartError;
use crate::messages::CartRequest;

// =============================================================================
// Client method macro
// =============================================================================

/// Generates request/response client methods: oneshot channel plumbing plus
/// automatic tracing, with channel failures mapped to the service error type.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// Cart client
// =============================================================================

/// Handle for talking to the cart service. Cheap to clone; all clones feed
/// the same single-writer channel.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Fire-and-forget: no response channel.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CartClient => fn dispatch(action: Action) -> CartState as CartRequest::Dispatch, Error = CartError);
client_method!(CartClient => fn state() -> CartState as CartRequest::GetState, Error = CartError);
client_method!(CartClient => fn totals() -> CartTotals as CartRequest::GetTotals, Error = CartError);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(CartClient => fn action_count() -> u64 as CartRequest::GetActionCount, Error = CartError);
