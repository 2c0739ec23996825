//! # Mock Framework
//!
//! Utilities for testing client logic in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers
//! like [`expect_dispatch`] to assert what the client actually sent.

use tokio::sync::{mpsc, oneshot};

use crate::cart::{Action, CartTotals};
use crate::clients::CartClient;
use crate::domain::CartState;
use crate::error::CartError;
use crate::messages::CartRequest;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When the subject under test is the *client* (or something built on it),
/// spinning up a full `CartService` just gets in the way. Instead the client
/// sends into a channel we control; the test inspects the messages arriving
/// there and answers them by hand, simulating the actor's behavior
/// (success, failure, delay) deterministically.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(Action, oneshot::Sender<Result<CartState, CartError>>)> {
    match receiver.recv().await {
        Some(CartRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetTotals request
pub async fn expect_get_totals(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<oneshot::Sender<Result<CartTotals, CartError>>> {
    match receiver.recv().await {
        Some(CartRequest::GetTotals { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn mock_client_round_trips_a_dispatch() {
        let (client, mut receiver) = create_mock_client(10);

        let dispatch_task = tokio::spawn(async move {
            let product = Product::new(1, "Product A", 120_00);
            client.dispatch(Action::AddToCart(product)).await
        });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        let product = match action {
            Action::AddToCart(product) => product,
            other => panic!("Unexpected action: {:?}", other),
        };
        assert_eq!(product.id, 1);

        let state = crate::cart::reduce(&crate::cart::INITIAL_STATE, &Action::AddToCart(product));
        responder.send(Ok(state.clone())).unwrap();

        let result = dispatch_task.await.unwrap();
        assert_eq!(result, Ok(state));
    }

    #[tokio::test]
    async fn client_surfaces_actor_failure() {
        let (client, mut receiver) = create_mock_client(10);

        let totals_task = tokio::spawn(async move { client.totals().await });

        let responder = expect_get_totals(&mut receiver)
            .await
            .expect("Expected GetTotals request");
        responder
            .send(Err(CartError::ActorCommunicationError(
                "simulated".to_string(),
            )))
            .unwrap();

        let result = totals_task.await.unwrap();
        assert_eq!(
            result,
            Err(CartError::ActorCommunicationError("simulated".to_string()))
        );
    }

    #[tokio::test]
    async fn client_maps_closed_channel_to_communication_error() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);

        let result = client.state().await;
        assert_eq!(
            result,
            Err(CartError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
