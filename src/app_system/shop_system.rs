use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actors::CartService;
use crate::cart::Action;
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::domain::{CartState, ProductId};
use crate::error::CartError;

/// The main application system: the catalog plus the cart actor.
///
/// Responsible for starting the actor, wiring it to the shared read-only
/// catalog, and handling shutdown. Its helper methods are the UI boundary:
/// they translate gestures ("add product 3") into dispatched [`Action`]s.
pub struct ShopSystem {
    pub catalog: Arc<Catalog>,
    pub cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    pub fn new(catalog: Catalog) -> Self {
        let (cart_service, cart_client) = CartService::new(32);
        let handle = tokio::spawn(cart_service.run());

        Self {
            catalog: Arc::new(catalog),
            cart_client,
            handle,
        }
    }

    /// Resolves the product in the catalog, then dispatches an add.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: ProductId) -> Result<CartState, CartError> {
        let product = self
            .catalog
            .find(id)
            .cloned()
            .ok_or(CartError::UnknownProduct(id))?;
        self.cart_client.dispatch(Action::AddToCart(product)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<CartState, CartError> {
        self.cart_client.dispatch(Action::RemoveFromCart(id)).await
    }

    #[instrument(skip(self))]
    pub async fn increase_quantity(&self, id: ProductId) -> Result<CartState, CartError> {
        self.cart_client.dispatch(Action::IncreaseQuantity(id)).await
    }

    #[instrument(skip(self))]
    pub async fn decrease_quantity(&self, id: ProductId) -> Result<CartState, CartError> {
        self.cart_client.dispatch(Action::DecreaseQuantity(id)).await
    }

    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down system...");
        self.cart_client.shutdown().await?;

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(CartError::ActorCommunicationError(format!(
                "Actor task failed: {:?}",
                e
            )));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
