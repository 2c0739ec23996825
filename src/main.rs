mod domain;
mod cart;
mod catalog;
mod error;
mod messages;

mod actors;
mod clients;
mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, ShopSystem};
use crate::cart::{total_items, total_price};
use crate::catalog::Catalog;
use crate::error::CartError;

/// Walks the cart through an add / decrease / remove session, standing in
/// for the UI layer as the dispatcher of actions.
#[tokio::main]
async fn main() -> Result<(), CartError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting shop with cart system");

    let system = ShopSystem::new(Catalog::demo());

    for product in system.catalog.products() {
        info!(id = product.id, name = %product.name, price = product.price, "Catalog product");
    }

    let span = tracing::info_span!("shopping_session");
    async {
        info!("Adding Product A twice");
        system.add_to_cart(1).await?;
        let state = system.add_to_cart(1).await?;
        info!(
            items = total_items(&state),
            price = total_price(&state),
            "Cart after adds"
        );

        info!("Decreasing quantity twice (second one hits the floor)");
        system.decrease_quantity(1).await?;
        let state = system.decrease_quantity(1).await?;
        info!(
            quantity = state.line(1).map(|l| l.quantity).unwrap_or(0),
            price = total_price(&state),
            "Cart after decreases"
        );

        info!("Removing the line");
        let state = system.remove_from_cart(1).await?;
        info!(
            lines = state.cart.len(),
            items = total_items(&state),
            "Cart after removal"
        );

        Ok::<(), CartError>(())
    }
    .instrument(span)
    .await?;

    let totals = system.cart_client.totals().await?;
    info!(items = totals.items, price = totals.price, "Final totals");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
