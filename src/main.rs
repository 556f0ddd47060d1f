//! End-to-end demo of the cafe ordering system.
//!
//! Runs the full customer journey against a live actor system with
//! compressed timings: sign in, order, watch the kitchen, walk over,
//! declare arrival and hand the pickup code to staff.

use std::time::Duration;

use cafe_click::lifecycle::{setup_tracing, CafeSystem};
use cafe_click::model::{CartLine, Customizations, SpiceLevel};
use cafe_click::session::{SessionConfig, SessionEvent};
use tracing::{info, Instrument};

/// Timings shrunk so the whole journey takes a few seconds of wall time.
fn demo_config() -> SessionConfig {
    SessionConfig {
        preparing_delay: Duration::from_millis(200),
        ready_delay: Duration::from_millis(800),
        proximity_tick: Duration::from_millis(300),
        token_rotation: Duration::from_secs(5),
        ..SessionConfig::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting cafe system");
    let system = CafeSystem::start(demo_config())
        .await
        .map_err(|e| e.to_string())?;
    let mut events = system.session_client.subscribe();

    // Customer signs in with the demo matric number.
    let user = system
        .user_client
        .login("2012345", "123")
        .await
        .map_err(|e| e.to_string())?;
    info!(user = %user.name, "Signed in");

    // Browse the catalog and build a cart.
    let catalog = system
        .menu_client
        .catalog()
        .await
        .map_err(|e| e.to_string())?;
    info!(items = catalog.len(), "Catalog loaded");
    let nasi = &catalog[0];
    let cart = vec![
        CartLine::new(nasi.id.clone(), nasi.name.clone(), nasi.price, 2).with_customizations(
            Customizations {
                add_egg: true,
                spice_level: SpiceLevel::Hot,
            },
        ),
    ];

    let span = tracing::info_span!("order_journey");
    let order = async {
        let order = system
            .session_client
            .place_order(cart, "mahallah_1".to_string())
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, total = order.total, "Order placed");

        // Walk towards the cafe while the kitchen works.
        let start = system
            .session_client
            .start_tracking()
            .await
            .map_err(|e| e.to_string())?;
        info!(distance_km = start.distance_km, "Walking to the cafe");

        // The ready and arrival notifications arrive in either order
        // depending on the configured timings; wait for both.
        let mut ready = false;
        let mut nearby = false;
        while !(ready && nearby) {
            match events.recv().await {
                Ok(SessionEvent::OrderReady { order_id }) => {
                    info!(%order_id, "Order is ready for pickup");
                    ready = true;
                }
                Ok(SessionEvent::ArrivalNearby {
                    order_id,
                    distance_km,
                }) => {
                    info!(%order_id, distance_km, "Nearly there");
                    nearby = true;
                }
                Ok(_) => {}
                Err(e) => return Err(e.to_string()),
            }
        }
        Ok::<_, String>(order)
    }
    .instrument(span)
    .await?;

    // At the counter: declare arrival and show the code to staff.
    let span = tracing::info_span!("pickup");
    async {
        let token = system
            .session_client
            .declare_arrival()
            .await
            .map_err(|e| e.to_string())?;
        info!(code = %token.code, "Pickup code issued");

        let verdict = system
            .session_client
            .verify_code(token.code)
            .await
            .map_err(|e| e.to_string())?;
        info!(?verdict, "Staff checked the code");

        system
            .session_client
            .submit_review(5, "Sedap!".to_string())
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, "Review submitted, order complete");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo finished");
    Ok(())
}
