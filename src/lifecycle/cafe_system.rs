use tracing::{error, info};

use crate::clients::{MenuClient, SessionClient, UserClient, VenueClient};
use crate::model::{demo_mahallahs, demo_menu, demo_users};
use crate::session::SessionConfig;

/// The runtime orchestrator for the cafe ordering system.
///
/// `CafeSystem` starts every actor, seeds the demo data and hands out the
/// typed clients. Dropping it (via [`CafeSystem::shutdown`]) closes the
/// channels, which is the only shutdown signal the actors need.
///
/// # Architecture
///
/// Four actors run side by side:
/// - **User actor**: accounts, sign-in and registration
/// - **Menu actor**: the catalog, managed from the staff dashboard
/// - **Venue actor**: mahallah delivery points and stall status
/// - **Session actor**: the active order, proximity simulation and pickup
///   verification
///
/// The first three are instances of the generic resource actor; the session
/// actor runs its own loop because its state is a process, not a table.
pub struct CafeSystem {
    pub user_client: UserClient,
    pub menu_client: MenuClient,
    pub venue_client: VenueClient,
    pub session_client: SessionClient,

    /// Task handles for all running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Starts every actor and seeds the demo accounts, menu and venues.
    ///
    /// The session config is injected so tests and the demo binary can run
    /// with compressed timings.
    pub async fn start(session_config: SessionConfig) -> Result<Self, String> {
        let (user_actor, user_client) = crate::user_actor::new();
        let (menu_actor, menu_client) = crate::menu_actor::new();
        let (venue_actor, venue_client) = crate::venue_actor::new();
        let (session_actor, session_client) = crate::session::new(session_config);

        // None of the actors depend on each other; Context = () throughout.
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(venue_actor.run(())),
            tokio::spawn(session_actor.run()),
        ];

        let system = Self {
            user_client,
            menu_client,
            venue_client,
            session_client,
            handles,
        };
        system.seed().await?;
        info!("Cafe system started");
        Ok(system)
    }

    /// Loads the demo accounts, the six-item menu and the mahallah list.
    async fn seed(&self) -> Result<(), String> {
        for params in demo_users() {
            self.user_client
                .register(params)
                .await
                .map_err(|e| format!("Seeding users failed: {e}"))?;
        }
        for params in demo_menu() {
            self.menu_client
                .add_item(params)
                .await
                .map_err(|e| format!("Seeding menu failed: {e}"))?;
        }
        for params in demo_mahallahs() {
            self.venue_client
                .add_mahallah(params)
                .await
                .map_err(|e| format!("Seeding venues failed: {e}"))?;
        }
        info!("Demo data seeded");
        Ok(())
    }

    /// Gracefully shuts down the whole system.
    ///
    /// Dropping the clients closes their channels; each actor sees the
    /// closed channel, drains what it already received and exits. The
    /// session actor additionally aborts every outstanding timer as its
    /// state is dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.user_client);
        drop(self.menu_client);
        drop(self.venue_client);
        drop(self.session_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }
        info!("System shutdown complete.");
        Ok(())
    }
}
