use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Mahallah, MahallahCreate};
use crate::venue_actor::{VenueAction, VenueError};

/// Client for the Venue actor: the location screen and the staff stall
/// toggle.
#[derive(Clone)]
pub struct VenueClient {
    inner: ResourceClient<Mahallah>,
}

impl VenueClient {
    pub fn new(inner: ResourceClient<Mahallah>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn add_mahallah(&self, params: MahallahCreate) -> Result<String, VenueError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => VenueError::Validation(msg),
            other => Self::map_error(other),
        })
    }

    /// Flips the stall between open and closed; returns the new open state.
    #[instrument(skip(self))]
    pub async fn toggle_stall(&self, id: String) -> Result<bool, VenueError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, VenueAction::ToggleStall)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Mahallah> for VenueClient {
    type Error = VenueError;

    fn inner(&self) -> &ResourceClient<Mahallah> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => VenueError::NotFound(id),
            other => VenueError::ActorCommunicationError(other.to_string()),
        }
    }
}
