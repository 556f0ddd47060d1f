//! [`ActorEntity`] implementation for [`Mahallah`].

use async_trait::async_trait;

use super::actions::VenueAction;
use crate::framework::ActorEntity;
use crate::model::{Mahallah, MahallahCreate};

#[async_trait]
impl ActorEntity for Mahallah {
    type Id = String;
    type CreateParams = MahallahCreate;
    type UpdateParams = ();
    type Action = VenueAction;
    type ActionResult = bool;
    type Context = ();

    fn from_create_params(id: String, params: MahallahCreate) -> Result<Self, String> {
        if params.name.is_empty() {
            return Err("Venue name is required".to_string());
        }
        Ok(Self {
            id,
            name: params.name,
            open: params.open,
            queue_level: params.queue_level,
            distance_km: params.distance_km,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, action: VenueAction, _ctx: &()) -> Result<bool, String> {
        match action {
            VenueAction::ToggleStall => {
                self.open = !self.open;
                Ok(self.open)
            }
        }
    }
}
