//! [`ActorEntity`] implementation for [`MenuItem`].

use async_trait::async_trait;

use super::actions::MenuAction;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemUpdate};

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = String;
    type CreateParams = MenuItemCreate;
    type UpdateParams = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = bool;
    type Context = ();

    fn from_create_params(id: String, params: MenuItemCreate) -> Result<Self, String> {
        if params.name.is_empty() {
            return Err("Item name is required".to_string());
        }
        if params.price <= 0.0 {
            return Err("Price must be positive".to_string());
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
            popular: params.popular,
            available: params.available,
        })
    }

    /// Applies the staff edit form.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(name) = update.name {
            if name.is_empty() {
                return Err("Item name is required".to_string());
            }
            self.name = name;
        }
        if let Some(price) = update.price {
            if price <= 0.0 {
                return Err("Price must be positive".to_string());
            }
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<bool, String> {
        match action {
            MenuAction::ToggleAvailability => {
                self.available = !self.available;
                Ok(self.available)
            }
        }
    }
}
