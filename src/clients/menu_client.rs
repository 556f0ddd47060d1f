use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::{MenuAction, MenuError};
use crate::model::{MenuItem, MenuItemCreate, MenuItemUpdate};

/// Client for the Menu actor: the customer catalog and the staff
/// management operations.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<String, MenuError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => MenuError::Validation(msg),
            other => Self::map_error(other),
        })
    }

    /// The staff edit form: name and/or price.
    #[instrument(skip(self))]
    pub async fn edit_item(
        &self,
        id: String,
        name: Option<String>,
        price: Option<f64>,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner
            .update(id, MenuItemUpdate { name, price })
            .await
            .map_err(|e| match e {
                FrameworkError::Custom(msg) => MenuError::Validation(msg),
                other => Self::map_error(other),
            })
    }

    /// Flips an item between available and out of stock; returns the new
    /// availability.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: String) -> Result<bool, MenuError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, MenuAction::ToggleAvailability)
            .await
            .map_err(Self::map_error)
    }

    /// The customer-facing catalog: available items only.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        let items = self.inner.list().await.map_err(Self::map_error)?;
        Ok(items.into_iter().filter(|item| item.available).collect())
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::Category;

    fn item(id: &str, available: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: "Mee Goreng".to_string(),
            price: 5.00,
            category: Category::Noodles,
            popular: true,
            available,
        }
    }

    #[tokio::test]
    async fn catalog_hides_unavailable_items() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list()
            .return_ok(vec![item("menu_1", true), item("menu_2", false)]);
        let client = MenuClient::new(mock.client());

        let catalog = client.catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "menu_1");
        mock.verify();
    }

    #[tokio::test]
    async fn missing_item_maps_to_not_found() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_action()
            .return_err(FrameworkError::NotFound("menu_9".to_string()));
        let client = MenuClient::new(mock.client());

        let err = client
            .toggle_availability("menu_9".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, MenuError::NotFound("menu_9".to_string()));
        mock.verify();
    }
}
