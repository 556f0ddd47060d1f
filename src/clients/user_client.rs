use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate};
use crate::user_actor::UserError;

/// Client for the User actor: sign-in and registration.
///
/// Identifier lookup happens here rather than in the actor; the store is a
/// small in-memory list and login needs a scan by email / matric no / staff
/// no, which the generic store does not index.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Mock sign-in: finds the account by identifier, then compares the
    /// password in plain text. Both failure modes are recoverable inline
    /// errors.
    #[instrument(skip(self, password))]
    pub async fn login(&self, identifier: &str, password: &str) -> Result<User, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await.map_err(Self::map_error)?;
        let user = users
            .into_iter()
            .find(|u| u.matches_identifier(identifier))
            .ok_or(UserError::NotFound)?;
        if user.password != password {
            warn!(user_id = %user.id, "Password mismatch");
            return Err(UserError::WrongPassword);
        }
        info!(user_id = %user.id, role = ?user.role, "Login ok");
        Ok(user)
    }

    /// Registers a new account after checking the form payload against
    /// existing emails and matric numbers.
    #[instrument(skip(self, params))]
    pub async fn register(&self, params: UserCreate) -> Result<String, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await.map_err(Self::map_error)?;
        let duplicate = users.iter().any(|u| {
            u.email == params.email
                || (params.matric_no.is_some() && u.matric_no == params.matric_no)
        });
        if duplicate {
            return Err(UserError::AlreadyRegistered);
        }

        self.inner.create(params).await.map_err(|e| match e {
            // Validation failures come back from the entity as custom errors.
            FrameworkError::Custom(msg) => UserError::Validation(msg),
            other => Self::map_error(other),
        })
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::ActorCommunicationError(e.to_string())
    }
}
