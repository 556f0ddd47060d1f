//! [`ActorEntity`] implementation for [`User`].

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{Role, User, UserCreate};

#[async_trait]
impl ActorEntity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();

    /// Applies the registration-form validation before the account is
    /// stored. Messages here are shown verbatim in the form banner.
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        let has_campus_no = match params.role {
            Role::Customer => params.matric_no.as_deref().is_some_and(|m| !m.is_empty()),
            Role::Staff => params.staff_no.as_deref().is_some_and(|s| !s.is_empty()),
        };
        if params.name.is_empty()
            || params.email.is_empty()
            || params.password.is_empty()
            || !has_campus_no
        {
            return Err("All fields are required".to_string());
        }
        if params.password != params.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if params.password.len() < 3 {
            return Err("Password must be at least 3 characters".to_string());
        }

        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            password: params.password,
            role: params.role,
            matric_no: params.matric_no,
            staff_no: params.staff_no,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
