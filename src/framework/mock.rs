//! Mock client for testing typed clients in isolation.
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are
//! answered by queued expectations instead of a live actor, so client logic
//! (login matching, duplicate checks, error mapping) can be tested
//! deterministically.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};

enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with queued, in-order expectations.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_list().return_ok(vec![user]);
/// let client = UserClient::new(mock.client());
/// // drive the client...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations; any request panics until some
    /// are queued.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client handle to inject into the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Get { response }),
        }
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::List { response }),
        }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Create { response }),
        }
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Delete { response }),
        }
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Action { response }),
        }
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .expect("expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods; queue the canned response
/// with [`return_ok`](ExpectationBuilder::return_ok) or
/// [`return_err`](ExpectationBuilder::return_err).
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.wrap)(Err(error));
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, User, UserCreate};

    fn demo_user() -> User {
        User {
            id: "user_1".to_string(),
            name: "Ahmad Student".to_string(),
            email: "student@iium.edu.my".to_string(),
            password: "123".to_string(),
            role: Role::Customer,
            matric_no: Some("2012345".to_string()),
            staff_no: None,
        }
    }

    #[tokio::test]
    async fn mock_answers_in_expectation_order() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![demo_user()]);
        mock.expect_create().return_ok("user_2".to_string());

        let client = mock.client();

        let users = client.list().await.unwrap();
        assert_eq!(users.len(), 1);

        let params = UserCreate {
            name: "New".to_string(),
            email: "new@iium.edu.my".to_string(),
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            role: Role::Customer,
            matric_no: Some("2099999".to_string()),
            staff_no: None,
        };
        let id = client.create(params).await.unwrap();
        assert_eq!(id, "user_2");

        mock.verify();
    }

    #[tokio::test]
    async fn mock_returns_queued_errors() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get()
            .return_err(FrameworkError::NotFound("user_9".to_string()));

        let client = mock.client();
        let err = client.get("user_9".to_string()).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("user_9".to_string()));
        mock.verify();
    }
}
