use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, instrument};

use crate::model::{CartLine, Order};
use crate::session::proximity::ProximitySnapshot;
use crate::session::token::VerificationToken;
use crate::session::{SessionError, SessionEvent, SessionRequest};
use crate::verification::Verdict;

/// Client for the session actor.
///
/// Unlike the resource clients this one does not go through the generic
/// store protocol; the session speaks its own request enum. Every method
/// follows the same oneshot pattern, and a closed channel on either leg
/// surfaces as [`SessionError::Closed`].
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>, events: broadcast::Sender<SessionEvent>) -> Self {
        Self { sender, events }
    }

    /// Subscribes to session notifications (`ready`, arrival, collection).
    /// Each subscriber gets its own cursor into the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<T, SessionError>>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)?
    }

    #[instrument(skip(self, items))]
    pub async fn place_order(
        &self,
        items: Vec<CartLine>,
        mahallah_id: String,
    ) -> Result<Order, SessionError> {
        debug!(lines = items.len(), %mahallah_id, "Sending request");
        self.request(|respond_to| SessionRequest::PlaceOrder {
            items,
            mahallah_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn order_snapshot(&self) -> Result<Option<Order>, SessionError> {
        self.request(|respond_to| SessionRequest::OrderSnapshot { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn start_tracking(&self) -> Result<ProximitySnapshot, SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::StartTracking { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn end_tracking(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::EndTracking { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn proximity_snapshot(&self) -> Result<Option<ProximitySnapshot>, SessionError> {
        self.request(|respond_to| SessionRequest::ProximitySnapshot { respond_to })
            .await
    }

    /// "I have arrived": mints the first pickup token and starts rotation.
    #[instrument(skip(self))]
    pub async fn declare_arrival(&self) -> Result<VerificationToken, SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::DeclareArrival { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn current_token(&self) -> Result<Option<VerificationToken>, SessionError> {
        self.request(|respond_to| SessionRequest::CurrentToken { respond_to })
            .await
    }

    /// The staff-side check of a presented pickup code.
    #[instrument(skip(self, code))]
    pub async fn verify_code(&self, code: String) -> Result<Verdict, SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::Verify { code, respond_to })
            .await
    }

    #[instrument(skip(self, feedback))]
    pub async fn submit_review(&self, rating: u8, feedback: String) -> Result<(), SessionError> {
        debug!(rating, "Sending request");
        self.request(|respond_to| SessionRequest::SubmitReview {
            rating,
            feedback,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn skip_review(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SkipReview { respond_to })
            .await
    }

    /// Logout: clears the whole session and cancels its timers.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::Reset { respond_to })
            .await
    }
}
