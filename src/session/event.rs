//! Events the session broadcasts to the presentation layer.

/// Fire-and-forget notifications; subscribers that lag simply miss old
/// events, nothing in the core waits on them.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The active order reached `Ready`.
    OrderReady { order_id: String },
    /// The customer entered the pickup geofence while the order was ready.
    /// Fired at most once per tracking session.
    ArrivalNearby { order_id: String, distance_km: f64 },
    /// A pickup code was verified; the order has left the tracking flow.
    OrderCollected { order_id: String },
}
