//! Simulated approach to the pickup venue.
//!
//! There is no real geolocation: while tracking is active the session actor
//! ticks the distance down on a fixed interval until it hits the floor.

use serde::Serialize;

/// A customer counts as "nearby" within this radius of the venue.
pub const NEARBY_RADIUS_KM: f64 = 0.5;

/// The simulated distance to the venue for one tracking session.
#[derive(Debug, Clone)]
pub struct ProximityState {
    distance_km: f64,
    has_notified_arrival: bool,
}

impl ProximityState {
    pub fn new(start_km: f64) -> Self {
        Self {
            distance_km: start_km,
            has_notified_arrival: false,
        }
    }

    /// One simulation step: distance decreases by `step_km`, never below
    /// `floor_km`.
    ///
    /// Distances are kept at 10 m precision so repeated subtraction cannot
    /// drift past the nearby boundary (0.8 - 3 x 0.1 must land exactly on
    /// 0.5, not 0.500...01).
    pub fn step(&mut self, step_km: f64, floor_km: f64) {
        let next = ((self.distance_km - step_km) * 100.0).round() / 100.0;
        self.distance_km = next.max(floor_km);
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn is_nearby(&self) -> bool {
        self.distance_km <= NEARBY_RADIUS_KM
    }

    pub fn has_notified_arrival(&self) -> bool {
        self.has_notified_arrival
    }

    /// Latches the one-time arrival notification; never reset within a
    /// tracking session.
    pub fn mark_notified(&mut self) {
        self.has_notified_arrival = true;
    }

    pub fn snapshot(&self) -> ProximitySnapshot {
        ProximitySnapshot {
            distance_km: self.distance_km,
            is_nearby: self.is_nearby(),
        }
    }
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProximitySnapshot {
    pub distance_km: f64,
    pub is_nearby: bool,
}
