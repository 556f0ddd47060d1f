//! Mahallah venues: the residential-hall cafes orders are picked up from.

use serde::{Deserialize, Serialize};

/// Rough queue indicator shown on the location screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueLevel {
    Low,
    Medium,
    High,
}

/// A residential-hall cafe.
///
/// `open` is the staff-controlled stall status; a closed stall does not take
/// new orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mahallah {
    pub id: String,
    pub name: String,
    pub open: bool,
    pub queue_level: QueueLevel,
    pub distance_km: f64,
}

/// Payload for registering a venue.
#[derive(Debug, Clone)]
pub struct MahallahCreate {
    pub name: String,
    pub open: bool,
    pub queue_level: QueueLevel,
    pub distance_km: f64,
}

/// The fabricated venue list, reset on every boot.
pub fn demo_mahallahs() -> Vec<MahallahCreate> {
    let venue = |name: &str, open: bool, queue_level: QueueLevel, distance_km: f64| MahallahCreate {
        name: name.to_string(),
        open,
        queue_level,
        distance_km,
    };
    vec![
        venue("Mahallah Asiah", true, QueueLevel::Low, 0.2),
        venue("Mahallah Faruq", true, QueueLevel::High, 0.5),
        venue("Mahallah Siddiq", true, QueueLevel::Medium, 1.2),
        venue("Mahallah Bilal", true, QueueLevel::Low, 0.8),
        venue("Mahallah Uthman", false, QueueLevel::Low, 4.5),
        venue("Mahallah Aminah", true, QueueLevel::Medium, 0.3),
    ]
}
