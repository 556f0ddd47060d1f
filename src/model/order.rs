//! Orders and the cart lines they are built from.
//!
//! An [`Order`] is created once, at checkout, from a finalized list of
//! [`CartLine`]s. Its `total` is computed at that moment and never changes;
//! its [`OrderStatus`] only ever moves forward.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Flat surcharge applied per unit when the egg add-on is selected, in RM.
pub const EGG_SURCHARGE: f64 = 1.00;

/// Spice level customization for a dish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiceLevel {
    #[default]
    Mild,
    Medium,
    Hot,
}

/// Per-line customizations chosen on the menu screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customizations {
    pub add_egg: bool,
    pub spice_level: SpiceLevel,
}

/// One line of a cart: a menu item snapshot, a quantity and its
/// customizations.
///
/// Name and unit price are captured when the line is added, so later staff
/// edits to the menu do not retroactively change an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub unit_price: f64,
    /// Always at least 1; the cart builder never produces a zero-quantity line.
    pub quantity: u32,
    pub customizations: Customizations,
}

impl CartLine {
    pub fn new(
        item_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            unit_price,
            quantity,
            customizations: Customizations::default(),
        }
    }

    pub fn with_customizations(mut self, customizations: Customizations) -> Self {
        self.customizations = customizations;
        self
    }

    /// Price of this line: (unit price + egg surcharge if selected) x quantity.
    pub fn line_total(&self) -> f64 {
        let unit = if self.customizations.add_egg {
            self.unit_price + EGG_SURCHARGE
        } else {
            self.unit_price
        };
        unit * f64::from(self.quantity)
    }
}

/// Total for a whole cart.
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Preparation status of an order.
///
/// Advances strictly `Sent -> Preparing -> Ready`, driven by the session
/// actor's timers. Collection is not a fourth status; it is signalled as a
/// separate completion event once the pickup code is verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Sent,
    Preparing,
    Ready,
}

impl OrderStatus {
    /// The next status in the progression, or `None` once `Ready`.
    pub fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Sent => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Sent => "sent",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
        };
        f.write_str(s)
    }
}

/// A placed order. The single active order is owned by the session actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub mahallah_id: String,
    pub items: Vec<CartLine>,
    /// Fixed at placement time; immutable afterwards.
    pub total: f64,
    pub status: OrderStatus,
}

impl Order {
    /// Builds a freshly placed order; the total is computed here, once.
    pub fn new(id: impl Into<String>, mahallah_id: impl Into<String>, items: Vec<CartLine>) -> Self {
        let total = cart_total(&items);
        Self {
            id: id.into(),
            mahallah_id: mahallah_id.into(),
            items,
            total,
            status: OrderStatus::Sent,
        }
    }
}
