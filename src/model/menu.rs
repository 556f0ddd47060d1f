//! Menu catalog entries, shared by the customer catalog and the staff
//! dashboard.

use serde::{Deserialize, Serialize};

/// Menu category shown as a filter chip on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rice,
    Noodles,
    Western,
    Drinks,
}

/// A dish or drink on a cafe's menu.
///
/// `available` is the staff-controlled flag; the customer catalog only shows
/// items where it is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub popular: bool,
    pub available: bool,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            popular: false,
            available: true,
        }
    }
}

/// Payload for adding a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub popular: bool,
    pub available: bool,
}

/// Payload for the staff edit form (name and price only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// The fabricated demo catalog, reset on every boot.
pub fn demo_menu() -> Vec<MenuItemCreate> {
    let item = |name: &str, price: f64, category: Category, popular: bool, available: bool| {
        MenuItemCreate {
            name: name.to_string(),
            price,
            category,
            popular,
            available,
        }
    };
    vec![
        item("Nasi Goreng USA", 5.50, Category::Rice, true, true),
        item("Chicken Rice", 6.00, Category::Rice, true, true),
        item("Mee Goreng", 5.00, Category::Noodles, true, true),
        item("Chicken Chop", 8.50, Category::Western, false, false),
        item("Carbonara Pasta", 9.00, Category::Western, false, true),
        item("Iced Milo", 2.50, Category::Drinks, false, true),
    ]
}
