//! Custom actions for the Menu actor.

/// Staff operations on a menu item beyond plain CRUD.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Flips the availability flag ("Mark Out" / "Mark In"); the handler
    /// returns the new availability.
    ToggleAvailability,
}
