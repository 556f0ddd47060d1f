//! Custom actions for the Venue actor.

/// Staff operations on a venue.
#[derive(Debug, Clone)]
pub enum VenueAction {
    /// Flips the stall between open and closed; the handler returns the new
    /// open state.
    ToggleStall,
}
