//! Error types for the planner core.

use thiserror::Error;

/// Errors raised by scheduling operations: invalid dates or hours,
/// attempts to book a blocked day, and overlaps with existing bookings.
///
/// The display strings are part of the public contract; the interactive
/// frontend prints them verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("Day does not exist.")]
    DayDoesNotExist,

    #[error("Month does not exist.")]
    MonthDoesNotExist,

    #[error("Illegal hour.")]
    IllegalHour,

    #[error("Meeting starts before it ends.")]
    StartAfterEnd,

    #[error("Overlap with another item - {description} - scheduled from {start} and {end}")]
    Overlap {
        /// Description of the already-booked meeting we collided with.
        description: String,
        start: i32,
        end: i32,
    },

    /// A conflict re-raised by a [`Room`](crate::Room) or
    /// [`Person`](crate::Person), tagged with the owning entity.
    #[error("Conflict for {role} {identity}:\n{source}")]
    EntityConflict {
        /// "room" or "attendee".
        role: &'static str,
        identity: String,
        source: Box<ConflictError>,
    },
}

/// Lookup failures in the [`Organization`](crate::Organization) roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Requested room does not exist")]
    UnknownRoom,

    #[error("Requested employee does not exist")]
    UnknownEmployee,
}

/// Result type alias for scheduling operations.
pub type ScheduleResult<T> = Result<T, ConflictError>;
