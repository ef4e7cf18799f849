//! Scheduling core for the planner.
//!
//! This crate provides the types the interactive frontend works with:
//! - [`Calendar`], the month/day grid with validation and conflict
//!   detection
//! - [`Meeting`] bookings and the [`Entry`] slot representation
//! - [`Room`] / [`Person`] entities sharing the [`Bookable`] capability
//! - [`Organization`], the in-memory roster

pub mod bookable;
pub mod calendar;
pub mod error;
pub mod meeting;
pub mod roster;

pub use bookable::{Bookable, Person, Room};
pub use calendar::{Calendar, Entry};
pub use error::{ConflictError, RosterError, ScheduleResult};
pub use meeting::Meeting;
pub use roster::Organization;
