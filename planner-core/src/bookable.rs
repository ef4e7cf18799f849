//! Entities that own a schedule: rooms and people.
//!
//! Both expose the same scheduling surface over an owned [`Calendar`];
//! the [`Bookable`] trait carries that surface as default methods, so the
//! implementors only supply their identity and calendar.

use crate::calendar::{Calendar, Entry};
use crate::error::{ConflictError, ScheduleResult};
use crate::meeting::Meeting;

/// The shared capability of owning a calendar and scheduling against it.
///
/// Only [`Bookable::add_meeting`] wraps errors: a conflict is re-raised
/// tagged with the owning entity's role and identity, so the frontend can
/// tell whose schedule rejected the booking. Everything else delegates
/// straight through.
pub trait Bookable {
    /// Role name used when tagging conflicts ("room" or "attendee").
    const ROLE: &'static str;

    fn identity(&self) -> &str;
    fn calendar(&self) -> &Calendar;
    fn calendar_mut(&mut self) -> &mut Calendar;

    fn add_meeting(&mut self, meeting: Meeting) -> ScheduleResult<()> {
        let identity = self.identity().to_string();
        self.calendar_mut()
            .add_meeting(meeting)
            .map_err(|source| ConflictError::EntityConflict {
                role: Self::ROLE,
                identity,
                source: Box::new(source),
            })
    }

    fn is_busy(&self, month: i32, day: i32, start: i32, end: i32) -> ScheduleResult<bool> {
        self.calendar().is_busy(month, day, start, end)
    }

    fn month_agenda(&self, month: i32) -> String {
        self.calendar().month_agenda(month)
    }

    fn day_agenda(&self, month: i32, day: i32) -> String {
        self.calendar().day_agenda(month, day)
    }

    /// See [`Calendar::meeting_at`] for the panicking index contract.
    fn meeting_at(&self, month: i32, day: i32, index: usize) -> &Entry {
        self.calendar().meeting_at(month, day, index)
    }

    /// See [`Calendar::remove_meeting`] for the panicking index contract.
    fn remove_meeting(&mut self, month: i32, day: i32, index: usize) {
        self.calendar_mut().remove_meeting(month, day, index)
    }

    fn clear_schedule(&mut self, month: i32, day: i32) {
        self.calendar_mut().clear_schedule(month, day)
    }
}

/// A meeting room, identified by its room id (e.g. "JO18.330").
#[derive(Debug, Clone)]
pub struct Room {
    id: String,
    calendar: Calendar,
}

impl Room {
    pub fn new(id: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            calendar: Calendar::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Bookable for Room {
    const ROLE: &'static str = "room";

    fn identity(&self) -> &str {
        &self.id
    }

    fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }
}

/// An employee, identified by name.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    calendar: Calendar,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            calendar: Calendar::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Bookable for Person {
    const ROLE: &'static str = "attendee";

    fn identity(&self) -> &str {
        &self.name
    }

    fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }
}
