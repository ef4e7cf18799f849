//! The meeting value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One booking: a nominal month/day, an inclusive hour span, the people
/// attending, an optional room, and a free-text description.
///
/// Meetings have no identity of their own; a calendar addresses them by
/// their position within a day's slot. Attendees and the room are recorded
/// by name/id, the only pieces of those entities a meeting ever reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Month of the meeting (1-12 nominal).
    pub month: i32,
    /// Day of the meeting (1-31 nominal).
    pub day: i32,
    /// Starting hour (0-23).
    pub start: i32,
    /// Ending hour (0-23), inclusive.
    pub end: i32,
    /// Names of the people attending, in the order they were added.
    pub attendees: Vec<String>,
    /// Id of the room the meeting takes place in, if one was booked.
    pub room: Option<String>,
    /// Free-text description.
    pub description: String,
}

impl Meeting {
    /// Create a meeting with no attendees, no room and an empty description.
    pub fn new(month: i32, day: i32, start: i32, end: i32) -> Self {
        Meeting {
            month,
            day,
            start,
            end,
            attendees: Vec::new(),
            room: None,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    pub fn with_attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendees = attendees;
        self
    }

    pub fn add_attendee(&mut self, name: impl Into<String>) {
        self.attendees.push(name.into());
    }

    /// Remove the first attendee with the given name, if present.
    pub fn remove_attendee(&mut self, name: &str) {
        if let Some(pos) = self.attendees.iter().position(|a| a == name) {
            self.attendees.remove(pos);
        }
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Month: {}, Day: {}, Time slot: {} - {}, Room No: {}: {}\nAttending: ",
            self.month,
            self.day,
            self.start,
            self.end,
            self.room.as_deref().unwrap_or("N/A"),
            self.description,
        )?;

        if self.attendees.is_empty() {
            write!(f, "No attendees")
        } else {
            write!(f, "{}", self.attendees.join(", "))
        }
    }
}
