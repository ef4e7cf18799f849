//! The calendar: a month/day grid of bookings with validation and
//! conflict detection.
//!
//! This is a faithful port of the legacy planner, boundary behavior
//! included: day 31 never validates (even for 31-day months), month 12
//! never validates, hour 23 never validates as a start hour, and
//! November 30 is pre-blocked. The accompanying tests pin each of these
//! down; changing them is a breaking change for the frontend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConflictError, ScheduleResult};
use crate::meeting::Meeting;

/// One entry in a day's slot: either a real booking or the sentinel that
/// marks a calendar-invalid date (Feb 30 and friends).
///
/// The sentinel keeps the month/day it was registered under so that agenda
/// output matches the legacy planner exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Booked(Meeting),
    Blocked { month: i32, day: i32 },
}

impl Entry {
    /// Hour this entry starts occupying the day. Blocked days span 0-23.
    pub fn start_hour(&self) -> i32 {
        match self {
            Entry::Booked(meeting) => meeting.start,
            Entry::Blocked { .. } => 0,
        }
    }

    /// Hour this entry stops occupying the day, inclusive.
    pub fn end_hour(&self) -> i32 {
        match self {
            Entry::Booked(meeting) => meeting.end,
            Entry::Blocked { .. } => 23,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Entry::Blocked { .. })
    }

    pub fn as_booked(&self) -> Option<&Meeting> {
        match self {
            Entry::Booked(meeting) => Some(meeting),
            Entry::Blocked { .. } => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Booked(meeting) => meeting.fmt(f),
            // Renders like the placeholder meeting the legacy planner
            // stored in blocked slots.
            Entry::Blocked { month, day } => write!(
                f,
                "Month: {}, Day: {}, Time slot: 0 - 23, Room No: N/A: Day does not exist\n\
                 Attending: No attendees",
                month, day
            ),
        }
    }
}

/// Slots blocked at construction: (month, day) of the slot, plus the day
/// recorded on the sentinel. November 30 is blocked even though November
/// has 30 days, and its sentinel records day 31; both quirks are
/// preserved from the legacy planner.
const BLOCKED_SLOTS: [(usize, usize, i32); 8] = [
    (2, 29, 29),
    (2, 30, 30),
    (2, 31, 31),
    (4, 31, 31),
    (6, 31, 31),
    (9, 31, 31),
    (11, 30, 31),
    (11, 31, 31),
];

/// Per-entity schedule, indexed by month then day then position.
///
/// The grid is built with months 0-12 and days 0-31 so that 1-based
/// month/day values index directly, without offset arithmetic. Slots for
/// dates that do not exist on a real calendar hold an [`Entry::Blocked`]
/// sentinel from construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    occupied: Vec<Vec<Vec<Entry>>>,
}

impl Calendar {
    pub fn new() -> Self {
        let mut occupied = vec![vec![Vec::new(); 32]; 13];

        for (month, day, recorded_day) in BLOCKED_SLOTS {
            occupied[month][day].push(Entry::Blocked {
                month: month as i32,
                day: recorded_day,
            });
        }

        Calendar { occupied }
    }

    /// Bounds-check a prospective meeting time.
    ///
    /// Checks run in a fixed order (day, month, start, end, start>end) and
    /// the first failure wins. The bounds are the legacy planner's: day
    /// must be 1-30 and month 1-11, so day 31 and December are always
    /// rejected here, and hour 23 is rejected as a start but accepted as
    /// an end.
    pub fn validate(month: i32, day: i32, start: i32, end: i32) -> ScheduleResult<()> {
        if day < 1 || day > 30 {
            return Err(ConflictError::DayDoesNotExist);
        }
        if month < 1 || month >= 12 {
            return Err(ConflictError::MonthDoesNotExist);
        }
        if start < 0 || start >= 23 {
            return Err(ConflictError::IllegalHour);
        }
        if end < 0 || end > 23 {
            return Err(ConflictError::IllegalHour);
        }
        if start > end {
            return Err(ConflictError::StartAfterEnd);
        }
        Ok(())
    }

    /// Whether anything occupies the given time frame.
    ///
    /// An entry counts as occupying the frame when the queried start or
    /// the queried end falls within the entry's inclusive hour span.
    /// Blocked sentinels span the whole day, so a pre-blocked date (e.g.
    /// Feb 29) is always busy.
    pub fn is_busy(&self, month: i32, day: i32, start: i32, end: i32) -> ScheduleResult<bool> {
        Self::validate(month, day, start, end)?;

        let mut busy = false;
        for entry in &self.occupied[month as usize][day as usize] {
            if (start >= entry.start_hour() && start <= entry.end_hour())
                || (end >= entry.start_hour() && end <= entry.end_hour())
            {
                busy = true;
            }
        }
        Ok(busy)
    }

    /// Add a meeting, rejecting invalid dates, pre-blocked days, and
    /// overlaps with existing bookings.
    ///
    /// The overlap scan walks the whole slot without breaking, so when
    /// several bookings overlap the candidate, the reported conflict is
    /// the last one encountered. A blocked sentinel anywhere in the slot
    /// fails the add immediately, before any overlap is reported.
    pub fn add_meeting(&mut self, meeting: Meeting) -> ScheduleResult<()> {
        Self::validate(meeting.month, meeting.day, meeting.start, meeting.end)?;

        let slot = &self.occupied[meeting.month as usize][meeting.day as usize];
        let mut conflict: Option<(String, i32, i32)> = None;

        for entry in slot {
            match entry {
                Entry::Blocked { .. } => return Err(ConflictError::DayDoesNotExist),
                Entry::Booked(existing) => {
                    // Does the candidate's start or end fall within this
                    // booking's hour span?
                    if (meeting.start >= existing.start && meeting.start <= existing.end)
                        || (meeting.end >= existing.start && meeting.end <= existing.end)
                    {
                        conflict =
                            Some((existing.description.clone(), existing.start, existing.end));
                    }
                }
            }
        }

        if let Some((description, start, end)) = conflict {
            return Err(ConflictError::Overlap {
                description,
                start,
                end,
            });
        }

        self.occupied[meeting.month as usize][meeting.day as usize].push(Entry::Booked(meeting));
        Ok(())
    }

    /// Drop every entry for the given day, blocked sentinels included.
    ///
    /// # Panics
    ///
    /// Panics if month or day fall outside the 0-12 / 0-31 grid.
    pub fn clear_schedule(&mut self, month: i32, day: i32) {
        self.occupied[month as usize][day as usize] = Vec::new();
    }

    /// Agenda text for a whole month: every entry across every day, in
    /// day order then insertion order. Months with no entries at all (or
    /// months outside the grid) get a fixed empty-agenda message.
    pub fn month_agenda(&self, month: i32) -> String {
        let days = match usize::try_from(month).ok().and_then(|m| self.occupied.get(m)) {
            Some(days) if days.iter().any(|slot| !slot.is_empty()) => days,
            _ => return String::from("No Meetings booked for this month.\n\n"),
        };

        let mut agenda = format!("Agenda for {}:\n", month);
        for slot in days {
            for entry in slot {
                agenda.push_str(&entry.to_string());
                agenda.push('\n');
            }
        }
        agenda
    }

    /// Agenda text for a single day. Empty or out-of-grid slots get a
    /// fixed empty-agenda message.
    pub fn day_agenda(&self, month: i32, day: i32) -> String {
        let slot = usize::try_from(month)
            .ok()
            .and_then(|m| self.occupied.get(m))
            .and_then(|days| usize::try_from(day).ok().and_then(|d| days.get(d)));

        match slot {
            Some(entries) if !entries.is_empty() => {
                let mut agenda = format!("Agenda for {}/{} are as follows:\n", month, day);
                for entry in entries {
                    agenda.push_str(&entry.to_string());
                    agenda.push('\n');
                }
                agenda
            }
            _ => String::from("No Meetings booked on this date.\n\n"),
        }
    }

    /// The entry at the given position within a day's slot.
    ///
    /// # Panics
    ///
    /// Panics if the date is outside the grid or the index is out of
    /// range for that day. Positional access is a programmer-error
    /// surface, not input validation.
    pub fn meeting_at(&self, month: i32, day: i32, index: usize) -> &Entry {
        &self.occupied[month as usize][day as usize][index]
    }

    /// Remove the entry at the given position within a day's slot.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Calendar::meeting_at`].
    pub fn remove_meeting(&mut self, month: i32, day: i32, index: usize) {
        self.occupied[month as usize][day as usize].remove(index);
    }

    /// All entries for a day, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the date is outside the grid.
    pub fn entries(&self, month: i32, day: i32) -> &[Entry] {
        &self.occupied[month as usize][day as usize]
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
