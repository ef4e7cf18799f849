//! The organization roster: the rooms and people available for booking.

use crate::bookable::{Person, Room};
use crate::error::RosterError;

/// In-memory roster of employees and rooms, seeded with the
/// organization's fixed set and extensible per session.
///
/// Lookups are exact, case-sensitive string matches on the identity.
#[derive(Debug, Clone)]
pub struct Organization {
    employees: Vec<Person>,
    rooms: Vec<Room>,
}

const EMPLOYEE_NAMES: [&str; 13] = [
    "Justin Gardener",
    "Ashley Matthews",
    "Mary Jane Cook",
    "Rose Austin",
    "Mike Smith",
    "Helen West",
    "Steven Lewis",
    "Edith Cowan",
    "Mark Colin",
    "Jacquie Martin",
    "Jaci Johnston",
    "Travis Colin",
    "Ashley Martin",
];

const ROOM_IDS: [&str; 12] = [
    "JO18.330",
    "JO7.221",
    "JO15.236",
    "JO1.230",
    "JO34.536",
    "JO19.230",
    "ML5.123",
    "ML18.330",
    "ML21.520",
    "ML13.213",
    "ML21.310",
    "ML13.218",
];

impl Organization {
    pub fn new() -> Self {
        Organization {
            employees: EMPLOYEE_NAMES.iter().copied().map(Person::new).collect(),
            rooms: ROOM_IDS.iter().copied().map(Room::new).collect(),
        }
    }

    pub fn employees(&self) -> &[Person] {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut [Person] {
        &mut self.employees
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    pub fn room(&self, id: &str) -> Result<&Room, RosterError> {
        self.rooms
            .iter()
            .find(|room| room.id() == id)
            .ok_or(RosterError::UnknownRoom)
    }

    pub fn room_mut(&mut self, id: &str) -> Result<&mut Room, RosterError> {
        self.rooms
            .iter_mut()
            .find(|room| room.id() == id)
            .ok_or(RosterError::UnknownRoom)
    }

    pub fn employee(&self, name: &str) -> Result<&Person, RosterError> {
        self.employees
            .iter()
            .find(|person| person.name() == name)
            .ok_or(RosterError::UnknownEmployee)
    }

    pub fn employee_mut(&mut self, name: &str) -> Result<&mut Person, RosterError> {
        self.employees
            .iter_mut()
            .find(|person| person.name() == name)
            .ok_or(RosterError::UnknownEmployee)
    }

    /// Add a room for this session. No uniqueness is enforced; lookups
    /// return the first match.
    pub fn add_room(&mut self, id: impl Into<String>) {
        self.rooms.push(Room::new(id));
    }

    /// Add an employee for this session.
    pub fn add_employee(&mut self, name: impl Into<String>) {
        self.employees.push(Person::new(name));
    }
}

impl Default for Organization {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_full_roster() {
        let org = Organization::new();

        assert_eq!(org.employees().len(), 13);
        assert_eq!(org.rooms().len(), 12);
    }

    #[test]
    fn test_lookup_by_exact_identity() {
        let org = Organization::new();

        assert_eq!(org.room("JO18.330").unwrap().id(), "JO18.330");
        assert_eq!(org.employee("Mike Smith").unwrap().name(), "Mike Smith");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let org = Organization::new();

        assert_eq!(org.room("jo18.330").unwrap_err(), RosterError::UnknownRoom);
        assert_eq!(
            org.employee("mike smith").unwrap_err(),
            RosterError::UnknownEmployee
        );
    }

    #[test]
    fn test_lookup_miss_messages() {
        let org = Organization::new();

        assert_eq!(
            org.room("nowhere").unwrap_err().to_string(),
            "Requested room does not exist"
        );
        assert_eq!(
            org.employee("nobody").unwrap_err().to_string(),
            "Requested employee does not exist"
        );
    }

    #[test]
    fn test_session_roster_extensions() {
        let mut org = Organization::new();

        org.add_room("XX1.100");
        org.add_employee("Ada Lovelace");

        assert_eq!(org.room("XX1.100").unwrap().id(), "XX1.100");
        assert_eq!(org.employee("Ada Lovelace").unwrap().name(), "Ada Lovelace");
    }
}
