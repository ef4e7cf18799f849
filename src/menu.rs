//! The interactive main menu.
//!
//! All scheduling state lives in the [`Organization`] for the duration of
//! the session; exiting the menu discards it.

use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};
use planner_core::{Bookable, Meeting, Organization};

use crate::render;

const MENU_ITEMS: [&str; 7] = [
    "Schedule a meeting",
    "Book vacation dates",
    "Check room availability",
    "Check person availability",
    "Check agenda for a room",
    "Check agenda for a person",
    "Exit",
];

pub fn run(org: &mut Organization) -> Result<()> {
    println!("Welcome to the Meeting Scheduling Interface.");

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Please choose an option")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => schedule_meeting(org)?,
            1 => book_vacation(org)?,
            2 => room_availability(org)?,
            3 => person_availability(org)?,
            4 => room_agenda(org)?,
            5 => person_agenda(org)?,
            _ => return Ok(()),
        }
    }
}

fn prompt_number(prompt: &str) -> Result<i32> {
    Ok(Input::<i32>::new().with_prompt(prompt).interact_text()?)
}

fn prompt_time_frame() -> Result<(i32, i32, i32, i32)> {
    let month = prompt_number("Enter the month (1-12)")?;
    let day = prompt_number("Enter the day (1-31)")?;
    let start = prompt_number("Enter the starting hour (0-23)")?;
    let end = prompt_number("Enter the ending hour (0-23)")?;
    Ok((month, day, start, end))
}

fn schedule_meeting(org: &mut Organization) -> Result<()> {
    let month = prompt_number("Enter the month of the meeting (1-12)")?;
    let day = prompt_number("Enter the day of the meeting (1-31)")?;
    let start = prompt_number("Enter the starting hour of the meeting (0-23)")?;
    let end = prompt_number("Enter the ending hour of the meeting (0-23)")?;

    let mut open_rooms = Vec::new();
    for room in org.rooms() {
        match room.is_busy(month, day, start, end) {
            Ok(false) => open_rooms.push(room.id().to_string()),
            Ok(true) => {}
            Err(err) => {
                render::conflict(&err);
                return Ok(());
            }
        }
    }

    if open_rooms.is_empty() {
        println!("No rooms are open at that time.");
        return Ok(());
    }

    println!("The rooms open at that time are:");
    let mut room_items = open_rooms.clone();
    room_items.push("(cancel)".to_string());
    let picked = Select::new()
        .with_prompt("Select the desired room")
        .items(&room_items)
        .default(0)
        .interact()?;
    if picked == open_rooms.len() {
        return Ok(());
    }
    let room_id = open_rooms.swap_remove(picked);

    let mut free_people = Vec::new();
    for person in org.employees() {
        match person.is_busy(month, day, start, end) {
            Ok(false) => free_people.push(person.name().to_string()),
            Ok(true) => {}
            Err(err) => {
                render::conflict(&err);
                return Ok(());
            }
        }
    }

    let attendees: Vec<String> = if free_people.is_empty() {
        println!("No one is available to attend at that time.");
        Vec::new()
    } else {
        println!("The people available to attend at that time are:");
        MultiSelect::new()
            .with_prompt("Select the attendees (space to toggle, enter to confirm)")
            .items(&free_people)
            .interact()?
            .into_iter()
            .map(|i| free_people[i].clone())
            .collect()
    };

    let description: String = Input::new()
        .with_prompt("Enter a description for the meeting")
        .allow_empty(true)
        .interact_text()?;

    let meeting = Meeting::new(month, day, start, end)
        .with_room(room_id.clone())
        .with_attendees(attendees.clone())
        .with_description(description);

    // The room first, then each attendee. A conflict partway through
    // leaves the earlier additions in place, as the legacy planner did.
    match org.room_mut(&room_id) {
        Ok(room) => {
            if let Err(err) = room.add_meeting(meeting.clone()) {
                render::conflict(&err);
                return Ok(());
            }
        }
        Err(err) => {
            render::conflict(&err);
            return Ok(());
        }
    }

    for name in &attendees {
        match org.employee_mut(name) {
            Ok(person) => {
                if let Err(err) = person.add_meeting(meeting.clone()) {
                    render::conflict(&err);
                    return Ok(());
                }
            }
            Err(err) => {
                render::conflict(&err);
                return Ok(());
            }
        }
    }

    render::success("Meeting is now booked!");
    Ok(())
}

fn book_vacation(org: &mut Organization) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Enter the name of the employee")
        .interact_text()?;

    let person = match org.employee_mut(&name) {
        Ok(person) => person,
        Err(err) => {
            render::conflict(&err);
            return Ok(());
        }
    };

    let start_month = prompt_number("Enter the start month (1-12)")?;
    let start_day = prompt_number("Enter the start day (1-31)")?;
    let end_month = prompt_number("Enter the end month (1-12)")?;
    let end_day = prompt_number("Enter the end day (1-31)")?;

    for month in start_month..=end_month {
        let first = if month == start_month { start_day } else { 1 };
        // Non-final months only run through day 30, matching the legacy
        // planner's loop bounds.
        let last = if month == end_month { end_day + 1 } else { 31 };

        for day in first..last {
            let vacation = Meeting::new(month, day, 0, 23)
                .with_attendees(vec![name.clone()])
                .with_description("Vacation");

            if let Err(err) = person.add_meeting(vacation) {
                render::conflict(&err);
                return Ok(());
            }
        }
    }

    render::success("Vacation is now booked!");
    Ok(())
}

fn room_availability(org: &Organization) -> Result<()> {
    let (month, day, start, end) = prompt_time_frame()?;

    println!("The rooms available at the specified time are:");
    for room in org.rooms() {
        match room.is_busy(month, day, start, end) {
            Ok(false) => println!("{}", room.id()),
            Ok(true) => {}
            // Keep checking the rest of the roster, as the legacy
            // planner did.
            Err(err) => render::conflict(&err),
        }
    }
    Ok(())
}

fn person_availability(org: &Organization) -> Result<()> {
    let (month, day, start, end) = prompt_time_frame()?;

    println!("The people available at that time are:");
    for person in org.employees() {
        match person.is_busy(month, day, start, end) {
            Ok(false) => println!("{}", person.name()),
            Ok(true) => {}
            Err(err) => render::conflict(&err),
        }
    }
    Ok(())
}

fn room_agenda(org: &Organization) -> Result<()> {
    let id: String = Input::new().with_prompt("Enter the Room ID").interact_text()?;

    match org.room(&id) {
        Ok(room) => print_agenda(room),
        Err(err) => {
            render::conflict(&err);
            Ok(())
        }
    }
}

fn person_agenda(org: &Organization) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Enter the person's name")
        .interact_text()?;

    match org.employee(&name) {
        Ok(person) => print_agenda(person),
        Err(err) => {
            render::conflict(&err);
            Ok(())
        }
    }
}

fn print_agenda(entity: &impl Bookable) -> Result<()> {
    let month = prompt_number("Enter the month (1-12)")?;
    let day: String = Input::new()
        .with_prompt("Enter the day (1-31), or 'all' for the entire month")
        .interact_text()?;

    if day.eq_ignore_ascii_case("all") {
        println!("{}", entity.month_agenda(month));
    } else {
        match day.parse::<i32>() {
            Ok(day) => println!("{}", entity.day_agenda(month, day)),
            Err(_) => println!("Please enter a day from 1 - 31, or 'all'."),
        }
    }
    Ok(())
}
