mod menu;
mod render;

use anyhow::Result;
use clap::Parser;
use planner_core::Organization;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Schedule meetings and vacations across the organization's rooms and people")]
struct Cli {
    /// Extra room ids to add to the built-in roster for this session
    #[arg(long = "room", value_name = "ID")]
    rooms: Vec<String>,

    /// Extra employee names to add to the built-in roster for this session
    #[arg(long = "person", value_name = "NAME")]
    people: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut org = Organization::new();
    for id in cli.rooms {
        org.add_room(id);
    }
    for name in cli.people {
        org.add_employee(name);
    }

    menu::run(&mut org)
}
