//! Exercises the list end to end: seed four names, add at both ends,
//! remove twice in the middle, printing the list after every step.

use arena_list::{Error, List};

fn joined(names: &List<&str>) -> String {
    names.iter().map(|name| format!("{} --> ", name)).collect()
}

fn main() -> Result<(), Error> {
    let mut names: List<&str> = ["Tom", "Kate", "Harry", "Sam"].into();
    println!("{}", joined(&names));

    names.push_front("Bill");
    println!("{}", joined(&names));

    names.push_back("Sue");
    println!("{}", joined(&names));

    names.remove(2)?; // Kate
    println!("{}", joined(&names));

    names.remove(2)?; // Harry, now at index 2
    println!("{}", joined(&names));

    Ok(())
}
