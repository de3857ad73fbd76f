//! Minnow Notes — interactive single-user note-taking menu.
//!
//! All console I/O happens here; the per-choice handlers live in [`app`].

mod app;

use std::io::{self, BufRead, Write};

use app::{parse_id, App, MenuChoice, INVALID_ID, INVALID_INPUT, MENU};

fn main() -> io::Result<()> {
    env_logger::init();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(&mut input)
}

fn run<R: BufRead>(input: &mut R) -> io::Result<()> {
    let mut app = App::new();
    loop {
        println!("{MENU}");
        print!("Enter a menu option: ");
        io::stdout().flush()?;
        let mut choice = String::new();
        // End of input is treated the same as choosing exit.
        if input.read_line(&mut choice)? == 0 {
            return Ok(());
        }
        let Some(choice) = MenuChoice::from_input(&choice) else {
            println!("{INVALID_INPUT}");
            continue;
        };
        match choice {
            MenuChoice::Create => {
                let title = prompt(input, "Enter the note title: ")?;
                let body = prompt(input, "Enter the note body: ")?;
                println!("{}", app.create(&title, &body));
            }
            MenuChoice::List => println!("{}", app.list()),
            MenuChoice::Edit => {
                let Some(id) = parse_id(&prompt(input, "Enter the note id: ")?) else {
                    println!("{INVALID_ID}");
                    continue;
                };
                if !app.has_note(id) {
                    println!("No note with id {id}");
                    continue;
                }
                let title = prompt(input, "Enter the new title: ")?;
                let body = prompt(input, "Enter the new body: ")?;
                println!("{}", app.edit(id, &title, &body));
            }
            MenuChoice::Delete => {
                let Some(id) = parse_id(&prompt(input, "Enter the note id: ")?) else {
                    println!("{INVALID_ID}");
                    continue;
                };
                println!("{}", app.delete(id));
            }
            MenuChoice::FindByDate => {
                let date = prompt(input, "Enter a date as DD.MM.YYYY: ")?;
                println!("{}", app.find_by_date(&date));
            }
            MenuChoice::Save => {
                let stem = prompt(input, "Enter a file name (without extension): ")?;
                println!("{}", app.save(&stem));
            }
            MenuChoice::Load => {
                let stem = prompt(input, "Enter a file name (without extension): ")?;
                println!("{}", app.load(&stem));
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// Prints a prompt and reads one line. Returns the line without the trailing
/// newline; end of input is treated as an empty line.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
