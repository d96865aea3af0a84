//! Interactive packing list shell.
//!
//! # Responsibility
//! - Drive `packlist_core::PackingApp` from line commands on stdin.
//! - Stay a thin view layer: all state rules live in core.

mod command;
mod render;

use command::{parse_command, Command, USAGE};
use log::warn;
use packlist_core::{core_version, init_logging_with, LoggingConfig, PackingApp};
use std::io::{self, BufRead, Write};

fn main() {
    setup_logging();
    println!("packlist {}: type `help` for commands", core_version());

    let mut app = PackingApp::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{}> ", render::form_view(&app));
        if let Err(err) = stdout.flush() {
            eprintln!("failed to write prompt: {err}");
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => println!("{}", execute(&mut app, command)),
            Err(command::CommandParseError::Empty) => {}
            Err(err) => println!("{err}; type `help` for commands"),
        }
    }
}

fn setup_logging() {
    let result = LoggingConfig::from_env().and_then(|config| match config {
        Some(config) => init_logging_with(config),
        None => Ok(()),
    });
    if let Err(err) = result {
        eprintln!("logging disabled: {err}");
    }
}

/// Applies one command and returns the text to show.
fn execute(app: &mut PackingApp, command: Command) -> String {
    match command {
        Command::Add {
            quantity,
            description,
        } => {
            if app.form().is_updating() {
                return "finish or `cancel` the current edit first".to_string();
            }
            if let Err(err) = app.form_mut().set_quantity(quantity) {
                return err.to_string();
            }
            app.form_mut().set_description(description);
            submit(app)
        }
        Command::Describe(text) => {
            app.form_mut().set_description(text);
            render::form_view(app)
        }
        Command::Quantity(quantity) => match app.form_mut().set_quantity(quantity) {
            Ok(()) => render::form_view(app),
            Err(err) => err.to_string(),
        },
        Command::Submit => submit(app),
        Command::Edit(id) => {
            if app.request_edit(id) {
                render::form_view(app)
            } else {
                format!("no item #{id}")
            }
        }
        Command::Cancel => {
            app.cancel_edit();
            render::form_view(app)
        }
        Command::Toggle(id) => {
            app.toggle(id);
            render::list_view(app)
        }
        Command::Delete(id) => {
            app.delete(id);
            render::list_view(app)
        }
        Command::Clear => {
            app.clear();
            render::list_view(app)
        }
        Command::Sort(criterion) => {
            app.set_sort(criterion);
            render::list_view(app)
        }
        Command::List => render::list_view(app),
        Command::Stats => app.stats().message(),
        Command::Help => USAGE.to_string(),
        Command::Quit => String::new(),
    }
}

fn submit(app: &mut PackingApp) -> String {
    match app.submit_entry() {
        Some(_) => render::list_view(app),
        None => {
            warn!("event=entry_submit module=cli status=rejected");
            "nothing to submit: description is empty".to_string()
        }
    }
}
