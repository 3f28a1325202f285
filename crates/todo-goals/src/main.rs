use anyhow::Result;
use std::io::{self, BufRead, Write};

mod commands;
mod logger;
mod views;

use commands::Command;
use todo_goals::{create_store, id, AppStore};
use todo_goals_config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::load();
    let log_file = logger::init(&config.log_level)?;

    log::info!("Starting todo-goals");
    log::debug!("Config: {:?}", config);

    let store = create_store();

    // The renderer is the only subscriber: every dispatch repaints both lists.
    let _unsubscribe = store.subscribe({
        let store = store.downgrade();
        let config = config.clone();
        move || {
            let Some(store) = store.upgrade() else {
                return;
            };
            let mut stdout = io::stdout().lock();
            if let Err(e) = views::render(&mut stdout, &store.get_state(), &config) {
                log::error!("Failed to render: {}", e);
            }
        }
    });

    let result = run(&store, &config);

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting todo-goals, log written to {}", log_file.display());
    result
}

fn run(store: &AppStore, config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    writeln!(stdout, "{}", commands::HELP)?;
    views::render(&mut stdout, &store.get_state(), config)?;

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line.trim(), e);
                writeln!(stdout, "error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{}", commands::HELP)?,
            Command::Show => views::render(&mut stdout, &store.get_state(), config)?,
            Command::DumpState => {
                let json = serde_json::to_string_pretty(&*store.get_state())?;
                writeln!(stdout, "{}", json)?;
            }
            command => match commands::to_action(&command, &store.get_state(), id::generate_id) {
                Ok(Some(action)) => store.dispatch(action),
                Ok(None) => {}
                Err(e) => {
                    log::debug!("Cannot apply {:?}: {}", command, e);
                    writeln!(stdout, "error: {}", e)?;
                }
            },
        }
    }

    Ok(())
}
