use anyhow::Result;
use chrono::Utc;
use env_logger::Env;
use log::{error, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use ringback::{evaluate_reply, Config};

fn main() -> Result<()> {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let config = Config::load()?;
    let timezone = config.timezone()?;
    let business = config.sms.business_name.clone().unwrap_or_else(|| "Ringback".to_string());

    info!("Starting {} reply simulator in {}", business, timezone);

    let mut rl = DefaultEditor::new()?;
    println!("{} reply simulator. Each line is evaluated as an inbound SMS body.", business);
    println!("Type 'help' for commands.");

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if let Err(err) = process_line(&line, timezone) {
                    error!("Failed to evaluate reply: {:?}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn process_line(line: &str, timezone: chrono_tz::Tz) -> Result<()> {
    match line.trim() {
        "" => Ok(()),
        "help" => {
            println!("Any line is evaluated as an inbound SMS reply, for example:");
            println!("  TUE 2PM          - book next Tuesday at 2:00 PM");
            println!("  TOMORROW         - book tomorrow at 9:00 AM");
            println!("  SNOOZE 3H        - push the reminder out three hours");
            println!("  STOP / START     - carrier opt-out / opt-in keywords");
            println!("  1-5              - pick an offered slot");
            println!("Built-ins: help, exit");
            Ok(())
        }
        "exit" => {
            std::process::exit(0);
        }
        body => {
            let now = Utc::now().with_timezone(&timezone);
            let decision = evaluate_reply("Test Customer", body, &now);
            println!("{}", serde_json::to_string_pretty(&decision)?);
            Ok(())
        }
    }
}
