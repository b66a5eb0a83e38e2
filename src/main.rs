use anyhow::{Context, Result};
use std::path::PathBuf;
use todobox::config::Config;
use todobox::harness;
use todobox::logger::Logger;
use todobox::ui;

const USAGE: &str = "\
Usage: todobox [OPTIONS]

Options:
  --replay <SCRIPT>            Apply a script of intents and print the resulting state as JSON
  --generate-config [PATH]     Write the default configuration file
  -h, --help                   Print this help";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)
        }
        Some("--replay") => {
            let Some(script) = args.get(1) else {
                anyhow::bail!("--replay needs a script path\n\n{USAGE}");
            };
            let snapshot = harness::replay_file(script)?;
            let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
            println!("{json}");
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown argument: {other}\n\n{USAGE}");
            std::process::exit(2);
        }
        None => {
            let config = Config::load()?;
            let logger = Logger::from_config(&config.logging)?;
            ui::run_app(config, logger).await
        }
    }
}
