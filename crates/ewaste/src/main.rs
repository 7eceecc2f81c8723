//! `ewaste` - CLI for the device replacement inventory
//!
//! Every command loads the data file first; commands that change the
//! inventory save it back before exiting.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use ewaste::cli::{AddCommand, Cli, Command, ConfigCommand};
use ewaste::item::{self, DATE_FORMAT};
use ewaste::{demo, init_logging, Config, Inventory, Item};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match cli.command_or_demo() {
        Command::Demo => {
            let (config, data_file) = settings(&cli)?;
            handle_demo(&config, &data_file)
        }
        Command::Add(add_cmd) => {
            let (config, data_file) = settings(&cli)?;
            handle_add(&config, &data_file, add_cmd)
        }
        Command::List(list_cmd) => {
            let (config, data_file) = settings(&cli)?;
            handle_list(&config, &data_file, list_cmd.json)
        }
        Command::Due(due_cmd) => {
            let (_, data_file) = settings(&cli)?;
            handle_due(&data_file, due_cmd.json)
        }
        Command::Recycle(recycle_cmd) => {
            let (config, data_file) = settings(&cli)?;
            handle_recycle(&config, &data_file, &recycle_cmd.name)
        }
        Command::Config(config_cmd) => handle_config(&cli, config_cmd),
    }
}

/// Load configuration and resolve the data file, honouring `--file`.
fn settings(cli: &Cli) -> anyhow::Result<(Config, PathBuf)> {
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file().clone());
    Ok((config, data_file))
}

fn load(data_file: &Path) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::new();
    inventory
        .load_data(data_file)
        .with_context(|| format!("loading {}", data_file.display()))?;
    Ok(inventory)
}

fn save(config: &Config, inventory: &Inventory, data_file: &Path) -> anyhow::Result<()> {
    inventory
        .save_data_with_indent(data_file, config.storage.pretty_indent)
        .with_context(|| format!("saving {}", data_file.display()))
}

fn handle_demo(config: &Config, data_file: &Path) -> anyhow::Result<()> {
    let mut inventory = Inventory::new();
    let report = demo::run(
        &mut inventory,
        data_file,
        config.storage.pretty_indent,
        item::now(),
    )?;

    print!("{}", render_demo_report(&report));
    Ok(())
}

fn render_demo_report(report: &demo::DemoReport) -> String {
    let mut out = String::from("\n");
    if report.due.is_empty() {
        out.push_str("No items due for replacement.\n");
    } else {
        out.push_str("Items due for replacement:\n");
        for (name, replacement_date) in &report.due {
            out.push_str(&format!(
                "- {name}, replace by {}\n",
                replacement_date.format(DATE_FORMAT)
            ));
        }
    }
    out
}

fn handle_add(config: &Config, data_file: &Path, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut inventory = load(data_file)?;
    let added = inventory.add_item(&cmd.name, &cmd.purchase_date, cmd.expected_lifetime)?;
    println!(
        "Added '{}', replace by {}",
        added.name(),
        added.replacement_date().format(DATE_FORMAT)
    );
    save(config, &inventory, data_file)
}

fn handle_list(config: &Config, data_file: &Path, json: bool) -> anyhow::Result<()> {
    let inventory = load(data_file)?;
    let now = item::now();

    if json {
        println!("{}", serde_json::to_string_pretty(&inventory.to_records(now))?);
        return Ok(());
    }

    if inventory.is_empty() {
        println!("No items tracked.");
        return Ok(());
    }

    let upcoming = inventory.upcoming(config.monitor.warn_within_days, now);
    println!(
        "{:<24} {:<12} {:<12} {:>9}  STATUS",
        "NAME", "PURCHASED", "REPLACE BY", "DAYS LEFT"
    );
    for item in &inventory {
        let status = if item.is_due_at(now) {
            "due"
        } else if upcoming.contains(&item) {
            "soon"
        } else {
            "ok"
        };
        print_row(item, now, status);
    }
    Ok(())
}

fn print_row(item: &Item, now: chrono::NaiveDateTime, status: &str) {
    println!(
        "{:<24} {:<12} {:<12} {:>9}  {status}",
        item.name(),
        item.purchase_date().format(DATE_FORMAT).to_string(),
        item.replacement_date().format(DATE_FORMAT).to_string(),
        item.days_until_at(now)
    );
}

fn handle_due(data_file: &Path, json: bool) -> anyhow::Result<()> {
    let inventory = load(data_file)?;
    let now = item::now();
    let due = inventory.monitor_items_at(now);

    if json {
        let records: Vec<_> = due.iter().map(|item| item.to_record_at(now)).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if due.is_empty() {
        println!("No items due for replacement.");
    } else {
        println!("Items due for replacement:");
        for item in due {
            println!(
                "- {}, replace by {}",
                item.name(),
                item.replacement_date().format(DATE_FORMAT)
            );
        }
    }
    Ok(())
}

fn handle_recycle(config: &Config, data_file: &Path, name: &str) -> anyhow::Result<()> {
    let mut inventory = load(data_file)?;
    let removed = inventory.recycle_item(name);
    println!("Recycled {removed} item(s) named '{name}'");
    save(config, &inventory, data_file)
}

fn handle_config(cli: &Cli, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let (config, _) = settings(cli)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data file:          {}", config.data_file().display());
                println!("  Indent:             {}", config.storage.pretty_indent);
                println!();
                println!("[Monitor]");
                println!("  Warn within (days): {}", config.monitor.warn_within_days);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { path } => {
            return handle_validate(path.clone().or_else(|| cli.config.clone()));
        }
    }
    Ok(())
}

fn handle_validate(path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    Config::load_from(Some(path.clone()))
        .with_context(|| format!("configuration {} is invalid", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[storage]\npretty_indent = 99\n").unwrap();

        let err = handle_validate(Some(path)).unwrap_err();
        assert!(format!("{err:#}").contains("pretty_indent"));
    }

    #[test]
    fn test_config_commands_reach_broken_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[storage]\npretty_indent = 99\n").unwrap();
        let cli = Cli {
            config: Some(path),
            file: Some(PathBuf::from("d.json")),
            verbose: 0,
            quiet: true,
            command: None,
        };

        assert!(handle_config(&cli, &ConfigCommand::Path).is_ok());
        let err = handle_config(&cli, &ConfigCommand::Validate { path: None }).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }

    #[test]
    fn test_render_demo_report_starts_with_blank_line() {
        let mut report = demo::DemoReport {
            load: ewaste::LoadOutcome::NotFound,
            due: Vec::new(),
            recycled: 1,
        };
        assert_eq!(render_demo_report(&report), "\nNo items due for replacement.\n");

        report.due.push((
            "Laptop".to_string(),
            chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        ));
        assert_eq!(
            render_demo_report(&report),
            "\nItems due for replacement:\n- Laptop, replace by 2024-12-31\n"
        );
    }

    #[test]
    fn test_validate_accepts_good_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("good.toml");
        std::fs::write(&path, "[monitor]\nwarn_within_days = 7\n").unwrap();

        assert!(handle_validate(Some(path)).is_ok());
    }
}
