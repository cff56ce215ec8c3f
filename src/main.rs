#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use std::path::Path;

use clap::Parser;
use registrar_calendar::calendar::select_into;
use registrar_calendar::config::{self, Config};
use registrar_calendar::registrar::ExtractOptions;
use registrar_calendar::{CalendarExporter, EventTable, SiteExtractor};

use cli::{Cli, Command};
use logger::LogExt;

mod cli;
mod logger;

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => config::init(path).log_error("Could not load the configuration file")?,
        None => Config::default(),
    };

    let mut extractor = SiteExtractor::from_config(&config);
    if cli.strict {
        extractor = extractor.with_options(ExtractOptions { strict: true });
    }

    match cli.command {
        Command::Tables { site } => {
            let table = read_site(&extractor, &config, &site)?;
            print_tables(&table);
        }
        Command::Export { site, preset, tables, output } => {
            let table = match (site, preset) {
                (_, Some(preset)) => read_preset(&preset)?,
                (Some(site), None) => read_site(&extractor, &config, &site)?,
                (None, None) => anyhow::bail!("Either a site or a preset is required"),
            };
            export(&config, &table, &tables, &output)?;
        }
        Command::Json { output } => bake(&extractor, &config, &output)?,
    }

    Ok(())
}

/// `site` is either a configured site name or a calendar URL.
fn read_site(extractor: &SiteExtractor, config: &Config, site: &str) -> anyhow::Result<EventTable> {
    let url = config
        .site(site)
        .map_or_else(|| site.to_owned(), |site| site.url.to_string());

    extractor
        .extract(&url)
        .log_error(&format!("Could not read the calendar at {url}"))
}

fn read_preset(path: &Path) -> anyhow::Result<EventTable> {
    let json = std::fs::read_to_string(path)
        .log_error(&format!("Could not read {}", path.display()))?;

    EventTable::from_json(&json).log_error("Could not decode the preset")
}

fn print_tables(table: &EventTable) {
    for (name, events) in table.iter() {
        println!("{name}");
        for event in events {
            println!("  {event}");
        }
    }
}

fn export(config: &Config, table: &EventTable, tables: &[String], output: &Path) -> anyhow::Result<()> {
    for name in tables.iter().filter(|name| !table.contains_table(name)) {
        log::warn!("No table named {name:?}, known tables: {:?}", table.list_tables());
    }

    let mut exporter = CalendarExporter::new();
    if let Some(name) = &config.calendar_name {
        exporter = exporter.with_name(name);
    }

    let count = select_into(table, &mut exporter, |name, _| {
        tables.is_empty() || tables.iter().any(|table| table == name)
    })
    .log_error("Could not export the events")?;

    std::fs::write(output, exporter.export())
        .log_error(&format!("Could not write {}", output.display()))?;

    log::info!("Wrote {count} events to {}", output.display());

    Ok(())
}

fn bake(extractor: &SiteExtractor, config: &Config, output: &Path) -> anyhow::Result<()> {
    if config.sites.is_empty() {
        log::warn!("No sites configured, nothing to write");
        return Ok(());
    }

    std::fs::create_dir_all(output)
        .log_error(&format!("Could not create {}", output.display()))?;

    let mut failed = Vec::new();
    for site in &config.sites {
        let written = extractor
            .extract(site.url.as_str())
            .log_warn(&format!("Could not read {}", site.name))
            .and_then(|table| table.to_json().log_warn("Could not encode the preset"))
            .and_then(|json| {
                let path = output.join(format!("{}.json", site.name));
                std::fs::write(&path, json)
                    .log_warn(&format!("Could not write {}", path.display()))
                    .map(|()| path)
            });

        match written {
            Ok(path) => log::info!("Wrote {} to {}", site.name, path.display()),
            Err(_) => failed.push(site.name.as_str()),
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("Could not write presets for {}", failed.join(", "));
    }

    Ok(())
}
