//! Subcommand handlers: wire the CLI surface to the pipeline and the
//! lookup service, and own all terminal output.

mod args;

pub use args::{Cli, Command};

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::lookup::{DbStats, Lookup, OuiDatabase};
use crate::pipeline::{self, BuildOptions};

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Build { sources, output } => build(&sources, &output),
        Command::Lookup { mac, db } => lookup(&mac, &db),
        Command::Search { term, db, limit } => search(&term, &db, limit),
        Command::Extract { file, db } => extract(&file, &db),
        Command::Stats { db } => stats(&db),
    }
}

fn build(sources: &Path, output: &Path) -> anyhow::Result<()> {
    let opts = BuildOptions {
        sources_dir: sources.to_path_buf(),
        output_dir: output.to_path_buf(),
    };
    let stats = pipeline::run(&opts).context("database build failed")?;

    println!("Master OUI database built");
    println!("  IEEE entries:      {}", stats.ieee_total());
    println!("  Wireshark entries: {}", stats.wireshark);
    println!("  Nmap entries:      {}", stats.nmap);
    println!("  Unique OUIs:       {}", stats.unique);
    println!("  Merged entries:    {}", stats.merged);
    println!("  Output directory:  {}", output.display());
    Ok(())
}

fn lookup(mac: &str, db_path: &Path) -> anyhow::Result<()> {
    let db = load_db(db_path)?;
    let hit = db.lookup(mac)?;
    print_lookup(&hit);
    Ok(())
}

fn search(term: &str, db_path: &Path, limit: usize) -> anyhow::Result<()> {
    let db = load_db(db_path)?;
    let hits = db.search(term);
    if hits.is_empty() {
        println!("No manufacturers matching \"{term}\"");
        return Ok(());
    }
    println!("{} manufacturer(s) matching \"{term}\":", hits.len());
    for (oui, entry) in hits.iter().take(limit) {
        match &entry.short_name {
            Some(short) => println!("  {oui}  {} ({short})", entry.manufacturer),
            None => println!("  {oui}  {}", entry.manufacturer),
        }
    }
    if hits.len() > limit {
        println!("  ... and {} more", hits.len() - limit);
    }
    Ok(())
}

fn extract(file: &Path, db_path: &Path) -> anyhow::Result<()> {
    let db = load_db(db_path)?;
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let hits = db.extract(&text);
    if hits.is_empty() {
        println!("No MAC addresses found in {}", file.display());
        return Ok(());
    }
    println!("{} MAC address(es) found:", hits.len());
    for hit in &hits {
        println!("  {}  {}", hit.query, hit.manufacturer());
    }
    Ok(())
}

fn stats(db_path: &Path) -> anyhow::Result<()> {
    let db = load_db(db_path)?;
    let stats = db.stats();

    println!("Database: {}", db_path.display());
    println!("  Total entries:    {}", stats.total);
    println!("  With dates:       {}", stats.with_date);

    println!("  By registry:");
    for (registry, count) in DbStats::sorted_desc(&stats.by_registry) {
        println!("    {registry:<14}{count}");
    }

    println!("  Top device types:");
    for (device_type, count) in DbStats::sorted_desc(&stats.by_device_type).into_iter().take(10) {
        println!("    {device_type:<14}{count}");
    }

    println!("  Top countries:");
    for (country, count) in DbStats::sorted_desc(&stats.by_country).into_iter().take(10) {
        println!("    {country:<14}{count}");
    }
    Ok(())
}

fn load_db(path: &Path) -> anyhow::Result<OuiDatabase> {
    let db = OuiDatabase::load(path)?;
    Ok(db)
}

fn print_lookup(hit: &Lookup<'_>) {
    println!("MAC:          {}", hit.query);
    println!("OUI:          {}", hit.oui);
    match hit.entry {
        Some(entry) => {
            println!("Manufacturer: {}", entry.manufacturer);
            if let Some(short) = &entry.short_name {
                println!("Short Name:   {short}");
            }
            if let Some(registry) = &entry.registry {
                println!("Registry:     {registry}");
            }
            if let Some(device_type) = &entry.device_type {
                println!("Device Type:  {device_type}");
            }
            if let Some(country) = &entry.country {
                println!("Country:      {country}");
            }
            if let Some(date) = &entry.registered_date {
                println!("Registered:   {date}");
            }
            if !entry.sources.is_empty() {
                println!("Sources:      {}", entry.sources.join(", "));
            }
        }
        None => println!("Manufacturer: Unknown (not in database)"),
    }
}
