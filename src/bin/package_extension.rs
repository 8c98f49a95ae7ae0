//! Package the extension into a versioned zip

use anyhow::Context;
use clap::Parser;
use colored::*;
use extpack::{packager, report, EntryStatus};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "package-extension")]
#[command(about = "Zip the extension files into a versioned archive", long_about = None)]
#[command(version)]
struct Cli {
    /// Extension directory (defaults to the directory this tool was built from)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Re-open the archive afterwards and check its entries
    #[arg(long)]
    verify: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = cli
        .dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    println!("{}", report::PACKAGE_BANNER.bold().blue());
    println!();

    let result = packager::package_extension_with(&root, |entry| {
        let line = report::entry_line(entry);
        match entry {
            EntryStatus::Included(_) => println!("{}", line),
            EntryStatus::Missing(_) => println!("{}", line.yellow()),
        }
    })
    .with_context(|| format!("Packaging {} failed", root.display()))?;

    println!();
    println!("{}", report::package_summary(&result).green().bold());
    println!("{}", report::package_location(&result));

    if cli.verify {
        let entries = packager::verify_package(&result).context("Archive verification failed")?;
        println!("Verified {} entries", entries.len());
    }

    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", "❌ Packaging failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
