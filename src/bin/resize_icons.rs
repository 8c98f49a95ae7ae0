//! Generate manifest icon sizes from icons/logo.png

use anyhow::Context;
use clap::Parser;
use colored::*;
use extpack::{icons, report};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resize-icons")]
#[command(about = "Resize icons/logo.png into the 16, 48 and 128 px extension icons", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing icons/logo.png
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let outputs = icons::resize_icons(&cli.dir)
        .with_context(|| format!("Resizing icons in {} failed", cli.dir.display()))?;

    for spec in &outputs {
        println!("{}", report::icon_line(spec));
    }

    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", "❌ Icon generation failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
