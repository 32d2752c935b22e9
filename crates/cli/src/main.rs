//! Stowage packing CLI

mod manifest;
mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stowage_packer::{Container, ContainerOptimizer, Item, Outcome, Priority};

use crate::manifest::Manifest;
use crate::report::{JsonReport, Report};

#[derive(Parser)]
#[command(name = "stowage")]
#[command(about = "Pack boxes into a shipping container")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a built-in office move
    Demo {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pack the job described by a JSON manifest
    Pack {
        /// Path to the manifest file
        file: PathBuf,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { json } => {
            let (container, items) = demo_job()?;
            let outcome = ContainerOptimizer::new().optimize(&container, &items)?;
            print_outcome(&outcome, json)?;
        }

        Commands::Pack { file, json } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read manifest {}", file.display()))?;
            let (container, items) = Manifest::from_json(&text)?.into_inputs()?;
            let outcome = ContainerOptimizer::new().optimize(&container, &items)?;
            print_outcome(&outcome, json)?;
        }
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonReport::new(outcome))?);
    } else {
        print!("{}", Report::new(outcome));
    }
    Ok(())
}

fn demo_job() -> stowage_packer::Result<(Container, Vec<Item>)> {
    let container = Container::new(120.0, 100.0, 100.0, 500.0)?;
    let items = vec![
        Item::new("Office Desk", 150.0, 80.0, 75.0, 50.0, Priority::Heavy)?,
        Item::new("Monitor Box", 60.0, 50.0, 40.0, 8.0, Priority::Fragile)?,
        Item::new("Books Box", 40.0, 30.0, 30.0, 15.0, Priority::Medium)?,
        Item::new("Keyboard", 45.0, 15.0, 5.0, 1.5, Priority::Light)?,
        Item::new("Chair", 60.0, 60.0, 90.0, 12.0, Priority::Medium)?,
        Item::new("Lamp", 25.0, 25.0, 50.0, 3.0, Priority::Fragile)?,
        Item::new("Water Bottles", 30.0, 20.0, 25.0, 6.0, Priority::Heavy)?,
        Item::new("Cushions", 50.0, 50.0, 30.0, 2.0, Priority::Light)?,
    ];
    Ok((container, items))
}
