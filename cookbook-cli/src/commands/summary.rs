//! `cookbook summary <name> --entries FILE [--json]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use cookbook_core::{seed, summarize, Summary};
use cookbook_server::SummaryResponse;

/// Summarize a recipe from a seed file.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Recipe name. Normalized before lookup.
    pub name: String,

    /// YAML file listing the entries to register.
    #[arg(long, short = 'e', value_name = "FILE")]
    pub entries: PathBuf,

    /// Emit the summary as JSON in the HTTP response shape.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct IngredientRow {
    #[tabled(rename = "ingredient")]
    name: String,
    #[tabled(rename = "quantity")]
    quantity: u64,
}

impl SummaryArgs {
    pub fn run(self) -> Result<()> {
        let registry = seed::registry_from_file(&self.entries)
            .with_context(|| format!("failed to load entries from '{}'", self.entries.display()))?;

        let name = cookbook_core::normalize(&self.name).unwrap_or_else(|| self.name.clone());
        let summary = summarize(&registry, &name)
            .with_context(|| format!("cannot summarize '{name}'"))?;

        if self.json {
            let body = SummaryResponse::from(summary);
            println!("{}", serde_json::to_string_pretty(&body)?);
            return Ok(());
        }

        print_table(summary);
        Ok(())
    }
}

fn print_table(summary: Summary) {
    println!(
        "{} {}  (cook time: {})",
        "✓".green(),
        summary.name.to_string().bold(),
        summary.cook_time
    );
    if summary.ingredients.is_empty() {
        println!("  no ingredients");
        return;
    }

    let rows: Vec<IngredientRow> = summary
        .ingredients
        .into_iter()
        .map(|(name, quantity)| IngredientRow {
            name: name.0,
            quantity,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
