//! Implementation of the `stackgen list` command.

use serde::Serialize;

use stackgen_core::domain::PresetKind;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

/// One row of the template listing.
#[derive(Debug, Serialize)]
struct TemplateRow {
    selector: &'static str,
    name: &'static str,
    description: &'static str,
}

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let rows = rows();

    match args.format {
        ListFormat::Table => {
            output.header("Available application templates:")?;
            for row in &rows {
                output.print(&format!("  {:<14} {}", row.selector, row.description))?;
            }
            output.print("")?;
            output.print("Any other selector value is treated as a path to a Go source file.")?;
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.selector);
            }
        }

        ListFormat::Csv => {
            println!("selector,name,description");
            for row in &rows {
                // Descriptions contain commas; quote that column.
                println!("{},{},\"{}\"", row.selector, row.name, row.description);
            }
        }
    }

    Ok(())
}

fn rows() -> Vec<TemplateRow> {
    PresetKind::ALL
        .iter()
        .map(|kind| TemplateRow {
            selector: kind.selector(),
            name: kind.as_str(),
            description: kind.describe(),
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────
