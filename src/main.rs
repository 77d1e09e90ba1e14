use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

use bar_packer::commands::{Command, Outcome, Session};
use bar_packer::engine::compute_packing_list;
use bar_packer::export::{export_json, export_tsv};
use bar_packer::model::{PackingList, RecipeCatalog};
use bar_packer::parser::{load_event_json, parse_event_file, parse_recipe_file};

#[derive(Parser, Debug)]
#[command(name = "bar-packer")]
#[command(about = "Bar Packer - build the packing list for a cocktail event")]
#[command(version)]
struct Args {
    /// Path to the event (JSON, or a booking sheet CSV with --event-sheet)
    #[arg(required = true)]
    event: PathBuf,

    /// Read the event from the first row of a booking sheet CSV
    #[arg(long)]
    event_sheet: bool,

    /// Recipe sheet CSV (defaults to the bundled menu)
    #[arg(long, value_name = "FILE")]
    recipes: Option<PathBuf>,

    /// Assistant commands to apply first, one JSON object per line
    #[arg(long, value_name = "FILE")]
    commands: Option<PathBuf>,

    /// Export to TSV (optional output path)
    #[arg(long, value_name = "FILE")]
    tsv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new().with_level(level).init()?;

    let event = if args.event_sheet {
        match parse_event_file(&args.event)?.into_iter().next() {
            Some(event) => event,
            None => bail!("booking sheet '{}' has no events", args.event.display()),
        }
    } else {
        load_event_json(&args.event)?
    };

    let catalog = match &args.recipes {
        Some(path) => parse_recipe_file(path)?.or_bundled(),
        None => RecipeCatalog::bundled(),
    };

    let mut session = Session::new(event, catalog);
    let mut list = None;

    if let Some(path) = &args.commands {
        let script = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read commands '{}'", path.display()))?;
        for (line_no, line) in script.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let command = Command::from_json(line)
                .wrap_err_with(|| format!("command on line {}", line_no + 1))?;
            if let Outcome::PackingList(generated) = session.apply(command)? {
                list = Some(generated);
            }
        }
    }

    let list =
        list.unwrap_or_else(|| compute_packing_list(Some(&session.event), &session.catalog));
    print_list(&list);

    if let Some(tsv_path) = &args.tsv {
        export_tsv(&list, &session.event, tsv_path)?;
        println!("Exported to TSV: {}", tsv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&list, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    Ok(())
}

fn print_list(list: &PackingList) {
    println!("Packing list for {}", list.event_id);
    println!(
        "Total drinks: {} ({} per cocktail)",
        list.summary.total_drinks, list.summary.drinks_per_cocktail
    );

    for (category, items) in &list.categories {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("{}", category.as_str().to_uppercase());
        for item in items {
            println!(
                "  {:<24} {:>4} x {:<10} {}",
                item.name, item.containers_needed, item.unit, item.breakdown
            );
        }
    }
}
