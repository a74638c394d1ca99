// File: crates/trend-cli/src/main.rs
// Summary: Loads weight entries from CSV into a memory store and prints the ordered log and chart series.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use trend_core::{AxisBounds, MemoryStore, RecordStore, SortOrder, TrackerConfig, WeightTracker};

const USER: &str = "local";

struct Args {
    input: PathBuf,
    goal: Option<f64>,
    order: Option<SortOrder>,
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;

    let mut config = match &args.config {
        Some(path) => TrackerConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => TrackerConfig::default(),
    };
    if let Some(order) = args.order {
        config.sort_order = order;
    }

    let mut store = MemoryStore::new();
    let loaded = load_entries_csv(&args.input, &mut store)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!("loaded {} entries from {}", loaded, args.input.display());
    if let Some(goal) = args.goal {
        store.set_goal(USER, goal)?;
    }

    let tracker = WeightTracker::new(store, config);

    println!("Weight log ({:?}):", tracker.sort_order());
    for record in tracker.entries(USER)? {
        println!("  #{:<4} {:>10}  {}", record.id, record.date_text, record.value_text);
    }

    let series = tracker.chart(USER)?;
    println!("Chart points (oldest first):");
    for (&(x, y), label) in series.points.iter().zip(&series.labels) {
        println!("  x={:<3} y={:<8} {}", x, y, label);
    }
    match series.bounds {
        AxisBounds::NoData => println!("Axis: no data"),
        AxisBounds::Auto { top_padding } => println!("Axis: auto-scale, top padding {top_padding}%"),
        AxisBounds::Goal { goal, minimum, maximum } => {
            println!("Axis: [{minimum:.2}, {maximum:.2}] with goal line at {goal}")
        }
    }
    if let Some(view) = tracker.view(USER)? {
        let (start, end) = view.initial_window();
        println!(
            "View: x [{:.1}, {:.1}] showing [{:.1}, {:.1}], y [{:.2}, {:.2}]",
            view.x_min, view.x_max, start, end, view.y_min, view.y_max
        );
    }
    Ok(())
}

fn usage() -> &'static str {
    "usage: weight-trend <entries.csv> [--goal N] [--oldest-first | --newest-first] [--config FILE]"
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut input = None;
    let mut goal = None;
    let mut order = None;
    let mut config = None;
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--goal" => {
                let raw = it.next().with_context(|| format!("--goal needs a value\n{}", usage()))?;
                goal = Some(raw.parse::<f64>().with_context(|| format!("bad goal '{raw}'"))?);
            }
            "--oldest-first" => order = Some(SortOrder::OldestFirst),
            "--newest-first" => order = Some(SortOrder::NewestFirst),
            "--config" => {
                let raw = it.next().with_context(|| format!("--config needs a path\n{}", usage()))?;
                config = Some(PathBuf::from(raw));
            }
            "-h" | "--help" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other if other.starts_with("--") => anyhow::bail!("unknown flag '{other}'\n{}", usage()),
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    anyhow::bail!("only one input file is accepted\n{}", usage());
                }
            }
        }
    }
    let input = input.with_context(|| usage().to_string())?;
    Ok(Args { input, goal, order, config })
}

/// Read `date,weight` rows (header names matched case-insensitively) into `store`.
/// Cell text is stored verbatim; malformed values are the engine's problem, not the loader's.
fn load_entries_csv(path: &Path, store: &mut MemoryStore) -> Result<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_date = idx(&["date", "day"]).context("no date column")?;
    let i_weight = idx(&["weight", "value"]).context("no weight column")?;

    let mut count = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let date = rec.get(i_date).unwrap_or_default();
        let weight = rec.get(i_weight).unwrap_or_default();
        if date.is_empty() && weight.is_empty() {
            warn!("skipping blank row {}", row + 2);
            continue;
        }
        store.insert(USER, date, weight)?;
        count += 1;
    }
    Ok(count)
}
