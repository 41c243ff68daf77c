//! shiftc — compose a volunteer schedule grid into shift segments.
//!
//! ```text
//! shiftc <config.json> [--json]
//! ```
//!
//! Loads the grid CSV named in the config, composes every volunteer row,
//! writes the segments (and event-linked shifts, if a catalog is given) to
//! the output directory, and with `--json` also prints the composed
//! schedules to stdout.  Set `RUST_LOG=debug` for per-row detail.

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use sp_output::{CsvWriter, ExportSummary, export_schedules};
use sp_schedule::{ComposedSchedule, ShiftCatalog, compose_rows, load_catalog_csv, load_rows_csv};

use config::{AppConfig, OutputFormat};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(config_path) = args.next().map(PathBuf::from) else {
        bail!("usage: shiftc <config.json> [--json]");
    };
    let print_json = match args.next().as_deref() {
        None => false,
        Some("--json") => true,
        Some(other) => bail!("unexpected argument {other:?}"),
    };

    let config = AppConfig::load(&config_path)?;
    let clock = config.compose.make_clock()?;
    info!("slot clock: {clock}");

    let t0 = Instant::now();
    let rows = load_rows_csv(&config.schedule_csv)
        .with_context(|| format!("loading {}", config.schedule_csv.display()))?;
    let catalog: Option<ShiftCatalog> = config
        .catalog_csv
        .as_deref()
        .map(|path| {
            load_catalog_csv(path).with_context(|| format!("loading {}", path.display()))
        })
        .transpose()?;

    let schedules = compose_rows(&clock, &rows)?;
    info!("composed {} schedule(s) in {:.3}s", schedules.len(), t0.elapsed().as_secs_f64());

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    let summary = write_output(&config, &schedules, catalog.as_ref())?;

    if print_json {
        println!("{}", serde_json::to_string_pretty(&schedules)?);
    }

    println!(
        "{} schedule(s), {} segment(s), {} event shift(s) → {}",
        summary.schedules,
        summary.segments,
        summary.event_shifts,
        config.output_dir.display()
    );
    Ok(())
}

fn write_output(
    config: &AppConfig,
    schedules: &[ComposedSchedule],
    catalog: Option<&ShiftCatalog>,
) -> Result<ExportSummary> {
    match config.format {
        OutputFormat::Csv => {
            let mut writer = CsvWriter::new(&config.output_dir)?;
            Ok(export_schedules(&mut writer, schedules, catalog)?)
        }
        #[cfg(feature = "sqlite")]
        OutputFormat::Sqlite => {
            let mut writer = sp_output::SqliteWriter::new(&config.output_dir)?;
            Ok(export_schedules(&mut writer, schedules, catalog)?)
        }
        #[cfg(not(feature = "sqlite"))]
        OutputFormat::Sqlite => bail!("shiftc was built without the `sqlite` feature"),
    }
}
