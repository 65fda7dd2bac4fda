//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `catalog_core` wiring end to end: config, logging, storage,
//!   services.
//! - Keep output deterministic for quick local sanity checks.

use catalog_core::{
    seed_demo_catalog, ClassService, CoreConfig, SectorService, SqliteCatalogStore,
};
use log::error;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("catalog_cli failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env();
    let logging_active = config.init_logging()?;

    println!("catalog_core ping={}", catalog_core::ping());
    println!("catalog_core version={}", catalog_core::core_version());
    println!("catalog_core file_logging={logging_active}");

    let conn = config.open_connection()?;
    let store = SqliteCatalogStore::try_new(&conn)?;

    if config.seed_demo {
        let report = seed_demo_catalog(&store)?;
        println!(
            "catalog_core seed skipped={} classes={}",
            report.skipped(),
            report.classes.len()
        );
    }

    let sectors = SectorService::new(store).get_all_sectors()?;
    let classes = ClassService::new(store).get_all_classes()?;
    println!(
        "catalog_core sectors={} classes={}",
        sectors.len(),
        classes.len()
    );
    Ok(())
}
