//! Binary entry point: runs the scripted lending session and logs the result.

use library_lending::lifecycle::{run_reference_scenario, setup_tracing};
use library_lending::LibraryManager;
use tracing::{info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting library lending demo");

    let mut library = LibraryManager::new();
    let report = run_reference_scenario(&mut library).map_err(|e| e.to_string())?;

    for (position, book) in report.catalog.iter().enumerate() {
        info!(position, title = %book.title, author = %book.author, "Catalog");
    }
    for denial in &report.denials {
        warn!(reason = %denial, "Denied as scripted");
    }

    info!(loans_left = report.loans_left, "Demo completed successfully");
    Ok(())
}
