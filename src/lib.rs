//! Navfetch: dataset fetcher for AI2-THOR navigation tasks.
//!
//! Navfetch downloads the archive for one of a fixed set of navigation-task
//! datasets (RoboTHOR and iTHOR, PointNav and ObjectNav), unpacks it beside
//! the tool, and removes the intermediate tarball.
//!
//! # Modules
//!
//! - [`dataset`]: The closed identifier set and per-dataset descriptors
//! - [`fetch`]: Download, unpack, and archive cleanup
//! - [`error`]: Error types for navfetch operations

pub mod dataset;
pub mod error;
pub mod fetch;

use std::path::PathBuf;

use clap::Parser;

use dataset::DatasetId;
pub use error::NavfetchError;

/// The navfetch CLI application.
#[derive(Parser)]
#[command(name = "navfetch")]
#[command(version, author, about)]
struct Cli {
    /// Dataset to fetch (robothor-pointnav, robothor-objectnav,
    /// ithor-pointnav, or ithor-objectnav).
    dataset: Option<String>,
}

/// Run the navfetch CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), NavfetchError> {
    let cli = Cli::parse();

    // Validation happens before any network or filesystem action; a missing
    // or unknown identifier must not leave anything behind.
    let name = cli.dataset.ok_or(NavfetchError::MissingDataset)?;
    let id: DatasetId = name.parse()?;

    let base_dir = tool_dir()?;
    fetch::fetch(&id.descriptor(), &base_dir)?;
    Ok(())
}

/// Directory containing the running executable. Downloads land here
/// regardless of the caller's current directory.
fn tool_dir() -> Result<PathBuf, NavfetchError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        NavfetchError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable path has no parent directory",
        ))
    })
}
