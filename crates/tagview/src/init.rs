//! Entry points for running the viewer.

use std::path::Path;

use crate::{Options, Result, Viewer};

/// Opens the viewer window for `viewer` and runs the event loop.
///
/// Blocks until the window is closed (close button or `Escape`). Returns an
/// error if the event loop, the window or the render engine cannot be created.
///
/// # Example
///
/// ```no_run
/// use tagview::*;
///
/// fn main() -> Result<()> {
///     let mut viewer = Viewer::new(800, 600);
///     viewer.set_tag_origin(DVec3::ZERO, DQuat::IDENTITY)?;
///     show(viewer)
/// }
/// ```
pub fn show(viewer: Viewer) -> Result<()> {
    let _ = env_logger::try_init();
    crate::app::run_app(viewer)
}

/// Reads viewer [`Options`] from a JSON file.
///
/// Missing fields take their default values.
pub fn load_options(path: impl AsRef<Path>) -> Result<Options> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let options = Options::from_json(&json)?;
    log::info!("loaded options from {}", path.display());
    Ok(options)
}
