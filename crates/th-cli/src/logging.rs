use std::fs::File;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Send debug logs to `path`. Without a path nothing is logged, since stdout
/// belongs to the game.
pub fn init(path: Option<&Path>) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .map_err(|e| format!("cannot create log file {}: {e}", path.display()))?;

    WriteLogger::init(
        LevelFilter::Debug,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .map_err(|e| format!("failed to set up logging: {e}"))
}
