use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing/logging subsystem.
///
/// When `to_file` is true, logs are appended to a file in the OS temp
/// directory so they never land on top of the map view. Otherwise, logs go
/// nowhere (useful for tests).
pub fn initialize(to_file: bool) {
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );

    if to_file
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path())
    {
        let _ = builder.with_writer(file).with_ansi(false).try_init();
        return;
    }

    // Fallback: discard output (test mode or file creation failed)
    let _ = builder
        .with_writer(std::io::sink)
        .with_ansi(false)
        .try_init();
}

/// Return the log file path: {temp_dir}/beerstates.log
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("beerstates.log")
}
