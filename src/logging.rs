use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Routes `log` output to a file, since the terminal UI owns stdout.
///
/// Level defaults to info and can be changed with `RUST_LOG`.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let log_out = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_out)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)
}
