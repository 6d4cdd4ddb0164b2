// crates/palgraph-cli/src/logging.rs

/// Install the global logger. `filter` wins over `RUST_LOG`; with neither
/// set only warnings are shown, so stderr carries just the status lines.
pub fn init(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();

    match filter.map(str::to_owned).or_else(|| std::env::var("RUST_LOG").ok()) {
        Some(f) => {
            builder.parse_filters(&f);
        }
        None => {
            builder.filter_level(log::LevelFilter::Warn);
        }
    }

    if builder.try_init().is_ok() {
        log::debug!("logging initialized");
    }
}
