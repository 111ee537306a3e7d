use log::LevelFilter;

/// Parse a configured level name, falling back to `info`.
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level {level:?}, using info"))
}

/// Install the terminal logger. Must be called once per process.
pub fn init(level: &str) -> Option<String> {
    let (filter, warning) = match parse_level(level) {
        Ok(filter) => (filter, None),
        Err(msg) => (LevelFilter::Info, Some(msg)),
    };

    let mut clog = colog::default_builder();
    clog.filter(None, filter);
    clog.init();

    warning
}
