use tracing::Level;

pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

// Logs go to stderr so stdout carries only the search results.
pub fn setup_tracing(json: bool, verbose: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        // ANSI codes would end up inside the JSON fields.
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logging::max_level;

    #[test]
    fn test_should_pick_max_level() {
        assert_eq!(Level::DEBUG, max_level(true));
        assert_eq!(Level::INFO, max_level(false));
    }
}
