//! Log set-up for the command line front end.
//!
//! Events go to stderr so they never interleave with results on stdout.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps the number of `-v` flags to a level.
const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence; without it every `linecalc::*` target logs
/// at the level chosen by `verbosity`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder().with_default_directive(level_for(verbosity).into())
                                     .from_env_lossy();

    let layer = fmt::layer().compact()
                            .with_target(true)
                            .without_time()
                            .with_writer(io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(9), LevelFilter::TRACE);
    }
}
