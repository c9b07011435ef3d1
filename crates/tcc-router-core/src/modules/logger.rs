//! Tracing subscriber setup for binaries and tests that embed the router.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the host process. This helper is for hosts that have none.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Outcome of the one installation attempt, shared by every caller.
static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Install a global fmt subscriber. `RUST_LOG` overrides `default_level`.
///
/// Only the first call installs; concurrent first callers wait for it and
/// every later call returns the same outcome. Fails if another subscriber was
/// installed first or the filter does not parse.
pub fn init_logging(default_level: &str) -> AppResult<()> {
    INIT.get_or_init(|| install(default_level)).clone().map_err(AppError::Logging)
}

fn install(default_level: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| format!("invalid log filter '{}': {}", default_level, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| e.to_string())?;

    tracing::debug!("Router logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;

    #[test]
    fn test_concurrent_first_calls_share_outcome() {
        const THREADS: usize = 8;
        let barrier = Barrier::new(THREADS);

        let outcomes: Vec<bool> = std::thread::scope(|s| {
            let workers: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        init_logging("info").is_ok()
                    })
                })
                .collect();
            workers.into_iter().map(|w| w.join().expect("worker panicked")).collect()
        });

        assert!(outcomes.iter().all(|ok| *ok), "every caller sees the installed subscriber");
        assert!(init_logging("debug").is_ok(), "later calls are no-ops");
    }
}
