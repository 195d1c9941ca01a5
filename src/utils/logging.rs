// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and tests
// ============================================================================
//
// The library only emits `tracing` events (context resolution, currency
// registration). Nothing is printed unless the host process installs a
// subscriber, either its own or the one below.
//
// ```ignore
// use decimal_money::utils::init_logging;
//
// init_logging(tracing::Level::INFO);
// let ctx = decimal_money::domain::NumericContext::money_default();
// ```

use tracing::Level;

/// Install a global fmt subscriber capped at `level`.
///
/// Returns false if a global subscriber is already installed.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}
