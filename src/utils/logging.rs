// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries, demos and benchmarks
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber that prints engine decisions up to `level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
