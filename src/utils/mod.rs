// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the money domain
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
