//! Tracing integration.
//!
//! The crate emits `tracing` events but never installs a subscriber. To
//! see them, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("bulk_select=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Dependency tracking and effect scheduling.
    pub const RUNTIME: &str = "bulk_select::runtime";
    /// Selection set mutations.
    pub const SELECTION: &str = "bulk_select::selection";
    /// Mount and teardown of the owning element.
    pub const LIFECYCLE: &str = "bulk_select::lifecycle";
    /// Trigger relay events.
    pub const RELAY: &str = "bulk_select::relay";
}
