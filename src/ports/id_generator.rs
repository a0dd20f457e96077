//! IdGenerator port - Interface for generating element ids.
//!
//! Each panel needs a unique id that links its label to both controls for
//! assistive technology. Generation is injected so tests can use
//! predictable ids and hosts can use their own scheme.

/// Generates unique element ids.
///
/// Implementations must never return the same id twice within a process.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh id.
    fn generate(&self) -> String;
}
