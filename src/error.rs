//! Error types for security provisioning.
//!
//! - [`SecurityError`] — Top-level errors raised by the orchestrator and
//!   factory registry.
//! - [`ModuleError`] — Errors from security module construction and lifecycle.
//! - [`ContextError`] — Errors from security context construction.

use thiserror::Error;

/// Convenience alias for provisioning-level results.
pub type SecurityResult<T> = Result<T, SecurityError>;

/// Errors that abort or reject a provisioning operation.
///
/// Only the conditions the contract classifies as fatal surface here;
/// skip-and-continue paths (incompatible contexts, not-applicable modules,
/// unresolvable context factories) are logged and never become errors.
#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Invalid security configuration: {0}")]
    InvalidConfig(String),
    #[error("No security module factory registered for `{0}`")]
    NoMatchingModuleFactory(String),
    #[error("No security context factory registered for `{0}`")]
    NoMatchingContextFactory(String),
    #[error("Security module `{id}` could not be installed")]
    ModuleInstall {
        id: String,
        #[source]
        source: ModuleError,
    },
}

/// Errors from a security module factory or module lifecycle call.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Creation failed: {0}")]
    Create(String),
    #[error("Install failed: {0}")]
    Install(String),
    #[error("Uninstall failed: {0}")]
    Uninstall(String),
    /// The module has nothing to revert. Treated as a successful no-op
    /// by the teardown sequence.
    #[error("Uninstall is not supported")]
    UninstallUnsupported,
}

/// Errors from security context construction.
///
/// The orchestrator treats both variants identically: log and move on to
/// the next context candidate.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Context initialization failed: {0}")]
    Initialize(String),
    #[error("Context linkage failed: {0}")]
    Linkage(String),
}
