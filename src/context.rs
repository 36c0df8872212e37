//! Security context capability: the active privileged identity for the
//! process, plus the built-in inert default.
//!
//! Exactly one context is active at any time. Before any explicit context
//! is installed, and again after `uninstall`, the active context is
//! [`NoOpSecurityContext`] — "no security enabled".

use std::sync::Arc;

use crate::config::SecurityConfiguration;
use crate::error::ContextError;

/// A closure executed under a security context's identity.
pub type SecuredAction<'a> = &'a mut dyn FnMut() -> anyhow::Result<()>;

/// The active privileged identity of the process.
pub trait SecurityContext: Send + Sync {
    /// Identity label used in logs (`"none"` for the no-op context).
    fn identity(&self) -> &str;

    /// Runs `action` with this context's credentials ambient in the process.
    fn run_secured(&self, action: SecuredAction<'_>) -> anyhow::Result<()>;
}

/// A named constructor for security contexts.
pub trait SecurityContextFactory: Send + Sync {
    /// Identifier this factory is registered under and resolved by.
    fn id(&self) -> &str;

    /// Whether a context from this factory can work under `config`.
    ///
    /// Pure predicate: evaluated before [`create`](Self::create) and must
    /// not mutate ambient state.
    fn is_compatible(&self, config: &SecurityConfiguration) -> bool;

    /// Constructs the context. May block on external I/O (reading credential
    /// material, contacting an authentication service).
    fn create(
        &self,
        config: &SecurityConfiguration,
    ) -> Result<Arc<dyn SecurityContext>, ContextError>;
}

/// Identifier of the built-in no-op context factory.
pub const NOOP_CONTEXT_FACTORY_ID: &str = "noop";

/// The inert default context: actions run without any privileged identity.
#[derive(Debug, Default)]
pub struct NoOpSecurityContext;

impl SecurityContext for NoOpSecurityContext {
    fn identity(&self) -> &str {
        "none"
    }

    fn run_secured(&self, action: SecuredAction<'_>) -> anyhow::Result<()> {
        action()
    }
}

/// Factory for [`NoOpSecurityContext`]: compatible with every configuration
/// and never fails to construct, so it is a safe terminal candidate.
#[derive(Debug, Default)]
pub struct NoOpSecurityContextFactory;

impl SecurityContextFactory for NoOpSecurityContextFactory {
    fn id(&self) -> &str {
        NOOP_CONTEXT_FACTORY_ID
    }

    fn is_compatible(&self, _config: &SecurityConfiguration) -> bool {
        true
    }

    fn create(
        &self,
        _config: &SecurityConfiguration,
    ) -> Result<Arc<dyn SecurityContext>, ContextError> {
        Ok(Arc::new(NoOpSecurityContext))
    }
}
