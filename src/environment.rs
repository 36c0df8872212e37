//! Installation orchestrator: drives module installation and context
//! selection, and owns the resulting provisioning state.
//!
//! A [`SecurityEnvironment`] is an explicit value created by the process
//! bootstrap code and passed by reference to anything that needs the
//! active context. It is not a global, so tests hold independent
//! instances.

use std::sync::Arc;

use crate::config::SecurityConfiguration;
use crate::context::{NoOpSecurityContext, SecurityContext};
use crate::error::{ModuleError, SecurityError, SecurityResult};
use crate::module::{ModuleCreation, SecurityModule};
use crate::registry::SecurityFactoryRegistry;

/// Process-wide security provisioning state and the operations that
/// mutate it.
///
/// The active context is never absent: it starts as the built-in no-op
/// context and is only ever replaced by a successfully constructed one.
/// The installed-module list holds exactly the modules whose `install()`
/// returned `Ok`, in factory-declared order.
pub struct SecurityEnvironment {
    active_context: Arc<dyn SecurityContext>,
    installed_modules: Option<Vec<Box<dyn SecurityModule>>>,
}

impl SecurityEnvironment {
    /// Creates an environment with no modules installed and the no-op
    /// context active.
    pub fn new() -> Self {
        Self {
            active_context: Arc::new(NoOpSecurityContext),
            installed_modules: None,
        }
    }

    /// The currently active security context.
    pub fn active_context(&self) -> Arc<dyn SecurityContext> {
        self.active_context.clone()
    }

    /// The currently installed modules, in install order. Empty when
    /// nothing is installed.
    pub fn installed_modules(&self) -> &[Box<dyn SecurityModule>] {
        self.installed_modules.as_deref().unwrap_or(&[])
    }

    /// Installs the configured security modules, then selects the active
    /// security context.
    ///
    /// Module installation is all-or-abort: an unresolvable factory, a
    /// creation failure, or a failed `install()` aborts the whole call
    /// and propagates, with no rollback of modules installed earlier in
    /// the sequence. Context selection is best-effort: candidates are
    /// tried in priority order and the first success wins; if every
    /// candidate fails, the previously active context stays in place.
    ///
    /// Calling `install` again without an intervening [`uninstall`]
    /// overwrites the stored module list without tearing down the
    /// previously installed modules.
    ///
    /// [`uninstall`]: Self::uninstall
    pub fn install(
        &mut self,
        registry: &SecurityFactoryRegistry,
        config: &SecurityConfiguration,
    ) -> SecurityResult<()> {
        // Modules first: the context may rely on ambient state they set up.
        self.install_modules(registry, config)?;
        self.install_context(registry, config);
        Ok(())
    }

    fn install_modules(
        &mut self,
        registry: &SecurityFactoryRegistry,
        config: &SecurityConfiguration,
    ) -> SecurityResult<()> {
        let mut modules: Vec<Box<dyn SecurityModule>> = Vec::new();
        for id in config.module_factories() {
            let factory = registry.resolve_module_factory(id).map_err(|err| {
                tracing::error!(module = %id, "unable to resolve security module factory");
                err
            })?;

            let creation = factory
                .create(config)
                .map_err(|source| SecurityError::ModuleInstall {
                    id: id.clone(),
                    source,
                })?;

            match creation {
                ModuleCreation::NotApplicable => {
                    tracing::debug!(module = %id, "security module not applicable, skipping");
                }
                ModuleCreation::Module(mut module) => {
                    module
                        .install()
                        .map_err(|source| SecurityError::ModuleInstall {
                            id: id.clone(),
                            source,
                        })?;
                    tracing::debug!(module = %id, "security module installed");
                    modules.push(module);
                }
            }
        }
        // Only a fully successful sequence replaces the stored list; a
        // mid-sequence failure leaves the previous value untouched.
        self.installed_modules = Some(modules);
        Ok(())
    }

    fn install_context(
        &mut self,
        registry: &SecurityFactoryRegistry,
        config: &SecurityConfiguration,
    ) {
        for id in config.context_factories() {
            let factory = match registry.resolve_context_factory(id) {
                Ok(factory) => factory,
                Err(err) => {
                    tracing::warn!(context = %id, error = %err, "unable to resolve security context factory");
                    continue;
                }
            };

            if !factory.is_compatible(config) {
                tracing::debug!(context = %id, "security context factory not compatible with the configuration");
                continue;
            }

            match factory.create(config) {
                Ok(context) => {
                    tracing::info!(context = %id, identity = %context.identity(), "security context installed");
                    self.active_context = context;
                    // First compatible candidate that constructs wins;
                    // remaining candidates are not evaluated.
                    return;
                }
                Err(err) => {
                    tracing::error!(context = %id, error = %err, "cannot instantiate security context");
                }
            }
        }
        // The active context is seeded with the no-op default and never
        // cleared, so exhausting every candidate leaves it in place.
    }

    /// Uninstalls all installed modules in reverse install order and
    /// resets the active context to the no-op default.
    ///
    /// Teardown never aborts: an unsupported uninstall is a silent no-op
    /// and any other uninstall failure is logged and swallowed. Calling
    /// this with nothing installed is a no-op; calling it twice in a row
    /// is idempotent.
    pub fn uninstall(&mut self) {
        if let Some(mut modules) = self.installed_modules.take() {
            for module in modules.iter_mut().rev() {
                match module.uninstall() {
                    Ok(()) | Err(ModuleError::UninstallUnsupported) => {}
                    Err(err) => {
                        tracing::warn!(module = %module.name(), error = %err, "unable to uninstall security module");
                    }
                }
            }
        }
        self.active_context = Arc::new(NoOpSecurityContext);
    }
}

impl Default for SecurityEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_environment_defaults() {
        let env = SecurityEnvironment::new();
        assert_eq!(env.active_context().identity(), "none");
        assert!(env.installed_modules().is_empty());
    }

    #[test]
    fn test_install_with_empty_config() {
        let registry = SecurityFactoryRegistry::with_defaults();
        let config = SecurityConfiguration::default();
        let mut env = SecurityEnvironment::new();

        env.install(&registry, &config).unwrap();
        assert_eq!(env.active_context().identity(), "none");
        assert!(env.installed_modules().is_empty());
    }
}
