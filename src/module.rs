//! Security module capability: installable units that configure ambient
//! authentication material (credentials, login configuration, tickets).
//!
//! Modules are produced by a [`SecurityModuleFactory`] resolved through the
//! factory registry, then driven through an install/uninstall lifecycle by
//! the [`SecurityEnvironment`](crate::environment::SecurityEnvironment).

use crate::config::SecurityConfiguration;
use crate::error::ModuleError;

/// An installable security capability.
///
/// A module object only exists after successful construction; `install`
/// transitions it into the process environment and `uninstall` reverts it.
/// Whatever ambient state a module mutates (files, environment variables,
/// in-memory caches) is owned by the module and must be released by its
/// own `uninstall`.
pub trait SecurityModule: Send + Sync {
    /// Short identifier used to attribute log messages to this module.
    fn name(&self) -> &str;

    /// Applies this module's changes to the ambient process environment.
    ///
    /// May block on external I/O. A failure here is fatal for the whole
    /// provisioning sequence.
    fn install(&mut self) -> Result<(), ModuleError>;

    /// Reverts the changes made by [`install`](Self::install).
    ///
    /// Returning [`ModuleError::UninstallUnsupported`] is equivalent to a
    /// successful no-op. Any other error is logged by the teardown sequence
    /// and swallowed; it never aborts teardown.
    fn uninstall(&mut self) -> Result<(), ModuleError>;
}

/// Outcome of asking a factory for a module under a given configuration.
pub enum ModuleCreation {
    /// The factory produced a module ready to be installed.
    Module(Box<dyn SecurityModule>),
    /// The module does not apply in the current runtime. Skipped silently,
    /// never treated as a failure.
    NotApplicable,
}

impl std::fmt::Debug for ModuleCreation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleCreation::Module(module) => {
                f.debug_tuple("Module").field(&module.name()).finish()
            }
            ModuleCreation::NotApplicable => f.write_str("NotApplicable"),
        }
    }
}

/// A named constructor for security modules.
pub trait SecurityModuleFactory: Send + Sync {
    /// Identifier this factory is registered under and resolved by.
    fn id(&self) -> &str;

    /// Constructs a module for the given configuration, or reports that the
    /// module is not applicable in the current runtime.
    fn create(&self, config: &SecurityConfiguration) -> Result<ModuleCreation, ModuleError>;
}
