//! # secboot — process-wide security provisioning
//!
//! `secboot` installs a set of pluggable security *modules* (units that
//! configure ambient authentication material: credentials, login
//! configuration, tickets) and then selects exactly one active security
//! *context* (the privileged identity the process runs under), driven by
//! declarative, ordered configuration:
//!
//! - **Modules** install in declared order; a module that does not apply
//!   in the current runtime is skipped, and any real failure aborts the
//!   whole sequence with no rollback.
//! - **Contexts** are candidates tried in priority order; the first one
//!   that is compatible and constructs successfully wins, and the
//!   built-in no-op context ("no security enabled") is always active
//!   until something better is installed.
//! - **Factories** for both are resolved by exact string identifier from
//!   an explicit [`SecurityFactoryRegistry`] populated at startup.
//!
//! # Quick Start
//!
//! ```rust
//! use secboot::{
//!     SecurityConfiguration, SecurityContext, SecurityEnvironment, SecurityFactoryRegistry,
//! };
//!
//! let registry = SecurityFactoryRegistry::with_defaults();
//! let config = SecurityConfiguration::builder()
//!     .context_factory("noop")
//!     .build()
//!     .unwrap();
//!
//! let mut env = SecurityEnvironment::new();
//! env.install(&registry, &config).unwrap();
//! assert_eq!(env.active_context().identity(), "none");
//!
//! env.uninstall();
//! ```
//!
//! Provisioning is a single-threaded bootstrap/shutdown affair: all
//! operations are synchronous and may block on external I/O, and the
//! environment carries no internal synchronization.

pub mod config;
pub mod context;
pub mod environment;
pub mod error;
pub mod module;
pub mod registry;

pub use crate::config::{
    parse_config, ConfigFormat, SecurityConfiguration, SecurityConfigurationBuilder,
};
pub use crate::context::{
    NoOpSecurityContext, NoOpSecurityContextFactory, SecuredAction, SecurityContext,
    SecurityContextFactory, NOOP_CONTEXT_FACTORY_ID,
};
pub use crate::environment::SecurityEnvironment;
pub use crate::error::{ContextError, ModuleError, SecurityError, SecurityResult};
pub use crate::module::{ModuleCreation, SecurityModule, SecurityModuleFactory};
pub use crate::registry::SecurityFactoryRegistry;
