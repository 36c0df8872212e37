//! Factory registry: resolves declared string identifiers to module and
//! context factories.
//!
//! The registry is an explicit registration table populated at startup by
//! the embedding process; there is no discovery mechanism. Resolution is
//! by exact identifier match.

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::{NoOpSecurityContextFactory, SecurityContextFactory};
use crate::error::SecurityError;
use crate::module::SecurityModuleFactory;

/// Registration table for security module and context factories.
#[derive(Default)]
pub struct SecurityFactoryRegistry {
    module_factories: HashMap<String, Arc<dyn SecurityModuleFactory>>,
    context_factories: HashMap<String, Arc<dyn SecurityContextFactory>>,
}

impl SecurityFactoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the built-in no-op context factory.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_context_factory(Arc::new(NoOpSecurityContextFactory));
        registry
    }

    /// Registers a module factory under the identifier it declares.
    ///
    /// The first registration of an identifier wins; later duplicates are
    /// ignored.
    pub fn register_module_factory(&mut self, factory: Arc<dyn SecurityModuleFactory>) {
        let id = factory.id().to_string();
        if self.module_factories.contains_key(&id) {
            tracing::debug!(id = %id, "ignoring duplicate security module factory registration");
            return;
        }
        self.module_factories.insert(id, factory);
    }

    /// Registers a context factory under the identifier it declares.
    ///
    /// The first registration of an identifier wins; later duplicates are
    /// ignored.
    pub fn register_context_factory(&mut self, factory: Arc<dyn SecurityContextFactory>) {
        let id = factory.id().to_string();
        if self.context_factories.contains_key(&id) {
            tracing::debug!(id = %id, "ignoring duplicate security context factory registration");
            return;
        }
        self.context_factories.insert(id, factory);
    }

    /// Resolves a module factory by exact identifier match.
    pub fn resolve_module_factory(
        &self,
        id: &str,
    ) -> Result<Arc<dyn SecurityModuleFactory>, SecurityError> {
        self.module_factories
            .get(id)
            .cloned()
            .ok_or_else(|| SecurityError::NoMatchingModuleFactory(id.to_string()))
    }

    /// Resolves a context factory by exact identifier match.
    pub fn resolve_context_factory(
        &self,
        id: &str,
    ) -> Result<Arc<dyn SecurityContextFactory>, SecurityError> {
        self.context_factories
            .get(id)
            .cloned()
            .ok_or_else(|| SecurityError::NoMatchingContextFactory(id.to_string()))
    }

    /// Identifiers of all registered module factories.
    pub fn registered_module_ids(&self) -> Vec<String> {
        self.module_factories.keys().cloned().collect()
    }

    /// Identifiers of all registered context factories.
    pub fn registered_context_ids(&self) -> Vec<String> {
        self.context_factories.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecurityConfiguration;
    use crate::context::{NOOP_CONTEXT_FACTORY_ID, SecurityContext};
    use crate::error::{ContextError, ModuleError};
    use crate::module::ModuleCreation;

    struct FakeModuleFactory {
        id: &'static str,
    }

    impl SecurityModuleFactory for FakeModuleFactory {
        fn id(&self) -> &str {
            self.id
        }

        fn create(&self, _config: &SecurityConfiguration) -> Result<ModuleCreation, ModuleError> {
            Ok(ModuleCreation::NotApplicable)
        }
    }

    struct FakeContextFactory {
        id: &'static str,
        compatible: bool,
    }

    impl SecurityContextFactory for FakeContextFactory {
        fn id(&self) -> &str {
            self.id
        }

        fn is_compatible(&self, _config: &SecurityConfiguration) -> bool {
            self.compatible
        }

        fn create(
            &self,
            _config: &SecurityConfiguration,
        ) -> Result<Arc<dyn SecurityContext>, ContextError> {
            Err(ContextError::Initialize("fake".into()))
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = SecurityFactoryRegistry::new();
        registry.register_module_factory(Arc::new(FakeModuleFactory { id: "jaas" }));
        registry.register_context_factory(Arc::new(FakeContextFactory {
            id: "hadoop",
            compatible: true,
        }));

        assert!(registry.resolve_module_factory("jaas").is_ok());
        assert!(registry.resolve_context_factory("hadoop").is_ok());
    }

    #[test]
    fn test_resolve_unknown_id() {
        let registry = SecurityFactoryRegistry::new();
        assert!(matches!(
            registry.resolve_module_factory("missing"),
            Err(SecurityError::NoMatchingModuleFactory(id)) if id == "missing"
        ));
        assert!(matches!(
            registry.resolve_context_factory("missing"),
            Err(SecurityError::NoMatchingContextFactory(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = SecurityFactoryRegistry::new();
        registry.register_context_factory(Arc::new(FakeContextFactory {
            id: "ctx",
            compatible: true,
        }));
        registry.register_context_factory(Arc::new(FakeContextFactory {
            id: "ctx",
            compatible: false,
        }));

        let factory = registry.resolve_context_factory("ctx").unwrap();
        assert!(factory.is_compatible(&SecurityConfiguration::default()));
    }

    #[test]
    fn test_with_defaults_has_noop_context() {
        let registry = SecurityFactoryRegistry::with_defaults();
        assert!(registry
            .resolve_context_factory(NOOP_CONTEXT_FACTORY_ID)
            .is_ok());
        assert!(registry.registered_module_ids().is_empty());
        assert_eq!(
            registry.registered_context_ids(),
            vec![NOOP_CONTEXT_FACTORY_ID.to_string()]
        );
    }
}
