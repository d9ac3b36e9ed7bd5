//! Versioned generator registry
//!
//! The application selects its idea backend at startup; the registry keeps
//! every registered backend addressable by name and version so a hosted
//! backend can be swapped for the local one (or an older version) without
//! touching call sites. Exactly one generator is active at a time.

use crate::config::IdeaEngineConfig;
use crate::generator::{IdeaGenerator, KeywordIdeaGenerator, KEYWORD_GENERATOR_NAME};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("generator not found: {0}")]
    GeneratorNotFound(String),

    #[error("version not found for generator {name}: {version}")]
    VersionNotFound { name: String, version: String },

    #[error("generator version already registered for {name}: {version}")]
    VersionAlreadyExists { name: String, version: String },

    #[error("no generator has been activated")]
    NoActiveGenerator,
}

/// A generator resolved from the registry, with its identity attached.
#[derive(Clone)]
pub struct ResolvedGenerator {
    pub name: String,
    pub version: String,
    pub generator: Arc<dyn IdeaGenerator>,
}

// Manual impl: the backend itself is an opaque trait object, so only the
// identity is printable.
impl std::fmt::Debug for ResolvedGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedGenerator")
            .field("name", &self.name)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// Name+version registry with a single active generator.
#[derive(Default)]
pub struct GeneratorRegistry {
    versions: HashMap<String, BTreeMap<String, Arc<dyn IdeaGenerator>>>,
    active: Option<(String, String)>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the local keyword-template generator,
    /// registered as version 1.0.0 and activated.
    pub fn with_local_default(config: IdeaEngineConfig) -> Self {
        let mut registry = Self::new();
        let generator = Arc::new(KeywordIdeaGenerator::new(config));

        // Fresh registry, fixed name: neither error case is reachable.
        let _ = registry.register(KEYWORD_GENERATOR_NAME, "1.0.0", generator);
        let _ = registry.activate(KEYWORD_GENERATOR_NAME, "1.0.0");

        registry
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        generator: Arc<dyn IdeaGenerator>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let version = version.into();
        let family = self.versions.entry(name.clone()).or_default();

        if family.contains_key(&version) {
            return Err(RegistryError::VersionAlreadyExists { name, version });
        }

        family.insert(version.clone(), generator);

        // The very first registration becomes active so a registry with one
        // backend needs no explicit activation step.
        if self.active.is_none() {
            self.active = Some((name, version));
        }

        Ok(())
    }

    pub fn activate(
        &mut self,
        name: &str,
        version: &str,
    ) -> Result<ResolvedGenerator, RegistryError> {
        let resolved = self.resolve(name, version)?;
        self.active = Some((resolved.name.clone(), resolved.version.clone()));
        Ok(resolved)
    }

    pub fn resolve(&self, name: &str, version: &str) -> Result<ResolvedGenerator, RegistryError> {
        let family = self
            .versions
            .get(name)
            .ok_or_else(|| RegistryError::GeneratorNotFound(name.to_string()))?;

        let generator =
            family
                .get(version)
                .cloned()
                .ok_or_else(|| RegistryError::VersionNotFound {
                    name: name.to_string(),
                    version: version.to_string(),
                })?;

        Ok(ResolvedGenerator {
            name: name.to_string(),
            version: version.to_string(),
            generator,
        })
    }

    /// The currently active generator.
    pub fn active(&self) -> Result<ResolvedGenerator, RegistryError> {
        let (name, version) = self.active.as_ref().ok_or(RegistryError::NoActiveGenerator)?;
        self.resolve(name, version)
    }
}
