//! In-memory project store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{ProjectConfig, layout},
    ports::{ProjectStore, ProjectStoreError, ProjectStoreResult},
};

#[derive(Debug, Default)]
struct InMemoryProject {
    config: Option<ProjectConfig>,
    requirements: Option<String>,
    spec: Option<String>,
}

/// Thread-safe in-memory project store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    state: Arc<RwLock<InMemoryProject>>,
}

impl InMemoryProjectStore {
    /// Creates a store holding `config` and no documents.
    #[must_use]
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryProject {
                config: Some(config),
                ..InMemoryProject::default()
            })),
        }
    }

    /// Sets the requirements document.
    #[must_use]
    pub fn with_requirements(self, requirements: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.requirements = Some(requirements.into());
        }
        self
    }

    /// Sets the technical spec document.
    #[must_use]
    pub fn with_spec(self, spec: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.spec = Some(spec.into());
        }
        self
    }

    fn read_with<T>(
        &self,
        read: impl FnOnce(&InMemoryProject) -> Option<T>,
        missing: &str,
    ) -> ProjectStoreResult<T> {
        let state = self.state.read().map_err(|err| {
            ProjectStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        read(&state).ok_or_else(|| ProjectStoreError::MissingFile(missing.to_owned()))
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn load_config(&self) -> ProjectStoreResult<ProjectConfig> {
        self.read_with(|state| state.config.clone(), layout::CONFIG_FILE)
    }

    async fn save_config(&self, config: &ProjectConfig) -> ProjectStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.config = Some(config.clone());
        Ok(())
    }

    async fn read_requirements(&self) -> ProjectStoreResult<String> {
        self.read_with(|state| state.requirements.clone(), layout::REQUIREMENTS_FILE)
    }

    async fn read_spec(&self) -> ProjectStoreResult<String> {
        self.read_with(|state| state.spec.clone(), layout::SPEC_FILE)
    }
}
