//! Application container for tsxmend

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputContext;
use crate::config::EnginePreferences;
use crate::services::{DocumentStore, EngineService, NullHost};

pub struct App {
    root: PathBuf,
    pub(crate) output: OutputContext,
    preferences: EnginePreferences,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let root = std::env::current_dir()?;

        tracing::debug!("initializing tsxmend at {:?}", root);

        let output = OutputContext::new(root.clone());
        let preferences = EnginePreferences::load(&root)?;

        Ok(Self {
            root,
            output,
            preferences,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn preferences(&self) -> &EnginePreferences {
        &self.preferences
    }

    /// Engine service over one document loaded from disk. Standalone mode
    /// runs with no host behind the proxy, so every listed result is the
    /// engine's own.
    pub(crate) fn open_document(&self, file: &Path) -> anyhow::Result<OpenDocument> {
        let text = fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;
        let file_name = self.output.relative_path(file);

        let mut store = DocumentStore::new();
        store.insert(&file_name, text.as_str())?;

        Ok(OpenDocument {
            file_name,
            text,
            path: file.to_path_buf(),
            service: EngineService::new(NullHost, store, self.preferences.clone()),
        })
    }
}

/// A parsed document plus the service fronting it.
pub(crate) struct OpenDocument {
    pub file_name: String,
    pub text: String,
    pub path: PathBuf,
    pub service: EngineService<NullHost, DocumentStore>,
}
