//! Refactor providers
//!
//! Cursor-triggered, user-invoked transformations. The registry is an
//! explicitly constructed, append-only value owned by the engine service;
//! registration happens at startup, strictly before any request, and
//! nothing is ever removed. Listing iterates every provider; application
//! looks up by stable name, and an unknown name is the caller's cue to
//! fall through to the host.

pub mod add_ref_binding;

pub use add_ref_binding::AddRefBinding;

use crate::models::{ApplicableRefactor, RefactorEditSet};
use crate::services::RequestContext;

pub trait RefactorProvider {
    /// Stable name used for listing and edit application.
    fn name(&self) -> &'static str;

    /// Action kinds this provider can produce.
    fn kinds(&self) -> &'static [&'static str] {
        &[]
    }

    /// Compute (quickly) which actions are available here.
    fn available_actions(&self, cx: &RequestContext<'_>) -> Vec<ApplicableRefactor>;

    /// Compute the edits for one of this provider's actions.
    fn edits_for_action(
        &self,
        cx: &RequestContext<'_>,
        action_name: &str,
    ) -> Option<RefactorEditSet>;
}

/// Append-only provider collection, keyed by provider name.
#[derive(Default)]
pub struct RefactorRegistry {
    providers: Vec<Box<dyn RefactorProvider>>,
}

impl RefactorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in providers.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AddRefBinding));
        registry
    }

    pub fn register(&mut self, provider: Box<dyn RefactorProvider>) {
        self.providers.push(provider);
    }

    pub fn get(&self, name: &str) -> Option<&dyn RefactorProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// All actions applicable at the request position. No ordering
    /// guarantee among providers.
    pub fn available_actions(&self, cx: &RequestContext<'_>) -> Vec<ApplicableRefactor> {
        self.providers
            .iter()
            .flat_map(|p| p.available_actions(cx))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
