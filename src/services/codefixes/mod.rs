//! Code fix providers
//!
//! Diagnostic-triggered fixes. Each provider declares the diagnostic codes
//! it answers; listing intersects the request's codes with each provider's
//! set before invoking it, and appends only non-empty results. Like the
//! refactor registry this is an owned, append-only value populated at
//! startup.

pub mod add_missing_property;

pub use add_missing_property::AddMissingProperty;

use crate::models::{CodeFixAction, TextSpan};
use crate::services::RequestContext;

pub trait CodeFixProvider {
    /// Stable fix id.
    fn fix_id(&self) -> &'static str;

    /// Diagnostic codes this provider can fix.
    fn error_codes(&self) -> &'static [u32];

    /// Compute the fix actions for a diagnostic at `span`.
    fn code_actions(&self, cx: &RequestContext<'_>, span: TextSpan) -> Vec<CodeFixAction>;
}

/// Append-only provider collection, keyed by fix id.
#[derive(Default)]
pub struct CodeFixRegistry {
    providers: Vec<Box<dyn CodeFixProvider>>,
}

impl CodeFixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in providers.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AddMissingProperty));
        registry
    }

    pub fn register(&mut self, provider: Box<dyn CodeFixProvider>) {
        self.providers.push(provider);
    }

    pub fn get(&self, fix_id: &str) -> Option<&dyn CodeFixProvider> {
        self.providers
            .iter()
            .find(|p| p.fix_id() == fix_id)
            .map(|p| p.as_ref())
    }

    /// Fix actions from every provider whose code set intersects the
    /// requested codes.
    pub fn code_actions(
        &self,
        cx: &RequestContext<'_>,
        span: TextSpan,
        requested_codes: &[u32],
    ) -> Vec<CodeFixAction> {
        self.providers
            .iter()
            .filter(|p| requested_codes.iter().any(|c| p.error_codes().contains(c)))
            .flat_map(|p| p.code_actions(cx, span))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
