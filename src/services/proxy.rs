//! Host service proxy
//!
//! `EngineService` fronts a host language service, overriding exactly three
//! operations: refactor listing, refactor edit application, and code-fix
//! listing. Every other operation delegates verbatim through the single
//! `host` reference. Merge policy: listings keep the host's results first
//! and append the engine's, never reordering or removing; applying a
//! refactor whose name is registered delegates entirely to that provider,
//! while an unregistered name falls through to the host (shared-namespace
//! fallback, by contract).

use std::collections::HashMap;

use tracing::debug;

use crate::config::EnginePreferences;
use crate::error::AstError;
use crate::infra::ast::SourceTree;
use crate::models::{ApplicableRefactor, CodeFixAction, RefactorEditSet, TextSpan};
use crate::services::semantic::{self, SemanticModel, SymbolBinding};
use crate::services::{CodeFixRegistry, RefactorRegistry, RequestContext};

/// The host-facing service surface.
pub trait LanguageService {
    /// Refactors applicable at a cursor position or selection.
    fn applicable_refactors(
        &self,
        file_name: &str,
        start: usize,
        end: Option<usize>,
    ) -> Vec<ApplicableRefactor>;

    /// Edits for one named refactor action.
    fn refactor_edits(
        &self,
        file_name: &str,
        start: usize,
        end: Option<usize>,
        refactor_name: &str,
        action_name: &str,
    ) -> Option<RefactorEditSet>;

    /// Fixes for a diagnostic span, filtered by the requested codes.
    fn code_fixes(
        &self,
        file_name: &str,
        span: TextSpan,
        error_codes: &[u32],
    ) -> Vec<CodeFixAction>;

    /// Rendered hover text; the engine never overrides this one.
    fn quick_info(&self, file_name: &str, offset: usize) -> Option<String>;
}

/// Host with no built-ins; standalone mode for the CLI and tests.
pub struct NullHost;

impl LanguageService for NullHost {
    fn applicable_refactors(&self, _: &str, _: usize, _: Option<usize>) -> Vec<ApplicableRefactor> {
        Vec::new()
    }

    fn refactor_edits(
        &self,
        _: &str,
        _: usize,
        _: Option<usize>,
        _: &str,
        _: &str,
    ) -> Option<RefactorEditSet> {
        None
    }

    fn code_fixes(&self, _: &str, _: TextSpan, _: &[u32]) -> Vec<CodeFixAction> {
        Vec::new()
    }

    fn quick_info(&self, _: &str, _: usize) -> Option<String> {
        None
    }
}

/// Tree-lookup-by-filename plus the current semantic model.
pub trait Workspace {
    fn tree(&self, file_name: &str) -> Option<&SourceTree>;
    fn semantic_model(&self) -> &dyn SemanticModel;
}

/// In-memory workspace of parsed documents with file-local resolution.
#[derive(Default)]
pub struct DocumentStore {
    documents: HashMap<String, SourceTree>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_name: &str, text: impl Into<String>) -> Result<(), AstError> {
        let tree = SourceTree::parse(file_name, text)?;
        self.documents.insert(file_name.to_string(), tree);
        Ok(())
    }
}

impl Workspace for DocumentStore {
    fn tree(&self, file_name: &str) -> Option<&SourceTree> {
        self.documents.get(file_name)
    }

    fn semantic_model(&self) -> &dyn SemanticModel {
        self
    }
}

impl SemanticModel for DocumentStore {
    fn symbol_at(&self, file_name: &str, offset: usize) -> Option<SymbolBinding> {
        semantic::symbol_at(self.tree(file_name)?, offset)
    }

    fn widened_expression_type(&self, file_name: &str, span: TextSpan) -> Option<String> {
        semantic::widened_expression_type(self.tree(file_name)?, span)
    }

    fn symbol_type_at(&self, _file_name: &str, _offset: usize) -> Option<String> {
        None
    }
}

/// Engine-augmented language service.
pub struct EngineService<H, W> {
    host: H,
    workspace: W,
    preferences: EnginePreferences,
    refactors: RefactorRegistry,
    fixes: CodeFixRegistry,
}

impl<H: LanguageService, W: Workspace> EngineService<H, W> {
    /// Service with the built-in providers registered.
    pub fn new(host: H, workspace: W, preferences: EnginePreferences) -> Self {
        Self::with_registries(
            host,
            workspace,
            preferences,
            RefactorRegistry::with_builtin(),
            CodeFixRegistry::with_builtin(),
        )
    }

    /// Service over explicitly constructed registries. Registration is a
    /// startup concern; nothing registers once requests are served.
    pub fn with_registries(
        host: H,
        workspace: W,
        preferences: EnginePreferences,
        refactors: RefactorRegistry,
        fixes: CodeFixRegistry,
    ) -> Self {
        Self {
            host,
            workspace,
            preferences,
            refactors,
            fixes,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn context<'a>(
        &'a self,
        file_name: &'a str,
        tree: &'a SourceTree,
        start: usize,
        end: Option<usize>,
    ) -> RequestContext<'a> {
        RequestContext {
            file_name,
            tree,
            model: self.workspace.semantic_model(),
            preferences: &self.preferences,
            start,
            end,
        }
    }
}

impl<H: LanguageService, W: Workspace> LanguageService for EngineService<H, W> {
    fn applicable_refactors(
        &self,
        file_name: &str,
        start: usize,
        end: Option<usize>,
    ) -> Vec<ApplicableRefactor> {
        let mut results = self.host.applicable_refactors(file_name, start, end);
        let Some(tree) = self.workspace.tree(file_name) else {
            debug!(file = file_name, "no tree snapshot; host results only");
            return results;
        };
        let cx = self.context(file_name, tree, start, end);
        results.extend(self.refactors.available_actions(&cx));
        results
    }

    fn refactor_edits(
        &self,
        file_name: &str,
        start: usize,
        end: Option<usize>,
        refactor_name: &str,
        action_name: &str,
    ) -> Option<RefactorEditSet> {
        match self.refactors.get(refactor_name) {
            Some(provider) => {
                let tree = self.workspace.tree(file_name)?;
                let cx = self.context(file_name, tree, start, end);
                provider.edits_for_action(&cx, action_name)
            }
            // unregistered names belong to the host
            None => self
                .host
                .refactor_edits(file_name, start, end, refactor_name, action_name),
        }
    }

    fn code_fixes(
        &self,
        file_name: &str,
        span: TextSpan,
        error_codes: &[u32],
    ) -> Vec<CodeFixAction> {
        let mut results = self.host.code_fixes(file_name, span, error_codes);
        if let Some(tree) = self.workspace.tree(file_name) {
            let cx = self.context(file_name, tree, span.start, Some(span.end()));
            results.extend(self.fixes.code_actions(&cx, span, error_codes));
        }
        results
    }

    fn quick_info(&self, file_name: &str, offset: usize) -> Option<String> {
        self.host.quick_info(file_name, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileTextEdits, RefactorActionInfo};
    use crate::services::codefixes::add_missing_property;
    use crate::services::refactors::add_ref_binding;

    const SOURCE: &str = concat!(
        "type FooProps = { a: string };\n",
        "\n",
        "function Foo(props: FooProps) {\n",
        "  return <input />;\n",
        "}\n",
        "\n",
        "const el = <Foo a=\"x\" b={5} />;\n",
    );

    /// Host returning one canned result per operation.
    struct CannedHost;

    impl LanguageService for CannedHost {
        fn applicable_refactors(
            &self,
            _: &str,
            _: usize,
            _: Option<usize>,
        ) -> Vec<ApplicableRefactor> {
            vec![ApplicableRefactor {
                name: "Host refactor".to_string(),
                description: "from the host".to_string(),
                actions: vec![RefactorActionInfo {
                    name: "Host refactor".to_string(),
                    description: "from the host".to_string(),
                    kind: "refactor.extract".to_string(),
                    is_interactive: false,
                }],
            }]
        }

        fn refactor_edits(
            &self,
            file_name: &str,
            _: usize,
            _: Option<usize>,
            refactor_name: &str,
            _: &str,
        ) -> Option<RefactorEditSet> {
            (refactor_name == "Host refactor").then(|| RefactorEditSet {
                edits: vec![FileTextEdits {
                    file_name: file_name.to_string(),
                    changes: Vec::new(),
                }],
            })
        }

        fn code_fixes(&self, _: &str, _: TextSpan, _: &[u32]) -> Vec<CodeFixAction> {
            vec![CodeFixAction {
                fix_id: "hostFix".to_string(),
                fix_name: "Host fix".to_string(),
                description: "from the host".to_string(),
                changes: Vec::new(),
            }]
        }

        fn quick_info(&self, _: &str, _: usize) -> Option<String> {
            Some("host hover".to_string())
        }
    }

    fn service() -> EngineService<CannedHost, DocumentStore> {
        let mut store = DocumentStore::new();
        store.insert("app.tsx", SOURCE).unwrap();
        EngineService::new(CannedHost, store, EnginePreferences::default())
    }

    #[test]
    fn test_listing_appends_after_host_results() {
        let service = service();
        let offset = SOURCE.find("input").unwrap();
        let refactors = service.applicable_refactors("app.tsx", offset, None);
        assert_eq!(refactors.len(), 2);
        assert_eq!(refactors[0].name, "Host refactor");
        assert_eq!(refactors[1].name, add_ref_binding::REFACTOR_NAME);
    }

    #[test]
    fn test_registered_name_bypasses_host() {
        let service = service();
        let offset = SOURCE.find("input").unwrap();
        let edits = service
            .refactor_edits(
                "app.tsx",
                offset,
                None,
                add_ref_binding::REFACTOR_NAME,
                add_ref_binding::REFACTOR_NAME,
            )
            .unwrap();
        // provider edits, not the host's empty canned set
        assert!(!edits.edits[0].changes.is_empty());
    }

    #[test]
    fn test_unregistered_name_falls_through_to_host() {
        let service = service();
        let edits = service
            .refactor_edits("app.tsx", 0, None, "Host refactor", "whatever")
            .unwrap();
        assert!(edits.edits[0].changes.is_empty());
    }

    #[test]
    fn test_code_fixes_merge_and_filter() {
        let service = service();
        let offset = SOURCE.find("b={5}").unwrap();
        let span = TextSpan::new(offset, 1);

        let fixes = service.code_fixes("app.tsx", span, &[2339]);
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].fix_id, "hostFix");
        assert_eq!(fixes[1].fix_id, add_missing_property::FIX_ID);

        // non-intersecting codes leave only the host's result
        let fixes = service.code_fixes("app.tsx", span, &[1005]);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].fix_id, "hostFix");
    }

    #[test]
    fn test_unknown_file_serves_host_results_only() {
        let service = service();
        let refactors = service.applicable_refactors("other.tsx", 0, None);
        assert_eq!(refactors.len(), 1);
        assert_eq!(refactors[0].name, "Host refactor");
    }

    #[test]
    fn test_quick_info_passthrough() {
        let service = service();
        assert_eq!(
            service.quick_info("app.tsx", 0),
            Some("host hover".to_string())
        );
    }
}
