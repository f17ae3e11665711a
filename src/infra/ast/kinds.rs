//! Syntax kind mapping
//!
//! Closed tagged variant over the grammar node kinds the engine actually
//! consumes, so match sites are exhaustive instead of chaining kind-string
//! comparisons. Kind strings are sourced from the TSX grammar's
//! `node-types.json`; everything else collapses to `Other`.

use tree_sitter::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    // Markup
    JsxElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxSelfClosingElement,
    JsxAttribute,
    JsxExpression,
    JsxText,

    // Identifiers
    Identifier,
    PropertyIdentifier,
    TypeIdentifier,

    // Literals
    String,
    TemplateString,
    Number,
    True,
    False,

    // Types
    TypeAliasDeclaration,
    TypeAnnotation,
    ObjectType,
    PropertySignature,

    // Functions and bindings
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunction,
    MethodDefinition,
    StatementBlock,
    FormalParameters,
    RequiredParameter,
    OptionalParameter,
    VariableDeclarator,

    Comment,
    Other,
}

impl SyntaxKind {
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "jsx_element" => Self::JsxElement,
            "jsx_opening_element" => Self::JsxOpeningElement,
            "jsx_closing_element" => Self::JsxClosingElement,
            "jsx_self_closing_element" => Self::JsxSelfClosingElement,
            "jsx_attribute" => Self::JsxAttribute,
            "jsx_expression" => Self::JsxExpression,
            "jsx_text" => Self::JsxText,
            "identifier" => Self::Identifier,
            "property_identifier" => Self::PropertyIdentifier,
            "type_identifier" => Self::TypeIdentifier,
            "string" => Self::String,
            "template_string" => Self::TemplateString,
            "number" => Self::Number,
            "true" => Self::True,
            "false" => Self::False,
            "type_alias_declaration" => Self::TypeAliasDeclaration,
            "type_annotation" => Self::TypeAnnotation,
            "object_type" => Self::ObjectType,
            "property_signature" => Self::PropertySignature,
            "function_declaration" => Self::FunctionDeclaration,
            // renamed from "function" in newer grammar revisions
            "function_expression" | "function" => Self::FunctionExpression,
            "arrow_function" => Self::ArrowFunction,
            "method_definition" => Self::MethodDefinition,
            "statement_block" => Self::StatementBlock,
            "formal_parameters" => Self::FormalParameters,
            "required_parameter" => Self::RequiredParameter,
            "optional_parameter" => Self::OptionalParameter,
            "variable_declarator" => Self::VariableDeclarator,
            "comment" => Self::Comment,
            _ => Self::Other,
        }
    }

    /// Opening, closing, or self-closing markup element.
    pub fn is_markup_element(self) -> bool {
        matches!(
            self,
            Self::JsxOpeningElement | Self::JsxClosingElement | Self::JsxSelfClosingElement
        )
    }

    /// Element kinds that carry an attribute list.
    pub fn is_opening_like(self) -> bool {
        matches!(self, Self::JsxOpeningElement | Self::JsxSelfClosingElement)
    }

    pub fn is_identifier(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::PropertyIdentifier | Self::TypeIdentifier
        )
    }

    /// Function-shaped declarations that can host a ref binding.
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration
                | Self::FunctionExpression
                | Self::ArrowFunction
                | Self::MethodDefinition
        )
    }
}

/// Classified kind of a tree-sitter node.
pub fn kind_of(node: &Node) -> SyntaxKind {
    SyntaxKind::from_grammar(node.kind())
}
