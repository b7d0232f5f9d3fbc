//! AST inspection helpers.
//!
//! Classifies JSX elements and imports, and snapshots the nodes that the rule
//! must remember across callbacks into owned handles. Visitor callbacks only
//! borrow nodes for the duration of the call, so anything kept in traversal
//! state has to be copied out.

use oxc_ast::ast::{
    ImportDeclaration, ImportDeclarationSpecifier, JSXElement, JSXElementName, Program,
};
use oxc_span::{GetSpan, Span};

/// Slice `span` out of `source_text`, empty if the span is out of range.
pub fn source_slice(source_text: &str, span: Span) -> &str {
    source_text
        .get(span.start as usize..span.end as usize)
        .unwrap_or_default()
}

/// Plain tag name of an element, e.g. `header` for `<header>`.
///
/// Returns `None` for components (`<Box>`), member expressions (`<ui.Box>`),
/// namespaced names (`<svg:rect>`) and `<this>`.
pub fn classify_tag<'e>(element: &'e JSXElement<'_>) -> Option<&'e str> {
    match &element.opening_element.name {
        JSXElementName::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Whether `import` loads runtime bindings from `path`.
///
/// `import type` declarations never match: adding a component to one would
/// leave it erased at runtime.
pub fn import_matches_path(import: &ImportDeclaration<'_>, path: &str) -> bool {
    import.source.value.as_str() == path && !import.import_kind.is_type()
}

/// What the import rewrite needs to know about the file's root node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHandle {
    pub span: Span,
    /// Offset where a new import statement goes: the first statement,
    /// which already sits after any hashbang and directives
    pub insert_at: u32,
}

impl ProgramHandle {
    pub fn from_program(program: &Program<'_>) -> Self {
        let insert_at = match program.body.first() {
            Some(statement) => statement.span().start,
            None => program
                .directives
                .last()
                .map_or(program.span.start, |directive| directive.span.end),
        };

        Self {
            span: program.span,
            insert_at,
        }
    }
}

/// A named specifier inside `{ ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSpecifier {
    pub span: Span,
    pub imported: String,
    pub local: String,
    /// Verbatim source text, e.g. `Flex as F` or `type BoxProps`
    pub text: String,
    /// Inline `type` modifier
    pub is_type: bool,
}

/// Specifier layout of an import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportShape {
    /// `import 'gestalt';` or `import {} from 'gestalt';`
    Bare,
    /// `import { A, B } from 'gestalt';`, optionally with a default binding
    Named {
        /// In source order
        specifiers: Vec<NamedSpecifier>,
        /// Text between the first two specifiers when it is only a comma and
        /// whitespace, `", "` otherwise
        separator: String,
    },
    /// `import Gestalt from 'gestalt';`
    DefaultOnly { default_end: u32 },
    /// `import * as Gestalt from 'gestalt';`, cannot be combined with named specifiers
    Namespace,
}

/// Owned snapshot of a matched import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportHandle {
    pub span: Span,
    /// Source literal as written, quotes included
    pub source_raw: String,
    pub shape: ImportShape,
}

impl ImportHandle {
    pub fn from_declaration(import: &ImportDeclaration<'_>, source_text: &str) -> Self {
        let source_raw = source_slice(source_text, import.source.span).to_string();

        let shape = match &import.specifiers {
            Some(specifiers) if !specifiers.is_empty() => {
                let mut named: Vec<NamedSpecifier> = Vec::new();
                let mut default_end = None;
                let mut namespace = false;

                for specifier in specifiers {
                    match specifier {
                        ImportDeclarationSpecifier::ImportSpecifier(spec) => {
                            named.push(NamedSpecifier {
                                span: spec.span,
                                imported: spec.imported.name().to_string(),
                                local: spec.local.name.to_string(),
                                text: source_slice(source_text, spec.span).to_string(),
                                is_type: spec.import_kind.is_type(),
                            });
                        }
                        ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => {
                            default_end = Some(spec.span.end);
                        }
                        ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => {
                            namespace = true;
                        }
                    }
                }

                match (namespace, named.is_empty(), default_end) {
                    (true, _, _) => ImportShape::Namespace,
                    (false, false, _) => {
                        let separator = specifier_separator(&named, source_text);
                        ImportShape::Named {
                            specifiers: named,
                            separator,
                        }
                    }
                    (false, true, Some(default_end)) => ImportShape::DefaultOnly { default_end },
                    (false, true, None) => ImportShape::Bare,
                }
            }
            _ => ImportShape::Bare,
        };

        Self {
            span: import.span,
            source_raw,
            shape,
        }
    }

    /// Whether `name` is already bound as a value under its own name
    pub fn imports(&self, name: &str) -> bool {
        match &self.shape {
            ImportShape::Named { specifiers, .. } => specifiers
                .iter()
                .any(|spec| !spec.is_type && spec.imported == name && spec.local == name),
            _ => false,
        }
    }
}

fn specifier_separator(specifiers: &[NamedSpecifier], source_text: &str) -> String {
    match specifiers {
        [first, second, ..] => {
            let between = source_slice(source_text, Span::new(first.span.end, second.span.start));
            if between.trim() == "," {
                between.to_string()
            } else {
                ", ".to_string()
            }
        }
        _ => ", ".to_string(),
    }
}
