//! Rule trait and the host-facing rule descriptor.
//!
//! A rule declares which node kinds it listens to and receives each matching
//! node through a single `run` dispatch. Per-file state lives in the rule's
//! associated `State` type, created fresh by the host for every file and
//! passed by `&mut` into each callback.

use oxc_ast::ast::{ImportDeclaration, JSXElement, Program};

use crate::diagnostic::{Diagnostic, Severity};
use crate::error::Result;

/// Kind of rule, mirrors the categories used by ESLint-style linters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Code that is likely wrong
    Problem,
    /// Code that could be written in a preferred way
    Suggestion,
    /// Formatting only
    Layout,
}

/// Which kind of automatic fix a rule may produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixKind {
    None,
    /// Fixes that change code and are safe to apply without review
    Code,
    /// Fixes that only touch whitespace
    Whitespace,
}

/// Static metadata for a rule
#[derive(Debug)]
pub struct RuleMeta {
    /// Rule name, e.g. "prefer-box-as-tag"
    pub name: &'static str,
    pub description: &'static str,
    pub docs_url: &'static str,
    pub category: RuleCategory,
    pub recommended: bool,
    pub fixable: FixKind,
    pub default_severity: Severity,
    /// Message templates by id; `{{ key }}` placeholders are interpolated
    pub messages: &'static [(&'static str, &'static str)],
}

impl RuleMeta {
    /// Rules here accept no options; the schema is always empty.
    pub fn schema_is_empty(&self) -> bool {
        true
    }

    pub fn message_template(&self, message_id: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, template)| *template)
    }

    /// Render a registered message, see [`interpolate`]
    pub fn format_message(&self, message_id: &str, data: &[(&str, &str)]) -> Option<String> {
        self.message_template(message_id)
            .map(|template| interpolate(template, data))
    }
}

/// Render `template`, replacing every `{{ key }}` with its value.
///
/// Unknown placeholders are left untouched so a missing key is visible in
/// the output rather than silently producing an empty string.
pub fn interpolate(template: &str, data: &[(&str, &str)]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        message.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            message.push_str(&rest[open..]);
            return message;
        };
        let key = after_open[..close].trim();
        match data.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => message.push_str(value),
            None => message.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }
    message.push_str(rest);

    message
}

/// Closed set of node kinds a rule can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    ImportDeclaration,
    JSXElement,
}

/// A borrowed AST node handed to a rule callback
#[derive(Debug, Clone, Copy)]
pub enum AstNode<'n, 'a> {
    Program(&'n Program<'a>),
    ImportDeclaration(&'n ImportDeclaration<'a>),
    JSXElement(&'n JSXElement<'a>),
}

impl AstNode<'_, '_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::ImportDeclaration(_) => NodeKind::ImportDeclaration,
            Self::JSXElement(_) => NodeKind::JSXElement,
        }
    }
}

/// Context passed to each rule callback during a file's walk
pub struct LintContext<'s> {
    /// Path of the file being linted
    pub path: &'s str,
    /// The original source code
    pub source_text: &'s str,
    diagnostics: Vec<Diagnostic>,
}

impl<'s> LintContext<'s> {
    pub fn new(path: &'s str, source_text: &'s str) -> Self {
        Self {
            path,
            source_text,
            diagnostics: Vec::new(),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Trait that every lint rule implements.
pub trait Rule: Send + Sync {
    /// Per-file traversal state
    type State: Default;

    fn meta(&self) -> &'static RuleMeta;

    /// Node kinds this rule wants `run` called for
    fn listens_to(&self) -> &'static [NodeKind];

    /// Handle one node. Errors abort the file's walk.
    fn run(
        &self,
        state: &mut Self::State,
        node: AstNode<'_, '_>,
        ctx: &mut LintContext<'_>,
    ) -> Result<()>;
}
