//! The host side of a rule: parsing, walking and fixing a single file.
//!
//! Every call to [`Linter::lint_source`] owns its allocator, its
//! [`LintContext`] and a fresh rule state, so one `Linter` can be shared
//! across threads linting different files.

use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportDeclaration, JSXElement, Program};
use oxc_ast_visit::{Visit, walk};
use tracing::{debug, warn};

use crate::apply::apply_fixes;
use crate::diagnostic::{Diagnostic, Severity};
use crate::error::{LintError, Result};
use crate::parser::{ParseOptions, parse};
use crate::rule::{AstNode, LintContext, Rule};
use crate::rules::PreferBoxAsTag;

/// Default number of lint/fix rounds before giving up on remaining fixes
pub const DEFAULT_MAX_FIX_PASSES: usize = 10;

/// Options for the linter host
#[derive(Debug, Clone)]
pub struct LinterOptions {
    /// Upper bound on lint/fix rounds in [`Linter::fix_source`]
    pub max_fix_passes: usize,
}

impl Default for LinterOptions {
    fn default() -> Self {
        Self {
            max_fix_passes: DEFAULT_MAX_FIX_PASSES,
        }
    }
}

/// Diagnostics found in one file
#[derive(Debug, Clone)]
pub struct LintResult {
    pub path: String,
    /// Sorted by position
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_fixes(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fixable)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}

/// Outcome of fixing one file to a fixed point
#[derive(Debug, Clone)]
pub struct FixOutcome {
    /// Final source text
    pub code: String,
    /// Whether `code` differs from the input
    pub changed: bool,
    /// Fix rounds that modified the text
    pub passes: usize,
    pub fixes_applied: usize,
    /// Diagnostics still present in `code`
    pub remaining: Vec<Diagnostic>,
}

/// Runs a rule over source files
pub struct Linter<R: Rule = PreferBoxAsTag> {
    rule: R,
    options: LinterOptions,
}

impl Linter<PreferBoxAsTag> {
    pub fn new() -> Self {
        Self::with_rule(PreferBoxAsTag)
    }
}

impl Default for Linter<PreferBoxAsTag> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rule> Linter<R> {
    pub fn with_rule(rule: R) -> Self {
        Self {
            rule,
            options: LinterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LinterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn options(&self) -> &LinterOptions {
        &self.options
    }

    /// Lint `source`. The source type is picked from `path`.
    ///
    /// # Errors
    ///
    /// Fails if the source does not parse, or if the rule reports a broken
    /// traversal precondition.
    pub fn lint_source(&self, path: &str, source: &str) -> Result<LintResult> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, path, source, ParseOptions::from_path(path))?;

        let mut ctx = LintContext::new(path, parsed.source_text);
        let mut walker = RuleWalker {
            rule: &self.rule,
            state: R::State::default(),
            ctx: &mut ctx,
            error: None,
        };
        walker.visit_program(parsed.ast());

        if let Some(err) = walker.error.take() {
            return Err(err);
        }

        let mut diagnostics = ctx.into_diagnostics();
        diagnostics.sort_by_key(|d| (d.span.start, d.span.end));
        debug!(path, count = diagnostics.len(), "linted");

        Ok(LintResult {
            path: path.to_string(),
            diagnostics,
        })
    }

    /// Lint and fix `source` until no applicable fix remains.
    ///
    /// Fixes deferred because they overlapped are picked up by the next
    /// round, which re-lints the updated text.
    pub fn fix_source(&self, path: &str, source: &str) -> Result<FixOutcome> {
        let mut code = source.to_string();
        let mut passes = 0;
        let mut fixes_applied = 0;

        loop {
            let result = self.lint_source(path, &code)?;

            if !result.has_fixes() || passes >= self.options.max_fix_passes {
                if result.has_fixes() {
                    warn!(path, passes, "fixes still pending after the maximum number of passes");
                }
                return Ok(FixOutcome {
                    changed: code != source,
                    code,
                    passes,
                    fixes_applied,
                    remaining: result.diagnostics,
                });
            }

            let output = apply_fixes(&code, &result.diagnostics)?;
            passes += 1;
            fixes_applied += output.applied;
            debug!(
                path,
                pass = passes,
                applied = output.applied,
                skipped = output.skipped,
                "applied fixes"
            );
            code = output.code;
        }
    }
}

/// Pre-order walk dispatching the nodes a rule listens to
struct RuleWalker<'r, 'c, 's, R: Rule> {
    rule: &'r R,
    state: R::State,
    ctx: &'c mut LintContext<'s>,
    /// First rule error; later nodes are skipped once set
    error: Option<LintError>,
}

impl<R: Rule> RuleWalker<'_, '_, '_, R> {
    fn dispatch(&mut self, node: AstNode<'_, '_>) {
        if self.error.is_some() || !self.rule.listens_to().contains(&node.kind()) {
            return;
        }
        if let Err(err) = self.rule.run(&mut self.state, node, self.ctx) {
            self.error = Some(err);
        }
    }
}

impl<'a, R: Rule> Visit<'a> for RuleWalker<'_, '_, '_, R> {
    fn visit_program(&mut self, it: &Program<'a>) {
        self.dispatch(AstNode::Program(it));
        walk::walk_program(self, it);
    }

    fn visit_import_declaration(&mut self, it: &ImportDeclaration<'a>) {
        self.dispatch(AstNode::ImportDeclaration(it));
        walk::walk_import_declaration(self, it);
    }

    fn visit_jsx_element(&mut self, it: &JSXElement<'a>) {
        self.dispatch(AstNode::JSXElement(it));
        walk::walk_jsx_element(self, it);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_result_counts() {
        let linter = Linter::new();
        let result = linter
            .lint_source("App.jsx", "const a = <><nav /><div /><header /></>;")
            .unwrap();

        assert_eq!(result.diagnostics.len(), 2);
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 0);
        assert!(result.has_fixes());
        assert!(!result.is_clean());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let linter = Linter::new();
        let err = linter.lint_source("App.jsx", "<nav>").unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }));
    }

    #[test]
    fn test_zero_passes_leaves_source_untouched() {
        let linter = Linter::new().with_options(LinterOptions { max_fix_passes: 0 });
        let outcome = linter.fix_source("App.jsx", "<nav />;").unwrap();

        assert!(!outcome.changed);
        assert_eq!(outcome.passes, 0);
        assert_eq!(outcome.remaining.len(), 1);
    }
}
