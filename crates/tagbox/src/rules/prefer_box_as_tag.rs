//! prefer-box-as-tag
//!
//! Prefer `<Box as="...">` over the HTML tags Box can render through its
//! `as` prop.
//!
//! ## Examples
//!
//! Bad:
//! ```jsx
//! <header data-id="1">Title</header>
//! ```
//!
//! Good:
//! ```jsx
//! import { Box } from 'gestalt';
//!
//! <Box data-id="1" as="header">Title</Box>
//! ```
//!
//! The fix renames the element and repairs the `gestalt` import. Only the
//! first fix of a file carries the import edit.

use oxc_ast::ast::{ImportDeclaration, JSXElement, Program};
use tracing::{debug, trace};

use crate::ast_helpers::{ImportHandle, ProgramHandle, classify_tag, import_matches_path};
use crate::compose::{JsxProp, compose_element_rewrite, compose_import_rewrite};
use crate::diagnostic::{Diagnostic, Fix, Severity};
use crate::error::{LintError, Result};
use crate::rule::{
    AstNode, FixKind, LintContext, NodeKind, Rule, RuleCategory, RuleMeta, interpolate,
};

/// HTML tags that `Box` renders through its `as` prop
pub const SUPPORTED_HTML_TAGS: [&str; 11] = [
    "article",
    "aside",
    "details",
    "figcaption",
    "figure",
    "footer",
    "header",
    "main",
    "nav",
    "section",
    "summary",
];

/// Component that replaces the HTML tags
pub const TARGET_COMPONENT: &str = "Box";

/// Module the component is imported from
pub const TARGET_MODULE: &str = "gestalt";

/// Name of the property that records the original tag
pub const DISCRIMINATOR_PROP: &str = "as";

const MESSAGE_ID: &str = "disallowed";

const DISALLOWED_MESSAGE: &str = "Use <Box as=\"{{ tagName }}\"></Box>.";

static META: RuleMeta = RuleMeta {
    name: "prefer-box-as-tag",
    description: "Prefer Box: prevent HTML tags supported in Box through the `as` prop: \
                  article, aside, details, figcaption, figure, footer, header, main, nav, \
                  section, summary, instead",
    docs_url: "https://gestalt.pinterest.systems/Eslint%20Plugin#gestaltprefer-box-as-tag",
    category: RuleCategory::Suggestion,
    recommended: true,
    fixable: FixKind::Code,
    default_severity: Severity::Error,
    messages: &[(MESSAGE_ID, DISALLOWED_MESSAGE)],
};

const LISTENS_TO: &[NodeKind] = &[
    NodeKind::Program,
    NodeKind::ImportDeclaration,
    NodeKind::JSXElement,
];

/// Per-file state of the rule
#[derive(Debug, Default)]
pub struct TraversalContext {
    program: Option<ProgramHandle>,
    matched_import: Option<ImportHandle>,
    import_fix_applied: bool,
}

impl TraversalContext {
    pub fn program(&self) -> Option<&ProgramHandle> {
        self.program.as_ref()
    }

    pub fn matched_import(&self) -> Option<&ImportHandle> {
        self.matched_import.as_ref()
    }

    /// Whether an import rewrite has already been handed out for this file
    pub fn import_fix_applied(&self) -> bool {
        self.import_fix_applied
    }
}

/// Prefer `Box` over semantic HTML tags
#[derive(Debug, Default, Clone, Copy)]
pub struct PreferBoxAsTag;

impl PreferBoxAsTag {
    pub fn is_supported_tag(tag: &str) -> bool {
        SUPPORTED_HTML_TAGS.contains(&tag)
    }

    pub fn on_program_enter(state: &mut TraversalContext, program: &Program<'_>) {
        state.program = Some(ProgramHandle::from_program(program));
    }

    pub fn on_import_declaration(
        state: &mut TraversalContext,
        import: &ImportDeclaration<'_>,
        ctx: &LintContext<'_>,
    ) {
        if !import_matches_path(import, TARGET_MODULE) {
            return;
        }
        // First match wins
        if state.matched_import.is_some() {
            trace!(path = ctx.path, "ignoring repeated {} import", TARGET_MODULE);
            return;
        }
        trace!(path = ctx.path, span = ?import.span, "matched {} import", TARGET_MODULE);
        state.matched_import = Some(ImportHandle::from_declaration(import, ctx.source_text));
    }

    pub fn on_jsx_element(
        state: &mut TraversalContext,
        element: &JSXElement<'_>,
        ctx: &mut LintContext<'_>,
    ) -> Result<()> {
        let Some(tag_name) = classify_tag(element) else {
            return Ok(());
        };
        if !Self::is_supported_tag(tag_name) {
            return Ok(());
        }

        let prop = JsxProp::string(DISCRIMINATOR_PROP, tag_name);
        let mut edits =
            compose_element_rewrite(ctx.source_text, element, TARGET_COMPONENT, &prop);

        if !state.import_fix_applied {
            let program = state.program().ok_or(LintError::MissingProgram)?;
            let import_edits = compose_import_rewrite(
                program,
                state.matched_import(),
                TARGET_COMPONENT,
                TARGET_MODULE,
            );
            debug!(
                path = ctx.path,
                edits = import_edits.len(),
                existing = state.matched_import.is_some(),
                "composed import fix"
            );
            edits.extend(import_edits);
            state.import_fix_applied = true;
        }

        let message = interpolate(DISALLOWED_MESSAGE, &[("tagName", tag_name)]);
        debug!(path = ctx.path, tag = tag_name, span = ?element.span, "disallowed tag");

        ctx.report(Diagnostic {
            rule: META.name,
            message_id: MESSAGE_ID,
            message,
            data: vec![("tagName", tag_name.to_string())],
            span: element.span,
            severity: META.default_severity,
            fix: Some(Fix::new(edits)),
        });

        Ok(())
    }
}

impl Rule for PreferBoxAsTag {
    type State = TraversalContext;

    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn listens_to(&self) -> &'static [NodeKind] {
        LISTENS_TO
    }

    fn run(
        &self,
        state: &mut TraversalContext,
        node: AstNode<'_, '_>,
        ctx: &mut LintContext<'_>,
    ) -> Result<()> {
        match node {
            AstNode::Program(program) => {
                Self::on_program_enter(state, program);
                Ok(())
            }
            AstNode::ImportDeclaration(import) => {
                Self::on_import_declaration(state, import, ctx);
                Ok(())
            }
            AstNode::JSXElement(element) => Self::on_jsx_element(state, element, ctx),
        }
    }
}
