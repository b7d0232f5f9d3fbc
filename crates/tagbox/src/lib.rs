//! JSX lint rule that prefers `<Box as="...">` over semantic HTML tags
//!
//! This crate provides the `prefer-box-as-tag` rule, the host that drives it
//! over an OXC AST, and the fixer that applies its autofixes.
//!
//! # Features
//!
//! - **Single-pass traversal** - one pre-order walk per file, with explicit per-file state
//! - **Minimal edits** - tag names are renamed in place and attributes are never reformatted
//! - **Import repair** - the `gestalt` import is created or extended exactly once per file
//! - **Atomic fixes** - overlapping fixes are deferred to a later pass, never half-applied
//!
//! # Examples
//!
//! ## Linting
//!
//! ```rust
//! use tagbox::Linter;
//!
//! let linter = Linter::new();
//! let result = linter.lint_source("App.jsx", "const a = <header>Hi</header>;")?;
//!
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.diagnostics[0].message, "Use <Box as=\"header\"></Box>.");
//! # Ok::<(), tagbox::LintError>(())
//! ```
//!
//! ## Fixing
//!
//! ```rust
//! use tagbox::Linter;
//!
//! let linter = Linter::new();
//! let outcome = linter.fix_source("App.jsx", "const a = <nav>Hi</nav>;")?;
//!
//! assert_eq!(
//!     outcome.code,
//!     "import { Box } from 'gestalt';\nconst a = <Box as=\"nav\">Hi</Box>;"
//! );
//! assert!(outcome.remaining.is_empty());
//! # Ok::<(), tagbox::LintError>(())
//! ```

mod apply;
mod ast_helpers;
mod compose;
mod diagnostic;
mod error;
mod linter;
mod location;
mod parser;
mod rule;

pub mod rules;

pub use apply::{FixOutput, apply_edits, apply_fixes};
pub use ast_helpers::{
    ImportHandle, ImportShape, NamedSpecifier, ProgramHandle, classify_tag, import_matches_path,
    source_slice,
};
pub use compose::{JsxProp, compose_element_rewrite, compose_import_rewrite};
pub use diagnostic::{Diagnostic, Fix, Severity, TextEdit};
pub use error::{LintError, Result};
pub use linter::{DEFAULT_MAX_FIX_PASSES, FixOutcome, LintResult, Linter, LinterOptions};
pub use location::LineIndex;
pub use parser::{ParseDiagnostic, ParseOptions, ParsedProgram, parse};
pub use rule::{
    AstNode, FixKind, LintContext, NodeKind, Rule, RuleCategory, RuleMeta, interpolate,
};
pub use rules::{PreferBoxAsTag, SUPPORTED_HTML_TAGS, TraversalContext};

// Re-export OXC foundation types so callers don't need matching versions
pub mod oxc {
    //! OXC (Oxidation Compiler) types that appear in this crate's public API.

    /// Re-export allocator - required for all OXC AST operations
    pub use oxc_allocator::Allocator;

    /// Re-export AST types
    pub use oxc_ast::ast;

    /// Re-export span types for source location tracking
    pub use oxc_span::{GetSpan, SourceType, Span};
}
