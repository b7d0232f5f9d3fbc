//! Parser façade for reading JSX sources
//!
//! Wraps `oxc_parser` so the linter only ever sees a fully parsed program or
//! an error. Autofixing partial ASTs would risk writing corrupt source back.

use crate::error::{LintError, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
    /// Allow parsing errors (returns partial AST)
    pub allow_errors: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::jsx()
    }
}

impl ParseOptions {
    /// Create parse options from file path.
    ///
    /// JavaScript files are always parsed with JSX enabled since React code
    /// routinely keeps JSX in `.js` files. TypeScript keeps its own variant
    /// because enabling JSX in `.ts` changes how generics parse.
    pub fn from_path(path: &str) -> Self {
        let source_type = match SourceType::from_path(path) {
            Ok(source_type) if source_type.is_typescript() => source_type,
            Ok(source_type) => source_type.with_jsx(true),
            Err(_) => SourceType::jsx(),
        };

        Self {
            source_type,
            allow_errors: false,
        }
    }

    /// Create parse options for JSX
    pub fn jsx() -> Self {
        Self {
            source_type: SourceType::jsx(),
            allow_errors: false,
        }
    }

    /// Create parse options for TSX
    pub fn tsx() -> Self {
        Self {
            source_type: SourceType::tsx(),
            allow_errors: false,
        }
    }
}

/// Parse diagnostic information
#[derive(Debug, Clone)]
pub struct ParseDiagnostic {
    /// Error message
    pub message: String,
}

/// Parsed program with AST and metadata
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: Program<'a>,
    /// Parse diagnostics, only non-empty when `allow_errors` is set
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Original source text
    pub source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    /// Get the program AST
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse source code into an AST
///
/// # Arguments
///
/// * `allocator` - Allocator for AST nodes (must outlive the returned program)
/// * `path` - Path used in error messages
/// * `source` - Source code to parse
/// * `options` - Parse options
pub fn parse<'a>(
    allocator: &'a Allocator,
    path: &str,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    let diagnostics: Vec<ParseDiagnostic> = result
        .errors
        .iter()
        .map(|err| ParseDiagnostic {
            message: err.to_string(),
        })
        .collect();

    if result.panicked && diagnostics.is_empty() {
        return Err(LintError::parse(path));
    }

    if !options.allow_errors && !diagnostics.is_empty() {
        return Err(LintError::parse_with_reason(
            path,
            diagnostics
                .iter()
                .map(|d| d.message.clone())
                .collect::<Vec<_>>()
                .join(", "),
        ));
    }

    Ok(ParsedProgram {
        program: result.program,
        diagnostics,
        source_text: source,
    })
}
