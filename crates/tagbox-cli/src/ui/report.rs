//! Rendering of lint diagnostics.
//!
//! Pretty output builds a [`LintReport`] per diagnostic and renders it with
//! miette's graphical handler; compact output prints one
//! `path:line:column` line per diagnostic; JSON output is a flat array.

use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceSpan};
use serde::Serialize;
use std::fmt;
use tagbox::{Diagnostic, LineIndex, Severity};

/// One diagnostic as a miette report, with the file as its source code
#[derive(Debug)]
pub struct LintReport {
    rule: &'static str,
    message: String,
    label: String,
    severity: Severity,
    fixable: bool,
    url: Option<&'static str>,
    src: NamedSource<String>,
    span: SourceSpan,
}

impl LintReport {
    pub fn new(
        file: &str,
        source: &str,
        diagnostic: &Diagnostic,
        url: Option<&'static str>,
    ) -> Self {
        let label = match diagnostic.data("tagName") {
            Some(tag) => format!("<{tag}> element"),
            None => "here".to_string(),
        };

        Self {
            rule: diagnostic.rule,
            message: diagnostic.message.clone(),
            label,
            severity: diagnostic.severity,
            fixable: diagnostic.is_fixable(),
            url: url.filter(|u| !u.is_empty()),
            src: NamedSource::new(file, source.to_string()),
            span: SourceSpan::from(diagnostic.span.start as usize..diagnostic.span.end as usize),
        }
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LintReport {}

impl miette::Diagnostic for LintReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.rule))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.fixable {
            Some(Box::new("run `tagbox fix` to rewrite it"))
        } else {
            None
        }
    }

    fn url<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.url {
            Some(url) => Some(Box::new(url)),
            None => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

/// Render diagnostics as annotated source snippets
pub fn render_pretty(
    file: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    url: Option<&'static str>,
    color: bool,
) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme).with_links(color);

    let mut out = String::new();
    for diagnostic in diagnostics {
        let report = LintReport::new(file, source, diagnostic, url);
        if handler.render_report(&mut out, &report).is_err() {
            // Fall back to the compact form rather than dropping the diagnostic
            out.push_str(&render_compact(file, source, std::slice::from_ref(diagnostic)));
        }
    }
    out
}

/// Render diagnostics as `path:line:column: severity: message [rule]` lines
pub fn render_compact(file: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    let index = LineIndex::new(source);
    diagnostics
        .iter()
        .map(|d| {
            let (line, column) = index.line_column(d.span.start, source);
            format!(
                "{file}:{line}:{column}: {}: {} [{}]\n",
                d.severity.as_str(),
                d.message,
                d.rule
            )
        })
        .collect()
}

/// Machine-readable diagnostic for `--format json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDiagnostic {
    pub file: String,
    pub rule: &'static str,
    pub message_id: &'static str,
    pub message: String,
    pub severity: &'static str,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub fixable: bool,
}

pub fn json_diagnostics(
    file: &str,
    source: &str,
    diagnostics: &[Diagnostic],
) -> Vec<JsonDiagnostic> {
    let index = LineIndex::new(source);
    diagnostics
        .iter()
        .map(|d| {
            let (line, column) = index.line_column(d.span.start, source);
            let (end_line, end_column) = index.line_column(d.span.end, source);
            JsonDiagnostic {
                file: file.to_string(),
                rule: d.rule,
                message_id: d.message_id,
                message: d.message.clone(),
                severity: d.severity.as_str(),
                line,
                column,
                end_line,
                end_column,
                fixable: d.is_fixable(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagbox::Linter;

    const SOURCE: &str = "import React from 'react';\nconst a = <nav>x</nav>;\n";

    fn diagnostics() -> Vec<Diagnostic> {
        Linter::new().lint_source("App.jsx", SOURCE).unwrap().diagnostics
    }

    #[test]
    fn test_compact_line() {
        let out = render_compact("src/App.jsx", SOURCE, &diagnostics());
        assert_eq!(
            out,
            "src/App.jsx:2:11: error: Use <Box as=\"nav\"></Box>. [prefer-box-as-tag]\n"
        );
    }

    #[test]
    fn test_json_positions() {
        let entries = json_diagnostics("src/App.jsx", SOURCE, &diagnostics());
        assert_eq!(entries.len(), 1);

        let value = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(value["file"], "src/App.jsx");
        assert_eq!(value["rule"], "prefer-box-as-tag");
        assert_eq!(value["messageId"], "disallowed");
        assert_eq!(value["line"], 2);
        assert_eq!(value["column"], 11);
        assert_eq!(value["endLine"], 2);
        assert_eq!(value["endColumn"], 23);
        assert_eq!(value["fixable"], true);
    }

    #[test]
    fn test_pretty_includes_rule_and_snippet() {
        let out = render_pretty("src/App.jsx", SOURCE, &diagnostics(), None, false);
        assert!(out.contains("prefer-box-as-tag"));
        assert!(out.contains("Use <Box as=\"nav\"></Box>."));
        assert!(out.contains("src/App.jsx"));
        assert!(out.contains("<nav> element"));
        assert!(out.contains("tagbox fix"));
    }

    #[test]
    fn test_report_metadata() {
        use miette::Diagnostic as _;

        let diagnostics = diagnostics();
        let report = LintReport::new("App.jsx", SOURCE, &diagnostics[0], Some(""));
        assert_eq!(report.to_string(), "Use <Box as=\"nav\"></Box>.");
        assert!(report.url().is_none());
        assert_eq!(report.labels().unwrap().count(), 1);
    }
}
