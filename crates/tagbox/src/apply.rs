//! Applying fixes to source text.
//!
//! Each diagnostic's fix is atomic: either all of its edits are applied or
//! none. Fixes that would overlap an already accepted fix are left for the
//! next pass, after the file has been re-linted against the updated text.

use tracing::debug;

use crate::diagnostic::{Diagnostic, Fix, TextEdit};
use crate::error::{LintError, Result};

/// Result of one fix pass over a source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutput {
    /// Source text with the accepted fixes applied
    pub code: String,
    /// Number of fixes applied
    pub applied: usize,
    /// Number of fixes deferred because they overlapped an earlier fix
    pub skipped: usize,
}

impl FixOutput {
    pub fn modified(&self) -> bool {
        self.applied > 0
    }
}

/// Apply non-overlapping edits to a copy of `source_text`.
///
/// Edits are validated against the original text and applied back to front
/// so earlier offsets stay valid.
pub fn apply_edits(source_text: &str, edits: &[TextEdit]) -> Result<String> {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|edit| (edit.span.start, edit.span.end));

    for edit in &sorted {
        let (start, end) = (edit.span.start as usize, edit.span.end as usize);
        if start > end
            || end > source_text.len()
            || !source_text.is_char_boundary(start)
            || !source_text.is_char_boundary(end)
        {
            return Err(LintError::InvalidEdit {
                start: edit.span.start,
                end: edit.span.end,
                len: source_text.len(),
            });
        }
    }

    let mut code = source_text.to_string();
    for edit in sorted.iter().rev() {
        code.replace_range(
            edit.span.start as usize..edit.span.end as usize,
            &edit.replacement,
        );
    }

    Ok(code)
}

/// Apply every fix from `diagnostics` that does not overlap an earlier one.
pub fn apply_fixes(source_text: &str, diagnostics: &[Diagnostic]) -> Result<FixOutput> {
    let mut fixes: Vec<&Fix> = diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fix.as_ref())
        .filter(|fix| !fix.is_empty())
        .collect();
    fixes.sort_by_key(|fix| fix.span().map(|span| (span.start, span.end)));

    let mut accepted: Vec<TextEdit> = Vec::new();
    let mut applied = 0;
    let mut skipped = 0;

    for fix in fixes {
        let overlaps = fix
            .edits
            .iter()
            .any(|edit| accepted.iter().any(|other| edit.conflicts_with(other)));
        if overlaps {
            debug!(span = ?fix.span(), "deferring overlapping fix to the next pass");
            skipped += 1;
            continue;
        }
        accepted.extend(fix.edits.iter().cloned());
        applied += 1;
    }

    let code = apply_edits(source_text, &accepted)?;

    Ok(FixOutput {
        code,
        applied,
        skipped,
    })
}
