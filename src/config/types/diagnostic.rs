//! Non-fatal findings reported by `showcase check`.

use owo_colors::OwoColorize;
use std::fmt;

// ============================================================================
// Diagnostic
// ============================================================================

/// A single configuration finding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// JSON field path (e.g., "features[2].title")
    pub field: String,
    pub message: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", "[".dimmed(), self.field.cyan(), "]".dimmed())?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Diagnostic>,
    /// Keys present in the document but not understood.
    unknown: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Diagnostic::new(field, message));
    }

    pub fn warn_with_hint(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.warnings
            .push(Diagnostic::new(field, message).with_hint(hint));
    }

    pub fn unknown_fields(&mut self, fields: Vec<String>) {
        self.unknown.extend(fields);
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.unknown.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len() + self.unknown.len()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.unknown.is_empty() {
            writeln!(f, "{}", "unknown fields (ignored):".yellow().bold())?;
            for field in &self.unknown {
                writeln!(f, "- {field}")?;
            }
        }
        for (i, warning) in self.warnings.iter().enumerate() {
            if i > 0 || !self.unknown.is_empty() {
                writeln!(f)?;
            }
            writeln!(f, "{warning}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_counts() {
        let mut diag = Diagnostics::new();
        assert!(diag.is_empty());
        diag.warn("faq[0].answer", "empty answer");
        diag.unknown_fields(vec!["colour".into()]);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.unknown(), &["colour".to_string()]);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new("contactForm.email", "missing").with_hint("set an address");
        let display = format!("{diag}");
        assert!(display.contains("contactForm.email"));
        assert!(display.contains("missing"));
        assert!(display.contains("set an address"));
    }
}
