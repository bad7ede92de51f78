use colored::Colorize;

use enumtab_common::{Diagnostic, DiagnosticCategory};

/// Renders diagnostics as `Type - category ETcode: message` lines.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let location = if diagnostic.type_name.is_empty() {
            "<unknown>".to_string()
        } else if self.color {
            diagnostic.type_name.bold().to_string()
        } else {
            diagnostic.type_name.clone()
        };

        let mut output = location;
        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        let code = self.format_code(diagnostic.code);
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);
        output
    }

    /// `Found 2 errors and 1 warning.` or `None` when nothing needs reporting.
    pub fn summary(&self, diagnostics: &[Diagnostic]) -> Option<String> {
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let warnings = diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Warning)
            .count();
        if errors == 0 && warnings == 0 {
            return None;
        }

        let plural = |n: usize, word: &str| {
            if n == 1 {
                format!("1 {word}")
            } else {
                format!("{n} {word}s")
            }
        };
        let text = match (errors, warnings) {
            (0, w) => format!("Found {}.", plural(w, "warning")),
            (e, 0) => format!("Found {}.", plural(e, "error")),
            (e, w) => format!("Found {} and {}.", plural(e, "error"), plural(w, "warning")),
        };
        Some(if self.color && errors > 0 {
            text.red().to_string()
        } else {
            text
        })
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.to_string();
        if !self.color {
            return label;
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }

        let label = format!("ET{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}
