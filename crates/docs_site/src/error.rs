//! Structured error types for descriptor loading, validation, and emission.

use std::path::Path;

use thiserror::Error;

/// Stable error categories for docs-site workflows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocsErrorCategory {
    /// Unparseable or structurally invalid descriptor.
    Config,
    /// Descriptor parsed but a field is semantically invalid.
    Validation,
    /// Invalid command-line usage.
    Usage,
    /// Filesystem failure.
    Io,
}

/// Docs-site error with optional operation, target, and hint context.
///
/// Context is appended to the display output so CLI failures stay actionable.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}{}", context_suffix(.operation, .target, .hint))]
pub struct DocsError {
    /// High-level error category.
    pub category: DocsErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Descriptor field the error refers to, when known.
    pub field: Option<&'static str>,
    /// Optional operation name.
    pub operation: Option<String>,
    /// Optional path target.
    pub target: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for docs-site internals.
pub type DocsResult<T> = Result<T, DocsError>;

impl DocsError {
    /// Create an error with the given category and message.
    pub fn new(category: DocsErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            field: None,
            operation: None,
            target: None,
            hint: None,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(DocsErrorCategory::Config, message)
    }

    /// Create a validation error for one descriptor field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        let mut err = Self::new(
            DocsErrorCategory::Validation,
            format!("invalid `{field}`: {}", message.into()),
        );
        err.field = Some(field);
        err
    }

    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(DocsErrorCategory::Usage, message)
    }

    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(DocsErrorCategory::Io, message)
    }

    /// Attach an operation label.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach a target path.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn context_suffix(
    operation: &Option<String>,
    target: &Option<String>,
    hint: &Option<String>,
) -> String {
    let mut out = String::new();
    if let Some(operation) = operation {
        out.push_str(&format!(" [operation: {operation}]"));
    }
    if let Some(target) = target {
        out.push_str(&format!(" [target: {target}]"));
    }
    if let Some(hint) = hint {
        out.push_str(&format!(" [hint: {hint}]"));
    }
    out
}

impl From<std::io::Error> for DocsError {
    fn from(value: std::io::Error) -> Self {
        DocsError::io(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_context_in_stable_order() {
        let err = DocsError::config("failed to parse docs_site.toml")
            .with_hint("check the TOML syntax")
            .with_operation("load site config")
            .with_path(Path::new("/tmp/docs_site.toml"));

        assert_eq!(
            err.to_string(),
            "failed to parse docs_site.toml [operation: load site config] [target: /tmp/docs_site.toml] [hint: check the TOML syntax]"
        );
    }

    #[test]
    fn validation_errors_record_the_field() {
        let err = DocsError::validation("base_url", "must start with `/`");
        assert_eq!(err.category, DocsErrorCategory::Validation);
        assert_eq!(err.field, Some("base_url"));
        assert_eq!(err.to_string(), "invalid `base_url`: must start with `/`");
    }
}
