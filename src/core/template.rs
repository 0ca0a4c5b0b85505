//! Naming templates
//!
//! Templates resolve named placeholders into concrete file names and header
//! labels:
//! - `{task_num}` (required) - the task sequence number
//! - `{prefix}` (optional) - a caller-supplied or default name prefix
//!
//! A template is validated and its prefix resolved before any file I/O
//! happens; only the number placeholder survives compilation.

use regex::Regex;

use crate::error::UsageError;

/// The mandatory number placeholder.
pub const TASK_NUM_PLACEHOLDER: &str = "{task_num}";

/// The optional prefix placeholder.
pub const PREFIX_PLACEHOLDER: &str = "{prefix}";

/// Default file name template for generated and discovered tasks.
pub const DEFAULT_TASK_FILE_NAME_TEMPLATE: &str = "{prefix} {task_num}.cpp";

/// Default prefix substituted into file name templates.
pub const DEFAULT_TASK_FILE_NAME_PREFIX: &str = "Task";

/// Default header label template for merged output.
pub const DEFAULT_TASK_NAME_TEMPLATE: &str = "{prefix} #{task_num}";

/// Default prefix substituted into header label templates.
pub const DEFAULT_TASK_NAME_PREFIX: &str = DEFAULT_TASK_FILE_NAME_PREFIX;

/// Extension appended to file name templates unless suppressed.
pub const INPUT_FILE_EXTENSION: &str = ".cpp";

/// Extension appended to merge output names unless suppressed.
pub const OUTPUT_FILE_EXTENSION: &str = ".txt";

/// Widest task number the discovery pattern matches (three digits).
pub const MAX_NUMBER_WIDTH: usize = 3;

/// Which template a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRole {
    /// Names of the files on disk.
    TaskFileName,
    /// Header labels in the merged output.
    TaskName,
}

impl TemplateRole {
    pub fn label(self) -> &'static str {
        match self {
            TemplateRole::TaskFileName => "task file name",
            TemplateRole::TaskName => "task name",
        }
    }
}

/// A validated naming template with its prefix already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    resolved: String,
}

impl NameTemplate {
    /// Validate `template` and resolve its `{prefix}` placeholder.
    ///
    /// Fails when the number placeholder is absent, or when `prefix` is
    /// supplied for a template that has no `{prefix}` placeholder. A
    /// placeholder with no supplied prefix resolves to `default_prefix`.
    pub fn compile(
        template: &str,
        prefix: Option<&str>,
        default_prefix: &str,
        role: TemplateRole,
    ) -> Result<Self, UsageError> {
        if !template.contains(TASK_NUM_PLACEHOLDER) {
            return Err(UsageError::MissingNumberPlaceholder { role: role.label() });
        }

        let has_prefix_placeholder = template.contains(PREFIX_PLACEHOLDER);
        if !has_prefix_placeholder && prefix.is_some() {
            return Err(UsageError::PrefixWithoutPlaceholder { role: role.label() });
        }

        let resolved = if has_prefix_placeholder {
            template.replace(PREFIX_PLACEHOLDER, prefix.unwrap_or(default_prefix))
        } else {
            template.to_string()
        };

        Ok(Self { resolved })
    }

    /// Append `extension` unless the template already ends with it.
    pub fn ensure_extension(mut self, extension: &str) -> Self {
        if !self.resolved.ends_with(extension) {
            self.resolved.push_str(extension);
        }
        self
    }

    /// Render a concrete name for one task number.
    pub fn render(&self, task_num: u32) -> String {
        self.resolved
            .replace(TASK_NUM_PLACEHOLDER, &task_num.to_string())
    }

    /// Byte offset where the rendered number starts.
    ///
    /// The text left of the placeholder is literal, so the offset is the
    /// same in the template and in every name it matches.
    pub fn number_start(&self) -> usize {
        self.resolved.find(TASK_NUM_PLACEHOLDER).unwrap_or(0)
    }

    /// Regex matching names this template produces with a task number of
    /// exactly `width` digits (no leading zeros).
    pub fn width_regex(&self, width: usize) -> Result<Regex, regex::Error> {
        let mut digits = String::from("[1-9]");
        for _ in 1..width {
            digits.push_str("[0-9]");
        }

        let body = self
            .resolved
            .split(TASK_NUM_PLACEHOLDER)
            .map(|literal| regex::escape(literal))
            .collect::<Vec<_>>()
            .join(&digits);

        Regex::new(&format!("^{}$", body))
    }

    /// Resolved template text, the number placeholder still in place.
    pub fn as_str(&self) -> &str {
        &self.resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(template: &str, prefix: Option<&str>) -> Result<NameTemplate, UsageError> {
        NameTemplate::compile(
            template,
            prefix,
            DEFAULT_TASK_FILE_NAME_PREFIX,
            TemplateRole::TaskFileName,
        )
    }

    #[test]
    fn test_compile_requires_number_placeholder() {
        let err = compile("Task.cpp", None).unwrap_err();
        assert_eq!(
            err,
            UsageError::MissingNumberPlaceholder {
                role: "task file name"
            }
        );
    }

    #[test]
    fn test_compile_rejects_prefix_without_placeholder() {
        let err = compile("T{task_num}.cpp", Some("Day")).unwrap_err();
        assert_eq!(
            err,
            UsageError::PrefixWithoutPlaceholder {
                role: "task file name"
            }
        );
    }

    #[test]
    fn test_compile_uses_default_prefix() {
        let template = compile(DEFAULT_TASK_FILE_NAME_TEMPLATE, None).unwrap();
        assert_eq!(template.render(3), "Task 3.cpp");
    }

    #[test]
    fn test_compile_uses_supplied_prefix() {
        let template = compile("{prefix}_{task_num}.cpp", Some("Day")).unwrap();
        assert_eq!(template.render(12), "Day_12.cpp");
    }

    #[test]
    fn test_compile_without_prefix_placeholder() {
        let template = compile("problem-{task_num}.cpp", None).unwrap();
        assert_eq!(template.render(1), "problem-1.cpp");
    }

    #[test]
    fn test_ensure_extension_appends_once() {
        let template = compile("{prefix} {task_num}", None)
            .unwrap()
            .ensure_extension(INPUT_FILE_EXTENSION);
        assert_eq!(template.render(1), "Task 1.cpp");

        let unchanged = compile(DEFAULT_TASK_FILE_NAME_TEMPLATE, None)
            .unwrap()
            .ensure_extension(INPUT_FILE_EXTENSION);
        assert_eq!(unchanged.render(1), "Task 1.cpp");
    }

    #[test]
    fn test_number_start_is_prefix_length() {
        let template = compile(DEFAULT_TASK_FILE_NAME_TEMPLATE, None).unwrap();
        assert_eq!(template.number_start(), "Task ".len());

        let name = template.render(7);
        assert_eq!(&name[template.number_start()..], "7.cpp");
    }

    #[test]
    fn test_width_regex_matches_exact_width() {
        let template = compile(DEFAULT_TASK_FILE_NAME_TEMPLATE, None).unwrap();

        let one = template.width_regex(1).unwrap();
        assert!(one.is_match("Task 7.cpp"));
        assert!(!one.is_match("Task 12.cpp"));
        assert!(!one.is_match("Task 0.cpp"));

        let two = template.width_regex(2).unwrap();
        assert!(two.is_match("Task 12.cpp"));
        assert!(!two.is_match("Task 7.cpp"));
        assert!(!two.is_match("Task 02.cpp"));

        let three = template.width_regex(3).unwrap();
        assert!(three.is_match("Task 123.cpp"));
        assert!(!three.is_match("Task 12.cpp"));
    }

    #[test]
    fn test_width_regex_escapes_literal_text() {
        let template = compile(DEFAULT_TASK_FILE_NAME_TEMPLATE, None).unwrap();
        let one = template.width_regex(1).unwrap();

        // The '.' in '.cpp' must not match an arbitrary character.
        assert!(!one.is_match("Task 1xcpp"));
        assert!(!one.is_match("xTask 1.cpp"));
        assert!(!one.is_match("Task 1.cpp.bak"));
    }
}
