//! Usage-error taxonomy
//!
//! Usage errors are raised before any file I/O happens and always terminate
//! the process with a non-zero status. Soft conditions (existing target
//! files, missing sequence numbers) are not errors: commands report them
//! and return normally.

use thiserror::Error;

/// Errors caused by invalid command-line input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// A naming template without the mandatory number placeholder.
    #[error("{role} template has to include the {{task_num}} placeholder")]
    MissingNumberPlaceholder { role: &'static str },

    /// A prefix value supplied for a template that cannot receive it.
    #[error("{role} prefix was set but the template does not include the {{prefix}} placeholder")]
    PrefixWithoutPlaceholder { role: &'static str },

    /// `--left-padding-length` combined with a style that ignores it.
    #[error("left padding length cannot be configured when no padding or centered task names are used")]
    ConflictingPaddingFlags,

    /// Merge found nothing matching the task file name template.
    #[error("there are no files to merge")]
    NoFilesToMerge,

    /// A discovered file name carried no digits at the expected position.
    #[error("no task number found in file name '{file_name}'")]
    NumberNotFound { file_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_placeholder() {
        let err = UsageError::MissingNumberPlaceholder { role: "task name" };
        assert_eq!(
            err.to_string(),
            "task name template has to include the {task_num} placeholder"
        );

        let err = UsageError::PrefixWithoutPlaceholder {
            role: "task file name",
        };
        assert!(err.to_string().contains("{prefix}"));
    }

    #[test]
    fn test_number_not_found_names_the_file() {
        let err = UsageError::NumberNotFound {
            file_name: "Task x.cpp".to_string(),
        };
        assert!(err.to_string().contains("Task x.cpp"));
    }
}
