//! Merged-output layout
//!
//! Renders task bodies into the single annotated solution document:
//! a decorated header line per task, the raw file content, an optional
//! full-width bottom rule, and one blank line between consecutive tasks.

/// Default target width of decorated header lines.
pub const DEFAULT_LINE_LENGTH: usize = 100;

/// Default dash count left of the label in asymmetric padding.
pub const DEFAULT_LEFT_PADDING_LENGTH: usize = 2;

/// Header decoration style. The styles are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingStyle {
    /// Fixed dash run left of the label, remainder to the right.
    Asymmetric { left: usize },
    /// Equal dash runs on both sides; an odd leftover dash is dropped.
    Centered,
    /// No decoration at all.
    None,
}

impl Default for PaddingStyle {
    fn default() -> Self {
        PaddingStyle::Asymmetric {
            left: DEFAULT_LEFT_PADDING_LENGTH,
        }
    }
}

/// Layout configuration for one merge run.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    pub style: PaddingStyle,
    /// Target width of header lines and the bottom rule.
    pub line_length: usize,
    /// Emit a full-width dash rule after each task body.
    pub bottom_rule: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            style: PaddingStyle::default(),
            line_length: DEFAULT_LINE_LENGTH,
            bottom_rule: true,
        }
    }
}

/// A task body paired with its rendered header label.
#[derive(Debug, Clone)]
pub struct MergedTask {
    pub label: String,
    pub content: String,
}

/// Assembles the final solution document.
pub struct MergeRenderer {
    config: LayoutConfig,
}

impl MergeRenderer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Decorate one header label according to the configured style.
    ///
    /// `padding` may be negative when the label is longer than the line
    /// length; dash runs then collapse to the empty string.
    pub fn header_line(&self, label: &str) -> String {
        let padding = self.config.line_length as i64 - label.chars().count() as i64;

        match self.config.style {
            PaddingStyle::Centered => {
                let side = dashes(padding / 2);
                format!("{side}{label}{side}")
            }
            PaddingStyle::Asymmetric { left } => {
                let left_run = dashes(left as i64);
                let right_run = dashes(padding - left as i64);
                format!("{left_run}{label}{right_run}")
            }
            PaddingStyle::None => label.to_string(),
        }
    }

    /// Assemble the complete output document.
    pub fn render(&self, tasks: &[MergedTask]) -> String {
        let mut output = String::new();

        for (index, task) in tasks.iter().enumerate() {
            output.push_str(&self.header_line(&task.label));
            output.push('\n');
            output.push_str(&task.content);

            if self.config.bottom_rule && self.config.style != PaddingStyle::None {
                output.push_str(&dashes(self.config.line_length as i64));
                output.push('\n');
            }

            if index + 1 < tasks.len() {
                output.push('\n');
            }
        }

        output
    }
}

/// A run of `count` dashes; non-positive counts collapse to nothing.
fn dashes(count: i64) -> String {
    "-".repeat(count.max(0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(style: PaddingStyle, line_length: usize, bottom_rule: bool) -> MergeRenderer {
        MergeRenderer::new(LayoutConfig {
            style,
            line_length,
            bottom_rule,
        })
    }

    fn task(label: &str, content: &str) -> MergedTask {
        MergedTask {
            label: label.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_asymmetric_header_default_left_width() {
        let r = renderer(PaddingStyle::default(), 100, true);
        let line = r.header_line("Task #1");

        assert_eq!(line.len(), 100);
        assert!(line.starts_with("--Task #1"));
        assert!(line.ends_with(&"-".repeat(91)));
    }

    #[test]
    fn test_asymmetric_header_custom_left_width() {
        let r = renderer(PaddingStyle::Asymmetric { left: 4 }, 20, true);
        assert_eq!(r.header_line("abcd"), format!("----abcd{}", "-".repeat(12)));
    }

    #[test]
    fn test_centered_header_drops_odd_leftover() {
        let r = renderer(PaddingStyle::Centered, 100, true);
        let line = r.header_line("Task #1");

        // padding 93 splits into 46 per side, one dash dropped
        assert_eq!(line, format!("{0}Task #1{0}", "-".repeat(46)));
        assert_eq!(line.len(), 99);
    }

    #[test]
    fn test_centered_header_even_padding() {
        let r = renderer(PaddingStyle::Centered, 10, true);
        assert_eq!(r.header_line("ab"), "----ab----");
    }

    #[test]
    fn test_negative_padding_collapses_dashes() {
        let r = renderer(PaddingStyle::default(), 5, true);
        assert_eq!(r.header_line("a label too long"), "--a label too long");

        let centered = renderer(PaddingStyle::Centered, 5, true);
        assert_eq!(centered.header_line("a label too long"), "a label too long");
    }

    #[test]
    fn test_no_padding_header_is_bare_label() {
        let r = renderer(PaddingStyle::None, 100, true);
        assert_eq!(r.header_line("Task #1"), "Task #1");
    }

    #[test]
    fn test_render_separates_tasks_with_one_blank_line() {
        let r = renderer(PaddingStyle::None, 10, false);
        let doc = r.render(&[task("T1", "a\n"), task("T2", "b\n"), task("T3", "c\n")]);

        assert_eq!(doc, "T1\na\n\nT2\nb\n\nT3\nc\n");
    }

    #[test]
    fn test_render_bottom_rule_per_task() {
        let r = renderer(PaddingStyle::Asymmetric { left: 2 }, 10, true);
        let rule = "-".repeat(10);
        let doc = r.render(&[task("T1", "a\n"), task("T2", "b\n")]);

        assert_eq!(doc, format!("--T1------\na\n{rule}\n\n--T2------\nb\n{rule}\n"));
    }

    #[test]
    fn test_render_no_bottom_rule_when_unpadded() {
        // bottom_rule stays off with PaddingStyle::None regardless of flag
        let r = renderer(PaddingStyle::None, 10, true);
        assert_eq!(r.render(&[task("T1", "a\n")]), "T1\na\n");
    }

    #[test]
    fn test_render_empty_set_is_empty_document() {
        let r = MergeRenderer::new(LayoutConfig::default());
        assert_eq!(r.render(&[]), "");
    }

    #[test]
    fn test_unicode_label_counts_chars_not_bytes() {
        let r = renderer(PaddingStyle::Asymmetric { left: 2 }, 10, true);
        // four chars, padding 6: two dashes left, four right
        assert_eq!(r.header_line("día!"), "--día!----");
    }
}
