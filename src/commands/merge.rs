//! Task merging
//!
//! Discovers numbered task files matching a naming template, verifies the
//! number sequence is complete, and writes the annotated concatenation to
//! the output file in one pass.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::console::Console;
use crate::core::model::{Task, TaskSet};
use crate::core::paths::join_relative;
use crate::core::render::{
    LayoutConfig, MergeRenderer, MergedTask, PaddingStyle, DEFAULT_LEFT_PADDING_LENGTH,
    DEFAULT_LINE_LENGTH,
};
use crate::core::template::{
    NameTemplate, TemplateRole, DEFAULT_TASK_FILE_NAME_PREFIX, DEFAULT_TASK_FILE_NAME_TEMPLATE,
    DEFAULT_TASK_NAME_PREFIX, DEFAULT_TASK_NAME_TEMPLATE, INPUT_FILE_EXTENSION, MAX_NUMBER_WIDTH,
    OUTPUT_FILE_EXTENSION,
};
use crate::core::util::first_number;
use crate::error::UsageError;

/// Default name of the merged output file.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "Solution.txt";

/// Options for `merge`.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub output_file_name: String,
    pub force: bool,
    pub ignore_input_file_extensions: bool,
    pub ignore_output_file_extension: bool,
    pub ignore_missing_tasks: bool,
    pub no_padding: bool,
    pub centered_task_names: bool,
    pub no_bottom_padding: bool,
    pub left_padding_length: Option<usize>,
    pub line_length: usize,
    pub task_file_name_template: String,
    pub task_file_name_prefix: Option<String>,
    pub task_name_template: String,
    pub task_name_prefix: Option<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            force: false,
            ignore_input_file_extensions: false,
            ignore_output_file_extension: false,
            ignore_missing_tasks: false,
            no_padding: false,
            centered_task_names: false,
            no_bottom_padding: false,
            left_padding_length: None,
            line_length: DEFAULT_LINE_LENGTH,
            task_file_name_template: DEFAULT_TASK_FILE_NAME_TEMPLATE.to_string(),
            task_file_name_prefix: None,
            task_name_template: DEFAULT_TASK_NAME_TEMPLATE.to_string(),
            task_name_prefix: None,
        }
    }
}

impl MergeOptions {
    fn layout(&self) -> LayoutConfig {
        let style = if self.no_padding {
            PaddingStyle::None
        } else if self.centered_task_names {
            PaddingStyle::Centered
        } else {
            PaddingStyle::Asymmetric {
                left: self
                    .left_padding_length
                    .unwrap_or(DEFAULT_LEFT_PADDING_LENGTH),
            }
        };

        LayoutConfig {
            style,
            line_length: self.line_length,
            bottom_rule: !self.no_padding && !self.no_bottom_padding,
        }
    }
}

/// Discover task files matching `template` under `root`.
///
/// The numeric field matches 1-, 2- and 3-digit numbers in three passes
/// over one cached directory listing, unioned in that order: every
/// 1-digit task in listing order, then the 2-digit tasks, then 3-digit.
/// Listing order is the directory's own, never numeric order.
pub fn discover_tasks(root: &Path, template: &NameTemplate) -> Result<TaskSet> {
    let (dir_part, _) = split_directory(template.as_str());
    let dir = if dir_part.is_empty() {
        root.to_path_buf()
    } else {
        join_relative(root, dir_part)
    };

    let mut names: Vec<String> = Vec::new();
    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(if dir_part.is_empty() {
                name.to_string()
            } else {
                format!("{dir_part}/{name}")
            });
        }
    }

    let number_start = template.number_start();
    let mut tasks = TaskSet::new();

    for width in 1..=MAX_NUMBER_WIDTH {
        let pattern = template.width_regex(width)?;
        for name in &names {
            if !pattern.is_match(name) {
                continue;
            }
            let number = first_number(&name[number_start..]).ok_or_else(|| {
                UsageError::NumberNotFound {
                    file_name: name.clone(),
                }
            })?;
            tasks.push(Task::new(name.clone(), number));
        }
    }

    Ok(tasks)
}

/// Merge discovered task files into one annotated output file.
pub fn run_merge(root: &Path, options: &MergeOptions, console: &Console) -> Result<()> {
    // All usage validation happens before any file I/O.
    let file_template = NameTemplate::compile(
        &options.task_file_name_template,
        options.task_file_name_prefix.as_deref(),
        DEFAULT_TASK_FILE_NAME_PREFIX,
        TemplateRole::TaskFileName,
    )?;
    let name_template = NameTemplate::compile(
        &options.task_name_template,
        options.task_name_prefix.as_deref(),
        DEFAULT_TASK_NAME_PREFIX,
        TemplateRole::TaskName,
    )?;
    if (options.no_padding || options.centered_task_names) && options.left_padding_length.is_some()
    {
        return Err(UsageError::ConflictingPaddingFlags.into());
    }

    let mut output_file_name = options.output_file_name.clone();
    if !output_file_name.ends_with(OUTPUT_FILE_EXTENSION) && !options.ignore_output_file_extension {
        output_file_name.push_str(OUTPUT_FILE_EXTENSION);
    }
    let output_path = join_relative(root, &output_file_name);
    if output_path.exists() && !options.force {
        console.say(format!(
            "File {output_file_name} already exists, use --force to overwrite"
        ));
        return Ok(());
    }

    let file_template = if options.ignore_input_file_extensions {
        file_template
    } else {
        file_template.ensure_extension(INPUT_FILE_EXTENSION)
    };

    let tasks = discover_tasks(root, &file_template)?;
    if tasks.is_empty() {
        return Err(UsageError::NoFilesToMerge.into());
    }
    for task in tasks.iter() {
        console.detail(format!("found {} (task {})", task.file_name, task.number));
    }

    let missing = tasks.missing_numbers();
    if !missing.is_empty() {
        if !options.ignore_missing_tasks {
            console.error(format!("Found {} missing tasks:", missing.len()));
            report_missing(&missing, &file_template, console);
            console.say("If this is intentional run with --ignore-missing-tasks");
            return Ok(());
        }
        console.warn(format!("Ignoring {} missing tasks:", missing.len()));
        report_missing(&missing, &file_template, console);
    }

    let renderer = MergeRenderer::new(options.layout());

    console.say(format!(
        "Merging {} tasks to {output_file_name}",
        tasks.len()
    ));

    let bar = console.progress(tasks.len() as u64);
    let mut merged = Vec::with_capacity(tasks.len());
    for task in tasks.iter() {
        let content = fs::read_to_string(join_relative(root, &task.file_name))
            .with_context(|| format!("failed to read {}", task.file_name))?;
        merged.push(MergedTask {
            label: name_template.render(task.number),
            content,
        });
        bar.set_message(task.file_name.clone());
        bar.inc(1);
    }
    bar.finish_and_clear();

    fs::write(&output_path, renderer.render(&merged))
        .with_context(|| format!("failed to write {output_file_name}"))?;

    console.say(format!(
        "Successfully merged {} tasks to {output_file_name}",
        tasks.len()
    ));
    Ok(())
}

/// Directory part of a '/'-separated template name, if any.
///
/// Placeholders are only supported in the final component; directory
/// components are literal.
fn split_directory(template: &str) -> (&str, &str) {
    match template.rfind('/') {
        Some(index) => (&template[..index], &template[index + 1..]),
        None => ("", template),
    }
}

fn report_missing(missing: &[u32], template: &NameTemplate, console: &Console) {
    for (index, number) in missing.iter().enumerate() {
        console.note(format!("#{} {}", index + 1, template.render(*number)));
    }
}
