//! Task scaffolding
//!
//! Writes numbered boilerplate task files from a naming template. Every
//! target name is checked for collisions before the first write, so a
//! refused batch leaves the directory untouched.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::console::Console;
use crate::core::paths::{file_exists, join_relative};
use crate::core::template::{
    NameTemplate, TemplateRole, DEFAULT_TASK_FILE_NAME_PREFIX, DEFAULT_TASK_FILE_NAME_TEMPLATE,
    INPUT_FILE_EXTENSION,
};

/// Boilerplate body of a generated task file.
pub const TASK_PAYLOAD: &str = "int main() {\n\n}\n";

/// Boilerplate body including the iostream header.
pub const TASK_PAYLOAD_WITH_IOSTREAM: &str = "#include <iostream>\n\nint main() {\n\n}\n";

/// Options shared by `generate` and `generate-single`.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub force: bool,
    pub ignore_file_extension: bool,
    pub include_iostream: bool,
    pub template: String,
    pub prefix: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            force: false,
            ignore_file_extension: false,
            include_iostream: false,
            template: DEFAULT_TASK_FILE_NAME_TEMPLATE.to_string(),
            prefix: None,
        }
    }
}

impl GenerateOptions {
    fn compile_template(&self) -> Result<NameTemplate> {
        let template = NameTemplate::compile(
            &self.template,
            self.prefix.as_deref(),
            DEFAULT_TASK_FILE_NAME_PREFIX,
            TemplateRole::TaskFileName,
        )?;

        Ok(if self.ignore_file_extension {
            template
        } else {
            template.ensure_extension(INPUT_FILE_EXTENSION)
        })
    }

    fn payload(&self) -> &'static str {
        if self.include_iostream {
            TASK_PAYLOAD_WITH_IOSTREAM
        } else {
            TASK_PAYLOAD
        }
    }
}

/// Generate task files numbered `1..=num_tasks` under `root`.
pub fn run_generate(
    root: &Path,
    num_tasks: u32,
    options: &GenerateOptions,
    console: &Console,
) -> Result<()> {
    let template = options.compile_template()?;
    let file_names: Vec<String> = (1..=num_tasks).map(|n| template.render(n)).collect();

    if let Some(existing) = first_collision(root, &file_names, options.force) {
        console.say(format!(
            "File {existing} already exists, use --force to overwrite"
        ));
        return Ok(());
    }

    console.say(format!("Generating {num_tasks} tasks"));

    let bar = console.progress(file_names.len() as u64);
    for file_name in &file_names {
        write_task(root, file_name, options.payload())?;
        bar.set_message(file_name.clone());
        bar.inc(1);
    }
    bar.finish_and_clear();

    console.say(format!("Successfully generated {num_tasks} tasks"));
    Ok(())
}

/// Generate exactly one task file with the given number.
pub fn run_generate_single(
    root: &Path,
    task_num: u32,
    options: &GenerateOptions,
    console: &Console,
) -> Result<()> {
    let template = options.compile_template()?;
    let file_name = template.render(task_num);

    if !options.force && file_exists(root, &file_name) {
        console.say(format!(
            "File {file_name} already exists, use --force to overwrite"
        ));
        return Ok(());
    }

    console.say("Generating task");
    write_task(root, &file_name, options.payload())?;
    console.detail(format!("wrote {file_name}"));
    console.say("Successfully generated task");
    Ok(())
}

/// First target that would collide with an existing file, if any.
fn first_collision<'a>(root: &Path, file_names: &'a [String], force: bool) -> Option<&'a String> {
    if force {
        return None;
    }
    file_names.iter().find(|name| file_exists(root, name))
}

fn write_task(root: &Path, file_name: &str, payload: &str) -> Result<()> {
    fs::write(join_relative(root, file_name), payload)
        .with_context(|| format!("failed to write {file_name}"))
}
