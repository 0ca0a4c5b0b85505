//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::generate::{run_generate, run_generate_single, GenerateOptions};
use crate::commands::merge::{run_merge, MergeOptions, DEFAULT_OUTPUT_FILE_NAME};
use crate::core::console::Console;
use crate::core::render::DEFAULT_LINE_LENGTH;
use crate::core::template::{DEFAULT_TASK_FILE_NAME_TEMPLATE, DEFAULT_TASK_NAME_TEMPLATE};

/// ctm - scaffold numbered C++ task files and merge them into one solution file.
#[derive(Parser, Debug)]
#[command(name = "ctm")]
#[command(
    author,
    version,
    about,
    long_about = r#"ctm manages numbered C++ task files for contest-style workflows.

File names and header labels are produced from templates with two
placeholders: {task_num} (required) and {prefix} (optional, defaults
to "Task").

Commands:
- generate: write N boilerplate task files, refusing any collision
- generate-single: write exactly one task file
- merge: concatenate discovered task files into one annotated output

Examples:
    ctm generate 5
    ctm generate 3 --io -t "{prefix}_{task_num}.cpp" -p Day
    ctm generate-single 7
    ctm merge
    ctm merge Contest.txt --centered-task-names --line-length 80
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
Templates and output names are resolved relative to this root."
    )]
    pub root: PathBuf,

    /// Quiet mode (suppress status lines and progress bars).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress status lines and progress bars. WARN/ERROR diagnostics are\n\
still printed to stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored diagnostic tags. Useful when piping stderr to files or\n\
when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate numbered boilerplate task files.
    #[command(
        long_about = "Write task files numbered 1..=NUM_TASKS, named by the task name\n\
template. Every target name is checked first: a single collision without\n\
--force aborts the whole batch with nothing written.\n\n\
Examples:\n\
  ctm generate 5\n\
  ctm generate 3 --io\n\
  ctm generate 4 -t \"{prefix}_{task_num}.cpp\" -p Day\n"
    )]
    Generate {
        /// How many tasks to generate.
        #[arg(value_name = "NUM_TASKS")]
        num_tasks: u32,

        /// Overwrite any existing files.
        #[arg(short, long)]
        force: bool,

        /// Do not add the .cpp extension if a custom task name template does not have it.
        #[arg(long)]
        ignore_file_extension: bool,

        /// Include the iostream library in the generated payload.
        #[arg(long, visible_alias = "io")]
        include_iostream: bool,

        /// Task file name template.
        #[arg(
            short = 't',
            long,
            value_name = "TEMPLATE",
            default_value = DEFAULT_TASK_FILE_NAME_TEMPLATE,
            long_help = "Task file name template.\n\n\
Placeholders: {task_num} - required, {prefix} - optional."
        )]
        task_name_template: String,

        /// Prefix substituted for {prefix} in the template.
        #[arg(short = 'p', long, value_name = "PREFIX", long_help = "Default: \"Task\"")]
        task_name_prefix: Option<String>,
    },

    /// Generate exactly one numbered task file.
    #[command(
        long_about = "Write a single task file with the given number, with the same\n\
template validation and collision handling as generate.\n\n\
Example:\n\
  ctm generate-single 7\n"
    )]
    GenerateSingle {
        /// Number of the task to generate.
        #[arg(value_name = "TASK_NUM")]
        task_num: u32,

        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,

        /// Do not add the .cpp extension if a custom task name template does not have it.
        #[arg(long)]
        ignore_file_extension: bool,

        /// Include the iostream library in the generated payload.
        #[arg(long, visible_alias = "io")]
        include_iostream: bool,

        /// Task file name template.
        #[arg(
            short = 't',
            long,
            value_name = "TEMPLATE",
            default_value = DEFAULT_TASK_FILE_NAME_TEMPLATE,
            long_help = "Task file name template.\n\n\
Placeholders: {task_num} - required, {prefix} - optional."
        )]
        task_name_template: String,

        /// Prefix substituted for {prefix} in the template.
        #[arg(short = 'p', long, value_name = "PREFIX", long_help = "Default: \"Task\"")]
        task_name_prefix: Option<String>,
    },

    /// Merge discovered task files into one annotated output file.
    #[command(
        long_about = "Discover files matching the task file name template (task number as a\n\
1-3 digit field), verify the number sequence is complete, and write the\n\
annotated concatenation.\n\n\
Tasks are merged in discovery order: directory listing order per digit\n\
width, not numeric order. A gap in the sequence aborts the merge unless\n\
--ignore-missing-tasks is set.\n\n\
Examples:\n\
  ctm merge\n\
  ctm merge Contest.txt --force\n\
  ctm merge --centered-task-names --line-length 80\n\
  ctm merge --no-padding\n"
    )]
    Merge {
        /// Output file name.
        #[arg(value_name = "OUTPUT_FILE_NAME", default_value = DEFAULT_OUTPUT_FILE_NAME)]
        output_file_name: String,

        /// Overwrite an existing output file.
        #[arg(short, long)]
        force: bool,

        /// Do not add the .cpp extension if a custom task file name template does not have it.
        #[arg(long)]
        ignore_input_file_extensions: bool,

        /// Do not add the .txt extension if a custom output file name does not have it.
        #[arg(long)]
        ignore_output_file_extension: bool,

        /// Continue even if missing tasks are found (a warning is shown anyway).
        #[arg(long)]
        ignore_missing_tasks: bool,

        /// Emit header labels without any dash decoration.
        #[arg(long)]
        no_padding: bool,

        /// Center header labels between equal dash runs.
        #[arg(short = 'c', long)]
        centered_task_names: bool,

        /// Skip the full-width dash rule after each task body.
        #[arg(long)]
        no_bottom_padding: bool,

        /// Dash count left of the label (asymmetric padding only).
        #[arg(
            long,
            value_name = "N",
            long_help = "Dash count left of the label; the remainder of the line length goes\n\
to the right. Conflicts with --no-padding and --centered-task-names.\n\n\
Default: 2"
        )]
        left_padding_length: Option<usize>,

        /// Target width of header lines and bottom rules.
        #[arg(
            long,
            value_name = "N",
            default_value_t = DEFAULT_LINE_LENGTH,
            env = "CTM_LINE_LENGTH"
        )]
        line_length: usize,

        /// Task file name template used for discovery.
        #[arg(
            short = 't',
            long,
            value_name = "TEMPLATE",
            default_value = DEFAULT_TASK_FILE_NAME_TEMPLATE,
            long_help = "Task file name template used for discovery.\n\n\
Placeholders: {task_num} - required, {prefix} - optional."
        )]
        task_file_name_template: String,

        /// Prefix substituted for {prefix} in the file name template.
        #[arg(short = 'p', long, value_name = "PREFIX", long_help = "Default: \"Task\"")]
        task_file_name_prefix: Option<String>,

        /// Header label template for merged output.
        #[arg(
            long,
            value_name = "TEMPLATE",
            default_value = DEFAULT_TASK_NAME_TEMPLATE,
            long_help = "Header label template for merged output.\n\n\
Placeholders: {task_num} - required, {prefix} - optional."
        )]
        task_name_template: String,

        /// Prefix substituted for {prefix} in the header label template.
        #[arg(long, value_name = "PREFIX", long_help = "Default: \"Task\"")]
        task_name_prefix: Option<String>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let console = Console::new(cli.quiet, cli.verbose);
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Generate {
            num_tasks,
            force,
            ignore_file_extension,
            include_iostream,
            task_name_template,
            task_name_prefix,
        } => {
            let options = GenerateOptions {
                force,
                ignore_file_extension,
                include_iostream,
                template: task_name_template,
                prefix: task_name_prefix,
            };
            run_generate(&root, num_tasks, &options, &console)
        }

        Commands::GenerateSingle {
            task_num,
            force,
            ignore_file_extension,
            include_iostream,
            task_name_template,
            task_name_prefix,
        } => {
            let options = GenerateOptions {
                force,
                ignore_file_extension,
                include_iostream,
                template: task_name_template,
                prefix: task_name_prefix,
            };
            run_generate_single(&root, task_num, &options, &console)
        }

        Commands::Merge {
            output_file_name,
            force,
            ignore_input_file_extensions,
            ignore_output_file_extension,
            ignore_missing_tasks,
            no_padding,
            centered_task_names,
            no_bottom_padding,
            left_padding_length,
            line_length,
            task_file_name_template,
            task_file_name_prefix,
            task_name_template,
            task_name_prefix,
        } => {
            let options = MergeOptions {
                output_file_name,
                force,
                ignore_input_file_extensions,
                ignore_output_file_extension,
                ignore_missing_tasks,
                no_padding,
                centered_task_names,
                no_bottom_padding,
                left_padding_length,
                line_length,
                task_file_name_template,
                task_file_name_prefix,
                task_name_template,
                task_name_prefix,
            };
            run_merge(&root, &options, &console)
        }
    }
}
