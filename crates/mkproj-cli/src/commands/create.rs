//! `mkproj create`: build a tree from an outline file or piped input.

use std::io;
use std::path::{Path, PathBuf};

use mkproj_adapters::{
    LineMode, LocalFilesystem, MemoryFilesystem, read_outline, read_outline_file, stdin_is_piped,
};
use mkproj_core::{
    application::{BuildService, Filesystem},
    domain::{BuildReport, LineBuffer},
};
use tracing::{debug, info, instrument};

use crate::{
    cli::{CreateArgs, GlobalArgs, OutputFormat},
    commands::edit,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// How a build should run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildMode {
    pub dry_run: bool,
    pub strict: bool,
}

impl From<&CreateArgs> for BuildMode {
    fn from(args: &CreateArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            strict: args.strict,
        }
    }
}

/// Where the outline comes from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    File(PathBuf),
    Stdin,
    Editor,
}

impl Source {
    fn select(file: Option<PathBuf>, piped: bool) -> Self {
        match file {
            Some(path) => Self::File(path),
            None if piped => Self::Stdin,
            None => Self::Editor,
        }
    }
}

/// Entry point for `mkproj create`.
#[instrument(skip_all, fields(file = ?args.file, dry_run = args.dry_run))]
pub fn execute(
    args: CreateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mode = BuildMode::from(&args);
    let root = resolve_root(args.root, &config);

    let lines = match Source::select(args.file, stdin_is_piped()) {
        Source::File(path) => read_file(path)?,
        Source::Stdin => read_outline(io::stdin().lock(), LineMode::Trimmed)
            .with_cli_context(|| "failed to read outline from stdin")?,
        Source::Editor => {
            info!("No outline on stdin, opening the editor");
            return edit::run(&root, LineBuffer::new(), mode, &output);
        }
    };

    run_build(&lines, &root, mode, &output)
}

/// `--root` if given, otherwise `defaults.root`.
pub(crate) fn resolve_root(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.defaults.root.clone())
}

pub(crate) fn read_file(path: PathBuf) -> CliResult<Vec<String>> {
    read_outline_file(&path).map_err(|source| CliError::InputFile { path, source })
}

/// Build `lines` under `root` and report every line.
pub(crate) fn run_build(
    lines: &[String],
    root: &Path,
    mode: BuildMode,
    output: &OutputManager,
) -> CliResult<()> {
    let filesystem: Box<dyn Filesystem> = if mode.dry_run {
        Box::new(MemoryFilesystem::new())
    } else {
        Box::new(LocalFilesystem::new())
    };

    debug!(lines = lines.len(), root = %root.display(), "Starting build");
    let report = BuildService::new(filesystem).build(lines, root)?;

    present(&report, mode, output)?;

    if mode.strict && report.has_failures() {
        return Err(CliError::PartialBuild {
            failed: report.failure_count(),
        });
    }
    Ok(())
}

fn present(report: &BuildReport, mode: BuildMode, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    if mode.dry_run {
        output.info(&format!(
            "Dry run: nothing will be written under {}",
            report.root().display()
        ))?;
    }

    for outcome in report.outcomes() {
        if outcome.is_success() {
            output.success(&outcome.to_string())?;
        } else {
            output.error(&outcome.to_string())?;
            if let Some(err) = outcome.as_domain_error() {
                for hint in err.suggestions() {
                    output.print(&format!("    {hint}"))?;
                }
            }
        }
    }

    if let Some(tree) = report.tree() {
        output.print("")?;
        output.header("Final structure:")?;
        output.print(tree.trim_end())?;
    }

    let summary = format!(
        "{} director{} and {} file{} created",
        report.directories_created(),
        if report.directories_created() == 1 { "y" } else { "ies" },
        report.files_created(),
        if report.files_created() == 1 { "" } else { "s" },
    );
    if report.has_failures() {
        output.warning(&format!(
            "{summary}, {} line(s) failed",
            report.failure_count()
        ))?;
    } else {
        output.success(&summary)?;
    }

    Ok(())
}
