//! `mkproj edit` (and bare `mkproj`): compose an outline interactively.

use std::path::Path;

use console::Term;
use mkproj_core::domain::LineBuffer;
use tracing::{info, instrument};

use crate::{
    cli::{EditArgs, GlobalArgs},
    commands::create::{BuildMode, read_file, resolve_root, run_build},
    config::AppConfig,
    editor::{Editor, EditorOutcome},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(file = ?args.file))]
pub fn execute(
    args: EditArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = resolve_root(args.root, &config);

    let buffer = match args.file {
        Some(path) => LineBuffer::from_lines(read_file(path)?),
        None => LineBuffer::new(),
    };

    run(&root, buffer, BuildMode::default(), &output)
}

/// Open the editor on `buffer` and build the committed outline with `mode`.
pub(crate) fn run(
    root: &Path,
    buffer: LineBuffer,
    mode: BuildMode,
    output: &OutputManager,
) -> CliResult<()> {
    let outcome = Editor::new(Term::stdout(), root)?.run(buffer)?;
    finish(outcome, root, mode, output)
}

fn finish(
    outcome: EditorOutcome,
    root: &Path,
    mode: BuildMode,
    output: &OutputManager,
) -> CliResult<()> {
    match outcome {
        EditorOutcome::Commit(lines) => {
            info!(lines = lines.len(), dry_run = mode.dry_run, "Outline committed");
            run_build(&lines, root, mode, output)
        }
        EditorOutcome::Quit => {
            output.info("Editor closed, nothing was created")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::error::CliError;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn commit(lines: &[&str]) -> EditorOutcome {
        EditorOutcome::Commit(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn committed_outline_is_built() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");

        finish(commit(&["src", "-main.rs"]), &root, BuildMode::default(), &quiet_output())
            .unwrap();
        assert!(root.join("src/main.rs").is_file());
    }

    #[test]
    fn dry_run_commit_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let mode = BuildMode {
            dry_run: true,
            strict: false,
        };

        finish(commit(&["src", "-main.rs"]), &root, mode, &quiet_output()).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn strict_commit_reports_partial_build() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let mode = BuildMode {
            dry_run: false,
            strict: true,
        };

        let err = finish(commit(&["ok", "-:file"]), &root, mode, &quiet_output()).unwrap_err();
        assert!(matches!(err, CliError::PartialBuild { failed: 1 }));
        assert!(root.join("ok").is_dir());
    }

    #[test]
    fn quit_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");

        finish(EditorOutcome::Quit, &root, BuildMode::default(), &quiet_output()).unwrap();
        assert!(!root.exists());
    }
}
