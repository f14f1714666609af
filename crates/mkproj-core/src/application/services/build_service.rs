//! Build Service - the tree materializer.
//!
//! This service turns an outline into directories and files:
//! 1. Ensure the root exists (the only fatal step)
//! 2. Walk the lines in order, re-anchoring a path stack at each depth
//! 3. Create each entry, recording one outcome per line
//! 4. Render the resulting tree
//!
//! A failing line never aborts the build. Nothing is rolled back.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::failure_reason},
    domain::{
        BuildReport, EntryKind, LineOutcome, PathStack, classify_line, count_leading_depth,
        render_indented, trim_line_ending,
    },
    error::MkprojResult,
};

/// Materializes outlines through a [`Filesystem`] port.
pub struct BuildService {
    filesystem: Box<dyn Filesystem>,
}

impl BuildService {
    /// Create a new build service with the given adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mkproj_core::application::BuildService;
    /// # fn run(filesystem: Box<dyn mkproj_core::application::Filesystem>) -> mkproj_core::error::MkprojResult<()> {
    ///
    /// let service = BuildService::new(filesystem); // impl Filesystem
    /// let report = service.build(&["src", "-main.go"], "./out")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Build `lines` under `root`.
    ///
    /// Returns `Err` only when `root` cannot be created. Every other
    /// problem is recorded in the report against its line.
    #[instrument(
        skip_all,
        fields(root = %root.as_ref().display(), lines = lines.len())
    )]
    pub fn build<S: AsRef<str>>(
        &self,
        lines: &[S],
        root: impl AsRef<Path>,
    ) -> MkprojResult<BuildReport> {
        let root = root.as_ref();
        info!("Building project structure");

        self.filesystem
            .create_dir_all(root)
            .map_err(|e| ApplicationError::RootCreation {
                path: root.to_path_buf(),
                reason: failure_reason(&e),
            })?;

        let mut stack = PathStack::new(root);
        let mut report = BuildReport::new(root);

        for (index, raw) in lines.iter().enumerate() {
            let line = index + 1;
            let content = trim_line_ending(raw.as_ref());
            if content.is_empty() {
                continue;
            }

            let parent = stack.anchor(count_leading_depth(content)).to_path_buf();
            let class = classify_line(content);

            if !class.is_valid() {
                warn!(line, content, "Invalid name");
                report.record(LineOutcome::InvalidName {
                    line,
                    content: content.to_string(),
                });
                continue;
            }

            let path = parent.join(&class.name);
            let created = match class.kind {
                EntryKind::File => self.filesystem.create_file(&path),
                EntryKind::Directory => self.filesystem.create_dir(&path),
            };

            match created {
                Ok(()) => {
                    info!(line, kind = %class.kind, path = %path.display(), "Created");
                    if class.kind.is_directory() {
                        stack.push(path.clone());
                    }
                    report.record(LineOutcome::Created {
                        line,
                        path,
                        kind: class.kind,
                    });
                }
                Err(e) => {
                    let reason = failure_reason(&e);
                    warn!(line, kind = %class.kind, path = %path.display(), %reason, "Creation failed");
                    report.record(LineOutcome::Failed {
                        line,
                        path,
                        kind: class.kind,
                        reason,
                    });
                }
            }
        }

        match self.filesystem.walk(root, true) {
            Ok(entries) => report.set_tree(render_indented(&entries)),
            Err(e) => warn!(error = %e, "Could not render final structure"),
        }

        debug!(
            files = report.files_created(),
            directories = report.directories_created(),
            failures = report.failure_count(),
            "Build finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::{Sequence, mock};

    use super::*;
    use crate::{domain::TreeEntry, error::MkprojError};

    mock! {
        pub Fs {}

        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> MkprojResult<()>;
            fn create_dir(&self, path: &Path) -> MkprojResult<()>;
            fn create_file(&self, path: &Path) -> MkprojResult<()>;
            fn exists(&self, path: &Path) -> bool;
            fn is_dir(&self, path: &Path) -> bool;
            fn walk(&self, root: &Path, include_hidden: bool) -> MkprojResult<Vec<TreeEntry>>;
        }
    }

    fn is(path: &Path, expected: &str) -> bool {
        path == Path::new(expected)
    }

    fn fs_error(path: &Path, reason: &str) -> MkprojError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }

    /// A mock whose root creation and final walk succeed.
    fn base_mock() -> MockFs {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_walk().returning(|_, _| Ok(Vec::new()));
        fs
    }

    #[test]
    fn root_failure_aborts_before_any_line() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all()
            .returning(|p| Err(fs_error(p, "permission denied")));
        fs.expect_create_dir().never();
        fs.expect_create_file().never();

        let err = BuildService::new(Box::new(fs))
            .build(&["src"], "/out")
            .unwrap_err();

        match err {
            MkprojError::Application(ApplicationError::RootCreation { path, reason }) => {
                assert_eq!(path, PathBuf::from("/out"));
                assert_eq!(reason, "permission denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn entries_are_created_in_outline_order() {
        let mut fs = base_mock();
        let mut seq = Sequence::new();
        fs.expect_create_dir()
            .withf(|p| is(p, "/out/src"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_file()
            .withf(|p| is(p, "/out/src/main.go"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_file()
            .withf(|p| is(p, "/out/README.md"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let report = BuildService::new(Box::new(fs))
            .build(&["src", "-main.go", "README.md"], "/out")
            .unwrap();

        assert_eq!(report.directories_created(), 1);
        assert_eq!(report.files_created(), 2);
        assert!(!report.has_failures());
    }

    #[test]
    fn deep_jump_is_clamped_to_deepest_ancestor() {
        let mut fs = base_mock();
        fs.expect_create_dir()
            .withf(|p| is(p, "/out/a") || is(p, "/out/a/b"))
            .times(2)
            .returning(|_| Ok(()));

        let report = BuildService::new(Box::new(fs))
            .build(&["a", "---b"], "/out")
            .unwrap();

        assert_eq!(
            report.outcomes()[1],
            LineOutcome::Created {
                line: 2,
                path: PathBuf::from("/out/a/b"),
                kind: EntryKind::Directory,
            }
        );
    }

    #[test]
    fn failed_directory_reparents_children_to_last_good_ancestor() {
        let mut fs = base_mock();
        fs.expect_create_dir()
            .withf(|p| is(p, "/out/x"))
            .returning(|p| Err(fs_error(p, "file exists")));
        fs.expect_create_file()
            .withf(|p| is(p, "/out/y.txt"))
            .times(1)
            .returning(|_| Ok(()));

        let report = BuildService::new(Box::new(fs))
            .build(&["x", "-y.txt"], "/out")
            .unwrap();

        assert_eq!(
            report.outcomes()[0],
            LineOutcome::Failed {
                line: 1,
                path: PathBuf::from("/out/x"),
                kind: EntryKind::Directory,
                reason: "file exists".into(),
            }
        );
        assert!(report.outcomes()[1].is_success());
    }

    #[test]
    fn invalid_names_are_reported_and_skipped() {
        let mut fs = base_mock();
        fs.expect_create_dir().never();
        fs.expect_create_file()
            .withf(|p| is(p, "/out/a.txt"))
            .times(1)
            .returning(|_| Ok(()));

        let report = BuildService::new(Box::new(fs))
            .build(&["---", "", "a.txt", "-:file"], "/out")
            .unwrap();

        let invalid: Vec<usize> = report.failures().map(LineOutcome::line).collect();
        assert_eq!(invalid, vec![1, 4]);
        assert_eq!(report.outcomes().len(), 3);
    }

    #[test]
    fn line_endings_are_trimmed() {
        let mut fs = base_mock();
        fs.expect_create_dir()
            .withf(|p| is(p, "/out/docs"))
            .times(1)
            .returning(|_| Ok(()));

        let report = BuildService::new(Box::new(fs))
            .build(&["docs\r\n", "\r\n"], "/out")
            .unwrap();
        assert_eq!(report.outcomes().len(), 1);
    }

    #[test]
    fn final_tree_is_rendered_from_walk() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_file().returning(|_| Ok(()));
        fs.expect_walk().returning(|_, _| {
            Ok(vec![
                TreeEntry::directory("src"),
                TreeEntry::file("src/main.go"),
            ])
        });

        let report = BuildService::new(Box::new(fs))
            .build(&["src", "-main.go"], "/out")
            .unwrap();
        assert_eq!(report.tree(), Some("src\n  main.go\n"));
    }

    #[test]
    fn walk_failure_keeps_the_report() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_walk().returning(|p, _| {
            Err(ApplicationError::WalkFailed {
                path: p.to_path_buf(),
                reason: "gone".into(),
            }
            .into())
        });

        let report = BuildService::new(Box::new(fs))
            .build(&["src"], "/out")
            .unwrap();
        assert_eq!(report.tree(), None);
        assert_eq!(report.directories_created(), 1);
    }
}
