use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Source sets the guards check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceScope {
    /// Every `.rs` file under a member's `src/` or `tests/`.
    Workspace,
    /// `gtest_wrapper/src` minus `main.rs` and the `*_test.rs` unit-test modules.
    Library,
}

impl SourceScope {
    fn base_dir(self, root: &Path) -> PathBuf {
        match self {
            SourceScope::Workspace => root.to_path_buf(),
            SourceScope::Library => root.join("gtest_wrapper").join("src"),
        }
    }

    fn admits(self, relative: &Path) -> bool {
        match self {
            SourceScope::Workspace => relative
                .components()
                .any(|part| matches!(part.as_os_str().to_str(), Some("src" | "tests"))),
            SourceScope::Library => relative
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name != "main.rs" && !name.ends_with("_test.rs")),
        }
    }

    /// Sorted absolute paths of the `.rs` files in this scope.
    pub fn rust_files(self) -> Vec<PathBuf> {
        let base = self.base_dir(&workspace_root());
        let mut files = WalkDir::new(&base)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .filter(|path| path.strip_prefix(&base).is_ok_and(|rel| self.admits(rel)))
            .collect::<Vec<_>>();
        files.sort();
        files
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && matches!(
            entry.file_name().to_str(),
            Some("target" | ".git" | "snapshots" | "examples")
        )
}

/// Parent of this crate's manifest directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
