use crate::core::file_filter::PathFilter;
use anyhow::Context;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn entry_name(entry: &DirEntry) -> std::borrow::Cow<'_, str> {
    entry.file_name().to_string_lossy()
}

// Symlinks are never descended into, but one pointing at a file is read
// through like a regular file.
fn is_file_like(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    if entry.path_is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Lazily walks `root` and yields every qualifying file.
///
/// Excluded directories are pruned before descent, so nothing below them is
/// ever read. Within each directory, files come before subdirectories and
/// each group is sorted by name, so a directory's own files are all yielded
/// before anything below it. The first walk error is yielded as an `Err`;
/// callers abort on it.
pub fn walk_qualifying_files<'a>(
    root: &Path,
    filter: &'a PathFilter,
) -> impl Iterator<Item = anyhow::Result<PathBuf>> + 'a {
    debug!("Walking directory tree from: {}", root.display());
    let root_display = root.display().to_string();

    WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(move |e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let excluded = filter.is_excluded(&entry_name(e));
            if excluded {
                debug!("Pruning excluded directory: {}", e.path().display());
            }
            !excluded
        })
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                if !is_file_like(&entry) {
                    return None;
                }
                if filter.qualifies(&entry_name(&entry)) {
                    debug!("Found matching file: {}", entry.path().display());
                    Some(Ok(entry.into_path()))
                } else {
                    trace!("Skipping: {}", entry.path().display());
                    None
                }
            }
            Err(err) => {
                let location = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root_display.clone());
                Some(Err(anyhow::Error::new(err)
                    .context(format!("failed to walk directory tree at {}", location))))
            }
        })
}

pub fn relative_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Reads a file as UTF-8 text with universal newlines.
///
/// Undecodable content is an error, never skipped.
pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!("Read {} bytes from file", contents.len());
    Ok(normalize_newlines(&contents))
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EXCLUDE_PATTERNS, FILE_EXTENSIONS};
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
    }

    fn collect_relative(root: &Path, filter: &PathFilter) -> Vec<String> {
        walk_qualifying_files(root, filter)
            .map(|p| relative_path(&p.unwrap(), root).to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_walk_prunes_excluded_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "src/main.rs", "fn main() {}");
        touch(root, "target/debug/build.rs", "");
        touch(root, ".git/config.toml", "");
        touch(root, "web/node_modules/pkg/index.js", "");
        touch(root, "web/app.ts", "");

        let filter = PathFilter::new(EXCLUDE_PATTERNS, FILE_EXTENSIONS).unwrap();
        let files = collect_relative(root, &filter);

        assert_eq!(files, vec!["src/main.rs", "web/app.ts"]);
    }

    #[test]
    fn test_walk_filters_files_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "package.json", "{}");
        touch(root, "package-lock.json", "{}");
        touch(root, "README.md", "# readme");
        touch(root, "sentry.edge.config.ts", "");
        touch(root, "lib/util.js", "");

        let filter = PathFilter::new(EXCLUDE_PATTERNS, FILE_EXTENSIONS).unwrap();
        let files = collect_relative(root, &filter);

        assert_eq!(files, vec!["package.json", "lib/util.js"]);
    }

    #[test]
    fn test_walk_yields_files_before_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "a/x.rs", "");
        touch(root, "a-b.rs", "");
        touch(root, "z.rs", "");
        touch(root, "a/nested/y.rs", "");
        touch(root, "a/w.rs", "");

        let filter = PathFilter::new(EXCLUDE_PATTERNS, FILE_EXTENSIONS).unwrap();
        let files = collect_relative(root, &filter);

        assert_eq!(
            files,
            vec!["a-b.rs", "z.rs", "a/w.rs", "a/x.rs", "a/nested/y.rs"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_reads_file_links_but_not_directory_links() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let outside = temp_dir.path().join("outside");
        touch(&outside, "shared.rs", "");
        touch(&outside, "lib/in.rs", "");

        let root = temp_dir.path().join("project");
        touch(&root, "main.rs", "");
        symlink(outside.join("shared.rs"), root.join("link.rs")).unwrap();
        symlink(outside.join("lib"), root.join("dirlink")).unwrap();

        let filter = PathFilter::new(EXCLUDE_PATTERNS, FILE_EXTENSIONS).unwrap();
        let files = collect_relative(&root, &filter);

        assert_eq!(files, vec!["link.rs", "main.rs"]);
    }

    #[test]
    fn test_walk_ignores_directories_with_allowed_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("weird.rs")).unwrap();
        touch(root, "weird.rs/inner.rs", "");

        let filter = PathFilter::new(EXCLUDE_PATTERNS, FILE_EXTENSIONS).unwrap();
        let files = collect_relative(root, &filter);

        assert_eq!(files, vec!["weird.rs/inner.rs"]);
    }

    #[test]
    fn test_root_is_never_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("target");
        touch(&root, "lib.rs", "");

        let filter = PathFilter::new(EXCLUDE_PATTERNS, FILE_EXTENSIONS).unwrap();
        let files = collect_relative(&root, &filter);

        assert_eq!(files, vec!["lib.rs"]);
    }

    #[test]
    fn test_walk_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("missing");

        let filter = PathFilter::new(EXCLUDE_PATTERNS, FILE_EXTENSIONS).unwrap();
        let results: Vec<_> = walk_qualifying_files(&root, &filter).collect();

        assert_eq!(results.len(), 1);
        let err = results.into_iter().next().unwrap().unwrap_err();
        assert!(err.to_string().contains("failed to walk"));
    }

    #[test]
    fn test_relative_path() {
        let root = Path::new("./project");
        let path = Path::new("./project/src/lib.rs");

        assert_eq!(relative_path(path, root), PathBuf::from("src/lib.rs"));
        assert_eq!(
            relative_path(Path::new("./src/main.rs"), Path::new(".")),
            PathBuf::from("src/main.rs")
        );
    }

    #[test]
    fn test_read_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.rs");

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "Test content").unwrap();
        }

        let contents = read_file_contents(&file_path).unwrap();
        assert_eq!(contents, "Test content\n");
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("crlf.ts");
        fs::write(&file_path, "a\r\nb\rc\n").unwrap();

        let contents = read_file_contents(&file_path).unwrap();
        assert_eq!(contents, "a\nb\nc\n");
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.rs");
        fs::write(&file_path, [0x66, 0x6e, 0xff, 0xfe, 0x00]).unwrap();

        let err = read_file_contents(&file_path).unwrap_err();
        assert!(err.to_string().contains("binary.rs"));
    }

    #[test]
    fn test_read_nonexistent_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nonexistent.rs");

        assert!(read_file_contents(&file_path).is_err());
    }
}
