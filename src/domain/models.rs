use std::path::PathBuf;

pub const ROOT_DIR: &str = ".";
pub const OUTPUT_DIR: &str = "output";

pub const EXCLUDE_PATTERNS: &[&str] = &[
    "*target",
    "*git",
    "*idea",
    "*output",
    "*node_modules",
    "*next",
    "*instrumentation.ts",
    "sentry.client.config.ts",
    "*sentry*",
    "package-lock.json",
    ".eslintrc.json",
];

pub const FILE_EXTENSIONS: &[&str] = &[
    ".rs", ".toml", ".yaml", ".js", ".ts", ".tsx", ".jsx", ".json",
];

/// A matched source file, decoded and ready to be formatted.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Path relative to the traversal root.
    pub relative_path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub root_path: PathBuf,
    pub output_dir: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub extensions: Vec<String>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from(ROOT_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            exclude_patterns: EXCLUDE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            extensions: FILE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
