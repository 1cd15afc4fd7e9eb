use anyhow::Context;
use glob::Pattern;
use log::debug;

/// Basename-level filter: exclusion globs plus an extension allow-list.
///
/// Patterns are only ever tested against a single path component, never
/// against the full path.
#[derive(Debug, Clone)]
pub struct PathFilter {
    exclude: Vec<Pattern>,
    extensions: Vec<String>,
}

impl PathFilter {
    pub fn new<S: AsRef<str>>(exclude_patterns: &[S], extensions: &[S]) -> anyhow::Result<Self> {
        let exclude = exclude_patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Pattern::new(pattern)
                    .with_context(|| format!("invalid exclusion pattern '{}'", pattern))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        debug!(
            "Compiled {} exclusion patterns, {} extensions",
            exclude.len(),
            extensions.len()
        );

        Ok(Self {
            exclude,
            extensions: extensions.iter().map(|e| e.as_ref().to_string()).collect(),
        })
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(name))
    }

    pub fn has_allowed_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    pub fn qualifies(&self, name: &str) -> bool {
        self.has_allowed_extension(name) && !self.is_excluded(name)
    }
}
