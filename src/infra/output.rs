use anyhow::Context;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::ffi::OsStr;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

pub const COMPLETION_MESSAGE: &str = "All files have been processed.";

pub trait OutputWriter {
    /// Persists one document and returns where it landed.
    fn write(&self, file_name: &OsStr, content: &str) -> anyhow::Result<PathBuf>;
}

/// Writes documents side by side into a single flat directory.
pub struct DirectoryWriter {
    dir: PathBuf,
}

impl DirectoryWriter {
    /// Creates the directory (and any parents) if missing. Existing files are
    /// left untouched.
    pub fn create(dir: &Path) -> anyhow::Result<Self> {
        debug!("Ensuring output directory exists: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputWriter for DirectoryWriter {
    fn write(&self, file_name: &OsStr, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.join(file_name);
        debug!("Writing output to file: {}", path.display());
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Output written to file: {}", path.display());

        let mut stdout = io::stdout();
        writeln!(
            stdout,
            "File '{}' has been generated successfully.",
            path.display()
        )?;
        Ok(path)
    }
}

/// Prints the completion line, colored only when stdout is a terminal.
pub fn announce_completion() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let colored = stdout.is_terminal();
    write_completion(&mut stdout, colored)?;
    Ok(())
}

fn write_completion<W: Write>(out: &mut W, colored: bool) -> io::Result<()> {
    if !colored {
        return writeln!(out, "{}", COMPLETION_MESSAGE);
    }
    out.execute(SetForegroundColor(Color::Green))?;
    writeln!(out, "{}", COMPLETION_MESSAGE)?;
    out.execute(ResetColor)?;
    Ok(())
}
