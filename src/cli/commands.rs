use crate::core::document_formatter::format_document;
use crate::core::file_filter::PathFilter;
use crate::core::output_name::output_file_name;
use crate::domain::models::{SnapshotConfig, SourceDocument};
use crate::infra::file_system::{read_file_contents, relative_path, walk_qualifying_files};
use crate::infra::logger::setup_logger;
use crate::infra::output::{DirectoryWriter, OutputWriter, announce_completion};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tree2txt", version)]
#[command(
    about = "Snapshot the current directory into flat, fenced .txt files under ./output",
    long_about = None
)]
pub struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    let config = SnapshotConfig::default();
    info!("Starting snapshot");
    debug!(
        "Snapshot parameters: root={}, output={}, exclude={:?}, ext={:?}",
        config.root_path.display(),
        config.output_dir.display(),
        config.exclude_patterns,
        config.extensions
    );

    generate_snapshot(&config)?;
    announce_completion()
}

/// Walks `config.root_path` and writes one document per qualifying file.
///
/// Stops at the first error; documents already written stay on disk.
pub fn generate_snapshot(config: &SnapshotConfig) -> anyhow::Result<Vec<PathBuf>> {
    let filter = PathFilter::new(
        config.exclude_patterns.as_slice(),
        config.extensions.as_slice(),
    )?;
    let writer = DirectoryWriter::create(&config.output_dir)?;

    info!("Scanning for files in {}", config.root_path.display());
    let mut written = Vec::new();

    for path in walk_qualifying_files(&config.root_path, &filter) {
        let path = path?;
        let document = SourceDocument {
            relative_path: relative_path(&path, &config.root_path),
            content: read_file_contents(&path)?,
        };

        let file_name = output_file_name(&document.relative_path);
        let output_path = writer.write(&file_name, &format_document(&document))?;
        written.push(output_path);
    }

    info!("Wrote {} documents to {}", written.len(), writer.dir().display());
    Ok(written)
}
