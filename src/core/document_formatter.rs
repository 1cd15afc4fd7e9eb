use crate::domain::models::SourceDocument;
use log::debug;

pub fn format_document(document: &SourceDocument) -> String {
    debug!(
        "Formatting {} ({} bytes)",
        document.relative_path.display(),
        document.content.len()
    );
    format!(
        "# {}\n\n```\n{}\n```\n",
        document.relative_path.display(),
        document.content
    )
}
