pub mod document_formatter;
pub mod file_filter;
pub mod output_name;
