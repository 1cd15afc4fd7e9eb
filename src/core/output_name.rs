use std::ffi::OsString;
use std::path::Path;

pub const FLATTEN_SEPARATOR: &str = "-";
pub const OUTPUT_SUFFIX: &str = ".txt";

/// Flattens a root-relative path into a single file name.
///
/// Components are joined as raw `OsStr`s, so names that are not valid UTF-8
/// keep their exact bytes. No collision detection: `a-b.rs` and `a/b.rs`
/// both map to `a-b.rs.txt`.
pub fn output_file_name(relative_path: &Path) -> OsString {
    let mut flattened = OsString::new();
    for (i, component) in relative_path.components().enumerate() {
        if i > 0 {
            flattened.push(FLATTEN_SEPARATOR);
        }
        flattened.push(component.as_os_str());
    }
    flattened.push(OUTPUT_SUFFIX);
    flattened
}
