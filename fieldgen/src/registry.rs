//! Idempotent line insertion for module registry files
//!
//! Generated DAO modules must be declared in `lib.rs` (`pub mod …`) and
//! re-exported from `dao.rs` (`pub use …`). The insertion is a pure string
//! transformation so that the file I/O around it stays in the CLI.

/// Insert `line` after the last line containing `anchor`, unless an
/// identical line is already present
///
/// Lines are compared with surrounding whitespace ignored. When no line
/// contains the anchor, `line` is appended. A trailing newline and CRLF line
/// endings are preserved. Applying the same upsert twice is a no-op.
///
/// # Examples
///
/// ```
/// # use fieldgen::registry::upsert_line_after_anchor;
/// let lib = "pub mod models;\npub mod schema;\n\nfn helper() {}\n";
/// let once = upsert_line_after_anchor(lib, "pub mod", "pub mod account_dao;");
/// assert_eq!(once, "pub mod models;\npub mod schema;\npub mod account_dao;\n\nfn helper() {}\n");
///
/// let twice = upsert_line_after_anchor(&once, "pub mod", "pub mod account_dao;");
/// assert_eq!(twice, once);
/// ```
#[must_use]
pub fn upsert_line_after_anchor(contents: &str, anchor: &str, line: &str) -> String {
    if contains_line(contents, line) {
        return contents.to_string();
    }

    let wanted = line.trim();
    let newline = if contents.contains("\r\n") { "\r\n" } else { "\n" };
    let mut lines: Vec<&str> = contents.lines().collect();

    let position = lines
        .iter()
        .rposition(|existing| existing.contains(anchor))
        .map_or(lines.len(), |index| index + 1);
    lines.insert(position, wanted);

    let mut updated = lines.join(newline);
    if contents.is_empty() || contents.ends_with('\n') {
        updated.push_str(newline);
    }
    updated
}

/// Whether `contents` already holds `line`, ignoring surrounding whitespace
#[must_use]
pub fn contains_line(contents: &str, line: &str) -> bool {
    let wanted = line.trim();
    contents.lines().any(|existing| existing.trim() == wanted)
}
