//! Best-effort model extraction from SQL `CREATE TABLE` text
//!
//! This is a line-oriented pattern matcher, not a SQL parser. It recognizes
//! the first `CREATE TABLE name (` statement, singularizes the table name
//! into the model name, and turns every following line that starts with
//! `column TYPE` into a field entry. Parentheses are tracked so that only
//! the line closing the table body ends the scan; lines nested inside a
//! multi-line type argument or `CHECK (...)` are not columns. Constraints,
//! indexes, comments and any type outside the fixed keyword set are skipped
//! silently.
//!
//! # Type Mapping
//!
//! | SQL | tag | with `[]` |
//! |-----|-----|-----------|
//! | `BIGSERIAL`, `BIGINT`, `INT`, `INTEGER`, `SMALLINT`, `SERIAL` | `i` (`id` for `id` / `*_id`) | `i[]` |
//! | `DECIMAL`, `FLOAT`, `DOUBLE` | `d` | `d` |
//! | `VARCHAR`, `TEXT` | `z` | `z[]` |
//! | `BOOLEAN` | `b` | `b[]` |
//! | `TIMESTAMP` | `dt` | `dt` |

use crate::error::{GenError, Result};
use crate::field::{parse_fields, ModelSpec};
use crate::naming::Naming;
use regex::Regex;
use std::sync::LazyLock;

static TABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"CREATE TABLE\s+(?:IF NOT EXISTS\s+)?"?(\w+)"?\s*\((.*)$"#)
        .expect("Invalid regex")
});

static COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^"?(\w+)"?\s+(BIGSERIAL|BIGINT|INTEGER|INT|DECIMAL|SMALLINT|SERIAL|VARCHAR|TEXT|FLOAT|DOUBLE|BOOLEAN|TIMESTAMP)\b(\[\])?"#,
    )
    .expect("Invalid regex")
});

/// Extract a model spec from raw DDL text
///
/// # Errors
///
/// Returns [`GenError::NoTableNameFound`] if the text contains no
/// `CREATE TABLE` statement.
///
/// # Examples
///
/// ```
/// # use fieldgen::ddl::extract_model_spec;
/// let ddl = "CREATE TABLE accounts (\n  id BIGSERIAL,\n  email VARCHAR\n);";
/// let spec = extract_model_spec(ddl).unwrap();
/// assert_eq!(spec.name, "account");
/// assert_eq!(spec.field_spec(), "id:id,email:z");
/// ```
pub fn extract_model_spec(ddl: &str) -> Result<ModelSpec> {
    let mut name: Option<String> = None;
    let mut entries = Vec::new();
    let mut depth = 0_i32;

    for line in ddl.lines().map(str::trim) {
        if name.is_none() {
            if let Some(caps) = TABLE_NAME.captures(line) {
                let table = &caps[1];
                tracing::debug!(table, "found table definition");
                name = Some(Naming::singularize_table_name(table));

                let rest = caps[2].trim();
                if let Some(entry) = column_entry(rest) {
                    entries.push(entry);
                }
                depth = 1 + paren_balance(rest);
                if depth <= 0 {
                    break;
                }
            }
            continue;
        }

        if TABLE_NAME.is_match(line) {
            break;
        }

        // Only lines starting at the table's own nesting level define columns
        if depth == 1 {
            if let Some(entry) = column_entry(line) {
                entries.push(entry);
            } else if !line.is_empty() {
                tracing::trace!(line, "skipping non-column line");
            }
        }

        depth += paren_balance(line);
        if depth <= 0 {
            break;
        }
    }

    let name = name.ok_or(GenError::NoTableNameFound)?;
    let fields = parse_fields(&entries.join(","));
    tracing::debug!(model = %name, fields = fields.len(), "extracted model from DDL");

    Ok(ModelSpec::new(name, fields))
}

/// Net count of opening minus closing parentheses, ignoring `--` comments
fn paren_balance(line: &str) -> i32 {
    let code = line.split_once("--").map_or(line, |(code, _)| code);
    code.chars().fold(0, |balance, c| match c {
        '(' => balance + 1,
        ')' => balance - 1,
        _ => balance,
    })
}

/// Render one column definition line as a `name:code` field entry
fn column_entry(line: &str) -> Option<String> {
    let caps = COLUMN.captures(line)?;
    let column = &caps[1];
    let sql_type = &caps[2];
    let is_array = caps.get(3).is_some();

    let code = match sql_type {
        "BIGSERIAL" | "BIGINT" | "INT" | "INTEGER" | "SMALLINT" | "SERIAL" => {
            if is_array {
                "i[]"
            } else if column == "id" || column.ends_with("_id") {
                "id"
            } else {
                "i"
            }
        }
        "DECIMAL" | "FLOAT" | "DOUBLE" => {
            if is_array {
                tracing::warn!(column, "no list type for floating point columns, using scalar");
            }
            "d"
        }
        "VARCHAR" | "TEXT" => {
            if is_array {
                "z[]"
            } else {
                "z"
            }
        }
        "BOOLEAN" => {
            if is_array {
                "b[]"
            } else {
                "b"
            }
        }
        _ => "dt",
    };

    Some(format!("{column}:{code}"))
}
