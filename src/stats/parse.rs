use crate::error::{AuthorsError, Result};
use crate::model::{AuthorTable, FileChange, LineCount};
use regex::Regex;
use std::sync::LazyLock;

pub const HEADER_MARKER: char = '>';

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s(?P<name>.*)\s<(?P<email>[^<>]+)>$").expect("valid header regex"));

static NUMSTAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<added>\d+|-)\s+(?P<deleted>\d+|-)\s+(?P<path>.+)$").expect("valid numstat regex")
});

/// Splits a `> name <email>` header into its name and email.
pub fn parse_header(line: &str) -> Option<(&str, &str)> {
    let caps = HEADER_RE.captures(line)?;
    let name = caps.name("name")?.as_str();
    let email = caps.name("email")?.as_str();
    Some((name, email))
}

/// Parses one `added deleted path` numstat line. `None` if the shape is off.
pub fn parse_file_change(line: &str) -> Option<FileChange> {
    let caps = NUMSTAT_RE.captures(line)?;
    Some(FileChange {
        added: parse_count(caps.name("added")?.as_str())?,
        deleted: parse_count(caps.name("deleted")?.as_str())?,
        path: caps.name("path")?.as_str().to_string(),
    })
}

fn parse_count(raw: &str) -> Option<LineCount> {
    if raw == "-" {
        Some(LineCount::Binary)
    } else {
        raw.parse().ok().map(LineCount::Lines)
    }
}

/// Folds a `git log --numstat` stream into per-author totals.
///
/// File changes seen before any header are ignored. A header line that
/// cannot be split into name and email aborts the parse, since every line
/// after it would be attributed to the wrong author.
pub fn parse_log<I, S>(lines: I) -> Result<AuthorTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = AuthorTable::new();
    let mut current: Option<String> = None;
    let mut skipped = 0usize;

    for (idx, raw) in lines.into_iter().enumerate() {
        let line = raw.as_ref().trim();

        if line.starts_with(HEADER_MARKER) {
            let (name, email) = parse_header(line).ok_or_else(|| AuthorsError::MalformedHeader {
                line_number: idx + 1,
                line: line.to_string(),
            })?;
            table.entry_for(name, email);
            current = Some(email.to_string());
            continue;
        }

        if line.is_empty() {
            continue;
        }

        let Some(email) = current.as_deref() else {
            log::debug!("Skipping line {} with no author: {line:?}", idx + 1);
            skipped += 1;
            continue;
        };

        match parse_file_change(line) {
            Some(change) => {
                if let Some(author) = table.get_mut(email) {
                    author.add_change(change);
                }
            }
            None => {
                log::debug!("Skipping unrecognized line {}: {line:?}", idx + 1);
                skipped += 1;
            }
        }
    }

    log::info!("Parsed {} authors ({skipped} lines skipped)", table.len());
    Ok(table)
}
