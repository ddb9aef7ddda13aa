//! # Column Heuristics
//!
//! Workbooks handed to `pingsheet` are written by people, so header rows vary:
//! `IP`, `IP Address`, `ip_address`, `IPv4`, `VM Name`, `Hostname`, ...
//!
//! Everything in this module is a pure function over header text so it can be
//! tested without touching a file.

/// Header tokens that identify the address column.
pub const IP_CANDIDATES: &[&str] = &["ip", "ipaddress", "ipv4", "address"];

/// Header tokens that identify the display-name column.
pub const NAME_CANDIDATES: &[&str] = &[
    "vm", "vmname", "name", "hostname", "host", "machine", "computer", "server",
];

/// Lowercases `text` and splits it on every non-alphanumeric character.
///
/// `"IP-Address (v4)"` becomes `["ip", "address", "v4"]`.
pub fn normalize_header(text: &str) -> Vec<String> {
    let mut lowered: String = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            lowered.extend(ch.to_lowercase());
        } else {
            lowered.push(' ');
        }
    }

    lowered.split_whitespace().map(str::to_string).collect()
}

/// Labels for a header row. Blank cells become `col1`, `col2`, ... (1-based).
pub fn header_labels<S: AsRef<str>>(cells: &[S]) -> Vec<String> {
    cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let text = cell.as_ref().trim();
            if text.is_empty() {
                format!("col{}", idx + 1)
            } else {
                text.to_string()
            }
        })
        .collect()
}

/// Returns the first header, left to right, that looks like one of `candidates`.
///
/// A header matches when any of its tokens is a candidate, or when its tokens
/// joined together are (`"IP Address"` -> `"ipaddress"`).
pub fn choose_column<S: AsRef<str>>(headers: &[S], candidates: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let tokens = normalize_header(header.as_ref());
        tokens.iter().any(|t| candidates.contains(&t.as_str()))
            || candidates.contains(&tokens.concat().as_str())
    })
}

/// Resolves a column explicitly requested by the user.
///
/// Tries a case-insensitive match on the header text first, then compares the
/// joined normalized tokens so `ip_address` finds `IP Address`.
pub fn find_named_column<S: AsRef<str>>(headers: &[S], wanted: &str) -> Option<usize> {
    let wanted_trimmed = wanted.trim();
    if let Some(idx) = headers
        .iter()
        .position(|h| h.as_ref().trim().eq_ignore_ascii_case(wanted_trimmed))
    {
        return Some(idx);
    }

    let target: String = normalize_header(wanted).concat();
    if target.is_empty() {
        return None;
    }
    headers
        .iter()
        .position(|h| normalize_header(h.as_ref()).concat() == target)
}

/// Splits an address cell holding several addresses.
///
/// Separators are whitespace, `,`, `;` and `/`. Order is preserved and empty
/// tokens are dropped.
pub fn split_addresses(cell: &str) -> Vec<&str> {
    cell.split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '/'))
        .filter(|token| !token.is_empty())
        .collect()
}
