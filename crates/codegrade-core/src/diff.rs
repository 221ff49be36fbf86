//! Formatting-drift sizing heuristic.
//!
//! Estimates the magnitude of a formatter diff without a true line
//! alignment: addition and removal lines are paired by position index and
//! each pair contributes the length of its longer side. This approximates
//! the size of each changed region; it is intentionally not a
//! Levenshtein-style diff cost.

/// Sentinel drift size used when the formatter invocation itself fails:
/// canonical formatting cannot be verified, so it is assumed maximally wrong.
pub const FORMATTER_FAILURE_DIFF_SIZE: usize = 500;

/// Measure formatting drift from diff-mode formatter output.
///
/// Every line prefixed with `+` joins the added sequence, every line
/// prefixed with `-` the removed sequence (markers stripped, output order
/// preserved).
pub fn diff_size(diff_text: &str) -> usize {
    let mut added = Vec::new();
    let mut removed = Vec::new();

    for line in diff_text.lines() {
        if let Some(rest) = line.strip_prefix('+') {
            added.push(rest);
        } else if let Some(rest) = line.strip_prefix('-') {
            removed.push(rest);
        }
    }

    paired_size(&added, &removed)
}

/// Pair the added and removed sequences by index and sum the character
/// length of each pair's longer side. A missing side counts as empty.
pub fn paired_size(added: &[&str], removed: &[&str]) -> usize {
    let rows = added.len().max(removed.len());
    let mut size = 0;

    for i in 0..rows {
        let a = added.get(i).copied().unwrap_or("");
        let r = removed.get(i).copied().unwrap_or("");
        size += a.len().max(r.len());
    }

    size
}
