//! Line-number annotation of unified diffs
//!
//! Rewrites the output of `git diff` so that every removed or added line
//! carries the line number it has in the old or new version of the file:
//!
//! ```text
//! @@ -10,2 +12,1 @@
//! <<<<<<OLD (line 10)>>>>>> let a = 1;
//! <<<<<<OLD (line 11)>>>>>> let b = 2;
//! <<<<<<CHANGE (line 12)>>>>>> let ab = 3;
//! ```
//!
//! Context lines, file headers and `\ No newline at end of file` markers are
//! left out; hunk headers are kept so the blocks stay apart. Only changed
//! lines move the counters, so a number is the hunk start plus the count of
//! removed (or added) lines before it in the same hunk.

const HUNK_MARKER: &str = "@@";
const HUNK_HEADER_REGEX: &str = r"^@@ -(\d+)(?:,\d+)? \+(\d+)(?:,\d+)? @@";
const OLD_FILE_HEADER: &str = "--- ";
const NEW_FILE_HEADER: &str = "+++ ";

/// Running line positions in the old and new version of the file.
///
/// Both hold the number of the last line seen, so they start one below the
/// hunk start and are bumped before use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LineCounters {
    old_line: usize,
    new_line: usize,
}

impl LineCounters {
    fn from_hunk_header(header: &str) -> Self {
        match parse_hunk_start(header) {
            Some((old_start, new_start)) => LineCounters {
                old_line: old_start.saturating_sub(1),
                new_line: new_start.saturating_sub(1),
            },
            None => LineCounters::default(),
        }
    }

    fn next_old(&mut self) -> usize {
        self.old_line = self.old_line.saturating_add(1);
        self.old_line
    }

    fn next_new(&mut self) -> usize {
        self.new_line = self.new_line.saturating_add(1);
        self.new_line
    }

    fn advance_both(&mut self) {
        self.next_old();
        self.next_new();
    }
}

/// Extracts the old and new start lines from a `@@ -a,b +c,d @@` header.
fn parse_hunk_start(header: &str) -> Option<(usize, usize)> {
    let captures = regex::Regex::new(HUNK_HEADER_REGEX)
        .ok()?
        .captures(header)?;

    let old_start = captures.get(1)?.as_str().parse().ok()?;
    let new_start = captures.get(2)?.as_str().parse().ok()?;

    Some((old_start, new_start))
}

/// Annotates a raw unified diff. Total over any input, including the empty string.
pub fn annotate(raw_diff: &str) -> String {
    let mut annotated = String::with_capacity(raw_diff.len());
    let mut counters = LineCounters::default();
    let mut in_hunk = false;

    for line in raw_diff.split('\n') {
        if line.starts_with(HUNK_MARKER) {
            in_hunk = true;
            counters = LineCounters::from_hunk_header(line);
            push_line(&mut annotated, line);
        } else if !in_hunk && is_file_header(line) {
            continue;
        } else if let Some(text) = line.strip_prefix('-') {
            let line_number = counters.next_old();
            push_line(
                &mut annotated,
                &format!("<<<<<<OLD (line {line_number})>>>>>> {text}"),
            );
        } else if let Some(text) = line.strip_prefix('+') {
            let line_number = counters.next_new();
            push_line(
                &mut annotated,
                &format!("<<<<<<CHANGE (line {line_number})>>>>>> {text}"),
            );
        } else if line.is_empty() || line.starts_with(' ') || line.starts_with('\\') {
            continue;
        } else {
            counters.advance_both();
            push_line(&mut annotated, line);
        }
    }

    annotated
}

fn is_file_header(line: &str) -> bool {
    line.starts_with(OLD_FILE_HEADER) || line.starts_with(NEW_FILE_HEADER)
}

fn push_line(annotated: &mut String, line: &str) {
    annotated.push_str(line);
    annotated.push('\n');
}
