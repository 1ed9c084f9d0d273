use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHENATED_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

const SOFT_HYPHEN: char = '\u{00AD}';

/// Cleans text pulled out of a document page: NFKC-normalizes ligatures and
/// full-width forms, re-joins words split across lines, drops control
/// characters, collapses whitespace inside lines and keeps at most one blank
/// line between paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|ch| *ch != SOFT_HYPHEN)
        .map(|ch| if ch == '\u{000C}' { '\n' } else { ch })
        .filter(|ch| !ch.is_control() || *ch == '\n' || *ch == '\t' || *ch == '\r')
        .collect();
    let joined = HYPHENATED_LINE_BREAK.replace_all(&normalized, "$head$tail");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in joined.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(&line.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs.join("\n\n")
}
