use super::types::SourceLine;

/// Strip leading/trailing spaces and tabs. Other whitespace is left alone,
/// matching the argument splitter's trim.
pub fn trim_line(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

/// Split raw source text into non-blank lines annotated with indentation.
///
/// Indentation is a raw character count: a tab and a space each count as
/// one, so mixed tab/space files produce depths that are not comparable to
/// a pure-space convention. Whitespace-only lines are dropped entirely and
/// never reach the translator.
pub fn normalize_lines(source: &str) -> Vec<SourceLine> {
    let mut out = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let content = trim_line(raw);
        if content.is_empty() {
            continue;
        }
        let indent = raw
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .count();

        out.push(SourceLine {
            indent,
            content: content.to_string(),
            line_no: i + 1,
        });
    }

    out
}
