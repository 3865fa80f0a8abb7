use super::lines::trim_line;

/// Split a print call's argument text on top-level commas.
///
/// A comma is a separator only when it sits outside a quoted span. Quote
/// tracking is single-pass and single-character: a span opened by `'` or
/// `"` closes only on the same character again, and the other quote kind
/// inside an active span is ordinary text. Escapes are not handled. The
/// final segment is always included, even when the text has no comma.
pub fn split_arguments(args_part: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in args_part.chars() {
        if ch == '\'' || ch == '"' {
            match quote {
                None => quote = Some(ch),
                Some(q) if q == ch => quote = None,
                Some(_) => {}
            }
            current.push(ch);
            continue;
        }

        if ch == ',' && quote.is_none() {
            args.push(trim_line(&current).to_string());
            current.clear();
            continue;
        }

        current.push(ch);
    }
    args.push(trim_line(&current).to_string());

    args
}
