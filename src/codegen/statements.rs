/// Extract the condition from a conditional header of the shape `if <cond>:`.
///
/// `if` must be followed by at least one whitespace character and the line
/// must end with a colon; the condition is everything in between and must be
/// non-empty. Anything else is not a header.
pub fn match_if_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("if")?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let condition = rest.trim_start().strip_suffix(':')?;
    if condition.is_empty() {
        return None;
    }
    Some(condition)
}

/// Extract the argument text from a print call of the shape `print(<args>)`.
///
/// Optional whitespace may separate `print` from the opening parenthesis;
/// the argument text runs up to the closing parenthesis at end of line.
pub fn match_print_call(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("print")?;
    rest.trim_start().strip_prefix('(')?.strip_suffix(')')
}

/// Rewrite the logical keywords `not`, `and`, `or` to their C++ operators.
///
/// Replacement is whole-word only: a keyword adjoining an identifier
/// character is part of a larger name and must survive, so `android` keeps
/// its `and`. Quoted spans inside the condition are not exempt.
pub fn rewrite_logical_ops(condition: &str) -> String {
    let mut out = String::with_capacity(condition.len());
    let mut word = String::new();

    for ch in condition.chars() {
        if is_word_char(ch) {
            word.push(ch);
        } else {
            flush_word(&mut out, &word);
            word.clear();
            out.push(ch);
        }
    }
    flush_word(&mut out, &word);

    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn flush_word(out: &mut String, word: &str) {
    out.push_str(match word {
        "not" => "!",
        "and" => "&&",
        "or" => "||",
        other => other,
    });
}
