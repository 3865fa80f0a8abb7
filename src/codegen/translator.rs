use tracing::debug;

use super::statements::{match_if_header, match_print_call, rewrite_logical_ops};
use crate::parser::{normalize_lines, split_arguments, trim_line};

/// Fixed lines emitted before any translated statement.
const PROLOGUE: [&str; 4] = ["#include <iostream>", "#include <string>", "", "int main() {"];

/// Translate source text in the supported subset into a complete C++
/// program, returned as one string with a trailing newline.
///
/// There is no error channel: unrecognized lines are dropped and malformed
/// arguments are emitted best-effort as raw text.
pub fn generate_cpp(source: &str) -> String {
    let mut out: Vec<String> = PROLOGUE.iter().map(|s| s.to_string()).collect();
    let mut indent_stack: Vec<usize> = Vec::new();

    for line in normalize_lines(source) {
        close_blocks(&mut out, &mut indent_stack, line.indent);
        let prefix = indent_prefix(indent_stack.len());

        if let Some(condition) = match_if_header(&line.content) {
            let condition = rewrite_logical_ops(condition);
            debug!(
                line = line.line_no,
                depth = indent_stack.len(),
                "opening conditional block"
            );
            out.push(format!("{}if ({}) {{", prefix, condition));
            indent_stack.push(line.indent);
            continue;
        }

        if let Some(args_part) = match_print_call(&line.content) {
            // A bare print() produces no output statement at all.
            if trim_line(args_part).is_empty() {
                continue;
            }
            out.push(format!("{}{}", prefix, render_print(args_part)));
            continue;
        }

        debug!(line = line.line_no, text = %line.content, "no recognizer matched, line dropped");
    }

    // Every still-open block closes at end of input.
    close_blocks(&mut out, &mut indent_stack, 0);

    out.push("    return 0;".to_string());
    out.push("}".to_string());

    let mut result = out.join("\n");
    result.push('\n');
    result
}

/// Pop every block whose opening depth is >= `indent`, emitting a closing
/// brace per pop at the depth left after it.
fn close_blocks(out: &mut Vec<String>, indent_stack: &mut Vec<usize>, indent: usize) {
    while indent_stack.last().map_or(false, |&top| top >= indent) {
        indent_stack.pop();
        debug!(depth = indent_stack.len(), "closing block");
        out.push(format!("{}}}", indent_prefix(indent_stack.len())));
    }
}

/// Indentation prefix for an emitted line: four spaces per open block plus
/// the base offset of the generated main() body.
fn indent_prefix(depth: usize) -> String {
    "    ".repeat(depth + 1)
}

/// Build one `std::cout` chain from a print call's argument text, with a
/// literal single-space separator between consecutive arguments.
fn render_print(args_part: &str) -> String {
    let args = split_arguments(args_part);

    let mut stmt = String::from("std::cout");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            stmt.push_str(" << \" \"");
        }
        stmt.push_str(" << ");
        stmt.push_str(&render_argument(arg));
    }
    stmt.push_str(" << std::endl;");

    stmt
}

/// Render one print argument as a C++ expression.
///
/// An argument with the same quote character at both ends becomes a
/// double-quoted string literal, inner content copied verbatim with no
/// escape processing. Everything else passes through untouched and is left
/// for the C++ compiler to make sense of.
fn render_argument(arg: &str) -> String {
    let bytes = arg.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return format!("\"{}\"", &arg[1..arg.len() - 1]);
        }
    }
    arg.to_string()
}
