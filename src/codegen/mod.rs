mod statements;
mod translator;

pub use statements::{match_if_header, match_print_call, rewrite_logical_ops};
pub use translator::generate_cpp;
