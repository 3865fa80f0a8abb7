//! Translator for a small indentation-delimited Python subset into C++.

pub mod codegen;
pub mod parser;
