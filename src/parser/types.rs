/// One non-blank source line, normalized for translation.
#[derive(Debug, Clone)]
pub struct SourceLine {
    /// Count of leading space/tab characters on the physical line.
    pub indent: usize,
    /// Line text with leading/trailing spaces and tabs stripped.
    pub content: String,
    /// 1-based physical line number, carried for trace output only.
    pub line_no: usize,
}
