/// Sanitize extracted text before chunking and pattern matching.
/// Strips control characters, collapses runs of spaces, and drops blank
/// lines while preserving the punctuation lab values are printed with.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .filter(|c| matches!(*c, '\n' | '\t') || !c.is_control())
        .collect();

    filtered
        .lines()
        .map(collapse_spaces)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last_was_space = true; // leading whitespace is dropped
    for c in line.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
