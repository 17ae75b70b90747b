/// Width a tab expands to when rendered.
const TAB_WIDTH: usize = 4;

/// Makes untrusted text safe to print: tabs become spaces, every other control
/// character (escape sequences included) is dropped. Line breaks survive,
/// with `\r\n` normalized to `\n`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_clean(&mut out, line);
    }
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Like [`sanitize`], but folds line breaks into single spaces for one-line rows.
pub fn sanitize_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_clean(&mut out, line);
    }
    out
}

fn push_clean(out: &mut String, line: &str) {
    for c in line.chars() {
        match c {
            '\t' => out.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(sanitize("la la la\nna na"), "la la la\nna na");
    }

    #[test]
    fn test_escape_sequences_are_dropped() {
        assert_eq!(sanitize("\u{1b}[2Jhello\u{7}"), "[2Jhello");
    }

    #[test]
    fn test_crlf_and_tabs() {
        assert_eq!(sanitize("a\r\n\tb"), "a\n    b");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(sanitize("verse\n\nchorus"), "verse\n\nchorus");
        assert_eq!(sanitize("\nverse"), "\nverse");
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        assert_eq!(sanitize("verse\n"), "verse\n");
        assert_eq!(sanitize("verse\r\n"), "verse\n");
        assert_eq!(sanitize("\n"), "\n");
    }

    #[test]
    fn test_inline_folds_lines() {
        assert_eq!(sanitize_inline("one\ntwo\r\nthree"), "one two three");
    }
}
