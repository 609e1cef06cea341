//! String-literal escape processing, mirroring the teacher's
//! character-at-a-time cooker.

pub(crate) fn unescape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('`') => out.push('`'),
            Some('\n') => {}
            Some('u') => push_unicode_escape(&mut chars, &mut out),
            Some('x') => push_hex_byte_escape(&mut chars, &mut out),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn push_unicode_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    let digits: String = if chars.peek() == Some(&'{') {
        chars.next();
        let mut buf = String::new();
        for c in chars.by_ref() {
            if c == '}' {
                break;
            }
            buf.push(c);
        }
        buf
    } else {
        (0..4).filter_map(|_| chars.next()).collect()
    };
    if let Some(c) = u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
        out.push(c);
    }
}

fn push_hex_byte_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    let digits: String = (0..2).filter_map(|_| chars.next()).collect();
    if let Some(c) = u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_common_escapes() {
        assert_eq!(unescape_string(r"a\nb"), "a\nb");
        assert_eq!(unescape_string(r#"\""#), "\"");
    }

    #[test]
    fn handles_unicode_escape_with_braces() {
        assert_eq!(unescape_string(r"\u{1F600}"), "\u{1F600}");
    }

    #[test]
    fn handles_fixed_width_unicode_escape() {
        assert_eq!(unescape_string(r"A"), "A");
    }
}
