//! `Content-Disposition` parameter parsing.

/// Returns the filename carried by a `Content-Disposition` value.
///
/// `filename*` (RFC 5987, `charset'lang'pct-encoded`) wins over `filename`.
/// Quoted values may contain `;` and backslash escapes.
pub fn disposition_filename(header_value: &str) -> Option<String> {
    let params = parse_params(header_value);

    let extended = params
        .iter()
        .filter(|(name, _)| name == "filename*")
        .find_map(|(_, value)| decode_ext_value(value))
        .filter(|v| !v.is_empty());

    extended.or_else(|| {
        params
            .into_iter()
            .find(|(name, value)| name == "filename" && !value.is_empty())
            .map(|(_, value)| value)
    })
}

/// Splits `type; a=b; c="d;e"` into lower-cased parameter names and unquoted values.
/// The disposition type itself (no `=`) is skipped.
fn parse_params(value: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut chars = value.chars().peekable();

    loop {
        // Parameter name up to '=' or ';'.
        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' || c == ';' {
                break;
            }
            name.push(c);
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(';') => continue,
            Some(_) => {}
        }

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let mut val = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            val.push(escaped);
                        }
                    }
                    '"' => break,
                    _ => val.push(c),
                }
            }
            // Skip anything between the closing quote and the next ';'.
            for c in chars.by_ref() {
                if c == ';' {
                    break;
                }
            }
        } else {
            for c in chars.by_ref() {
                if c == ';' {
                    break;
                }
                val.push(c);
            }
            val = val.trim().to_string();
        }

        out.push((name.trim().to_ascii_lowercase(), val));
    }

    out
}

/// Decodes an RFC 5987 ext-value such as `UTF-8''na%C3%AFve.txt`.
/// Charsets other than UTF-8 are decoded lossily.
fn decode_ext_value(value: &str) -> Option<String> {
    let mut pieces = value.splitn(3, '\'');
    let _charset = pieces.next()?;
    let _lang = pieces.next()?;
    let encoded = pieces.next()?;
    Some(percent_decode(encoded))
}

pub(super) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
