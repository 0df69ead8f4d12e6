use tracing::trace;


#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QuoteType {
    Single,
    Double,
    Unspecified,
    None
}

pub fn need_quote(s: &str) -> QuoteType {
    let has_single = s.contains('\'');
    let has_double = s.contains('"');

    // one type of quote in the string, need the other one
    if has_single && !has_double { return QuoteType::Double; }
    if has_double && !has_single { return QuoteType::Single; }

    // both types of quotes in string, unspecified -> need further refinement
    if has_single && has_double {
        trace!("String needs quote but we're not sure which type: {}", s);
        return QuoteType::Unspecified;
    }

    // no quotes in string, only need quotes if there are whitespaces
    if s.is_empty() || s.contains(char::is_whitespace) {
        QuoteType::Unspecified
    }
    else {
        QuoteType::None
    }
}

/// Quote a shell word if needed so the command line can be copy-pasted.
pub fn quote_if_needed(s: &str) -> String {
    match need_quote(s) {
        QuoteType::Single => format!("'{s}'"),
        QuoteType::Double => format!("\"{s}\""),
        QuoteType::Unspecified => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        QuoteType::None => s.to_string()
    }
}

pub fn join_quote(args: &[&str]) -> String {
    let args: Vec<_> = args.iter()
        .map(|s| quote_if_needed(s))
        .collect();

    args.join(" ")
}

/// Render `s` as a Python string literal: single quotes, unless the string
/// contains a single quote and no double quote.
///
/// Control characters are escaped the way `repr()` writes them (`\n`, `\x7f`).
/// Other non-printable characters, such as non-breaking spaces, are kept as is.
pub fn python_literal(s: &str) -> String {
    let quote = match need_quote(s) {
        QuoteType::Double => '"',
        _ => '\'',
    };

    let mut result = String::with_capacity(s.len() + 2);
    result.push(quote);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c == quote => { result.push('\\'); result.push(c); },
            c if c.is_control() => result.push_str(&format!("\\x{:02x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push(quote);
    result
}
