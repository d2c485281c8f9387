//! Delimiter-based text helpers

const REGEX_CALL: &str = "regex(\"";
const LITERAL_END: &str = "\",";

/// Get the text between the first occurrence of `start` and the first
/// occurrence of `end`.
///
/// Both delimiters are searched from the beginning of `value`. An empty string
/// is returned when either delimiter is missing or when `end` does not come
/// after the end of `start`, so callers cannot tell "no match" apart from an
/// empty match.
pub fn between<'a>(value: &'a str, start: &str, end: &str) -> &'a str {
    let Some(first) = value.find(start) else {
        return "";
    };
    let Some(last) = value.find(end) else {
        return "";
    };

    let first = first + start.len();
    if first >= last {
        return "";
    }

    &value[first..last]
}

/// Get the string literal passed first to `regex(...)` in a condition.
///
/// Field patterns are only read from this literal. The enclosing expression
/// would otherwise leak quoted fragments into the level names. The closing
/// `",` is searched after the opening `regex("` only, so quoted arguments
/// earlier in the condition do not hide the literal.
pub fn regex_literal(condition: &str) -> &str {
    let Some((_, rest)) = condition.split_once(REGEX_CALL) else {
        return "";
    };

    rest.find(LITERAL_END).map_or("", |end| &rest[..end])
}

/// Split `value` after each occurrence of `sep`, keeping the separator at the
/// end of each fragment.
///
/// Always yields `occurrences + 1` fragments: a trailing separator produces a
/// final empty fragment and an empty input yields a single empty fragment.
pub(crate) fn split_after<'a>(value: &'a str, sep: &str) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for (idx, matched) in value.match_indices(sep) {
        let end = idx + matched.len();
        fragments.push(&value[start..end]);
        start = end;
    }
    fragments.push(&value[start..]);

    fragments
}
