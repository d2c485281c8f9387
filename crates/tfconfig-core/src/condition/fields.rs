//! Field-pattern extraction from validation conditions

use super::text::split_after;
use regex::Regex;
use std::collections::BTreeMap;

/// Field name (nested names joined with `__`) to anchored regex pattern
pub type FieldPatterns = BTreeMap<String, String>;

/// Key used for every field of a `map(...)` typed variable
pub const MAP_FIELD_NAME: &str = "mapValue";

const CLAUSE_SEPARATOR: &str = "(,)?";
const LEVEL_SEPARATOR: &str = "__";
const SCOPE_OPEN: &str = "\\{";
const SCOPE_CLOSE: &str = "\\}";
const ARRAY_OPEN: &str = "\\[";
const ESCAPED_QUOTE: &str = "\\\"";
const QUOTE: &str = "\"";
const COLON: &str = ":";

/// Extract field patterns from the text of a validation condition.
///
/// The condition is split into `(,)?` clauses. Each clause is matched, in
/// order, against three shapes:
/// - array: `\"tags\":\[...`
/// - quoted string: `\"name\":\"[a-z]+\"`
/// - numeric: `\"count\":[0-9]+`
///
/// A shape is accepted only when its anchored pattern compiles. Clauses that
/// match nothing are dropped, so the result may be empty but never fails.
///
/// When `is_map` is set every field is stored under [`MAP_FIELD_NAME`] and
/// only the last accepted pattern survives.
pub fn return_fields(condition: &str, is_map: bool) -> FieldPatterns {
    let mut fields = FieldPatterns::new();
    let mut levels: Vec<String> = Vec::new();

    for clause in condition.split(CLAUSE_SEPARATOR) {
        let clause = track_scopes(clause, &mut levels);

        if let Some((name, pattern)) = array_pattern(clause) {
            fields.insert(field_name(&levels, name, is_map), pattern);
            continue;
        }

        let quoted = split_after(clause, QUOTE);
        if let Some((name, pattern)) = string_pattern(&quoted) {
            fields.insert(field_name(&levels, name, is_map), pattern);
            continue;
        }

        // Looked up by the bare name, not the qualified one
        if quoted.len() > 1 {
            let bare = strip_quotes(quoted[1]);
            if fields.get(&bare).is_some_and(|pattern| !pattern.is_empty()) {
                continue;
            }
        }

        if let Some((name, pattern)) = numeric_pattern(clause) {
            fields.insert(field_name(&levels, name, is_map), pattern);
        }
    }

    fields
}

/// Consume scope markers, updating `levels`, and return the remaining clause.
///
/// Only the fragment right before the last `\{` can name a new level, and a
/// run of `\}` pops a single level.
fn track_scopes<'a>(clause: &'a str, levels: &mut Vec<String>) -> &'a str {
    let mut clause = clause;

    while clause.contains(SCOPE_OPEN) {
        let mut fragments = clause.rsplit(SCOPE_OPEN);
        let (Some(last), Some(previous)) = (fragments.next(), fragments.next()) else {
            break;
        };
        clause = last;

        let quoted = split_after(previous, QUOTE);
        if quoted.len() > 1 {
            levels.push(strip_quotes(quoted[1]));
        }
    }

    while clause.contains(SCOPE_CLOSE) {
        let mut fragments = clause.rsplit(SCOPE_CLOSE);
        let (Some(_), Some(previous)) = (fragments.next(), fragments.next()) else {
            break;
        };
        clause = previous;
        levels.pop();
    }

    clause
}

/// `\"name\":\[...` with exactly one colon
fn array_pattern(clause: &str) -> Option<(&str, String)> {
    let parts = split_after(clause, COLON);
    if parts.len() != 2 || !parts[1].starts_with(ARRAY_OPEN) {
        return None;
    }

    let pattern = anchor(parts[1]);
    if !compiles(&pattern) {
        return None;
    }

    let name = split_after(parts[0], QUOTE).get(1).copied()?;
    Some((name, pattern))
}

/// `\"name\":\"pattern\"`, read from the clause split after each quote
fn string_pattern<'a>(quoted: &[&'a str]) -> Option<(&'a str, String)> {
    if quoted.len() < 4 {
        return None;
    }

    let pattern = anchor(&strip_quotes(quoted[3]));
    compiles(&pattern).then(|| (quoted[1], pattern))
}

/// `\"name\":pattern`
fn numeric_pattern(clause: &str) -> Option<(&str, String)> {
    let parts = split_after(clause, COLON);
    let quoted = split_after(parts[0], QUOTE);
    if parts.len() < 2 || quoted.len() < 2 {
        return None;
    }

    let pattern = anchor(&strip_quotes(parts[1]));
    compiles(&pattern).then(|| (quoted[1], pattern))
}

fn field_name(levels: &[String], fragment: &str, is_map: bool) -> String {
    if is_map {
        return MAP_FIELD_NAME.to_string();
    }

    let name = strip_quotes(fragment);
    if levels.is_empty() {
        name
    } else {
        format!("{}{}{}", levels.join(LEVEL_SEPARATOR), LEVEL_SEPARATOR, name)
    }
}

fn strip_quotes(value: &str) -> String {
    value.replace(ESCAPED_QUOTE, "")
}

fn anchor(pattern: &str) -> String {
    format!("^{}$", pattern)
}

fn compiles(pattern: &str) -> bool {
    Regex::new(pattern).is_ok()
}
