// ============================================================
// Layer 4 — CSV Line Parser
// ============================================================
// Turns one raw data line into a Record.
//
// A line holds exactly two comma-separated fields:
//
//   "Buy one, get one free!",1
//   └──────── text ────────┘ └ label
//
// Commas inside a double-quoted span are part of the text. A line
// is an alternation of quoted and unquoted runs; only commas in
// unquoted runs split fields. A line with an odd number of quote
// characters has no such reading and is rejected.
//
// The text field loses one leading and one trailing `"`. Nothing
// else is trimmed and doubled quotes are not unescaped.
//
// The label is, in order of precedence:
//   1. `true` / `false`, ASCII case-insensitive
//   2. a 32-bit integer: zero = not spam, anything else = spam

use crate::domain::error::DatasetError;
use crate::domain::record::Record;

const QUOTE: char = '"';
const DELIMITER: char = ',';

/// Split `line` on commas that are outside quoted spans.
///
/// Returns `None` when the quotes in the line do not pair up.
pub fn split_fields(line: &str) -> Option<Vec<&str>> {
    if line.matches(QUOTE).count() % 2 != 0 {
        return None;
    }

    let mut fields = Vec::with_capacity(2);
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, c) in line.char_indices() {
        match c {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                fields.push(&line[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);

    Some(fields)
}

/// Remove one `"` from each end of `field`, if present.
pub fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix(QUOTE).unwrap_or(field);
    field.strip_suffix(QUOTE).unwrap_or(field)
}

/// Parse a label field. Surrounding ASCII whitespace is ignored.
pub fn parse_label(field: &str) -> Option<bool> {
    let value = field.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        value.parse::<i32>().ok().map(|n| n != 0)
    }
}

/// Validate one data line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line_no: usize, line: &str) -> Result<Record, DatasetError> {
    let fields = split_fields(line).ok_or_else(|| DatasetError::UnbalancedQuotes {
        line: line_no,
        content: line.to_string(),
    })?;

    let [text, label] = fields.as_slice() else {
        return Err(DatasetError::InvalidFormat {
            line: line_no,
            content: line.to_string(),
        });
    };

    let is_spam = parse_label(label).ok_or_else(|| DatasetError::InvalidLabel {
        line: line_no,
        value: label.to_string(),
    })?;

    Ok(Record::new(strip_quotes(text), is_spam))
}

/// Parse every line after the header.
///
/// The first line is skipped without being looked at. The first
/// malformed data line aborts the whole parse.
pub fn parse_records<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Record>, DatasetError> {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| parse_line(idx + 1, line.as_ref()))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquoted_line_splits_in_two() {
        assert_eq!(split_fields("hello world,0"), Some(vec!["hello world", "0"]));
        assert_eq!(split_fields("a,b"), Some(vec!["a", "b"]));
    }

    #[test]
    fn test_quoted_comma_is_not_a_delimiter() {
        assert_eq!(
            split_fields("\"Buy one, get one free!\",1"),
            Some(vec!["\"Buy one, get one free!\"", "1"])
        );
    }

    #[test]
    fn test_quoted_run_in_the_middle_of_a_field() {
        assert_eq!(
            split_fields("say \"hi, there\" now,1"),
            Some(vec!["say \"hi, there\" now", "1"])
        );
    }

    #[test]
    fn test_unbalanced_quotes_have_no_split() {
        assert_eq!(split_fields("\"open, never closed,1"), None);
    }

    #[test]
    fn test_no_comma_is_one_field() {
        assert_eq!(split_fields(""), Some(vec![""]));
        assert_eq!(split_fields("just text"), Some(vec!["just text"]));
    }

    #[test]
    fn test_strip_quotes_removes_one_layer() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("\"\"abc\"\""), "\"abc\"");
        assert_eq!(strip_quotes("abc"), "abc");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes(" \"abc\" "), " \"abc\" ");
    }

    #[test]
    fn test_buy_one_get_one_free_is_spam() {
        let r = parse_line(2, "\"Buy one, get one free!\",1").unwrap();
        assert_eq!(r.text, "Buy one, get one free!");
        assert!(r.is_spam);
    }

    #[test]
    fn test_meeting_is_not_spam() {
        let r = parse_line(2, "\"Meeting scheduled for tomorrow at 2 PM\",0").unwrap();
        assert_eq!(r.text, "Meeting scheduled for tomorrow at 2 PM");
        assert!(!r.is_spam);
    }

    #[test]
    fn test_boolean_labels_any_case() {
        assert_eq!(parse_label("true"), Some(true));
        assert_eq!(parse_label("TRUE"), Some(true));
        assert_eq!(parse_label("False"), Some(false));
        assert_eq!(parse_label("fAlSe"), Some(false));
    }

    #[test]
    fn test_integer_labels() {
        assert_eq!(parse_label("1"), Some(true));
        assert_eq!(parse_label("0"), Some(false));
        assert_eq!(parse_label("2"), Some(true));
        assert_eq!(parse_label("-1"), Some(true));
        assert_eq!(parse_label("+0"), Some(false));
    }

    #[test]
    fn test_label_outside_i32_is_rejected() {
        assert_eq!(parse_label("99999999999"), None);
    }

    #[test]
    fn test_label_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_label(" 1 "), Some(true));
        assert_eq!(parse_label("true\t"), Some(true));
    }

    #[test]
    fn test_yes_label_cites_line_number() {
        let lines = ["Text,IsSpam", "fine,0", "nope,yes"];
        let err = parse_records(&lines).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidLabel { line: 3, ref value } if value == "yes"
        ));
        assert_eq!(err.to_string(), "Invalid boolean value in line 3: yes");
    }

    #[test]
    fn test_three_fields_is_invalid_format() {
        let lines = ["Text,IsSpam", "a,b,1"];
        let err = parse_records(&lines).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_blank_data_line_is_invalid_format() {
        let err = parse_records(&["Text,IsSpam", ""]).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidFormat { line: 2, .. }));
    }

    #[test]
    fn test_unbalanced_quotes_fail() {
        let err = parse_records(&["Text,IsSpam", "\"oops,1"]).unwrap_err();
        assert!(matches!(err, DatasetError::UnbalancedQuotes { line: 2, .. }));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        assert!(parse_records(&["Text,IsSpam"]).unwrap().is_empty());
        let none: [&str; 0] = [];
        assert!(parse_records(&none).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_header_is_never_validated() {
        let records = parse_records(&["\"broken,header,with,many,fields", "ok,1"]).unwrap();
        assert_eq!(records, vec![Record::new("ok", true)]);
    }

    #[test]
    fn test_empty_text_is_valid() {
        let records = parse_records(&["h", "\"\",0", ",1"]).unwrap();
        assert_eq!(records, vec![Record::new("", false), Record::new("", true)]);
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        let r = parse_line(2, "  spaced out  ,0").unwrap();
        assert_eq!(r.text, "  spaced out  ");
    }

    #[test]
    fn test_first_error_wins() {
        let lines = ["h", "a,b,c", "x,maybe"];
        let err = parse_records(&lines).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_order_and_duplicates_are_kept() {
        let lines = ["h", "same,1", "other,0", "same,1"];
        let records = parse_records(&lines).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("same", true),
                Record::new("other", false),
                Record::new("same", true),
            ]
        );
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let lines = ["h", "\"Win, now\",1", "hi mum,false", "call me,0"];
        assert_eq!(parse_records(&lines).unwrap(), parse_records(&lines).unwrap());
    }
}
