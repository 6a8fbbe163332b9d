// Expand %date%, %time%, %timestamp% and %date:fmt%/%time:fmt% in filename prefixes

use crate::error::TextToolsError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use regex::{Captures, Regex};
use std::fmt::Display;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%date:([^%]+)%").expect("valid date pattern regex"));
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%time:([^%]+)%").expect("valid time pattern regex"));

// Textual replacements applied in order; "yyyy" must precede "yy"
const DATE_TOKENS: [(&str, &str); 8] = [
    ("yyyy", "%Y"),
    ("yy", "%y"),
    ("MM", "%m"),
    ("dd", "%d"),
    ("HH", "%H"),
    ("hh", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

const TIME_TOKENS: [(&str, &str); 4] = [("HH", "%H"), ("hh", "%H"), ("mm", "%M"), ("ss", "%S")];

fn to_strftime(pattern: &str, tokens: &[(&str, &str)]) -> String {
    tokens
        .iter()
        .fold(pattern.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn format_time<Tz>(now: &DateTime<Tz>, strftime: &str) -> Result<String, TextToolsError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(strftime).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(TextToolsError::Prefix(format!(
            "invalid date/time pattern '{}'",
            strftime
        )));
    }
    Ok(now.format_with_items(items.into_iter()).to_string())
}

fn replace_pattern<Tz>(
    input: &str,
    re: &Regex,
    tokens: &[(&str, &str)],
    now: &DateTime<Tz>,
) -> Result<String, TextToolsError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut failure = None;
    let replaced = re.replace_all(input, |caps: &Captures| {
        match format_time(now, &to_strftime(&caps[1], tokens)) {
            Ok(formatted) => formatted,
            Err(e) => {
                failure.get_or_insert(e);
                caps[0].to_string()
            }
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(replaced.into_owned()),
    }
}

/// Expand naming tokens in a filename prefix relative to `now`.
///
/// `%date:yyyy-MM-dd%` style patterns accept yyyy, yy, MM, dd, HH, hh, mm and
/// ss; `%time:HH.mm%` accepts the time tokens only. The bare tokens expand to
/// `YYYY-MM-DD`, `HH-MM-SS` and Unix seconds.
pub fn expand_prefix<Tz>(prefix: &str, now: &DateTime<Tz>) -> Result<String, TextToolsError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut expanded = replace_pattern(prefix, &DATE_PATTERN, &DATE_TOKENS, now)?;
    expanded = replace_pattern(&expanded, &TIME_PATTERN, &TIME_TOKENS, now)?;

    if expanded.contains("%date%") {
        expanded = expanded.replace("%date%", &now.format("%Y-%m-%d").to_string());
    }
    if expanded.contains("%time%") {
        expanded = expanded.replace("%time%", &now.format("%H-%M-%S").to_string());
    }
    if expanded.contains("%timestamp%") {
        expanded = expanded.replace("%timestamp%", &now.timestamp().to_string());
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_plain_prefix_untouched() {
        let now = at(2024, 3, 5, 14, 7, 9);
        assert_eq!(expand_prefix("ComfyUI_text", &now).unwrap(), "ComfyUI_text");
    }

    #[test]
    fn test_date_pattern() {
        let now = at(2024, 3, 5, 14, 7, 9);
        assert_eq!(expand_prefix("%date:yyyy-MM-dd%", &now).unwrap(), "2024-03-05");
        assert_eq!(expand_prefix("log_%date:yyMMdd%", &now).unwrap(), "log_240305");
    }

    #[test]
    fn test_date_pattern_with_time_components() {
        let now = at(2024, 3, 5, 14, 7, 9);
        assert_eq!(
            expand_prefix("%date:yyyy-MM-dd_hh.mm.ss%", &now).unwrap(),
            "2024-03-05_14.07.09"
        );
    }

    #[test]
    fn test_time_pattern() {
        let now = at(2024, 3, 5, 4, 7, 9);
        assert_eq!(expand_prefix("run_%time:HHmmss%", &now).unwrap(), "run_040709");
    }

    #[test]
    fn test_bare_tokens() {
        let now = at(2024, 3, 5, 14, 7, 9);
        assert_eq!(
            expand_prefix("%date%/%time%_notes", &now).unwrap(),
            "2024-03-05/14-07-09_notes"
        );
        assert_eq!(
            expand_prefix("t%timestamp%", &now).unwrap(),
            format!("t{}", now.timestamp())
        );
    }

    #[test]
    fn test_repeated_patterns_in_one_prefix() {
        let now = at(2024, 3, 5, 14, 7, 9);
        for _ in 0..2 {
            assert_eq!(
                expand_prefix("%date:yyyy%/%date:MM%/%time:HH%_%time:mm%", &now).unwrap(),
                "2024/03/14_07"
            );
        }
    }

    #[test]
    fn test_unknown_tokens_left_alone() {
        let now = at(2024, 3, 5, 14, 7, 9);
        assert_eq!(expand_prefix("%weekday%_x", &now).unwrap(), "%weekday%_x");
    }
}
