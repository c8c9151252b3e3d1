use regex::Regex;
use std::sync::OnceLock;

use super::classify::detect_sport;
use crate::models::Match;

/// league, id, date, time, team1, team2 and the six odds columns.
const MIN_FIELDS: usize = 12;

/// Spreadsheet export artifacts sometimes leak "17 фев 20:45" style
/// fragments (day, short month token, HH:MM) into the team-name cells.
fn datetime_leak_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| {
        Regex::new(r"\d{1,2}\s+[а-яёА-ЯЁa-zA-Z]{2,4}\s+\d{1,2}:\d{2}").unwrap()
    })
}

/// Split one CSV line into fields. Single-pass scanner with two states:
/// inside a quoted field a doubled quote is a literal quote, outside
/// quotes a comma ends the field.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
    }

    fields.push(current);
    fields
}

/// Normalize a full CSV export (header row first) into matches. Malformed
/// rows are dropped silently; surviving rows keep their order.
pub fn parse_matches(csv_text: &str) -> Vec<Match> {
    csv_text
        .trim()
        .lines()
        .skip(1)
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<Match> {
    let row = split_line(line);
    if row.len() < MIN_FIELDS {
        return None;
    }

    let league = field(&row, 0);
    let team1 = clean_team_name(&field(&row, 4));
    let team2 = clean_team_name(&field(&row, 5));

    if league.is_empty() || team1.is_empty() || team2.is_empty() {
        return None;
    }

    Some(Match {
        sport: detect_sport(&league),
        league,
        id: field(&row, 1),
        date: field(&row, 2),
        time: field(&row, 3),
        team1,
        team2,
        p1: odds_field(&row, 6),
        x: odds_field(&row, 7),
        p2: odds_field(&row, 8),
        p1x: odds_field(&row, 9),
        p12: odds_field(&row, 10),
        px2: odds_field(&row, 11),
    })
}

fn field(row: &[String], idx: usize) -> String {
    row.get(idx).map_or("", |f| f.trim()).to_string()
}

fn odds_field(row: &[String], idx: usize) -> String {
    let value = field(row, idx);
    if value.is_empty() {
        "0.00".to_string()
    } else {
        value
    }
}

fn clean_team_name(raw: &str) -> String {
    datetime_leak_rx().replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sport;

    const HEADER: &str = "Лига,ID,Дата,Время,Команда 1,Команда 2,П1,X,П2,1X,12,X2";

    fn with_header(row: &str) -> String {
        format!("{HEADER}\n{row}")
    }

    #[test]
    fn test_split_line_plain() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_line("a,,c"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_line_quoted_comma() {
        assert_eq!(
            split_line(r#""Реал, Мадрид",2.10"#),
            vec!["Реал, Мадрид", "2.10"]
        );
    }

    #[test]
    fn test_split_line_doubled_quote() {
        // "a""b" must come back as the literal a"b
        assert_eq!(split_line(r#""a""b",x"#), vec![r#"a"b"#, "x"]);
        assert_eq!(split_line(r#""he said ""go""""#), vec![r#"he said "go""#]);
    }

    #[test]
    fn test_short_row_dropped() {
        let csv = with_header("Испания. Ла Лига,123,17 фев,20:45,Real,Barca");
        assert!(parse_matches(&csv).is_empty());
    }

    #[test]
    fn test_missing_league_or_team_dropped() {
        let csv = with_header(",123,17 фев,20:45,Real,Barca,1,1,1,1,1,1");
        assert!(parse_matches(&csv).is_empty());

        let csv = with_header("Испания. Ла Лига,123,17 фев,20:45,,Barca,1,1,1,1,1,1");
        assert!(parse_matches(&csv).is_empty());
    }

    #[test]
    fn test_la_liga_row_with_leaked_datetime() {
        let csv = with_header(
            "Испания. Ла Лига,123,17 фев,20:45,Real 17 фев 20:45,Barca,2.10,3.40,3.20,1.25,1.10,1.30",
        );
        let matches = parse_matches(&csv);
        assert_eq!(matches.len(), 1);

        let m = &matches[0];
        assert_eq!(m.sport, Sport::Football);
        assert_eq!(m.team1, "Real");
        assert_eq!(m.team2, "Barca");
        assert_eq!(m.p1, "2.10");
        assert_eq!(m.px2, "1.30");
    }

    #[test]
    fn test_cleaning_that_empties_a_name_drops_the_row() {
        let csv = with_header(
            "Испания. Ла Лига,123,17 фев,20:45,17 фев 20:45,Barca,1,1,1,1,1,1",
        );
        assert!(parse_matches(&csv).is_empty());
    }

    #[test]
    fn test_dash_placeholder_team_is_still_emitted() {
        // A "-" team name is not empty; rejecting placeholders is the
        // display layer's call, not the normalizer's.
        let csv = with_header("Unknown League,9,d,t,A,-,1,1,1,1,1,1");
        let matches = parse_matches(&csv);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].team2, "-");
    }

    #[test]
    fn test_empty_odds_default() {
        let csv = with_header("Unknown League,9,d,t,A,B,,,,,,");
        let matches = parse_matches(&csv);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].p1, "0.00");
        assert_eq!(matches[0].px2, "0.00");
    }

    #[test]
    fn test_row_order_preserved() {
        let csv = format!(
            "{HEADER}\nКХЛ,1,d,t,A,B,1,1,1,1,1,1\nNBA,2,d,t,C,D,1,1,1,1,1,1"
        );
        let matches = parse_matches(&csv);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[0].sport, Sport::Hockey);
        assert_eq!(matches[1].id, "2");
        assert_eq!(matches[1].sport, Sport::Basket);
    }
}
