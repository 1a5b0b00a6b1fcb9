/// Rankings-file parsing and race-CSV conversion.
///
/// The rankings format is one ranking per line, items in finish order with
/// the winner first, fields separated by a configurable delimiter
/// (historically comma or pipe).
use std::collections::HashSet;

/// Default field delimiter for ranking lines.
pub const DEFAULT_DELIMITER: &str = ",";

/// Parse rankings text into item lists.
///
/// Blank lines are skipped and fields are trimmed. A duplicate item within
/// one line is rejected here, at the boundary — the engine treats each line
/// as a strict total order and does not defend against duplicates itself.
pub fn parse_rankings(content: &str, delimiter: &str) -> Result<Vec<Vec<String>>, String> {
    let mut rankings = Vec::new();

    for (line_no, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let items: Vec<String> = line
            .split(delimiter)
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.as_str()) {
                return Err(format!(
                    "duplicate item \"{item}\" in the ranking on line {}",
                    line_no + 1
                ));
            }
        }

        rankings.push(items);
    }

    Ok(rankings)
}

/// Strip surrounding quotes from a CSV field.
fn unquote(field: &str) -> &str {
    field.trim().trim_matches('"')
}

/// Parse the competitor-names CSV: a header row naming an "x" column, then
/// one name per row. Row order defines the 1-based competitor numbering the
/// races file refers to.
pub fn parse_competitor_names(content: &str) -> Result<Vec<String>, String> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or("names file is empty")?;
    let columns: Vec<&str> = header.split(',').map(unquote).collect();
    let name_col = columns
        .iter()
        .position(|col| *col == "x")
        .ok_or("names file has no \"x\" column in its header")?;

    let mut names = Vec::new();
    let mut saw_header = false;
    for (line_no, row) in content.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }
        if !saw_header {
            saw_header = true;
            continue;
        }
        let fields: Vec<&str> = row.split(',').map(unquote).collect();
        let name = fields.get(name_col).ok_or(format!(
            "line {}: row has {} fields, expected at least {}",
            line_no + 1,
            fields.len(),
            name_col + 1
        ))?;
        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err("names file has a header but no rows".to_string());
    }
    Ok(names)
}

/// Convert the races CSV (a header row, then one race per row whose fields
/// are 1-based competitor numbers in finish order) into ranking lines.
pub fn races_to_rankings(
    races: &str,
    names: &[String],
    delimiter: &str,
) -> Result<Vec<String>, String> {
    let mut rankings = Vec::new();

    let mut saw_header = false;
    for (line_no, row) in races.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }
        if !saw_header {
            saw_header = true;
            continue;
        }

        let mut race = Vec::new();
        for field in row.split(',') {
            let field = unquote(field);
            let number: usize = field.parse().map_err(|_| {
                format!("line {}: \"{field}\" is not a competitor number", line_no + 1)
            })?;
            if number == 0 {
                return Err(format!("line {}: competitor numbers are 1-based", line_no + 1));
            }
            let name = names.get(number - 1).ok_or(format!(
                "line {}: competitor number {number} out of range ({} names)",
                line_no + 1,
                names.len()
            ))?;
            race.push(name.as_str());
        }
        rankings.push(race.join(delimiter));
    }

    if rankings.is_empty() {
        return Err("races file has no data rows".to_string());
    }
    Ok(rankings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rankings_comma() {
        let rankings = parse_rankings("b,c,a\na, b, c\n\n", ",").unwrap();
        assert_eq!(rankings, vec![vec!["b", "c", "a"], vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_parse_rankings_pipe() {
        let rankings = parse_rankings("x|y\ny|x", "|").unwrap();
        assert_eq!(rankings, vec![vec!["x", "y"], vec!["y", "x"]]);
    }

    #[test]
    fn test_parse_rankings_rejects_duplicates() {
        let err = parse_rankings("a,b,a", ",").unwrap_err();
        assert!(err.contains("duplicate item \"a\""));
        assert!(err.contains("line 1"));
    }

    #[test]
    fn test_parse_competitor_names() {
        let csv = "\"\",\"x\"\n\"1\",\"Alice Arden\"\n\"2\",\"Bob Burke\"\n";
        let names = parse_competitor_names(csv).unwrap();
        assert_eq!(names, vec!["Alice Arden", "Bob Burke"]);
    }

    #[test]
    fn test_parse_competitor_names_requires_x_column() {
        let err = parse_competitor_names("id,name\n1,Alice\n").unwrap_err();
        assert!(err.contains("\"x\" column"));
    }

    #[test]
    fn test_races_to_rankings() {
        let names = vec!["Alice".to_string(), "Bob".to_string(), "Cara".to_string()];
        let races = "p1,p2,p3\n2,3,1\n1,2,3\n";
        let rankings = races_to_rankings(races, &names, ",").unwrap();
        assert_eq!(rankings, vec!["Bob,Cara,Alice", "Alice,Bob,Cara"]);
    }

    #[test]
    fn test_races_to_rankings_rejects_out_of_range() {
        let names = vec!["Alice".to_string()];
        let err = races_to_rankings("p1\n2\n", &names, ",").unwrap_err();
        assert!(err.contains("out of range"));
    }
}
