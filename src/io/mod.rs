//! Point-list loading.
//!
//! Reads the semicolon-delimited `name;id;x;y` format, one place per
//! line. Parsing is strict: a malformed record reports its line number
//! instead of being silently skipped.

use std::fs;
use std::path::Path;

use crate::error::{Result, SolverError};
use crate::models::Place;

/// Parses places from `name;id;x;y` text, one record per line.
///
/// Blank lines are ignored; field whitespace is trimmed.
///
/// # Errors
///
/// [`SolverError::InvalidData`] naming the first malformed line.
///
/// # Examples
///
/// ```
/// use u_tour::io::parse_places;
///
/// let places = parse_places("Vilnius;1;25.28;54.69\nKaunas;2;23.90;54.90\n").unwrap();
/// assert_eq!(places.len(), 2);
/// assert_eq!(places[0].name(), "Vilnius");
/// assert_eq!(places[1].id(), 2);
/// ```
pub fn parse_places(text: &str) -> Result<Vec<Place>> {
    let mut places = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let place = parse_record(line).map_err(|reason| {
            SolverError::invalid_data(format!("line {}: {reason}", line_no + 1))
        })?;
        places.push(place);
    }
    Ok(places)
}

/// Reads and parses a place file.
///
/// # Errors
///
/// [`SolverError::Io`] if the file cannot be read,
/// [`SolverError::InvalidData`] for malformed records.
pub fn read_places_file(path: impl AsRef<Path>) -> Result<Vec<Place>> {
    let text = fs::read_to_string(path)?;
    parse_places(&text)
}

fn parse_record(line: &str) -> std::result::Result<Place, String> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 4 {
        return Err(format!(
            "expected 4 fields separated by ';', found {}",
            fields.len()
        ));
    }

    let id: i64 = fields[1]
        .trim()
        .parse()
        .map_err(|_| format!("invalid id {:?}", fields[1]))?;
    let x: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| format!("invalid x {:?}", fields[2]))?;
    let y: f64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| format!("invalid y {:?}", fields[3]))?;

    Ok(Place::new(fields[0].trim(), id, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_records() {
        let text = "a;1;0.0;0.0\nb;2;1.5;-2.5\n";
        let places = parse_places(text).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[1].name(), "b");
        assert_eq!(places[1].id(), 2);
        assert_eq!(places[1].x(), 1.5);
        assert_eq!(places[1].y(), -2.5);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "a;1;0;0\n\n   \nb;2;1;1\n";
        let places = parse_places(text).unwrap();
        assert_eq!(places.len(), 2);
    }

    #[test]
    fn test_field_whitespace_trimmed() {
        let places = parse_places("a ; 1 ; 2.0 ; 3.0").unwrap();
        assert_eq!(places[0].name(), "a");
        assert_eq!(places[0].id(), 1);
        assert_eq!(places[0].x(), 2.0);
    }

    #[test]
    fn test_wrong_field_count_reported_with_line() {
        let err = parse_places("a;1;0;0\nb;2;3\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"), "got: {message}");
        assert!(matches!(err, SolverError::InvalidData(_)));
    }

    #[test]
    fn test_bad_number_rejected() {
        assert!(parse_places("a;one;0;0").is_err());
        assert!(parse_places("a;1;left;0").is_err());
        assert!(parse_places("a;1;0;up").is_err());
    }

    #[test]
    fn test_empty_input_yields_no_places() {
        assert!(parse_places("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_places_file("/nonexistent/places_data.txt").unwrap_err();
        assert!(matches!(err, SolverError::Io(_)));
    }
}
