//! Row-index files: one 1-based row index per line, blank lines ignored.
//! In memory the indices are 0-based.

use crate::error::CliError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses 1-based row indices and returns them 0-based.
pub fn parse_row_indices<R: BufRead>(reader: R) -> Result<Vec<usize>, CliError> {
    let mut indices = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(row) if row > 0 => indices.push(row - 1),
            _ => {
                return Err(CliError::InvalidRowIndex {
                    line: n + 1,
                    token: token.to_string(),
                });
            }
        }
    }
    Ok(indices)
}

pub fn read_row_indices(path: &Path) -> Result<Vec<usize>, CliError> {
    parse_row_indices(BufReader::new(File::open(path)?))
}

/// Renders 0-based indices as a 1-based row-index file.
pub fn render_row_indices(indices: &[usize]) -> String {
    indices.iter().map(|row| format!("{}\n", row + 1)).collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_row_indices, render_row_indices};
    use crate::CliError;

    #[test]
    fn test_parse_converts_to_zero_based() -> Result<(), CliError> {
        let indices = parse_row_indices("1\n\n  3 \n10\n".as_bytes())?;
        assert_eq!(indices, vec![0, 2, 9]);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_zero_and_garbage() {
        for (text, expected_line) in [("1\n0\n", 2), ("x\n", 1), ("2\n\n-4\n", 3), ("1.5\n", 1)] {
            match parse_row_indices(text.as_bytes()) {
                Err(CliError::InvalidRowIndex { line, .. }) => assert_eq!(line, expected_line),
                other => panic!("Expected InvalidRowIndex for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_render_is_one_based_and_parses_back() -> Result<(), CliError> {
        let text = render_row_indices(&[0, 2, 7]);
        assert_eq!(text, "1\n3\n8\n");
        assert_eq!(parse_row_indices(text.as_bytes())?, vec![0, 2, 7]);
        assert_eq!(render_row_indices(&[]), "");
        Ok(())
    }
}
