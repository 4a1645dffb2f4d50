use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

use super::dense::Matrix;

/// Reads a matrix written one row per line, cells separated by commas
/// and/or whitespace. Blank lines are ignored.
pub fn parse_matrix(text: &str) -> CalcResult<Matrix> {
    let mut rows = Vec::new();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let row_number = rows.len() + 1;
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(idx, token)| parse_cell(token, row_number, idx + 1))
            .collect::<CalcResult<Vec<f64>>>()?;
        rows.push(row);
    }
    Matrix::from_rows(rows)
}

fn parse_cell(token: &str, row: usize, column: usize) -> CalcResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidEntry {
            row,
            column,
            token: token.to_string(),
        }),
    }
}

impl FromStr for Matrix {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        parse_matrix(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_mixed_separators() {
        let m = parse_matrix("2, 1, 5\n\n1 -1   1\n").unwrap();
        assert_eq!(m.rows(), &[vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]);
    }

    #[test]
    fn report_bad_cell_position() {
        assert_eq!(
            parse_matrix("1 2\n3 x").unwrap_err(),
            CalcError::InvalidEntry {
                row: 2,
                column: 2,
                token: "x".to_string()
            }
        );
        assert!(matches!(
            "NaN 1".parse::<Matrix>(),
            Err(CalcError::InvalidEntry { row: 1, column: 1, .. })
        ));
    }

    #[test]
    fn reject_infinite_cells() {
        assert_eq!(
            parse_matrix("inf 1\n2 3").unwrap_err(),
            CalcError::InvalidEntry {
                row: 1,
                column: 1,
                token: "inf".to_string()
            }
        );
        assert!(matches!(
            parse_matrix("1 2\n3 -infinity"),
            Err(CalcError::InvalidEntry { row: 2, column: 2, .. })
        ));
    }

    #[test]
    fn report_shape_problems() {
        assert!(matches!(parse_matrix(""), Err(CalcError::InvalidShape(_))));
        assert!(matches!(
            parse_matrix("1 2\n3"),
            Err(CalcError::InvalidShape(_))
        ));
    }
}
