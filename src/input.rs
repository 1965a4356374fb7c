//! Parsing of comma-separated integer lists

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("'{token}' at position {position} is not an integer")]
    InvalidToken { token: String, position: usize },

    #[error("missing value at position {position}")]
    EmptyToken { position: usize },
}

/// Parse a line such as `1, 2, 3` into integers.
///
/// A blank line yields an empty list rather than an error. Positions in
/// errors are 1-based.
pub fn parse_values(line: &str) -> Result<Vec<i64>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    line.split(',')
        .enumerate()
        .map(|(i, raw)| {
            let token = raw.trim();
            if token.is_empty() {
                return Err(InputError::EmptyToken { position: i + 1 });
            }
            token.parse::<i64>().map_err(|_| InputError::InvalidToken {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1,2,3", &[1, 2, 3] ; "plain")]
    #[test_case(" 4 , 5 ,6 ", &[4, 5, 6] ; "padded")]
    #[test_case("-7", &[-7] ; "single negative")]
    #[test_case("", &[] ; "empty line")]
    #[test_case("   \t", &[] ; "whitespace only")]
    fn test_parse_values_ok(line: &str, expected: &[i64]) {
        assert_eq!(parse_values(line).unwrap(), expected);
    }

    #[test_case("1,x,3", "x", 2 ; "letter")]
    #[test_case("1.5", "1.5", 1 ; "float")]
    #[test_case("1 2", "1 2", 1 ; "missing comma")]
    #[test_case("99999999999999999999", "99999999999999999999", 1 ; "overflow")]
    fn test_parse_values_invalid(line: &str, token: &str, position: usize) {
        assert_eq!(
            parse_values(line),
            Err(InputError::InvalidToken {
                token: token.to_string(),
                position,
            })
        );
    }

    #[test]
    fn test_empty_token_between_commas() {
        assert_eq!(
            parse_values("1,,3"),
            Err(InputError::EmptyToken { position: 2 })
        );
        assert_eq!(
            parse_values("1,2,"),
            Err(InputError::EmptyToken { position: 3 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = parse_values("1,abc").unwrap_err();
        assert_eq!(err.to_string(), "'abc' at position 2 is not an integer");
    }
}
