use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format for '{0}'. Expected 'KEY=VALUE'.")]
    MissingSeparator(String),

    #[error("Invalid element symbol '{symbol}' in '{input}'. Expected e.g. 'H' or 'He'.")]
    InvalidElementSymbol { symbol: String, input: String },

    #[error("Invalid atom count '{count}' in '{input}'. Expected a non-negative integer.")]
    InvalidAtomCount { count: String, input: String },

    #[error("Invalid chain length '{length}' in '{input}'. Expected a non-negative integer.")]
    InvalidChainLength { length: String, input: String },

    #[error("Invalid weight '{weight}' in '{input}'. Expected a finite, non-negative number.")]
    InvalidWeight { weight: String, input: String },
}

pub fn split_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    input
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))
}

/// Parses `SYMBOL=COUNT`, e.g. `H=6`.
pub fn parse_element_count(input: &str) -> Result<(String, u32), ParseError> {
    let (symbol, count) = split_key_value(input)?;

    let mut chars = symbol.chars();
    let valid_symbol = matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase())
        && symbol.len() <= 3;
    if !valid_symbol {
        return Err(ParseError::InvalidElementSymbol {
            symbol: symbol.to_string(),
            input: input.to_string(),
        });
    }

    let count = count.parse().map_err(|_| ParseError::InvalidAtomCount {
        count: count.to_string(),
        input: input.to_string(),
    })?;
    Ok((symbol.to_string(), count))
}

/// Parses `NC=WEIGHT`, e.g. `17=0.306`.
pub fn parse_chain_weight(input: &str) -> Result<(u32, f64), ParseError> {
    let (length, weight) = split_key_value(input)?;
    let chain_length = parse_chain_length(length, input)?;
    let weight = parse_weight(weight, input)?;
    Ok((chain_length, weight))
}

pub fn parse_chain_length(length: &str, input: &str) -> Result<u32, ParseError> {
    length.parse().map_err(|_| ParseError::InvalidChainLength {
        length: length.to_string(),
        input: input.to_string(),
    })
}

pub fn parse_weight(weight: &str, input: &str) -> Result<f64, ParseError> {
    weight
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
        .ok_or_else(|| ParseError::InvalidWeight {
            weight: weight.to_string(),
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_element_counts() {
        assert_eq!(parse_element_count("H=6"), Ok(("H".to_string(), 6)));
        assert_eq!(parse_element_count(" He = 2 "), Ok(("He".to_string(), 2)));
        assert_eq!(parse_element_count("C=0"), Ok(("C".to_string(), 0)));
    }

    #[test]
    fn rejects_element_count_without_separator() {
        assert_eq!(
            parse_element_count("H6"),
            Err(ParseError::MissingSeparator("H6".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_element_symbols() {
        for input in ["h=6", "=6", "HE=2", "2H=1"] {
            assert!(
                matches!(
                    parse_element_count(input),
                    Err(ParseError::InvalidElementSymbol { .. })
                ),
                "{}",
                input
            );
        }
    }

    #[test]
    fn rejects_negative_or_fractional_counts() {
        for input in ["H=-1", "H=1.5", "H="] {
            assert!(
                matches!(
                    parse_element_count(input),
                    Err(ParseError::InvalidAtomCount { .. })
                ),
                "{}",
                input
            );
        }
    }

    #[test]
    fn parses_valid_chain_weights() {
        assert_eq!(parse_chain_weight("17=0.306"), Ok((17, 0.306)));
        assert_eq!(parse_chain_weight("20=0"), Ok((20, 0.0)));
    }

    #[test]
    fn rejects_invalid_chain_lengths_and_weights() {
        assert!(matches!(
            parse_chain_weight("x=0.3"),
            Err(ParseError::InvalidChainLength { .. })
        ));
        assert!(matches!(
            parse_chain_weight("17=-0.1"),
            Err(ParseError::InvalidWeight { .. })
        ));
        assert!(matches!(
            parse_chain_weight("17=inf"),
            Err(ParseError::InvalidWeight { .. })
        ));
    }
}
