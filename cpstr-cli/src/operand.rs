use cpstr::{Slice, Str, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum OperandError {
    #[error("invalid integer operand: {0}")]
    InvalidInt(String),
    #[error("invalid boolean operand: {0}")]
    InvalidBool(String),
    #[error("invalid code point: {0}")]
    InvalidCodePoint(String),
    #[error("invalid slice operand: {0}")]
    InvalidSlice(String),
    #[error("expected a str operand, got {0}")]
    NotAStr(&'static str),
    #[error("{}", .0.message())]
    Text(#[from] cpstr::error::Error),
}

/// Parse an operand written on the command line.
///
/// `s:text` is a compact str, `w:text` a wide str, `cp:72,0x1F600` a wide
/// str from code points, `i:42` an int, `b:true` a bool, `none` the None
/// value and `slice:START:STOP:STEP` a slice. Anything else is a compact str.
pub(crate) fn parse_operand(s: &str) -> Result<Value, OperandError> {
    if s == "none" {
        return Ok(Value::None);
    }
    let (prefix, rest) = match s.split_once(':') {
        Some(parts) => parts,
        None => return Ok(Value::from(s)),
    };
    match prefix {
        "s" => Ok(Value::from(rest)),
        "w" => Ok(Value::Str(Str::from_code_points(
            rest.chars().map(u32::from).collect(),
        )?)),
        "cp" => Ok(Value::Str(Str::from_code_points(parse_code_points(rest)?)?)),
        "i" => rest
            .parse()
            .map(Value::Int)
            .map_err(|_| OperandError::InvalidInt(rest.to_string())),
        "b" => match rest {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(OperandError::InvalidBool(rest.to_string())),
        },
        "slice" => parse_slice(rest).map(Value::Slice),
        _ => Ok(Value::from(s)),
    }
}

/// Parse an operand that has to be a str.
pub(crate) fn parse_str(s: &str) -> Result<Str, OperandError> {
    match parse_operand(s)? {
        Value::Str(s) => Ok(s),
        other => Err(OperandError::NotAStr(other.type_name())),
    }
}

fn parse_code_points(s: &str) -> Result<Vec<u32>, OperandError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|part| {
            let part = part.trim();
            let parsed = match part.strip_prefix("0x") {
                Some(hex) => u32::from_str_radix(hex, 16),
                None => part.parse(),
            };
            parsed.map_err(|_| OperandError::InvalidCodePoint(part.to_string()))
        })
        .collect()
}

fn parse_slice(s: &str) -> Result<Slice, OperandError> {
    let parts = s.split(':').collect::<Vec<_>>();
    if parts.len() > 3 {
        return Err(OperandError::InvalidSlice(s.to_string()));
    }
    let mut bounds = [None; 3];
    for (bound, part) in bounds.iter_mut().zip(parts) {
        if !part.is_empty() {
            let value = part
                .parse()
                .map_err(|_| OperandError::InvalidSlice(s.to_string()))?;
            *bound = Some(value);
        }
    }
    let [start, stop, step] = bounds;
    Ok(Slice::new(start, stop, step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_word_is_compact_str() {
        let value = parse_operand("hello").unwrap();
        assert_eq!(value, Value::from("hello"));
        assert!(value.as_str().unwrap().is_compact());
    }

    #[test]
    fn test_unknown_prefix_is_literal() {
        assert_eq!(parse_operand("a:b").unwrap(), Value::from("a:b"));
    }

    #[test]
    fn test_wide_str() {
        let s = parse_str("w:caf\u{e9}").unwrap();
        assert!(!s.is_compact());
        assert_eq!(s, "caf\u{e9}");
    }

    #[test]
    fn test_code_points() {
        let s = parse_str("cp:72, 105,0x1F600").unwrap();
        assert_eq!(s, "Hi\u{1F600}");
        assert_eq!(parse_str("cp:").unwrap().len(), 0);
        assert_eq!(
            parse_operand("cp:72,x"),
            Err(OperandError::InvalidCodePoint("x".to_string()))
        );
        assert_eq!(
            parse_operand("cp:0x110000"),
            Err(OperandError::Text(cpstr::error::Error::CodePointOutOfRange))
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_operand("i:-3").unwrap(), Value::Int(-3));
        assert_eq!(parse_operand("b:true").unwrap(), Value::Bool(true));
        assert_eq!(parse_operand("none").unwrap(), Value::None);
        assert_eq!(
            parse_operand("i:three"),
            Err(OperandError::InvalidInt("three".to_string()))
        );
    }

    #[test]
    fn test_slice() {
        assert_eq!(
            parse_operand("slice:1::-1").unwrap(),
            Value::Slice(Slice::new(Some(1), None, Some(-1)))
        );
        assert_eq!(
            parse_operand("slice:").unwrap(),
            Value::Slice(Slice::default())
        );
        assert!(parse_operand("slice:1:2:3:4").is_err());
    }

    #[test]
    fn test_str_required() {
        assert_eq!(parse_str("i:1"), Err(OperandError::NotAStr("int")));
    }
}
