use crate::error;
use crate::string::Str;
use crate::value::Value;

use super::special::OpResult;

/// `a * n` (and `n * a`): repetition, defined when `n` is an integer.
///
/// A count of zero or less gives the empty string.
pub(crate) fn op_multiply(a: &Str, n: &Value) -> error::Result<OpResult<Str>> {
    let n = match n.as_index() {
        Some(n) => n,
        None => return Ok(OpResult::NotImplemented),
    };
    if n <= 0 {
        return Ok(OpResult::Value(Str::default()));
    }
    let n = usize::try_from(n).map_err(|_| error::Error::RepeatOverflow)?;
    Ok(OpResult::Value(a.repeat(n)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply() {
        let a = Str::from("ab");
        assert_eq!(
            op_multiply(&a, &Value::Int(3)),
            Ok(OpResult::Value(Str::from("ababab")))
        );
        assert_eq!(
            op_multiply(&a, &Value::Bool(true)),
            Ok(OpResult::Value(Str::from("ab")))
        );
    }

    #[test]
    fn test_multiply_negative() {
        assert_eq!(
            op_multiply(&Str::from("ab"), &Value::Int(-2)),
            Ok(OpResult::Value(Str::default()))
        );
    }

    #[test]
    fn test_multiply_overflow() {
        assert_eq!(
            op_multiply(&Str::from("ab"), &Value::Int(i64::MAX)),
            Err(error::Error::RepeatOverflow)
        );
    }

    #[test]
    fn test_multiply_by_str_not_implemented() {
        assert_eq!(
            op_multiply(&Str::from("ab"), &Value::from("2")),
            Ok(OpResult::NotImplemented)
        );
    }
}
