use std::fmt;

use crate::slice::Slice;
use crate::string::Str;

/// An operand handed to a special method of [`Str`].
///
/// Only strings are understood by this crate. The other variants exist so
/// that an operation can tell which operand types it supports; the
/// interpreter owning those types decides everything else about them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Str(Str),
    Slice(Slice),
}

impl Value {
    /// The name of the type of this value, as the interpreter reports it.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Slice(_) => "slice",
        }
    }

    pub fn as_str(&self) -> Option<&Str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an index, if it is an integer. A `bool` is an integer.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// The source form of the value.
    pub fn repr(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Str(s) => s.repr(),
            Value::Slice(slice) => {
                let bound = |b: Option<i64>| b.map_or("None".to_string(), |b| b.to_string());
                format!(
                    "slice({}, {}, {})",
                    bound(slice.start),
                    bound(slice.stop),
                    bound(slice.step)
                )
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => s.fmt(f),
            _ => f.write_str(&self.repr()),
        }
    }
}

impl From<Str> for Value {
    fn from(s: Str) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Slice> for Value {
    fn from(slice: Slice) -> Self {
        Value::Slice(slice)
    }
}
