use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error;
use crate::string::Str;
use crate::value::Value;

use super::compare::rich_compare;
use super::op_add::op_add;
use super::op_contains::op_contains;
use super::op_getitem::op_getitem;
use super::op_multiply::op_multiply;
use super::{OpEq, OpGe, OpGt, OpLe, OpLt, OpNe};

/// The outcome of a special method.
///
/// A binary special method answers `NotImplemented` when it does not support
/// the type of its other operand, so that the interpreter can try the
/// reflected operation or report the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpResult<T> {
    Value(T),
    NotImplemented,
}

impl<T> OpResult<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> OpResult<U> {
        match self {
            OpResult::Value(v) => OpResult::Value(f(v)),
            OpResult::NotImplemented => OpResult::NotImplemented,
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, OpResult::Value(_))
    }

    pub fn value(self) -> Option<T> {
        match self {
            OpResult::Value(v) => Some(v),
            OpResult::NotImplemented => None,
        }
    }
}

/// The special methods of the string type.
///
/// This is the operator table of [`Str`]: the name of each method, how many
/// arguments it takes besides the string itself, and its implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum SpecialMethod {
    #[strum(serialize = "__len__")]
    Len,
    #[strum(serialize = "__hash__")]
    Hash,
    #[strum(serialize = "__str__")]
    Str,
    #[strum(serialize = "__repr__")]
    Repr,
    #[strum(serialize = "__eq__")]
    Eq,
    #[strum(serialize = "__ne__")]
    Ne,
    #[strum(serialize = "__lt__")]
    Lt,
    #[strum(serialize = "__le__")]
    Le,
    #[strum(serialize = "__gt__")]
    Gt,
    #[strum(serialize = "__ge__")]
    Ge,
    #[strum(serialize = "__add__")]
    Add,
    #[strum(serialize = "__mul__")]
    Mul,
    #[strum(serialize = "__rmul__")]
    RMul,
    #[strum(serialize = "__getitem__")]
    GetItem,
    #[strum(serialize = "__contains__")]
    Contains,
}

impl SpecialMethod {
    /// Look up a special method by its name, such as `__eq__`.
    pub fn lookup(name: &str) -> error::Result<Self> {
        name.parse().map_err(|_| error::Error::UnknownSpecialMethod)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The number of arguments taken besides the string itself.
    pub fn arity(&self) -> usize {
        use SpecialMethod::*;
        match self {
            Len | Hash | Str | Repr => 0,
            Eq | Ne | Lt | Le | Gt | Ge | Add | Mul | RMul | GetItem | Contains => 1,
        }
    }

    /// Call the special method on `this` with `args`.
    pub fn call(&self, this: &Str, args: &[Value]) -> error::Result<OpResult<Value>> {
        if args.len() != self.arity() {
            return Err(error::Error::WrongArity);
        }
        tracing::trace!(method = self.name(), len = this.len(), "calling special method");
        use SpecialMethod::*;
        let result = match self {
            Len => OpResult::Value(Value::Int(this.len() as i64)),
            Hash => OpResult::Value(Value::Int(this.hash_value())),
            Str => OpResult::Value(Value::Str(this.clone())),
            Repr => OpResult::Value(Value::Str(this.repr().into())),
            Eq => rich_compare::<OpEq>(this, &args[0]).map(Value::Bool),
            Ne => rich_compare::<OpNe>(this, &args[0]).map(Value::Bool),
            Lt => rich_compare::<OpLt>(this, &args[0]).map(Value::Bool),
            Le => rich_compare::<OpLe>(this, &args[0]).map(Value::Bool),
            Gt => rich_compare::<OpGt>(this, &args[0]).map(Value::Bool),
            Ge => rich_compare::<OpGe>(this, &args[0]).map(Value::Bool),
            Add => op_add(this, &args[0]).map(Value::Str),
            Mul | RMul => op_multiply(this, &args[0])?.map(Value::Str),
            GetItem => OpResult::Value(Value::Str(op_getitem(this, &args[0])?)),
            Contains => OpResult::Value(Value::Bool(op_contains(this, &args[0])?)),
        };
        if !result.is_implemented() {
            tracing::debug!(
                method = self.name(),
                operand = args[0].type_name(),
                "operand type not supported"
            );
        }
        Ok(result)
    }
}
