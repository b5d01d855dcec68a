use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// The class of exception an interpreter raises for an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    TypeError,
    ValueError,
    IndexError,
    OverflowError,
    AttributeError,
}

/// Text operation error code
///
/// The first paragraph of the documentation of each code is its message,
/// the rest is a note with more detail.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// string index out of range
    ///
    /// An integer index must lie in `-len..len`.
    IndexOutOfRange,
    /// string indices must be integers or slices
    ///
    /// Only integers and slice objects can be used to index a string.
    IndicesMustBeIntegers,
    /// 'in <string>' requires string as left operand
    ///
    /// Only a string can be looked for inside a string.
    ContainsRequiresStr,
    /// slice step cannot be zero
    ///
    /// A slice may step forwards or backwards, but it must step.
    ZeroSliceStep,
    /// repeated string is too long
    ///
    /// The length of the repeated string does not fit in memory.
    RepeatOverflow,
    /// padded string is too long
    ///
    /// The requested width does not fit in memory.
    PadOverflow,
    /// the fill character must be exactly one character long
    ///
    /// Padding methods accept a string of length one as fill character.
    BadFillChar,
    /// code point not in range(0x110000)
    ///
    /// Text can only hold code points up to U+10FFFF.
    CodePointOutOfRange,
    /// wrong number of arguments
    ///
    /// A special method was called with a number of arguments it does not
    /// take.
    WrongArity,
    /// no such special method
    ///
    /// The string type does not define a special method of that name.
    UnknownSpecialMethod,
}

impl Error {
    /// The exception class to raise for this error.
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            IndexOutOfRange => ErrorKind::IndexError,
            IndicesMustBeIntegers | ContainsRequiresStr | BadFillChar | WrongArity => {
                ErrorKind::TypeError
            }
            ZeroSliceStep | CodePointOutOfRange => ErrorKind::ValueError,
            RepeatOverflow | PadOverflow => ErrorKind::OverflowError,
            UnknownSpecialMethod => ErrorKind::AttributeError,
        }
    }

    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
