use std::fmt;

/// Alias for `Result<T, SchemaError>`
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Problems found in the control tables.
///
/// Any of these aborts generation before a single line is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field declared a width other than 1, 2 or 4 bytes
    InvalidWidth {
        control: &'static str,
        field: &'static str,
        width: usize,
    },
    /// `offset + width` runs past the end of the control buffer
    OutOfBounds {
        control: &'static str,
        field: &'static str,
        end: usize,
        length: usize,
    },
    /// Two fields claim the same byte
    Overlap {
        control: &'static str,
        first: &'static str,
        second: &'static str,
    },
    DuplicateField {
        control: &'static str,
        field: &'static str,
    },
    /// Name cannot be used as an identifier in the generated source
    InvalidIdent {
        control: &'static str,
        name: &'static str,
        reason: &'static str,
    },
    /// The emitter built tokens `syn` refused to parse
    Syntax(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { control, field, width } => {
                write!(f, "{control}.{field}: bad width {width} (must be 1, 2 or 4 bytes)")
            }
            Self::OutOfBounds { control, field, end, length } => {
                write!(f, "{control}.{field}: ends at byte {end} but the control is {length} bytes long")
            }
            Self::Overlap { control, first, second } => {
                write!(f, "{control}: fields `{first}` and `{second}` overlap")
            }
            Self::DuplicateField { control, field } => {
                write!(f, "{control}: field `{field}` declared more than once")
            }
            Self::InvalidIdent { control, name, reason } => {
                write!(f, "{control}: `{name}` {reason}")
            }
            Self::Syntax(msg) => write!(f, "generated tokens failed to parse: {msg}"),
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<syn::Error> for SchemaError {
    fn from(value: syn::Error) -> Self {
        SchemaError::Syntax(value.to_string())
    }
}
