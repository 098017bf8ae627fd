use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::error::{SchemaError, SchemaResult};

/// Bindings the generated accessor bodies use for themselves
pub const RESERVED_NAMES: [&str; 3] = ["data", "ret", "req_code"];

/// Byte width of a scalar field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    One,
    Two,
    Four,
}

impl Width {
    pub fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            1 => Some(Width::One),
            2 => Some(Width::Two),
            4 => Some(Width::Four),
            _ => None,
        }
    }

    pub fn bytes(self) -> usize {
        match self {
            Width::One => 1,
            Width::Two => 2,
            Width::Four => 4,
        }
    }

    /// Rust scalar carrying a field of this width
    pub fn scalar(self, signed: bool) -> Ident {
        let bits = self.bytes() * 8;
        let prefix = if signed { "i" } else { "u" };

        format_ident!("{}{}", prefix, bits)
    }
}

/// One scalar sub-field of a control buffer.
///
/// `width` is kept as the raw byte count written in the table and only turned into a
/// [`Width`] when the field is validated or rendered, so a bad table entry surfaces as a
/// [`SchemaError`] rather than failing to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub signed: bool,
    pub description: Option<&'static str>,
}

impl Field {
    pub const fn unsigned(name: &'static str, offset: usize, width: usize) -> Self {
        Field {
            name,
            offset,
            width,
            signed: false,
            description: None,
        }
    }

    pub const fn signed(name: &'static str, offset: usize, width: usize) -> Self {
        Field {
            name,
            offset,
            width,
            signed: true,
            description: None,
        }
    }

    /// Attach the per-argument documentation line
    pub const fn doc(self, description: &'static str) -> Self {
        Field {
            description: Some(description),
            ..self
        }
    }

    /// Checked width, the only validation a lone field can do on itself
    pub fn width_in(&self, control: &'static str) -> SchemaResult<Width> {
        Width::from_bytes(self.width).ok_or(SchemaError::InvalidWidth {
            control,
            field: self.name,
            width: self.width,
        })
    }

    /// One past the last byte this field occupies
    pub fn end(&self) -> usize {
        self.offset + self.width
    }

    pub fn ident_in(&self, control: &'static str) -> SchemaResult<Ident> {
        if RESERVED_NAMES.contains(&self.name) {
            return Err(SchemaError::InvalidIdent {
                control,
                name: self.name,
                reason: "shadows a binding used by the accessor body",
            });
        }

        parse_ident(control, self.name)
    }

    /// `u8`, `i16`, ... as tokens
    pub fn scalar_in(&self, control: &'static str) -> SchemaResult<TokenStream> {
        let ty = self.width_in(control)?.scalar(self.signed);

        Ok(quote! { #ty })
    }
}

/// Parse `name` as a plain Rust identifier; keywords and malformed names are refused
pub fn parse_ident(control: &'static str, name: &'static str) -> SchemaResult<Ident> {
    syn::parse_str::<Ident>(name).map_err(|_| SchemaError::InvalidIdent {
        control,
        name,
        reason: "is not a valid identifier",
    })
}
