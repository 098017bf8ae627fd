use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::error::{SchemaError, SchemaResult};
use crate::field::{parse_ident, Field};

/// Entity a control belongs to; picks the selector namespace
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    CameraTerminal,
    ProcessingUnit,
    SelectorUnit,
}

impl Unit {
    pub fn prefix(self) -> &'static str {
        match self {
            Unit::CameraTerminal => "CT",
            Unit::ProcessingUnit => "PU",
            Unit::SelectorUnit => "SU",
        }
    }

    /// Name of the runtime enum holding this unit's selector constants
    pub fn selector_type(self) -> Ident {
        match self {
            Unit::CameraTerminal => format_ident!("CtSelector"),
            Unit::ProcessingUnit => format_ident!("PuSelector"),
            Unit::SelectorUnit => format_ident!("SuSelector"),
        }
    }
}

/// Documentation override for a control's accessor pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlDocs {
    Split {
        getter: &'static str,
        setter: &'static str,
    },
    /// Same text for both, with `{gets_sets}` replaced by `Reads` / `Sets`
    Shared(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
    /// Accessors are named `get_<short_name>` / `set_<short_name>`
    pub short_name: &'static str,
    /// `SCREAMING_SNAKE` selector name without unit prefix or `_CONTROL` suffix
    pub selector: &'static str,
    pub length: usize,
    pub docs: Option<ControlDocs>,
    pub fields: &'static [Field],
}

impl Control {
    pub const fn new(short_name: &'static str, selector: &'static str, length: usize, fields: &'static [Field]) -> Self {
        Control {
            short_name,
            selector,
            length,
            docs: None,
            fields,
        }
    }

    pub const fn docs(self, docs: ControlDocs) -> Self {
        Control {
            docs: Some(docs),
            ..self
        }
    }

    /// Check the layout against the buffer before trusting it.
    ///
    /// Unused bytes are fine, stray or overlapping ones are not.
    pub fn validate(&self) -> SchemaResult<()> {
        let control = self.short_name;

        parse_ident(control, self.short_name)?;
        self.variant()?;

        for (idx, field) in self.fields.iter().enumerate() {
            field.ident_in(control)?;
            field.width_in(control)?;

            if field.end() > self.length {
                return Err(SchemaError::OutOfBounds {
                    control,
                    field: field.name,
                    end: field.end(),
                    length: self.length,
                });
            }

            for earlier in &self.fields[..idx] {
                if earlier.name == field.name {
                    return Err(SchemaError::DuplicateField { control, field: field.name });
                }

                if earlier.offset < field.end() && field.offset < earlier.end() {
                    return Err(SchemaError::Overlap {
                        control,
                        first: earlier.name,
                        second: field.name,
                    });
                }
            }
        }

        Ok(())
    }

    /// `SCANNING_MODE` -> `ScanningMode`
    pub fn variant(&self) -> SchemaResult<Ident> {
        let invalid = |reason| SchemaError::InvalidIdent {
            control: self.short_name,
            name: self.selector,
            reason,
        };

        if self.selector.is_empty() || self.selector.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid("is not a selector name"));
        }

        let mut variant = String::with_capacity(self.selector.len());

        for word in self.selector.split('_') {
            if word.is_empty() {
                return Err(invalid("has an empty word"));
            }
            if !word.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
                return Err(invalid("must be SCREAMING_SNAKE_CASE"));
            }

            let (head, tail) = word.split_at(1);
            variant.push_str(head);
            variant.push_str(&tail.to_ascii_lowercase());
        }

        Ok(format_ident!("{}", variant))
    }

    /// `(CtSelector::ScanningMode as u16) << 8`
    pub fn selector_value(&self, unit: Unit) -> SchemaResult<TokenStream> {
        let ty = unit.selector_type();
        let variant = self.variant()?;

        Ok(quote! { (#ty::#variant as u16) << 8 })
    }

    pub fn getter_doc(&self) -> String {
        match self.docs {
            Some(ControlDocs::Split { getter, .. }) => getter.to_string(),
            Some(ControlDocs::Shared(text)) => text.replace("{gets_sets}", "Reads"),
            None => format!("Reads the `{}` control.", self.selector),
        }
    }

    pub fn setter_doc(&self) -> String {
        match self.docs {
            Some(ControlDocs::Split { setter, .. }) => setter.to_string(),
            Some(ControlDocs::Shared(text)) => text.replace("{gets_sets}", "Sets"),
            None => format!("Sets the `{}` control.", self.selector),
        }
    }
}
