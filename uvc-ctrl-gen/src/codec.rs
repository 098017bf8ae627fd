//! Byte-level read/write expressions for a single [`Field`].
//!
//! Everything multi-byte on the wire is little-endian. The expressions index into a local
//! buffer named `data` which the accessor templates declare.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::error::SchemaResult;
use crate::field::{Field, Width};

fn index(i: usize) -> Literal {
    Literal::usize_unsuffixed(i)
}

/// `data[o]`, `data[o] as i8`, `u16::from_le_bytes([data[o], data[o + 1]])`, ...
pub fn decode_expr(control: &'static str, field: &Field) -> SchemaResult<TokenStream> {
    let width = field.width_in(control)?;
    let ty = width.scalar(field.signed);
    let bytes: Vec<TokenStream> = (field.offset..field.end())
        .map(|i| {
            let i = index(i);
            quote! { data[#i] }
        })
        .collect();

    Ok(match (width, field.signed) {
        (Width::One, false) => quote! { #(#bytes)* },
        (Width::One, true) => quote! { #(#bytes)* as i8 },
        _ => quote! { #ty::from_le_bytes([#(#bytes),*]) },
    })
}

/// Statement storing `value` into the buffer, low byte first.
///
/// Only the field's own bytes are touched; the value is never wider than the field
/// because the accessor signature already uses the matching scalar type.
pub fn encode_stmt(control: &'static str, field: &Field, value: &TokenStream) -> SchemaResult<TokenStream> {
    let width = field.width_in(control)?;
    let start = index(field.offset);
    let end = index(field.end());

    Ok(match (width, field.signed) {
        (Width::One, false) => quote! { data[#start] = #value; },
        (Width::One, true) => quote! { data[#start] = #value as u8; },
        _ => quote! { data[#start..#end].copy_from_slice(&#value.to_le_bytes()); },
    })
}
