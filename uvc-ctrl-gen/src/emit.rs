//! Accessor emitter.
//!
//! Each control becomes a getter/setter pair. Both output modes render their methods
//! from the same [`syn::Signature`] values, so the declaration listing and the
//! definitions can never disagree about names, order or types of the arguments.

use std::fmt;

use log::{debug, info};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{format_ident, quote};
use syn::{ImplItemFn, Item, LitInt, Signature, TraitItemFn};

use crate::codec::{decode_expr, encode_stmt};
use crate::control::{Control, Unit};
use crate::error::{SchemaError, SchemaResult};
use crate::field::Field;
use crate::registry::units;

/// Request type byte for class-specific interface GET requests
pub const REQ_TYPE_GET: u8 = 0xa1;
/// Request type byte for class-specific interface SET requests
pub const REQ_TYPE_SET: u8 = 0x21;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Method bodies, preceded by the preamble
    Definitions,
    /// Signatures only
    Declarations,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Definitions => "definitions",
            Mode::Declarations => "declarations",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the runtime crate as seen from the generated file
    pub runtime_path: String,
    pub trait_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            runtime_path: "crate".into(),
            trait_name: "UvcControls".into(),
        }
    }
}

impl GeneratorConfig {
    fn runtime(&self) -> SchemaResult<syn::Path> {
        Ok(syn::parse_str(&self.runtime_path)?)
    }

    fn trait_ident(&self) -> SchemaResult<Ident> {
        Ok(syn::parse_str(&self.trait_name)?)
    }
}

fn fields_with<F>(control: &Control, mut with: F) -> SchemaResult<Vec<TokenStream>>
where
    F: FnMut(Ident, &Field) -> SchemaResult<TokenStream>,
{
    control
        .fields
        .iter()
        .map(|field| with(field.ident_in(control.short_name)?, field))
        .collect()
}

/// `fn get_<name>(&mut self, <field>: &mut <ty>, ..., req_code: RequestCode) -> ControlResult`
pub fn getter_signature(control: &Control) -> SchemaResult<Signature> {
    let name = format_ident!("get_{}", control.short_name);
    let params = fields_with(control, |ident, field| {
        let ty = field.scalar_in(control.short_name)?;
        Ok(quote! { #ident: &mut #ty })
    })?;

    Ok(syn::parse2(quote! {
        fn #name(&mut self, #(#params,)* req_code: RequestCode) -> ControlResult
    })?)
}

/// `fn set_<name>(&mut self, <field>: <ty>, ...) -> ControlResult`
pub fn setter_signature(control: &Control) -> SchemaResult<Signature> {
    let name = format_ident!("set_{}", control.short_name);
    let params = fields_with(control, |ident, field| {
        let ty = field.scalar_in(control.short_name)?;
        Ok(quote! { #ident: #ty })
    })?;

    Ok(syn::parse2(quote! {
        fn #name(&mut self, #(#params),*) -> ControlResult
    })?)
}

fn doc_attrs(summary: &str, control: &Control, req_code: Option<&str>) -> TokenStream {
    let mut lines: Vec<String> = summary.lines().map(|line| format!(" {line}").trim_end().to_string()).collect();

    lines.push(String::new());
    lines.push(" # Arguments".into());
    lines.push(String::new());
    for field in control.fields {
        match field.description {
            Some(text) => lines.push(format!(" * `{}` - {}", field.name, text)),
            None => lines.push(format!(" * `{}`", field.name)),
        }
    }
    if let Some(text) = req_code {
        lines.push(format!(" * `req_code` - {text}"));
    }

    quote! { #(#[doc = #lines])* }
}

/// The getter and setter as bodiless trait items
pub fn declaration_items(control: &Control) -> SchemaResult<(TraitItemFn, TraitItemFn)> {
    let getter_sig = getter_signature(control)?;
    let setter_sig = setter_signature(control)?;
    let getter_docs = doc_attrs(&control.getter_doc(), control, Some("`GET_*` request to execute"));
    let setter_docs = doc_attrs(&control.setter_doc(), control, None);

    Ok((
        syn::parse2(quote! { #getter_docs #getter_sig; })?,
        syn::parse2(quote! { #setter_docs #setter_sig; })?,
    ))
}

/// The getter and setter with bodies performing the transfer
pub fn definition_items(unit: Unit, control: &Control) -> SchemaResult<(ImplItemFn, ImplItemFn)> {
    let name = control.short_name;
    let getter_sig = getter_signature(control)?;
    let setter_sig = setter_signature(control)?;
    let length = Literal::usize_unsuffixed(control.length);
    let selector = control.selector_value(unit)?;

    let unpack = fields_with(control, |ident, field| {
        let value = decode_expr(name, field)?;
        Ok(quote! { *#ident = #value; })
    })?;
    let pack = fields_with(control, |ident, field| encode_stmt(name, field, &quote! { #ident }))?;

    let getter = quote! {
        #getter_sig {
            let mut data = [0u8; #length];
            let ret = self.control_transfer(REQ_TYPE_GET, req_code as u8, #selector, 1 << 8, &mut data);

            if ret == data.len() as i32 {
                #(#unpack)*
                Ok(())
            } else {
                Err(ControlError(ret))
            }
        }
    };

    let setter = quote! {
        #setter_sig {
            let mut data = [0u8; #length];
            #(#pack)*

            let ret = self.control_transfer(REQ_TYPE_SET, RequestCode::SetCur as u8, #selector, 1 << 8, &mut data);

            if ret == data.len() as i32 {
                Ok(())
            } else {
                Err(ControlError(ret))
            }
        }
    };

    Ok((syn::parse2(getter)?, syn::parse2(setter)?))
}

/// Pretty-print `item` and keep only what sits between its outer braces
fn unparse_members(item: Item) -> SchemaResult<String> {
    let file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: vec![item],
    };
    let text = prettyplease::unparse(&file);

    let start = text.find("{\n").map(|idx| idx + 2);
    let end = text.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start <= end => Ok(text[start..end].to_string()),
        _ => Err(SchemaError::Syntax(format!("unexpected wrapper layout: {text}"))),
    }
}

fn unparse_items(items: TokenStream) -> SchemaResult<String> {
    let file: syn::File = syn::parse2(items)?;

    Ok(prettyplease::unparse(&file))
}

/// One getter+setter pair, indented for the enclosing trait or impl block
pub fn render_control(mode: Mode, unit: Unit, control: &Control, config: &GeneratorConfig) -> SchemaResult<String> {
    control.validate()?;
    debug!("{mode}: {} {} ({} fields)", unit.prefix(), control.short_name, control.fields.len());

    let trait_ident = config.trait_ident()?;
    let (getter, setter): (Item, Item) = match mode {
        Mode::Declarations => {
            let (getter, setter) = declaration_items(control)?;
            (
                syn::parse2(quote! { trait #trait_ident { #getter } })?,
                syn::parse2(quote! { trait #trait_ident { #setter } })?,
            )
        }
        Mode::Definitions => {
            let (getter, setter) = definition_items(unit, control)?;
            (
                syn::parse2(quote! { impl<T: ControlTransfer + ?Sized> #trait_ident for T { #getter } })?,
                syn::parse2(quote! { impl<T: ControlTransfer + ?Sized> #trait_ident for T { #setter } })?,
            )
        }
    };

    Ok(format!("{}\n{}", unparse_members(getter)?, unparse_members(setter)?))
}

fn preamble(mode: Mode, groups: &[(Unit, &[Control])], config: &GeneratorConfig) -> SchemaResult<String> {
    let runtime = config.runtime()?;
    let trait_ident = config.trait_ident()?;
    let banner = format!("// This file is generated by `uvc-ctrl-gen {mode}`. Do not edit.\n");

    match mode {
        Mode::Declarations => {
            let imports = unparse_items(quote! {
                use #runtime::{ControlResult, RequestCode};
            })?;

            Ok(format!("{banner}{imports}"))
        }
        Mode::Definitions => {
            let selectors: Vec<Ident> = groups
                .iter()
                .filter(|(_, controls)| !controls.is_empty())
                .map(|(unit, _)| unit.selector_type())
                .collect();
            let selector_import = if selectors.is_empty() {
                quote! {}
            } else {
                quote! { use #runtime::selector::{#(#selectors),*}; }
            };

            let imports = unparse_items(quote! {
                #selector_import
                use #runtime::{ControlError, ControlResult, ControlTransfer, RequestCode, #trait_ident};
            })?;
            let set = LitInt::new(&format!("{REQ_TYPE_SET:#04x}"), Span::call_site());
            let get = LitInt::new(&format!("{REQ_TYPE_GET:#04x}"), Span::call_site());
            let constants = unparse_items(quote! {
                const REQ_TYPE_SET: u8 = #set;
                const REQ_TYPE_GET: u8 = #get;
            })?;

            Ok(format!("{banner}{imports}\n{constants}"))
        }
    }
}

/// Render every control in `groups`, in order.
///
/// All controls are validated up front; a single schema error means no output at all.
pub fn generate_units(mode: Mode, groups: &[(Unit, &[Control])], config: &GeneratorConfig) -> SchemaResult<String> {
    for (_, controls) in groups {
        for control in controls.iter() {
            control.validate()?;
        }
    }

    let trait_ident = config.trait_ident()?;
    let mut pairs = Vec::new();
    for (unit, controls) in groups {
        for control in controls.iter() {
            pairs.push(render_control(mode, *unit, control, config)?);
        }
    }

    let opening = match mode {
        Mode::Declarations => format!(
            "/// Typed accessors for the fixed-layout camera terminal, processing unit and selector\n\
             /// unit controls.\n\
             ///\n\
             /// Every method performs exactly one control transfer. A transfer that does not move\n\
             /// exactly the control's length in bytes is returned unchanged as the error.\n\
             pub trait {trait_ident} {{\n"
        ),
        Mode::Definitions => format!("impl<T: ControlTransfer + ?Sized> {trait_ident} for T {{\n"),
    };

    info!("{mode}: {} accessor pairs", pairs.len());

    Ok(format!(
        "{}\n{}{}}}\n",
        preamble(mode, groups, config)?,
        opening,
        pairs.join("\n")
    ))
}

/// Render the built-in control registry
pub fn generate(mode: Mode, config: &GeneratorConfig) -> SchemaResult<String> {
    generate_units(mode, &units(), config)
}
