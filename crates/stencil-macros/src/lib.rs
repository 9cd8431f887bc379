//! Derive macros for the stencil template value model.
//!
//! This is re-exported from the `stencil` crate under its default `derive`
//! feature, and should not be used directly.

extern crate proc_macro;

use quote::quote;

mod context;
mod internals;
mod to_value;

/// Derive a conversion from a struct into a dynamic value.
///
/// Structs with named fields are converted into dicts. Every `pub` field
/// becomes one entry, keyed by the field name with its first character
/// lower-cased. Fields which are not `pub` are skipped. Tuple structs are
/// converted into lists of their `pub` fields, and unit structs into empty
/// dicts.
///
/// ## `#[stencil(rename = "..")]` attribute
///
/// Use the given key for a field instead of the one derived from its name.
///
/// ## `#[stencil(skip)]` attribute
///
/// Leave a public field out of the conversion.
///
/// ```rust
/// use stencil::ToValue;
///
/// #[derive(ToValue)]
/// #[allow(non_snake_case, dead_code)]
/// struct Account {
///     pub Name: String,
///     #[stencil(rename = "mail")]
///     pub email: String,
///     #[stencil(skip)]
///     pub token: String,
///     password: String,
/// }
///
/// let account = Account {
///     Name: String::from("bob"),
///     email: String::from("bob@example.com"),
///     token: String::from("secret"),
///     password: String::from("hunter2"),
/// };
///
/// let value = account.to_value();
/// assert_eq!("{mail: bob@example.com, name: bob}", value.render());
/// ```
#[proc_macro_derive(ToValue, attributes(stencil))]
pub fn to_value(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    to_value::expand(&input)
        .unwrap_or_else(to_compile_errors)
        .into()
}

fn to_compile_errors(errors: Vec<syn::Error>) -> proc_macro2::TokenStream {
    let compile_errors = errors.iter().map(syn::Error::to_compile_error);
    quote!(#(#compile_errors)*)
}
