use crate::internals::*;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Meta::*;
use syn::NestedMeta::*;

/// Parsed field attributes.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    /// `#[stencil(skip)]`, leave the field out.
    pub(crate) skip: bool,
    /// `#[stencil(rename = "..")]`, use the given key instead of the one
    /// derived from the field name.
    pub(crate) rename: Option<syn::LitStr>,
}

pub(crate) struct Context {
    pub(crate) errors: Vec<syn::Error>,
    pub(crate) value: TokenStream,
    pub(crate) list: TokenStream,
    pub(crate) dict: TokenStream,
    pub(crate) hash_map: TokenStream,
    pub(crate) to_value: TokenStream,
}

impl Context {
    /// Construct a new context.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            value: quote!(stencil::Value),
            list: quote!(stencil::List),
            dict: quote!(stencil::Dict),
            hash_map: quote!(stencil::collections::HashMap),
            to_value: quote!(stencil::ToValue),
        }
    }

    /// Parse the toplevel component of the attribute, which must be `#[stencil(..)]`.
    pub fn get_stencil_meta_items(
        &mut self,
        attr: &syn::Attribute,
    ) -> Option<Vec<syn::NestedMeta>> {
        if attr.path != STENCIL {
            return Some(Vec::new());
        }

        match attr.parse_meta() {
            Ok(List(meta)) => Some(meta.nested.into_iter().collect()),
            Ok(other) => {
                self.errors
                    .push(syn::Error::new_spanned(other, "expected #[stencil(...)]"));
                None
            }
            Err(error) => {
                self.errors.push(syn::Error::new(Span::call_site(), error));
                None
            }
        }
    }

    /// Parse field attributes.
    pub(crate) fn parse_field_attrs(&mut self, attrs: &[syn::Attribute]) -> Option<FieldAttrs> {
        let mut output = FieldAttrs::default();

        for attr in attrs {
            for meta in self.get_stencil_meta_items(attr)? {
                match meta {
                    Meta(Path(path)) if path == SKIP => {
                        output.skip = true;
                    }
                    Meta(NameValue(syn::MetaNameValue {
                        path,
                        lit: syn::Lit::Str(name),
                        ..
                    })) if path == RENAME => {
                        output.rename = Some(name);
                    }
                    meta => {
                        self.errors
                            .push(syn::Error::new_spanned(meta, "unsupported attribute"));

                        return None;
                    }
                }
            }
        }

        Some(output)
    }
}
