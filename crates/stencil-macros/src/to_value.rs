use crate::context::Context;
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt as _;
use syn::spanned::Spanned as _;

struct Expander {
    ctx: Context,
}

impl Expander {
    /// Expand on a struct.
    fn expand_struct(
        &mut self,
        input: &syn::DeriveInput,
        st: &syn::DataStruct,
    ) -> Option<TokenStream> {
        let inner = self.expand_fields(&st.fields)?;

        let ident = &input.ident;
        let value = &self.ctx.value;
        let to_value = &self.ctx.to_value;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

        Some(quote! {
            impl #impl_generics #to_value for #ident #ty_generics #where_clause {
                fn to_value(&self) -> #value {
                    #inner
                }
            }
        })
    }

    /// Expand field encoding.
    fn expand_fields(&mut self, fields: &syn::Fields) -> Option<TokenStream> {
        match fields {
            syn::Fields::Unnamed(named) => self.expand_unnamed(named),
            syn::Fields::Named(named) => self.expand_named(named),
            syn::Fields::Unit => {
                let value = &self.ctx.value;
                let dict = &self.ctx.dict;
                Some(quote!(#value::Dict(#dict::new())))
            }
        }
    }

    /// Expand unnamed fields.
    fn expand_unnamed(&mut self, unnamed: &syn::FieldsUnnamed) -> Option<TokenStream> {
        let mut to_values = Vec::new();

        for (index, field) in unnamed.unnamed.iter().enumerate() {
            let attrs = self.ctx.parse_field_attrs(&field.attrs)?;

            if let Some(rename) = &attrs.rename {
                self.ctx.errors.push(syn::Error::new_spanned(
                    rename,
                    "unnamed fields can't be renamed",
                ));
                return None;
            }

            if attrs.skip || !is_public(field) {
                continue;
            }

            let index = syn::Index::from(index);

            let to_value = &self.ctx.to_value;

            to_values.push(quote_spanned! {
                field.span() =>
                list.push(#to_value::to_value(&self.#index));
            });
        }

        let cap = to_values.len();
        let value = &self.ctx.value;
        let list = &self.ctx.list;

        Some(quote_spanned! {
            unnamed.span() =>
            let mut list = ::std::vec::Vec::with_capacity(#cap);
            #(#to_values)*
            #value::List(#list::from(list))
        })
    }

    /// Expand named fields.
    fn expand_named(&mut self, named: &syn::FieldsNamed) -> Option<TokenStream> {
        let mut to_values = Vec::new();

        for field in &named.named {
            let ident = field.ident.as_ref()?;
            let attrs = self.ctx.parse_field_attrs(&field.attrs)?;

            if attrs.skip || !is_public(field) {
                continue;
            }

            let name = match attrs.rename {
                Some(rename) => rename,
                None => syn::LitStr::new(&field_key(&ident.unraw().to_string()), ident.span()),
            };

            let to_value = &self.ctx.to_value;

            to_values.push(quote_spanned! {
                field.span() =>
                dict.insert(::std::string::String::from(#name), #to_value::to_value(&self.#ident));
            });
        }

        let cap = to_values.len();
        let value = &self.ctx.value;
        let dict = &self.ctx.dict;
        let hash_map = &self.ctx.hash_map;

        Some(quote_spanned! {
            named.span() =>
            let mut dict = #hash_map::with_capacity(#cap);
            #(#to_values)*
            #value::Dict(#dict::from(dict))
        })
    }
}

/// Only fields which are fully public are lifted.
fn is_public(field: &syn::Field) -> bool {
    matches!(field.vis, syn::Visibility::Public(..))
}

/// Lower-case the first character of a field name.
fn field_key(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => {
            let mut key = String::with_capacity(name.len());
            key.push(first.to_lowercase().next().unwrap_or(first));
            key.extend(chars);
            key
        }
        None => String::new(),
    }
}

pub(super) fn expand(input: &syn::DeriveInput) -> Result<TokenStream, Vec<syn::Error>> {
    let mut expander = Expander {
        ctx: Context::new(),
    };

    match &input.data {
        syn::Data::Struct(st) => {
            if let Some(expanded) = expander.expand_struct(input, st) {
                return Ok(expanded);
            }
        }
        syn::Data::Enum(en) => {
            expander.ctx.errors.push(syn::Error::new_spanned(
                en.enum_token,
                "not supported on enums",
            ));
        }
        syn::Data::Union(un) => {
            expander.ctx.errors.push(syn::Error::new_spanned(
                un.union_token,
                "not supported on unions",
            ));
        }
    }

    Err(expander.ctx.errors)
}
