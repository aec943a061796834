//! Record derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::get_field_attrs;
use crate::syn_types::{BytesKind, bytes_kind};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    // generic field types need explicit ToValue/IsZero bounds
    let bound_fields = input.generics.type_params().next().is_some();
    let mut generics = input.generics.clone();
    let mut items = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = get_field_attrs(field)?;
        if attrs.skip {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let column = attrs.column.unwrap_or_else(|| ident.unraw().to_string());
        let omit_empty = attrs.omit_empty;

        let is_zero = if omit_empty {
            if bound_fields {
                generics
                    .make_where_clause()
                    .predicates
                    .push(syn::parse_quote!(#ty: ::sqlwrap::IsZero));
            }
            quote! { ::sqlwrap::IsZero::is_zero(&self.#ident) }
        } else {
            quote! { false }
        };

        // byte strings bind as one value, never as a list of integers
        let value = match bytes_kind(ty) {
            Some(BytesKind::Plain) => quote! {
                ::sqlwrap::Value::bytes(::std::convert::AsRef::<[u8]>::as_ref(&self.#ident))
            },
            Some(BytesKind::Optional) => quote! {
                ::std::option::Option::as_ref(&self.#ident).map_or(
                    ::sqlwrap::Value::Null,
                    |b| ::sqlwrap::Value::bytes(::std::convert::AsRef::<[u8]>::as_ref(b)),
                )
            },
            None => {
                if bound_fields {
                    generics
                        .make_where_clause()
                        .predicates
                        .push(syn::parse_quote!(#ty: ::sqlwrap::ToValue));
                }
                quote! { ::sqlwrap::ToValue::to_value(&self.#ident) }
            }
        };

        items.push(quote! {
            ::sqlwrap::FieldValue {
                column: #column,
                omit_empty: #omit_empty,
                is_zero: #is_zero,
                value: #value,
            }
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sqlwrap::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::sqlwrap::FieldValue> {
                ::std::vec![#(#items),*]
            }
        }
    })
}
