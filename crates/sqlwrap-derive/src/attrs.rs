//! `#[db(...)]` field attribute parsing.

use syn::Result;

#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub(crate) column: Option<String>,
    pub(crate) omit_empty: bool,
    pub(crate) skip: bool,
}

impl FieldAttrs {
    /// Apply a struct-tag style string: `name`, `name,omitempty`, `,omitempty` or `-`.
    fn apply_tag(&mut self, tag: &str) {
        if tag == "-" {
            self.skip = true;
            return;
        }

        let (name, options) = match tag.split_once(',') {
            Some((name, options)) => (name, options),
            None => (tag, ""),
        };

        if !name.is_empty() {
            self.column = Some(name.to_string());
        }
        if options.split(',').any(|opt| opt == "omitempty") {
            self.omit_empty = true;
        }
    }
}

impl syn::parse::Parse for FieldAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = FieldAttrs::default();

        loop {
            if input.is_empty() {
                break;
            }

            if input.peek(syn::LitStr) {
                let tag: syn::LitStr = input.parse()?;
                attrs.apply_tag(&tag.value());
            } else {
                let ident: syn::Ident = input.parse()?;
                match ident.to_string().as_str() {
                    "omitempty" => attrs.omit_empty = true,
                    "skip" => attrs.skip = true,
                    "column" => {
                        let _: syn::Token![=] = input.parse()?;
                        let value: syn::LitStr = input.parse()?;
                        if value.value().is_empty() {
                            return Err(syn::Error::new(value.span(), "column must not be empty"));
                        }
                        attrs.column = Some(value.value());
                    }
                    key => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown db attribute `{key}`"),
                        ));
                    }
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(attrs)
    }
}

pub(crate) fn get_field_attrs(field: &syn::Field) -> Result<FieldAttrs> {
    let mut merged = FieldAttrs::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("db") {
            continue;
        }

        let syn::Meta::List(meta_list) = &attr.meta else {
            return Err(syn::Error::new_spanned(attr, "expected #[db(...)]"));
        };

        let parsed = syn::parse2::<FieldAttrs>(meta_list.tokens.clone())?;
        merged.omit_empty |= parsed.omit_empty;
        merged.skip |= parsed.skip;
        if parsed.column.is_some() {
            merged.column = parsed.column;
        }
    }

    Ok(merged)
}
