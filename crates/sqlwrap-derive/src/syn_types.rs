//! Type helper utilities for syn type analysis.

/// How a byte-string field is read into a bind value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BytesKind {
    /// `Vec<u8>`, `&[u8]`, `[u8; N]`, `Box<[u8]>`
    Plain,
    /// `Option<_>` around one of the plain forms
    Optional,
}

fn single_type_arg<'a>(ty: &'a syn::Type, name: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != name {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    let syn::GenericArgument::Type(inner) = args.args.first()? else {
        return None;
    };
    Some(inner)
}

/// Extract the inner type T from Option<T>, or return None if not an Option type.
pub(crate) fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    single_type_arg(ty, "Option")
}

fn is_u8(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(p) if p.qself.is_none() && p.path.is_ident("u8"))
}

fn is_u8_slice(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Slice(s) => is_u8(&s.elem),
        syn::Type::Paren(p) => is_u8_slice(&p.elem),
        _ => false,
    }
}

/// `Vec<u8>`, `&[u8]`, `[u8; N]` or `Box<[u8]>`.
fn is_plain_bytes(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Reference(r) => is_u8_slice(&r.elem),
        syn::Type::Array(a) => is_u8(&a.elem),
        syn::Type::Paren(p) => is_plain_bytes(&p.elem),
        _ => {
            single_type_arg(ty, "Vec").is_some_and(is_u8)
                || single_type_arg(ty, "Box").is_some_and(is_u8_slice)
        }
    }
}

/// Byte-string field types, which bind as one value instead of a list.
pub(crate) fn bytes_kind(ty: &syn::Type) -> Option<BytesKind> {
    if is_plain_bytes(ty) {
        return Some(BytesKind::Plain);
    }
    option_inner(ty)
        .filter(|inner| is_plain_bytes(inner))
        .map(|_| BytesKind::Optional)
}
