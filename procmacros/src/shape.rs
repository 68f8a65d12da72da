//! `#[derive(Apicalypse)]` code generation.
//!
//! Produces a `Shape` impl whose `FIELDS` table lists every field carrying an
//! `#[apicalypse(...)]` attribute, in declaration order. Field names are passed
//! through untouched; validating them is the registry's job at first use.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Error, Field, Fields, GenericArgument, LitStr, Meta,
    PathArguments, Result, Type,
};

use crate::paths;

const ATTR: &str = "apicalypse";

/// Wrappers that are transparent for path expansion
const TRANSPARENT: &[&str] = &["Option", "Box", "Arc", "Rc"];

/// Wrappers whose (first) type argument is the element of a collection
const COLLECTIONS: &[&str] = &[
    "Vec",
    "VecDeque",
    "LinkedList",
    "HashSet",
    "BTreeSet",
    "IndexSet",
    "SmallVec",
];

#[derive(Default)]
struct FieldOptions {
    name: Option<LitStr>,
    nested: bool,
}

pub(crate) fn generate_shape_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Apicalypse cannot be derived for generic types",
        ));
    }

    // A unit struct yields an empty table, which the registry reports at first use.
    let fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    struct_ident,
                    "Apicalypse requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                struct_ident,
                "Apicalypse can only be derived for structs",
            ));
        }
    };

    let shape_name = match parse_options(&input.attrs)? {
        Some(FieldOptions { nested: true, .. }) => {
            return Err(Error::new_spanned(
                struct_ident,
                "`nested` is a field attribute, not a struct attribute",
            ));
        }
        Some(FieldOptions { name: Some(name), .. }) => name.value(),
        _ => struct_ident.to_string(),
    };

    let field_decl = paths::field_decl();
    let field_type = paths::field_type();
    let shape_ref = paths::shape_ref();
    let shape = paths::shape();

    let mut decls = Vec::new();
    for field in fields {
        let Some(options) = parse_options(&field.attrs)? else {
            continue;
        };

        let name = match options.name {
            Some(name) => name.value(),
            None => field
                .ident
                .as_ref()
                .map(|ident| ident.to_string().trim_start_matches("r#").to_string())
                .unwrap_or_default(),
        };

        let (element, is_collection) = match collection_element(&field.ty) {
            Some(element) => (element, true),
            None => (peel(&field.ty), false),
        };

        // Maps and other multi-argument generics have no single query path.
        if !is_collection && type_argument_count(element) > 1 {
            return Err(Error::new_spanned(
                &field.ident,
                "map fields cannot be selected; declare a collection or a nested shape instead",
            ));
        }

        let ty = match (options.nested, is_collection) {
            (false, false) => quote!(#field_type::Scalar),
            (false, true) => quote!(#field_type::ScalarCollection),
            (true, false) => quote!(#field_type::Nested(#shape_ref::of::<#element>())),
            (true, true) => quote!(#field_type::NestedCollection(#shape_ref::of::<#element>())),
        };

        decls.push(quote!(#field_decl::new(#name, #ty)));
    }

    Ok(quote! {
        impl #shape for #struct_ident {
            const NAME: &'static str = #shape_name;
            const FIELDS: &'static [#field_decl] = &[#(#decls),*];
        }
    })
}

/// Reads the `#[apicalypse(...)]` attribute, if any.
fn parse_options(attrs: &[Attribute]) -> Result<Option<FieldOptions>> {
    let mut found = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        if found.is_some() {
            return Err(Error::new_spanned(attr, "duplicate #[apicalypse] attribute"));
        }

        let mut options = FieldOptions::default();
        match &attr.meta {
            Meta::Path(_) => {}
            Meta::NameValue(_) => {
                return Err(Error::new_spanned(
                    attr,
                    "expected #[apicalypse(name = \"...\")] or #[apicalypse(nested)]",
                ));
            }
            Meta::List(_) => attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    options.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("nested") {
                    options.nested = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown apicalypse option; expected `name = \"...\"` or `nested`",
                    ))
                }
            })?,
        }
        found = Some(options);
    }

    Ok(found)
}

/// Last path segment of `ty` and its first type argument, if it has one.
fn split_generic(ty: &Type) -> Option<(String, Option<&Type>)> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    let argument = match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        }),
        _ => None,
    };
    Some((segment.ident.to_string(), argument))
}

/// Number of type arguments on the last path segment of `ty`.
fn type_argument_count(ty: &Type) -> usize {
    let Type::Path(path) = ty else {
        return 0;
    };
    match path.path.segments.last().map(|segment| &segment.arguments) {
        Some(PathArguments::AngleBracketed(args)) => args
            .args
            .iter()
            .filter(|arg| matches!(arg, GenericArgument::Type(_)))
            .count(),
        _ => 0,
    }
}

/// Strips transparent wrappers such as `Option<T>` and `Box<T>`.
fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Reference(reference) => peel(&reference.elem),
        Type::Paren(paren) => peel(&paren.elem),
        Type::Group(group) => peel(&group.elem),
        _ => match split_generic(ty) {
            Some((ident, Some(inner))) if TRANSPARENT.contains(&ident.as_str()) => peel(inner),
            _ => ty,
        },
    }
}

/// Element type of a collection field, after peeling wrappers on both sides.
fn collection_element(ty: &Type) -> Option<&Type> {
    let ty = peel(ty);
    match ty {
        Type::Slice(slice) => Some(peel(&slice.elem)),
        Type::Array(array) => Some(peel(&array.elem)),
        _ => match split_generic(ty)? {
            // SmallVec<[T; N]>
            (ident, Some(Type::Array(array))) if ident == "SmallVec" => Some(peel(&array.elem)),
            (ident, Some(inner)) if COLLECTIONS.contains(&ident.as_str()) => Some(peel(inner)),
            _ => None,
        },
    }
}
