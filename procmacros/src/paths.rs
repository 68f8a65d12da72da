//! Centralized path definitions for generated code.
//!
//! Generated code must name the core crate however the calling crate depends
//! on it: through the `apicalypse` facade (`::apicalypse::core`), directly as
//! `apicalypse-core`, or from inside `apicalypse-core` itself (`crate`).

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

/// Path to the core crate root as seen from the calling crate.
pub(crate) fn core_root() -> TokenStream {
    if let Ok(FoundCrate::Name(name)) = crate_name("apicalypse") {
        let ident = Ident::new(&name, Span::call_site());
        return quote!(::#ident::core);
    }

    match crate_name("apicalypse-core") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        // Not a declared dependency; assume the facade.
        Err(_) => quote!(::apicalypse::core),
    }
}

pub(crate) fn shape() -> TokenStream {
    let root = core_root();
    quote!(#root::Shape)
}

pub(crate) fn field_decl() -> TokenStream {
    let root = core_root();
    quote!(#root::FieldDecl)
}

pub(crate) fn field_type() -> TokenStream {
    let root = core_root();
    quote!(#root::FieldType)
}

pub(crate) fn shape_ref() -> TokenStream {
    let root = core_root();
    quote!(#root::ShapeRef)
}
