extern crate proc_macro;

mod paths;
mod shape;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Implements `Shape` for a struct, declaring its queryable fields.
///
/// Only fields carrying `#[apicalypse(...)]` are declared, in declaration order.
///
/// # Attributes
///
/// - `#[apicalypse(name = "...")]` sets the field's query name. Without it the
///   field identifier is used.
/// - `#[apicalypse(nested)]` marks the field as another shape whose fields are
///   expanded as `parent.child` paths.
/// - `#[apicalypse(name = "...")]` on the struct sets the shape's display name.
///
/// Collections (`Vec<T>`, `HashSet<T>`, `SmallVec<[T; N]>`, slices, arrays) are
/// detected from the field type. A collection of scalars serializes as a single
/// field; a collection of nested shapes is rejected when the shape is first used.
/// Map fields such as `HashMap<K, V>` have no single path and fail to compile.
///
/// # Example
///
/// ```rust,ignore
/// use apicalypse::Apicalypse;
///
/// #[derive(Apicalypse)]
/// struct Image {
///     #[apicalypse(name = "image_id")]
///     image_id: String,
/// }
///
/// #[derive(Apicalypse)]
/// struct Game {
///     #[apicalypse]
///     id: u64,
///     #[apicalypse(nested)]
///     cover: Option<Image>,
///     #[apicalypse(name = "genres")]
///     genre_ids: Vec<u64>,
///     // Not part of the query
///     cached_at: u64,
/// }
///
/// // fields id, cover.image_id, genres;
/// ```
#[proc_macro_derive(Apicalypse, attributes(apicalypse))]
pub fn apicalypse_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match shape::generate_shape_impl(input) {
        Ok(expanded) => expanded.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
