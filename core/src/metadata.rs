//! Validated, cached field metadata per shape.
//!
//! [`MetadataRegistry`] turns the raw [`FieldDecl`] table of a shape into an
//! [`EntityMetadata`] the first time the shape is requested, and hands out the
//! same `Arc` for every later request. Entries are write-once: nothing is ever
//! replaced or evicted for the lifetime of the registry.

use core::any::TypeId;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use compact_str::CompactString;
use hashbrown::HashMap;

use crate::error::{ApicalypseError, Result};
use crate::shape::{FieldDecl, FieldType, Shape, ShapeRef};

/// Kind of a validated field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    ScalarCollection,
    Nested(ShapeRef),
}

impl FieldKind {
    pub const fn is_leaf(&self) -> bool {
        !matches!(self, FieldKind::Nested(_))
    }
}

/// A field that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub query_name: CompactString,
    pub kind: FieldKind,
}

/// Validated field list of one shape, in declaration order.
#[derive(Debug, PartialEq, Eq)]
pub struct EntityMetadata {
    shape: ShapeRef,
    fields: Vec<FieldSpec>,
}

impl EntityMetadata {
    /// Validates the declarations of `shape`.
    ///
    /// Only the shape's own fields are checked; nested shapes are validated
    /// when they are resolved themselves.
    pub fn from_shape(shape: ShapeRef) -> Result<Self> {
        let declarations = shape.declarations();

        if declarations.is_empty() {
            return Err(ApicalypseError::MissingDeclarations { shape: shape.name() });
        }

        let fields = declarations
            .iter()
            .enumerate()
            .map(|(index, decl)| validate(shape, index, decl))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { shape, fields })
    }

    #[inline]
    pub fn shape(&self) -> ShapeRef {
        self.shape
    }

    #[inline]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

fn validate(shape: ShapeRef, index: usize, decl: &FieldDecl) -> Result<FieldSpec> {
    let name = decl.name.trim();
    if name.is_empty() {
        return Err(ApicalypseError::BlankFieldName {
            shape: shape.name(),
            index,
        });
    }

    let kind = match decl.ty {
        FieldType::Scalar => FieldKind::Scalar,
        FieldType::ScalarCollection => FieldKind::ScalarCollection,
        FieldType::Nested(child) => FieldKind::Nested(child),
        FieldType::NestedCollection(_) => {
            return Err(ApicalypseError::NestedCollection {
                shape: shape.name(),
                field: decl.name,
            });
        }
    };

    // The exposed name is emitted verbatim; only the blank check trims.
    Ok(FieldSpec {
        query_name: CompactString::from(decl.name),
        kind,
    })
}

static GLOBAL: LazyLock<MetadataRegistry> = LazyLock::new(MetadataRegistry::new);

/// Compute-once cache of [`EntityMetadata`] keyed by shape identity.
///
/// Concurrent first lookups of the same shape are serialized on the write
/// lock and re-check the map, so exactly one metadata value is ever published
/// per shape.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    entries: RwLock<HashMap<TypeId, Arc<EntityMetadata>>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> &'static MetadataRegistry {
        &GLOBAL
    }

    /// Metadata for `S`, computing and caching it on first use.
    pub fn metadata<S: Shape>(&self) -> Result<Arc<EntityMetadata>> {
        self.resolve(ShapeRef::of::<S>())
    }

    /// Metadata for a type-erased shape, computing and caching it on first use.
    pub fn resolve(&self, shape: ShapeRef) -> Result<Arc<EntityMetadata>> {
        let id = shape.id();

        if let Some(found) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Ok(Arc::clone(found));
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(found) = entries.get(&id) {
            return Ok(Arc::clone(found));
        }

        let metadata = match EntityMetadata::from_shape(shape) {
            Ok(metadata) => Arc::new(metadata),
            Err(err) => {
                crate::apicalypse_trace_metadata!(shape.name(), 0usize, "rejected");
                return Err(err);
            }
        };
        crate::apicalypse_trace_metadata!(shape.name(), metadata.fields().len(), "computed");

        entries.insert(id, Arc::clone(&metadata));
        Ok(metadata)
    }

    /// Whether `S` has already been resolved successfully
    pub fn contains<S: Shape>(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<S>())
    }

    /// Number of cached shapes
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Image;

    impl Shape for Image {
        const NAME: &'static str = "Image";
        const FIELDS: &'static [FieldDecl] = &[
            FieldDecl::scalar("image_id"),
            FieldDecl::scalar("width"),
        ];
    }

    struct Game;

    impl Shape for Game {
        const NAME: &'static str = "Game";
        const FIELDS: &'static [FieldDecl] = &[
            FieldDecl::scalar("id"),
            FieldDecl::collection("genres"),
            FieldDecl::nested::<Image>("cover"),
        ];
    }

    struct Empty;

    impl Shape for Empty {
        const NAME: &'static str = "Empty";
        const FIELDS: &'static [FieldDecl] = &[];
    }

    struct Blank;

    impl Shape for Blank {
        const NAME: &'static str = "Blank";
        const FIELDS: &'static [FieldDecl] = &[FieldDecl::scalar("id"), FieldDecl::scalar("   ")];
    }

    struct Screenshots;

    impl Shape for Screenshots {
        const NAME: &'static str = "Screenshots";
        const FIELDS: &'static [FieldDecl] = &[FieldDecl::new(
            "screenshots",
            FieldType::NestedCollection(ShapeRef::of::<Image>()),
        )];
    }

    #[test]
    fn keeps_declaration_order_and_kinds() {
        let registry = MetadataRegistry::new();
        let metadata = registry.metadata::<Game>().unwrap();

        let names: Vec<_> = metadata.fields().iter().map(|f| f.query_name.as_str()).collect();
        assert_eq!(names, ["id", "genres", "cover"]);
        assert_eq!(metadata.fields()[0].kind, FieldKind::Scalar);
        assert_eq!(metadata.fields()[1].kind, FieldKind::ScalarCollection);
        assert_eq!(
            metadata.fields()[2].kind,
            FieldKind::Nested(ShapeRef::of::<Image>())
        );
        assert_eq!(metadata.shape(), ShapeRef::of::<Game>());
    }

    #[test]
    fn caches_one_entry_per_shape() {
        let registry = MetadataRegistry::new();
        assert!(registry.is_empty());

        let first = registry.metadata::<Game>().unwrap();
        let second = registry.metadata::<Game>().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.contains::<Game>());
        // Nested shapes are resolved lazily, not with their parent.
        assert!(!registry.contains::<Image>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rejects_shape_without_declarations() {
        let registry = MetadataRegistry::new();
        assert_eq!(
            registry.metadata::<Empty>(),
            Err(ApicalypseError::MissingDeclarations { shape: "Empty" })
        );
    }

    #[test]
    fn rejects_blank_field_name() {
        let registry = MetadataRegistry::new();
        assert_eq!(
            registry.metadata::<Blank>(),
            Err(ApicalypseError::BlankFieldName {
                shape: "Blank",
                index: 1
            })
        );
    }

    #[test]
    fn rejects_collection_of_nested_shapes() {
        let registry = MetadataRegistry::new();
        assert_eq!(
            registry.metadata::<Screenshots>(),
            Err(ApicalypseError::NestedCollection {
                shape: "Screenshots",
                field: "screenshots"
            })
        );
    }

    #[test]
    fn failures_are_not_cached() {
        let registry = MetadataRegistry::new();
        assert!(registry.metadata::<Empty>().is_err());
        assert!(registry.metadata::<Empty>().is_err());
        assert!(!registry.contains::<Empty>());
        assert!(registry.is_empty());
    }
}
