//! Shape declarations: the per-type table of queryable fields.
//!
//! A shape is any `'static` type that implements [`Shape`]. The table is
//! usually generated by `#[derive(Apicalypse)]`, but writing it by hand is
//! equally valid:
//!
//! ```
//! use apicalypse_core::{FieldDecl, FieldType, Shape, ShapeRef};
//!
//! struct Cover;
//!
//! impl Shape for Cover {
//!     const NAME: &'static str = "Cover";
//!     const FIELDS: &'static [FieldDecl] = &[FieldDecl::scalar("image_id")];
//! }
//!
//! struct Game;
//!
//! impl Shape for Game {
//!     const NAME: &'static str = "Game";
//!     const FIELDS: &'static [FieldDecl] = &[
//!         FieldDecl::scalar("id"),
//!         FieldDecl::new("cover", FieldType::Nested(ShapeRef::of::<Cover>())),
//!     ];
//! }
//! ```

use core::any::TypeId;
use core::fmt;

/// A type whose fields can be selected in an Apicalypse query.
pub trait Shape: 'static {
    /// Human readable shape name, used in error messages
    const NAME: &'static str;

    /// Queryable fields in declaration order
    const FIELDS: &'static [FieldDecl];
}

/// How a declared field participates in path expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// A single leaf value
    Scalar,
    /// A collection of leaf values, selected as one path
    ScalarCollection,
    /// A nested shape whose fields are expanded under this field's name
    Nested(ShapeRef),
    /// A collection of nested shapes. Declarable, but rejected on registration.
    NestedCollection(ShapeRef),
}

/// One queryable field of a shape, as declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    /// Name the field is exposed under in the query language
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldDecl {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }

    pub const fn scalar(name: &'static str) -> Self {
        Self::new(name, FieldType::Scalar)
    }

    pub const fn collection(name: &'static str) -> Self {
        Self::new(name, FieldType::ScalarCollection)
    }

    pub const fn nested<S: Shape>(name: &'static str) -> Self {
        Self::new(name, FieldType::Nested(ShapeRef::of::<S>()))
    }
}

/// Type-erased handle to a [`Shape`].
///
/// Identity is the `TypeId` of the shape type, so two handles to the same
/// type compare equal no matter where they were created.
#[derive(Clone, Copy)]
pub struct ShapeRef {
    type_id: fn() -> TypeId,
    name: &'static str,
    fields: fn() -> &'static [FieldDecl],
}

impl ShapeRef {
    /// Creates a handle for `S` - const
    pub const fn of<S: Shape>() -> Self {
        Self {
            type_id: TypeId::of::<S>,
            name: S::NAME,
            fields: fields_of::<S>,
        }
    }

    /// Identity of the shape type
    #[inline]
    pub fn id(&self) -> TypeId {
        (self.type_id)()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The raw, unvalidated field declarations
    #[inline]
    pub fn declarations(&self) -> &'static [FieldDecl] {
        (self.fields)()
    }
}

fn fields_of<S: Shape>() -> &'static [FieldDecl] {
    S::FIELDS
}

impl PartialEq for ShapeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ShapeRef {}

impl fmt::Debug for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeRef").field(&self.name).finish()
    }
}
