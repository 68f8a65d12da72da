//! Expansion of a shape into the field list of a `fields` clause.
//!
//! The walk is depth-first and pre-order: every field is emitted at its
//! declared position, and the fields of a nested shape are emitted in place of
//! the nested field, prefixed with its dotted path.
//!
//! ```text
//! Parent { parent, child1 { field1 }, child2 { field1, field2 } }
//!     => "parent, child1.field1, child2.field1, child2.field2"
//! ```

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::error::{ApicalypseError, Result};
use crate::metadata::{FieldKind, MetadataRegistry};
use crate::shape::{Shape, ShapeRef};
use crate::tokens::{FIELD_SEPARATOR, PATH_SEPARATOR};

/// Serializes `S` with the process-wide registry.
pub fn serialize<S: Shape>() -> Result<String> {
    FieldSerializer::global().serialize::<S>()
}

/// Turns shapes into comma separated field path lists.
#[derive(Debug, Clone, Copy)]
pub struct FieldSerializer<'r> {
    registry: &'r MetadataRegistry,
}

impl FieldSerializer<'static> {
    /// A serializer backed by [`MetadataRegistry::global`]
    pub fn global() -> Self {
        Self::new(MetadataRegistry::global())
    }
}

impl<'r> FieldSerializer<'r> {
    pub const fn new(registry: &'r MetadataRegistry) -> Self {
        Self { registry }
    }

    pub fn serialize<S: Shape>(&self) -> Result<String> {
        self.serialize_ref(ShapeRef::of::<S>())
    }

    pub fn serialize_ref(&self, shape: ShapeRef) -> Result<String> {
        crate::apicalypse_profile_function!();

        Ok(self.paths(shape)?.join(FIELD_SEPARATOR))
    }

    /// Every field path of `shape`, in emission order.
    pub fn paths(&self, shape: ShapeRef) -> Result<Vec<CompactString>> {
        let mut paths = Vec::new();
        let mut lineage = SmallVec::<[ShapeRef; 8]>::new();
        self.walk(shape, &mut CompactString::default(), &mut lineage, &mut paths)?;
        Ok(paths)
    }

    fn walk(
        &self,
        shape: ShapeRef,
        prefix: &mut CompactString,
        lineage: &mut SmallVec<[ShapeRef; 8]>,
        out: &mut Vec<CompactString>,
    ) -> Result<()> {
        if lineage.contains(&shape) {
            return Err(recursion_error(lineage, shape));
        }

        let metadata = self.registry.resolve(shape)?;
        lineage.push(shape);

        for field in metadata.fields() {
            let restore = prefix.len();
            prefix.push_str(&field.query_name);

            match field.kind {
                FieldKind::Scalar | FieldKind::ScalarCollection => out.push(prefix.clone()),
                FieldKind::Nested(child) => {
                    prefix.push_str(PATH_SEPARATOR);
                    self.walk(child, prefix, lineage, out)?;
                }
            }

            prefix.truncate(restore);
        }

        lineage.pop();
        Ok(())
    }
}

fn recursion_error(lineage: &[ShapeRef], repeated: ShapeRef) -> ApicalypseError {
    let mut path = CompactString::default();
    for shape in lineage.iter().chain(core::iter::once(&repeated)) {
        if !path.is_empty() {
            path.push_str(" -> ");
        }
        path.push_str(shape.name());
    }
    ApicalypseError::RecursiveShape { path }
}
