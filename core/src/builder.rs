//! Top-level Apicalypse query assembly.
//!
//! [`ApicalypseQueryBuilder`] holds at most one clause of each kind. Setting a
//! clause twice replaces the earlier value. [`ApicalypseQueryBuilder::build`]
//! renders only the clauses that were set, always in the order
//! `search`, `fields`, `exclude`, `where`, `offset`, `limit`, `sort`:
//!
//! ```
//! use apicalypse_core::ApicalypseQueryBuilder;
//!
//! let query = ApicalypseQueryBuilder::new()
//!     .sort_desc("id")
//!     .limit(20)
//!     .offset(10)
//!     .select("id, title")
//!     .search("Shadow of the Colossus")
//!     .build();
//!
//! assert_eq!(
//!     query,
//!     "search \"Shadow of the Colossus\";fields id, title;offset 10;limit 20;sort id desc;"
//! );
//! ```

use core::fmt::{self, Display};

use compact_str::CompactString;

use crate::error::Result;
use crate::serializer::FieldSerializer;
use crate::shape::Shape;
use crate::tokens::{CLAUSE_TERMINATOR, FIELD_SEPARATOR, WILDCARD, keyword};
use crate::where_clause::{WhereClause, WhereClauseBuilder};

/// Sort direction of a `sort` clause
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Contents of a `fields` clause
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSelection {
    /// `fields *;`
    All,
    /// `fields a, b.c;`
    List(String),
}

impl FieldSelection {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, FieldSelection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldSelection::All => WILDCARD,
            FieldSelection::List(fields) => fields,
        }
    }
}

/// One rendered segment of a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryClause<'q> {
    Search(&'q str),
    Fields(&'q FieldSelection),
    Exclude(&'q str),
    Where(&'q str),
    Offset(u32),
    Limit(u32),
    Sort(&'q str, SortDirection),
}

impl QueryClause<'_> {
    pub const fn keyword(&self) -> &'static str {
        match self {
            QueryClause::Search(_) => keyword::SEARCH,
            QueryClause::Fields(_) => keyword::FIELDS,
            QueryClause::Exclude(_) => keyword::EXCLUDE,
            QueryClause::Where(_) => keyword::WHERE,
            QueryClause::Offset(_) => keyword::OFFSET,
            QueryClause::Limit(_) => keyword::LIMIT,
            QueryClause::Sort(..) => keyword::SORT,
        }
    }
}

/// Renders as `<keyword> <value>;`
impl Display for QueryClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.keyword())?;
        match self {
            QueryClause::Search(term) => write!(f, "\"{term}\"")?,
            QueryClause::Fields(selection) => f.write_str(selection.as_str())?,
            QueryClause::Exclude(fields) | QueryClause::Where(fields) => f.write_str(fields)?,
            QueryClause::Offset(n) | QueryClause::Limit(n) => write!(f, "{n}")?,
            QueryClause::Sort(field, direction) => write!(f, "{field} {}", direction.as_str())?,
        }
        f.write_str(CLAUSE_TERMINATOR)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Sort {
    field: CompactString,
    direction: SortDirection,
}

/// Builder for a complete Apicalypse request body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApicalypseQueryBuilder {
    search: Option<String>,
    fields: Option<FieldSelection>,
    exclude: Option<String>,
    where_clause: Option<String>,
    offset: Option<u32>,
    limit: Option<u32>,
    sort: Option<Sort>,
}

impl ApicalypseQueryBuilder {
    /// Creates an empty builder. An empty builder renders an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// `search "term";`, term quoted verbatim
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// `fields <list>;` from a preformatted field list
    pub fn select(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(FieldSelection::List(fields.into()));
        self
    }

    /// `fields <list>;` from individual field paths
    pub fn select_fields<I>(self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.select(join_fields(fields))
    }

    /// `fields <list>;` with every field path of `S`
    pub fn select_shape<S: Shape>(self) -> Result<Self> {
        self.select_shape_with::<S>(FieldSerializer::global())
    }

    /// Like [`select_shape`](Self::select_shape) with an explicit serializer
    pub fn select_shape_with<S: Shape>(self, serializer: FieldSerializer<'_>) -> Result<Self> {
        let fields = serializer.serialize::<S>()?;
        Ok(self.select(fields))
    }

    /// `fields *;`
    pub fn select_all(mut self) -> Self {
        self.fields = Some(FieldSelection::All);
        self
    }

    /// `exclude <list>;`
    pub fn exclude(mut self, fields: impl Into<String>) -> Self {
        self.exclude = Some(fields.into());
        self
    }

    /// `exclude <list>;` from individual field paths
    pub fn exclude_fields<I>(self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.exclude(join_fields(fields))
    }

    /// `where <condition>;`, built from a fresh [`WhereClauseBuilder`]
    pub fn r#where<F>(self, build: F) -> Self
    where
        F: FnOnce(WhereClauseBuilder) -> WhereClause,
    {
        self.where_clause(build(WhereClauseBuilder::new()))
    }

    /// `where <condition>;` from a finished clause
    pub fn where_clause(mut self, clause: impl Into<WhereClause>) -> Self {
        self.where_clause = Some(clause.into().build());
        self
    }

    /// `offset N;`
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// `limit N;`
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `sort <field> asc;`
    pub fn sort_asc(self, field: impl Into<CompactString>) -> Self {
        self.sort(field, SortDirection::Asc)
    }

    /// `sort <field> desc;`
    pub fn sort_desc(self, field: impl Into<CompactString>) -> Self {
        self.sort(field, SortDirection::Desc)
    }

    pub fn sort(mut self, field: impl Into<CompactString>, direction: SortDirection) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    /// The clauses that are set, in rendering order
    pub fn clauses(&self) -> impl Iterator<Item = QueryClause<'_>> {
        [
            self.search.as_deref().map(QueryClause::Search),
            self.fields.as_ref().map(QueryClause::Fields),
            self.exclude.as_deref().map(QueryClause::Exclude),
            self.where_clause.as_deref().map(QueryClause::Where),
            self.offset.map(QueryClause::Offset),
            self.limit.map(QueryClause::Limit),
            self.sort
                .as_ref()
                .map(|sort| QueryClause::Sort(&sort.field, sort.direction)),
        ]
        .into_iter()
        .flatten()
    }

    /// Renders the query. Does not consume or alter the builder.
    pub fn build(&self) -> String {
        crate::apicalypse_profile_scope!("apicalypse", "build");

        let query = self.to_string();
        crate::apicalypse_trace_query!(query);
        query
    }
}

impl Display for ApicalypseQueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.clauses().try_for_each(|clause| Display::fmt(&clause, f))
    }
}

fn join_fields<I>(fields: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push_str(FIELD_SEPARATOR);
        }
        out.push_str(field.as_ref());
    }
    out
}
