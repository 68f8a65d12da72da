//! Literal tokens of the Apicalypse grammar.

use const_format::concatcp;

/// Separator between field paths in `fields` and `exclude` clauses
pub const FIELD_SEPARATOR: &str = ", ";
/// Separator between the segments of a nested field path
pub const PATH_SEPARATOR: &str = ".";
/// Field list selecting every field of the endpoint
pub const WILDCARD: &str = "*";
/// Terminates every clause
pub const CLAUSE_TERMINATOR: &str = ";";
/// Separator between list operands
pub const VALUE_SEPARATOR: &str = ", ";

pub const TRUE: &str = "true";
pub const FALSE: &str = "false";
pub const NULL: &str = "null";

pub const NEGATION: &str = "!";

pub const ALL_OF_OPEN: &str = "[";
pub const ALL_OF_CLOSE: &str = "]";
pub const NOT_ALL_OF_OPEN: &str = concatcp!(NEGATION, ALL_OF_OPEN);
pub const ANY_OF_OPEN: &str = "(";
pub const ANY_OF_CLOSE: &str = ")";
pub const NOT_ANY_OF_OPEN: &str = concatcp!(NEGATION, ANY_OF_OPEN);
pub const EXACTLY_OPEN: &str = "{";
pub const EXACTLY_CLOSE: &str = "}";

/// Clause keywords, in the order a query renders them
pub mod keyword {
    pub const SEARCH: &str = "search";
    pub const FIELDS: &str = "fields";
    pub const EXCLUDE: &str = "exclude";
    pub const WHERE: &str = "where";
    pub const OFFSET: &str = "offset";
    pub const LIMIT: &str = "limit";
    pub const SORT: &str = "sort";
}
