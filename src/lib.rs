//! Validated sets of page ranges for print jobs.
//!
//! [PageRanges] is built from members in array form, from a range list such as `"1-4,7,10-12"`,
//! from a single page or from a single range, and always holds at least one page with every page
//! number at least 1. Parse failures carry source spans and convert to
//! [codespan_reporting] diagnostics through [source::SourceFiles].

pub mod attribute;
pub mod parse;
pub mod set;
pub mod source;

pub use attribute::{
    page_ranges::{ErrorKind, PageRanges, PageRangesError},
    Attribute,
    Category,
};
pub use set::{IntegerSet, Interval, Member, SetError};
