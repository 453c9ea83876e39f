//! Identity of print attributes.
//!
//! Every attribute value reports a [Category]; an attribute registry groups values by category
//! so that at most one value of each kind applies to a document or job.

use std::fmt;

pub mod page_ranges;

/// Kind of a print attribute, shared by every value of that attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    PageRanges,
}

impl Category {
    /// Get the registered name of this category
    pub const fn name(self) -> &'static str {
        match self {
            Self::PageRanges => "page-ranges",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A print attribute value
pub trait Attribute {
    /// Get the category this value is grouped under
    fn category(&self) -> Category;

    /// Get the name of this value's category
    fn name(&self) -> &'static str {
        self.category().name()
    }
}

/// Attribute that may be specified per document
pub trait DocAttribute: Attribute {}

/// Attribute that a client may supply in a print request
pub trait PrintRequestAttribute: Attribute {}

/// Attribute describing the state or settings of a print job
pub trait PrintJobAttribute: Attribute {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names() {
        assert_eq!(Category::PageRanges.name(), "page-ranges");
        assert_eq!(Category::PageRanges.to_string(), "page-ranges");
    }
}
