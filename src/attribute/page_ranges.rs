//! The `page-ranges` print attribute: which pages of a document to print.
//!
//! [PageRanges] wraps an [IntegerSet] and additionally requires the set to be non-empty with
//! every page number at least 1. Members given in array or string form follow the set's rules,
//! so reversed ranges such as `5-2` are dropped before the attribute is validated; the two-bound
//! constructor [PageRanges::range] rejects a reversed pair outright.

use std::{fmt, str::FromStr};

use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::{Attribute, Category, DocAttribute, PrintJobAttribute, PrintRequestAttribute};
use crate::{
    parse,
    set::{IntegerSet, Interval, Member, SetError},
    source::{span::SourceSpan, FileId},
};

/// Validated, canonical set of 1-based page ranges
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRanges {
    set: IntegerSet,
}

impl PageRanges {
    pub const CATEGORY: Category = Category::PageRanges;
    pub const NAME: &'static str = Self::CATEGORY.name();

    /// Create page ranges from members in array form, e.g. `[(1, 4), (7, 7)]`
    pub fn new<I>(members: I) -> Result<Self, PageRangesError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        Self::validate(IntegerSet::from_members(members)?)
    }

    /// Create page ranges from raw arrays holding either one page or the two bounds of a range
    pub fn from_array(members: &[&[i32]]) -> Result<Self, PageRangesError> {
        Self::validate(IntegerSet::from_array(members)?)
    }

    /// Create page ranges from a range list such as `"1-4,7,10-12"`
    pub fn parse(text: &str) -> Result<Self, PageRangesError> {
        let raw = parse::parse(text).map_err(SetError::from)?;
        let set = IntegerSet::from_members(raw.iter().map(|r| Member::Range(r.low, r.high)))?;

        Self::validate(set).map_err(|err| match err {
            PageRangesError::PageBelowOne { page, span: None } => PageRangesError::PageBelowOne {
                page,
                span: raw
                    .iter()
                    .find(|r| r.low == page && r.low <= r.high)
                    .map(|r| r.span),
            },
            other => other,
        })
    }

    /// Create page ranges holding a single page
    pub fn page(page: i32) -> Result<Self, PageRangesError> {
        if page < 1 {
            return Err(PageRangesError::PageBelowOne { page, span: None })
        }

        Self::validate(IntegerSet::single(page)?)
    }

    /// Create page ranges holding the pages `low..=high`
    pub fn range(low: i32, high: i32) -> Result<Self, PageRangesError> {
        if low > high {
            return Err(PageRangesError::NullRange { low, high })
        } else if low < 1 {
            return Err(PageRangesError::PageBelowOne { page: low, span: None })
        }

        Self::validate(IntegerSet::range(low, high)?)
    }

    fn validate(set: IntegerSet) -> Result<Self, PageRangesError> {
        if set.is_empty() {
            tracing::debug!("rejected page ranges with no pages");
            return Err(PageRangesError::Empty)
        }

        if let Some(interval) = set.members().iter().find(|i| i.low() < 1) {
            tracing::debug!(page = interval.low(), "rejected page ranges below page 1");
            return Err(PageRangesError::PageBelowOne { page: interval.low(), span: None })
        }

        tracing::trace!(ranges = %set, "created page ranges");
        Ok(Self { set })
    }

    /// Get the canonical page ranges in ascending order
    pub fn members(&self) -> &[Interval] {
        self.set.members()
    }

    /// Get the underlying set of page numbers
    pub fn as_set(&self) -> &IntegerSet {
        &self.set
    }

    pub fn contains(&self, page: i32) -> bool {
        self.set.contains(page)
    }

    /// Get the first page to print after `page`, if any
    pub fn next(&self, page: i32) -> Option<i32> {
        self.set.next(page)
    }

    pub fn first_page(&self) -> i32 {
        self.set.first().unwrap_or(1)
    }

    pub fn last_page(&self) -> i32 {
        self.set.last().unwrap_or(1)
    }

    /// Number of pages selected
    pub fn page_count(&self) -> u64 {
        self.set.len()
    }

    /// Iterate over every selected page in ascending order
    pub fn pages(&self) -> impl Iterator<Item = i32> + '_ {
        self.set.iter()
    }
}

impl Attribute for PageRanges {
    fn category(&self) -> Category {
        Self::CATEGORY
    }
}

impl DocAttribute for PageRanges {}
impl PrintRequestAttribute for PageRanges {}
impl PrintJobAttribute for PageRanges {}

impl fmt::Display for PageRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.set, f)
    }
}

impl FromStr for PageRanges {
    type Err = PageRangesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Option<&str>> for PageRanges {
    type Error = PageRangesError;

    fn try_from(text: Option<&str>) -> Result<Self, Self::Error> {
        Self::parse(text.ok_or(PageRangesError::NullInput("members"))?)
    }
}

impl TryFrom<Option<&[Member]>> for PageRanges {
    type Error = PageRangesError;

    fn try_from(members: Option<&[Member]>) -> Result<Self, Self::Error> {
        Self::new(members.ok_or(PageRangesError::NullInput("members"))?)
    }
}

impl From<PageRanges> for IntegerSet {
    fn from(ranges: PageRanges) -> Self {
        ranges.set
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PageRanges {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PageRanges {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Broad class of a [PageRangesError]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was absent
    NullInput,
    /// An argument was present but does not describe valid page ranges
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRangesError {
    #[error("{0} is absent")]
    NullInput(&'static str),
    #[error("page ranges must select at least one page")]
    Empty,
    #[error("page value {page} < 1 specified")]
    PageBelowOne {
        page: i32,
        span: Option<SourceSpan>,
    },
    #[error("null range {low}-{high} specified")]
    NullRange {
        low: i32,
        high: i32,
    },
    #[error(transparent)]
    Set(#[from] SetError),
}

impl PageRangesError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NullInput(_) => ErrorKind::NullInput,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Build a diagnostic for a failure to create page ranges from `text`, stored as `file`
    pub fn to_diagnostic(&self, file: FileId, text: &str) -> Diagnostic<FileId> {
        match self {
            Self::Set(SetError::Syntax(err)) => err.to_diagnostic(file),
            Self::PageBelowOne { span: Some(span), .. } => Diagnostic::error()
                .with_message(self.to_string())
                .with_labels(vec![
                    Label::primary(file, span.range()).with_message("pages are numbered from 1"),
                ]),
            Self::Empty => Diagnostic::error()
                .with_message(self.to_string())
                .with_labels(vec![
                    Label::primary(file, 0..text.len()).with_message("selects no pages"),
                ])
                .with_notes(vec!["ranges whose lower bound exceeds their upper bound are empty".to_owned()]),
            other => Diagnostic::error()
                .with_message(other.to_string())
                .with_labels(vec![Label::primary(file, 0..text.len())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(ranges: &PageRanges) -> Vec<(i32, i32)> {
        ranges.members().iter().copied().map(Into::into).collect()
    }

    #[test]
    fn array_form() {
        let ranges = PageRanges::new([(1, 4), (7, 7)]).unwrap();
        assert_eq!(bounds(&ranges), vec![(1, 4), (7, 7)]);

        let ranges = PageRanges::from_array(&[&[10, 12], &[3]]).unwrap();
        assert_eq!(bounds(&ranges), vec![(3, 3), (10, 12)]);
    }

    #[test]
    fn page_below_one() {
        let err = PageRanges::new([(0, 5)]).unwrap_err();
        assert_eq!(err, PageRangesError::PageBelowOne { page: 0, span: None });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert_eq!(PageRanges::page(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(PageRanges::range(0, 3).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert!(matches!(
            PageRanges::new([(-2, 5)]).unwrap_err(),
            PageRangesError::Set(SetError::Negative { .. }),
        ));
    }

    #[test]
    fn empty_members() {
        let err = PageRanges::new(Vec::<Member>::new()).unwrap_err();
        assert_eq!(err, PageRangesError::Empty);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert_eq!(PageRanges::parse("").unwrap_err(), PageRangesError::Empty);
        assert_eq!(PageRanges::from_array(&[]).unwrap_err(), PageRangesError::Empty);
    }

    #[test]
    fn absent_members() {
        let err = PageRanges::try_from(None::<&str>).unwrap_err();
        assert_eq!(err, PageRangesError::NullInput("members"));
        assert_eq!(err.kind(), ErrorKind::NullInput);

        let err = PageRanges::try_from(None::<&[Member]>).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullInput);

        let members = [Member::Range(2, 3)];
        assert!(PageRanges::try_from(Some(&members[..])).is_ok());
        assert!(PageRanges::try_from(Some("2-3")).is_ok());
    }

    #[test]
    fn string_form() {
        let ranges = PageRanges::parse("1-4,7").unwrap();
        assert_eq!(bounds(&ranges), vec![(1, 4), (7, 7)]);
        assert_eq!(ranges.to_string(), "1-4,7");

        assert_eq!(
            PageRanges::parse("1-3,2-5").unwrap(),
            PageRanges::parse("1-5").unwrap(),
        );
    }

    #[test]
    fn reversed_string_range_is_dropped() {
        assert_eq!(PageRanges::parse("5-2").unwrap_err(), PageRangesError::Empty);
        assert_eq!(PageRanges::parse("5-2,9").unwrap(), PageRanges::page(9).unwrap());
    }

    #[test]
    fn page_below_one_in_text_is_located() {
        let err = PageRanges::parse("4, 0-2").unwrap_err();
        assert_eq!(
            err,
            PageRangesError::PageBelowOne { page: 0, span: Some(SourceSpan::new(3, 6)) },
        );
    }

    #[test]
    fn malformed_text() {
        let err = PageRanges::parse("1-4,,7").unwrap_err();
        assert!(matches!(err, PageRangesError::Set(SetError::Syntax(_))));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn single_page() {
        assert_eq!(PageRanges::page(3).unwrap(), PageRanges::new([(3, 3)]).unwrap());
        assert_eq!(PageRanges::page(3).unwrap(), PageRanges::new([3]).unwrap());
    }

    #[test]
    fn single_range() {
        assert_eq!(bounds(&PageRanges::range(2, 5).unwrap()), vec![(2, 5)]);
        assert_eq!(
            PageRanges::range(5, 2).unwrap_err(),
            PageRangesError::NullRange { low: 5, high: 2 },
        );
        // A reversed pair is reported as such even when it is also below page 1
        assert!(matches!(
            PageRanges::range(0, -4).unwrap_err(),
            PageRangesError::NullRange { .. },
        ));
    }

    #[test]
    fn identity() {
        let ranges = PageRanges::page(1).unwrap();
        assert_eq!(ranges.category(), Category::PageRanges);
        assert_eq!(ranges.name(), "page-ranges");
        assert_eq!(PageRanges::NAME, "page-ranges");

        let other = PageRanges::parse("2-900").unwrap();
        assert_eq!(other.category(), ranges.category());
        assert_eq!(other.name(), ranges.name());
    }

    #[test]
    fn page_queries() {
        let ranges = PageRanges::parse("3-5, 9").unwrap();
        assert!(ranges.contains(4));
        assert!(!ranges.contains(1));
        assert_eq!(ranges.next(5), Some(9));
        assert_eq!(ranges.next(9), None);
        assert_eq!(ranges.first_page(), 3);
        assert_eq!(ranges.last_page(), 9);
        assert_eq!(ranges.page_count(), 4);
        assert_eq!(ranges.pages().collect::<Vec<_>>(), vec![3, 4, 5, 9]);
    }

    #[test]
    fn diagnostics_label_input() {
        let mut files = crate::source::SourceFiles::new();
        let text = "4, 0-2";
        let file = files.add("<arg>", text);
        let err = PageRanges::parse(text).unwrap_err();
        let diagnostic = err.to_diagnostic(file, text);

        assert_eq!(diagnostic.labels.len(), 1);
        assert_eq!(diagnostic.labels[0].range, 3..6);

        let text = "1;2";
        let err = PageRanges::parse(text).unwrap_err();
        let diagnostic = err.to_diagnostic(file, text);
        assert_eq!(diagnostic.labels[0].range, 1..2);
    }
}
