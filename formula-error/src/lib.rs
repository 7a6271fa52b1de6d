//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the regions of the expression
//! it originated from.

// lets the `ErrorKind` derive refer to this crate by name from within its own tests
extern crate self as formula_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the error as an [`Any`] so that it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Returns the message displayed at the top of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error as the concrete type `K`, if it is one.
    pub fn kind_as<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind_as::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report of this error to the given writer, using `source` as the source code
    /// the spans refer to.
    pub fn write_report<W: io::Write>(&self, src_id: &str, source: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(source)), w)
    }

    /// Prints the report of this error to stderr, using `source` as the source code the spans
    /// refer to.
    pub fn report_to_stderr(&self, src_id: &str, source: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(source)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_attrs::ErrorKind;

    /// A test error.
    #[derive(Debug, ErrorKind, PartialEq)]
    #[error(
        message = format!("cannot use `{}` here", name),
        labels = ["this name", "and this one"],
        help = "try another name",
    )]
    struct BadName {
        name: String,
    }

    /// Another test error.
    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to see", labels = [""])]
    struct Empty;

    fn render(error: &Error, source: &str) -> String {
        let mut buf = Vec::new();
        error.write_report("input", source, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn downcast_kind() {
        let error = Error::new(vec![0..3], BadName { name: "foo".to_string() });
        assert!(error.is::<BadName>());
        assert!(!error.is::<Empty>());
        assert_eq!(error.kind_as::<BadName>(), Some(&BadName { name: "foo".to_string() }));
    }

    #[test]
    fn display_uses_message() {
        let error = Error::new(vec![0..3], BadName { name: "foo".to_string() });
        assert_eq!(error.to_string(), "cannot use `foo` here");
    }

    #[test]
    fn report_contains_labels() {
        let error = Error::new(vec![0..3, 4..7], BadName { name: "foo".to_string() });
        let report = render(&error, "foo+bar");
        assert!(report.contains("cannot use `foo` here"));
        assert!(report.contains("this name"));
        assert!(report.contains("and this one"));
        assert!(report.contains("try another name"));
    }

    #[test]
    fn report_without_spans() {
        let error = Error::new(vec![], Empty);
        let report = render(&error, "x");
        assert!(report.contains("nothing to see"));
    }
}
