//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Category`] taxonomy every error falls into.
//!
//! Every failure in the parser, simplifier and differentiator is fatal to the operation that
//! raised it. The failure is packaged into an [`Error`], which remembers which operation it came
//! from, and is propagated unchanged to the caller.

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display, Formatter}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad category an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A malformed input token, or a request for an operator that does not exist.
    IncorrectArgument,

    /// A structurally invalid token stream, or an expression the differentiator has no rule for.
    IncorrectParsing,

    /// Division of a constant by exactly zero.
    DivisionByZero,
}

impl Category {
    /// Returns the name of the category, as shown at the start of rendered errors.
    pub fn label(self) -> &'static str {
        match self {
            Self::IncorrectArgument => "IncorrectArgument",
            Self::IncorrectParsing => "IncorrectParsing",
            Self::DivisionByZero => "DivisionByZero",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// The category this error belongs to.
    fn category(&self) -> Category;

    /// A short, human-readable description of the error.
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
    /// The regions of the source code that this error originated from. This is empty for errors
    /// raised on trees that no longer correspond to any source text, such as derivatives.
    pub spans: Vec<Range<usize>>,

    /// The name of the operation that raised the error.
    pub operation: &'static str,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(
        spans: Vec<Range<usize>>,
        operation: &'static str,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        Self { spans, operation, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any source code.
    pub fn detached(operation: &'static str, kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), operation, kind)
    }

    /// The category of the error.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// The human-readable message of the error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report the error to stderr, highlighting the regions of `input` it originated from.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Writes the report for this error into the given writer.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.category(), self.message(), self.operation)
    }
}

impl std::error::Error for Error {}
