use polish_error::Error as ExprError;
use std::{io, path::PathBuf};

/// Utility enum to package errors that can occur while processing an expression.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed, simplified or differentiated.
    Expr(ExprError),

    /// An output file could not be written.
    Write {
        /// The file that was being written.
        path: PathBuf,

        /// The underlying error.
        source: io::Error,
    },
}

impl Error {
    /// Report the error to stderr.
    ///
    /// Expression errors are rendered as a report pointing into `input`. If the report itself
    /// cannot be written, the error is printed on a single line instead.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Expr(err) => {
                if err.report_to_stderr("input", input).is_err() {
                    eprintln!("{}", err);
                }
            },
            Self::Write { path, source } => {
                eprintln!("could not write `{}`: {}", path.display(), source);
            },
        }
    }
}

impl From<ExprError> for Error {
    fn from(err: ExprError) -> Self {
        Self::Expr(err)
    }
}
