use formula_error::Error as FormulaError;
use std::io;

/// Utility enum to package errors that can occur while running a line of input.
#[derive(Debug)]
pub enum Error {
    /// An error raised while parsing or evaluating a formula. Its spans point into `source`.
    Formula {
        /// The normalized expression the error was raised for.
        source: String,

        /// The error itself.
        error: FormulaError,
    },

    /// A command that could not be understood.
    Command(String),
}

impl Error {
    /// Report the error to stderr.
    pub fn report_to_stderr(&self) -> io::Result<()> {
        match self {
            Self::Formula { source, error } => error.report_to_stderr("input", source),
            Self::Command(message) => {
                eprintln!("error: {}", message);
                Ok(())
            },
        }
    }
}
