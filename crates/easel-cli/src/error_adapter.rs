//! Error adapter for converting EaselError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use easel::EaselError;

/// Adapter rendering an [`EaselError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a EaselError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            EaselError::Io(_) => "easel::io",
            EaselError::Shape(_) => "easel::shape",
            EaselError::InvalidDate { .. } => "easel::date",
            EaselError::Config(_) => "easel::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            EaselError::InvalidDate { .. } => "dates are written as YYYYMMDD, e.g. 20191002",
            EaselError::Config(_) => "check the [style] section of the configuration file",
            EaselError::Io(_) | EaselError::Shape(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Renders `err` as a graphical miette report.
///
/// Falls back to the plain error message if the report cannot be written.
pub fn render_report(err: &EaselError) -> String {
    let mut report = String::new();
    match GraphicalReportHandler::new().render_report(&mut report, &ErrorAdapter(err)) {
        Ok(()) => report,
        Err(_) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_has_code_and_help() {
        let err = EaselError::invalid_date("201910-2", "expected 8 digits");
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), err.to_string());
        assert_eq!(adapter.code().unwrap().to_string(), "easel::date");
        assert!(adapter.help().unwrap().to_string().contains("YYYYMMDD"));
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = EaselError::Io(std::io::Error::other("disk full"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "easel::io");
        assert!(adapter.help().is_none());
        assert!(std::error::Error::source(&adapter).is_some());
    }

    #[test]
    fn test_render_report_includes_code_and_message() {
        let err = EaselError::Config("Invalid fill color in config".to_string());
        let report = render_report(&err);

        assert!(report.contains("easel::config"));
        assert!(report.contains("Invalid fill color in config"));
    }
}
