use error_stack::Report;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
#[error("Invalid given data occurred")]
pub struct InvalidData;

/// Turns validation errors into a report with one `field: message`
/// attachment per failing field.
pub trait IntoValidatorReport<T> {
    fn into_validator_report(self) -> error_stack::Result<T, InvalidData>;
}

impl<T> IntoValidatorReport<T> for Result<T, ValidationErrors> {
    fn into_validator_report(self) -> error_stack::Result<T, InvalidData> {
        self.map_err(|errors| {
            errors.iter().fold(Report::new(InvalidData), |report, (field, message)| {
                report.attach_printable(format!("{field}: {message}"))
            })
        })
    }
}
