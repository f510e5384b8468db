use thiserror::Error;

use crate::model::{QuestionError, YearError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Year(#[from] YearError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Year;

    #[test]
    fn wraps_model_errors_transparently() {
        let err: Error = Year::new(99).unwrap_err().into();
        assert!(matches!(err, Error::Year(_)));
        assert_eq!(err.to_string(), "year must be four digits: \"99\"");

        let err: Error = "20x0".parse::<Year>().unwrap_err().into();
        assert!(matches!(err, Error::Year(YearError::NotFourDigits { .. })));
    }
}
