/// Shared error type used across all DevHub crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Wrong token count or unparsable syntax.
    #[error("{0}")]
    Format(String),

    /// A value outside its field's domain, or a non-positive reference-frame setting.
    #[error("{field}: {message}")]
    Range { field: String, message: String },

    #[error("unsupported unit: '{0}'")]
    UnsupportedUnit(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Range {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field name carried by a [`Error::Range`], if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Range { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_names_field() {
        let err = Error::range("minute", "value 60 out of range 0..=59");
        assert_eq!(err.to_string(), "minute: value 60 out of range 0..=59");
        assert_eq!(err.field(), Some("minute"));
    }

    #[test]
    fn non_range_errors_have_no_field() {
        assert_eq!(Error::UnsupportedUnit("ex".into()).field(), None);
        assert_eq!(
            Error::UnsupportedUnit("ex".into()).to_string(),
            "unsupported unit: 'ex'"
        );
    }
}
