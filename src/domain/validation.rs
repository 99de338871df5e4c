use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    ClientRefTooLong { max: usize, actual: usize },
    MissingUnicodeText,
    IncompleteBinary,
    IncompleteWapPush,
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::ClientRefTooLong { max, actual } => {
                write!(f, "client reference too long: {actual} characters (max {max})")
            }
            Self::MissingUnicodeText => write!(f, "unicode message requires non-empty text"),
            Self::IncompleteBinary => {
                write!(f, "binary message requires both body and udh")
            }
            Self::IncompleteWapPush => {
                write!(f, "wap push message requires both title and url")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "from" };
        assert_eq!(err.to_string(), "from must not be empty");

        let err = ValidationError::ClientRefTooLong { max: 40, actual: 41 };
        assert_eq!(
            err.to_string(),
            "client reference too long: 41 characters (max 40)"
        );

        let err = ValidationError::IncompleteBinary;
        assert_eq!(err.to_string(), "binary message requires both body and udh");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
