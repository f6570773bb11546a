use services::SessionError;
use services::session_service::{EMPTY_FIELDS_TOAST, SIGN_IN_FAILED_TOAST};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyFields,
    SignInFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyFields => EMPTY_FIELDS_TOAST,
            ViewError::SignInFailed => SIGN_IN_FAILED_TOAST,
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        if err.is_validation() {
            ViewError::EmptyFields
        } else {
            ViewError::SignInFailed
        }
    }
}
