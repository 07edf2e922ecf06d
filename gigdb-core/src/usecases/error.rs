use thiserror::Error;

use crate::{repositories, util::validate::ValidationErrors};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
