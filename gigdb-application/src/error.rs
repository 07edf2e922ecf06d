use std::io;

use thiserror::Error;

use gigdb_core::{
    repositories::Error as RepoError, usecases::Error as ParameterError,
    util::validate::ValidationErrors,
};

pub use gigdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// The field-scoped messages if the operation was rejected by the
    /// form validation.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Business(BError::Parameter(ParameterError::Validation(errors))) => Some(errors),
            _ => None,
        }
    }

    /// `true` if the requested entity does not exist. Callers use this
    /// to render a distinct not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Business(BError::Parameter(ParameterError::Repo(RepoError::NotFound)))
                | Self::Business(BError::Repo(RepoError::NotFound))
        )
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
