use thiserror::Error;

#[derive(Error, Debug)]
#[error(transparent)]
pub enum FetchError {
    ReqwestError(#[from] reqwest::Error),
}
