use std::marker::PhantomData;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct Logged<T>(pub T);

#[derive(Error, Debug)]
#[error("{status}")]
pub struct AppErrorDetail<K, T> {
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
    pub status: StatusCode,
    pub inner: AppErrorInner<K, T>,
}
impl<K: kind::Kind, T: Serialize> IntoResponse for AppErrorDetail<K, T> {
    fn into_response(self) -> Response {
        tracing::error!("cause error: {}", self.source);
        (self.status, self.inner).into_response()
    }
}
impl<K, T> AppErrorDetail<K, T> {
    pub fn new<E>(status: StatusCode, source: E, detail: T) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let (source, msg) = (Box::new(source), PhantomData);
        Self { status, source, inner: AppErrorInner { msg, detail } }
    }
}

pub mod kind {
    use super::*;

    pub trait Kind {
        fn msg() -> &'static str;
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum NotFound {}
    impl Kind for NotFound {
        fn msg() -> &'static str {
            "not found"
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct AppErrorInner<K, T> {
    pub msg: PhantomData<K>,
    pub detail: T,
}
impl<K: kind::Kind, T: Serialize> IntoResponse for AppErrorInner<K, T> {
    fn into_response(self) -> Response {
        Json(ErrorResponseInner::from(self)).into_response()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{msg}: {detail}")]
pub struct ErrorResponseInner<T> {
    pub msg: String,
    pub detail: T,
}
impl<K: kind::Kind, T> From<AppErrorInner<K, T>> for ErrorResponseInner<T> {
    fn from(inner: AppErrorInner<K, T>) -> Self {
        Self { msg: K::msg().to_string(), detail: inner.detail }
    }
}
