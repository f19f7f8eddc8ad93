pub mod data;

use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Result},
    Router,
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::{
    env::Env,
    error::{kind::NotFound, AppErrorDetail, Logged},
    state::AppState,
};

pub fn app_with(env: Env) -> NormalizePath<Router<()>> {
    app(AppState { env })
}
pub fn app(state: AppState) -> NormalizePath<Router<()>> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
pub fn router(state: AppState) -> Router<()> {
    Router::new()
        .nest("/api", data::route_api())
        .fallback(not_found)
        .layer(middleware::from_fn(logging))
        .with_state(state)
}

pub async fn not_found(uri: Uri) -> Result<()> {
    Err(AppErrorDetail::<NotFound, _>::new(StatusCode::NOT_FOUND, Logged(""), uri.to_string()))?
}

pub async fn logging(req: Request<Body>, next: Next) -> impl IntoResponse {
    let (method, uri) = (req.method().clone(), req.uri().clone());
    let res = next.run(req).await;
    let (status, bytes) = (res.status(), res.size_hint().lower());
    tracing::info!("{} {} {} {}", status, method, uri, bytes);
    res
}

#[cfg(test)]
mod tests {

    use std::fmt::Debug;

    use axum::{
        body::{self, Body, Bytes, HttpBody},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde::de::DeserializeOwned;
    use tower::Service;

    use crate::error::ErrorResponseInner;

    use super::app_with;

    pub async fn call_bytes<S>(app: &mut S, req: Request<Body>) -> (StatusCode, Bytes)
    where
        S: Service<Request<Body>, Response = Response<Body>>,
        S::Error: Debug,
        Box<dyn std::error::Error + Send + Sync + 'static>: From<S::Error>,
    {
        let res = app.call(req).await.unwrap();
        let status = res.status();
        let size = res.size_hint().upper().unwrap_or(res.size_hint().lower()) as usize;
        let body = body::to_bytes(res.into_body(), size).await.unwrap();
        (status, body)
    }

    pub async fn call<S, T>(app: &mut S, req: Request<Body>) -> (StatusCode, T)
    where
        S: Service<Request<Body>, Response = Response<Body>>,
        S::Error: Debug,
        Box<dyn std::error::Error + Send + Sync + 'static>: From<S::Error>,
        T: DeserializeOwned,
    {
        let (status, body) = call_bytes(app, req).await;
        let des = serde_json::from_slice::<T>(&body).unwrap();
        (status, des)
    }

    pub async fn call_with_assert<S, T>(app: &mut S, req: Request<Body>, expected_status: StatusCode, expected_body: T)
    where
        S: Service<Request<Body>, Response = Response<Body>>,
        S::Error: Debug,
        Box<dyn std::error::Error + Send + Sync + 'static>: From<S::Error>,
        T: DeserializeOwned + Eq + std::fmt::Debug,
    {
        let (actual_status, actual_body): (_, T) = call(app, req).await;
        assert_eq!(actual_status, expected_status);
        assert_eq!(actual_body, expected_body);
    }

    #[tokio::test]
    async fn test_not_found() {
        let mut app = app_with(Default::default());

        let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        call_with_assert(
            &mut app,
            req,
            StatusCode::NOT_FOUND,
            ErrorResponseInner { msg: "not found".to_string(), detail: "/nope".to_string() },
        )
        .await;
    }

    #[tokio::test]
    async fn test_trailing_slash_is_normalized() {
        let mut app = app_with(Default::default());

        let req = Request::builder().uri("/api/data/").body(Body::empty()).unwrap();
        let (status, _) = call_bytes(&mut app, req).await;
        assert_eq!(status, StatusCode::OK);
    }
}
