pub mod env;
pub mod error;
pub mod route;
pub mod state;

use axum::{extract::Request, ServiceExt};

pub async fn serve(env: env::Env) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let listener = tokio::net::TcpListener::bind(&env.bind).await?;
    let app = route::app_with(env);
    tracing::info!("backend server is running on http://{}", listener.local_addr()?);
    let serve = axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).with_graceful_shutdown(async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
        tracing::info!("stop backend server");
    });
    Ok(serve.await?)
}
