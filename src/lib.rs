pub mod env;
pub mod error;
pub mod fetch;
pub mod view;

pub async fn run(env: env::Env) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let mut view = view::View::new();
    view.mount(&env.endpoint).await;
    print!("{}", view.render());
    Ok(())
}
