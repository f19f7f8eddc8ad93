use hello_frontend::{env::Env, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    run(Env::default()).await
}
