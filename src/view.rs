use crate::fetch;

pub const WELCOME_HEADING: &str = "Welcome to the Rust frontend!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub message: String,
    pub backend_message: String,
}
impl Default for View {
    fn default() -> Self {
        Self { message: WELCOME_HEADING.to_string(), backend_message: String::new() }
    }
}

impl View {
    pub fn new() -> Self {
        Default::default()
    }

    /// One-shot setup on first attach: fetch the greeting and store it for
    /// display. Failures are logged and leave the display field empty.
    pub async fn mount(&mut self, endpoint: &str) {
        match fetch::fetch_message(endpoint).await {
            Ok(message) => self.backend_message = message,
            Err(e) => tracing::error!("error fetching data: {}", e),
        }
    }

    pub fn render(&self) -> String {
        format!("{}\n{}\n", self.message, self.backend_message)
    }
}
