#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    pub endpoint: String,
}
impl Default for Env {
    fn default() -> Self {
        Self { endpoint: "http://localhost:3000/api/data".to_string() }
    }
}
