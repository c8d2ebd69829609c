pub async fn health_handler() -> String {
    "healthy".to_string()
}
