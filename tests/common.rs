use rand::distributions::Alphanumeric;
use rand::Rng;

pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn random_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn envelope(data: serde_json::Value) -> String {
    serde_json::json!({
        "code": 200,
        "message": "success",
        "data": data,
    })
    .to_string()
}
