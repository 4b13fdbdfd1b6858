use tracing_subscriber::EnvFilter;

/// stderr 로 가는 fmt 구독자를 설치한다. `RUST_LOG`가 설정 값보다 우선한다.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // 이미 설치된 구독자가 있으면 그대로 둔다.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
