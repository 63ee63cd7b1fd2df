use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOG_INIT: Once = Once::new();

// ログ出力の初期化 (複数回呼び出しても最初の1回のみ有効)
// RUST_LOG=agari=debug のように環境変数で出力レベルを指定. 未指定の場合はwarn.
pub fn init_logging() {
    LOG_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
