//! ログ初期化
//!
//! 標準出力は結果専用のため、ログはすべて stderr に出す。

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` が優先、未設定なら verbose で debug / それ以外は warn
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
