//! tracing の初期化
//!
//! 進捗は標準出力に書くので、ログは標準エラーに出す。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "kensho_seed=debug"
    } else {
        "kensho_seed=warn"
    }
}

/// `RUST_LOG` があればそれを優先する
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "kensho_seed=warn");
        assert_eq!(default_directive(true), "kensho_seed=debug");
    }
}
