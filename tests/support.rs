// tests/support.rs
//! Shared fixtures — the fixed key/IV the golden tests encrypt under

/// 256-bit key, standard base64
#[allow(dead_code)]
pub const KEY_B64: &str = "h3QMWxG+CO1/DPjEalpMI+wg+MrfLJy+fIswhtreIIo=";

/// 128-bit IV, standard base64
#[allow(dead_code)]
pub const IV_B64: &str = "Gl3WDwYkSY/AO8POcfCrNQ==";

/// Same key/IV in unpadded base64url
#[allow(dead_code)]
pub const KEY_B64_URL: &str = "h3QMWxG-CO1_DPjEalpMI-wg-MrfLJy-fIswhtreIIo";
#[allow(dead_code)]
pub const IV_B64_URL: &str = "Gl3WDwYkSY_AO8POcfCrNQ";

/// A well-formed 256-bit key that is NOT the one above
#[allow(dead_code)]
pub const WRONG_KEY_B64: &str = "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=";

#[allow(dead_code)]
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
