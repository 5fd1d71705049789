pub mod limits;

use once_cell::sync::Lazy;
use reqwest::Url;

pub const DEFAULT_ELO_SERVICE_URL: &str = "http://localhost:8000";

/// Base address of the Elo ranking service. Overridable at build time via
/// the `ELO_SERVICE_URL` env var (fetches run in WASM, so there is no
/// runtime environment to read).
pub static ELO_SERVICE_URL: Lazy<Url> = Lazy::new(|| {
    let raw = option_env!("ELO_SERVICE_URL").unwrap_or(DEFAULT_ELO_SERVICE_URL);
    Url::parse(raw).unwrap()
});
