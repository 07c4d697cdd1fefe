use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `LOG_LEVEL` applies to this crate and
/// actix. Production emits JSON lines.
pub fn init(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "merchant_summary={level},actix_web={level}",
            level = app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if app.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
