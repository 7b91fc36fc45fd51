use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // try_init so repeated calls (e.g. from tests) are harmless
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
