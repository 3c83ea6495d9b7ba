use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the console logger for the binary crate `bin`. `RUST_LOG`
/// overrides the default of info-level logs from this library and `bin` only.
pub fn init(bin: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(bin).into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn default_filter(bin: &str) -> String {
    format!("puzzle_timing=info,{}=info", bin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_names_library_and_binary() {
        assert_eq!(default_filter("plot_all"), "puzzle_timing=info,plot_all=info");
        assert!(default_filter("plot_all").parse::<EnvFilter>().is_ok());
    }
}
