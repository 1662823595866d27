//! Configuration module for the formula tokenizer
//!
//! Compile-time constants describe the fixed lexical alphabet of the
//! tokenization algorithm and the logging buffer bounds. Runtime preferences
//! (metrics collection, logging output) come from defaults, `EFP_*`
//! environment variables, or a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    ConfigError, LexicalPreferences, LogLevel, LoggingPreferences, RuntimeConfig,
};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("EFP_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!(
            "efp_tokenizer {} ({} profile)",
            env!("CARGO_PKG_VERSION"),
            profile()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info() {
        assert!(!build_info::profile().is_empty());
        assert!(build_info::source_info().contains(env!("CARGO_PKG_VERSION")));
    }
}
