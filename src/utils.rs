//! Utils

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Log output format for the demos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable single-line output
    #[default]
    Compact,

    /// Structured JSON output
    Json,
}

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct ExampleCheckoutArgs {
    /// Fixtures directory. Uses the bundled store when omitted.
    #[arg(long)]
    pub fixtures: Option<PathBuf>,

    /// Fixture set to load from the fixtures directory
    #[arg(short, long, default_value = "bratstvo")]
    pub set: String,

    /// Product id to add to the cart, repeatable
    #[arg(short, long = "add")]
    pub add: Vec<u32>,

    /// Discount code
    #[arg(short, long)]
    pub code: Option<String>,

    /// Customer name
    #[arg(long, default_value = "Aisyah binti Ahmad")]
    pub name: String,

    /// Customer email
    #[arg(long, default_value = "aisyah@contoh.com")]
    pub email: String,

    /// Customer phone number
    #[arg(long, default_value = "012-3456789")]
    pub phone: String,

    /// Delivery address
    #[arg(long, default_value = "12 Jalan Bunga, 50450 Kuala Lumpur")]
    pub address: String,

    /// Log level filter
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_repeated_adds_and_code() -> TestResult {
        let args = ExampleCheckoutArgs::try_parse_from([
            "checkout",
            "--add",
            "1",
            "--add",
            "1",
            "--add",
            "3",
            "--code",
            "DISKAUN10",
            "--log-format",
            "json",
        ])?;

        assert_eq!(args.add, [1, 1, 3]);
        assert_eq!(args.code.as_deref(), Some("DISKAUN10"));
        assert_eq!(args.log_format, LogFormat::Json);
        assert_eq!(args.set, "bratstvo");
        assert!(args.fixtures.is_none());

        Ok(())
    }
}
