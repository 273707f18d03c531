pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, validate_range,
    validate_url, Validate,
};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "price-scout")]
#[command(about = "Collects phone price ranges from shopping search results into a CSV file")]
pub struct CliConfig {
    #[arg(long, default_value = "https://www.google.com/search")]
    pub search_endpoint: String,

    #[arg(long, default_value = "de", help = "Interface language (hl= parameter)")]
    pub language: String,

    #[arg(long, default_value = "de", help = "Result country (gl= parameter)")]
    pub country: String,

    #[arg(long, help = "CSV or plain-text file with one phone name per row")]
    pub input_file: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "prices.csv")]
    pub output_file: String,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Drop prices far from the page average before computing the range")]
    pub trim_outliers: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log resource usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn input_file(&self) -> Option<&str> {
        self.input_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn trim_outliers(&self) -> bool {
        self.trim_outliers
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("search_endpoint", &self.search_endpoint)?;
        validate_non_empty_string("language", &self.language)?;
        validate_non_empty_string("country", &self.country)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;

        if let Some(input_file) = &self.input_file {
            validate_path("input_file", input_file)?;
            validate_file_extensions(
                "input_file",
                std::slice::from_ref(input_file),
                &["csv", "txt"],
            )?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CliConfig::try_parse_from(["price-scout"]).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.search_endpoint, "https://www.google.com/search");
        assert_eq!(config.language, "de");
        assert_eq!(config.country, "de");
        assert_eq!(config.output_file, "prices.csv");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.trim_outliers);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config =
            CliConfig::try_parse_from(["price-scout", "--request-timeout-secs", "0"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_input_extension() {
        let config =
            CliConfig::try_parse_from(["price-scout", "--input-file", "phones.xlsx"]).unwrap();
        assert!(config.validate().is_err());
    }
}
