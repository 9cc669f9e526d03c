use console::style;
use fieldgeo_core::FieldgeoError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for unparsable input
pub fn parse_failed(input: &str, reason: &str) -> CliError {
    let suggestion = match input {
        "WKT" => "Quote the geometry, e.g. 'POLYGON((0 0,1 0,1 1,0 1,0 0))'",
        "GeoJSON" => {
            "Pass a geometry object or a Feature, e.g. '{\"type\":\"Point\",\"coordinates\":[1,2]}'"
        }
        "date" => "Use the YYYY-MM-DD format, e.g. 2018-09-10",
        _ => "Check the input and try again",
    };

    CliError::new(format!("Invalid {} input", input))
        .with_context(format!("Reason: {}", reason))
        .with_suggestion(suggestion)
        .with_help("Run: fieldgeo --help")
}

/// Create error for a failed reprojection
pub fn projection_failed(from: &str, to: &str, reason: &str) -> CliError {
    CliError::new("Reprojection failed")
        .with_context(format!("Could not project from {} to {}.\n\nReason: {}", from, to, reason))
        .with_suggestion("Use an EPSG code known to PROJ, e.g. EPSG:32615")
        .with_suggestion("UTM zones range from 1 to 60")
        .with_suggestion("Check that PROJ_DATA points at a PROJ database if codes are not found")
        .with_help("Run: fieldgeo to-utm --help")
}

/// Create error for geocoder failures
pub fn geocoder_unavailable(reason: &str, remediation: &str) -> CliError {
    CliError::new("Reverse geocoder unavailable")
        .with_context(format!("Reason: {}", reason))
        .with_suggestion(remediation)
        .with_suggestion("Point to another instance: --geocoder-url http://localhost:8080")
        .with_help("Run: fieldgeo config")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check fieldgeo.toml for syntax errors")
        .with_suggestion("Check FIELDGEO_* environment variables")
        .with_help("Run: fieldgeo config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    match error.downcast_ref::<FieldgeoError>() {
        Some(FieldgeoError::Parse { input, reason }) => parse_failed(input, reason),
        Some(FieldgeoError::Projection { from, to, reason }) => projection_failed(from, to, reason),
        Some(FieldgeoError::GeocoderUnavailable { reason, remediation }) => {
            geocoder_unavailable(reason, remediation)
        }
        Some(FieldgeoError::ConfigInvalid { key, reason }) => invalid_config(key, reason),
        _ => {
            let message = format!("{:#}", error);
            if message.contains("No such file or directory") {
                CliError::new("File not found")
                    .with_context(format!("Error: {}", message))
                    .with_suggestion("Check the file path and try again")
            } else {
                CliError::new(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_from_anyhow_maps_parse_errors() {
        let err: anyhow::Result<()> =
            Err(FieldgeoError::parse("date", "input contains invalid characters").into());
        let cli = from_anyhow(err.context("Failed to compute query window").unwrap_err());
        assert_eq!(cli.message, "Invalid date input");
        assert!(cli.suggestions[0].contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_from_anyhow_maps_projection_errors() {
        let err = anyhow::Error::new(FieldgeoError::Projection {
            from: "EPSG:4326".to_string(),
            to: "EPSG:32699".to_string(),
            reason: "unknown code".to_string(),
        });
        let cli = from_anyhow(err);
        assert_eq!(cli.message, "Reprojection failed");
        assert!(cli.context.unwrap().contains("EPSG:32699"));
    }

    #[test]
    fn test_from_anyhow_fallback() {
        let cli = from_anyhow(anyhow::anyhow!("something else"));
        assert_eq!(cli.message, "something else");
        assert!(cli.suggestions.is_empty());
    }
}
