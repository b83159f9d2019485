//! Show command - Print the selected settings.

use common::Config;

use crate::cli::args::ShowArgs;
use crate::errors::CommandResult;

/// Render settings for display. Secrets are redacted in both formats.
pub fn render(config: &Config, json: bool) -> CommandResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(format!("{:#?}", config))
    }
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> CommandResult<()> {
    println!("{}", render(config, args.json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let rendered = render(&Config::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["environment"], "development");
        assert_eq!(value["debug"], true);
        assert_eq!(value["max_content_length"], 16 * 1024 * 1024);
        assert!(!rendered.contains("smart-complaint-secret-key-2024"));
    }

    #[test]
    fn test_render_debug() {
        let rendered = render(&Config::default(), false).unwrap();

        assert!(rendered.contains("upload_folder"));
        assert!(!rendered.contains("smart-complaint-secret-key-2024"));
    }
}
