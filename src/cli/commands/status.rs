//! Status command handler for showing the saved configuration.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use crate::config::{Config, ConfigStore};
use crate::ui::Style;

pub fn run_status() -> Result<()> {
    let store = ConfigStore::new()?;
    let config = store.load()?;
    write_status(&mut io::stdout(), &config, store.config_path())?;
    Ok(())
}

/// Prints every setting except the API key itself.
pub fn write_status(out: &mut impl Write, config: &Config, path: &Path) -> io::Result<()> {
    let max_tokens = match config.max_tokens_cap() {
        Some(cap) => cap.to_string(),
        None => "unlimited".to_string(),
    };
    let api_key = if config.api_key.is_empty() {
        Style::warning("not set")
    } else {
        Style::success("set")
    };

    writeln!(out, "{}", Style::header("Current configuration"))?;
    writeln!(out, "  {}     {}", Style::label("endpoint"), Style::value(&config.endpoint))?;
    writeln!(out, "  {}        {}", Style::label("model"), Style::value(&config.model))?;
    writeln!(out, "  {}      {}", Style::label("api key"), api_key)?;
    writeln!(out, "  {}  {}", Style::label("temperature"), config.temperature)?;
    writeln!(out, "  {}   {max_tokens}", Style::label("max tokens"))?;
    writeln!(out, "  {}      {}s", Style::label("timeout"), config.timeout)?;
    writeln!(out, "  {}         {}", Style::label("file"), Style::secondary(path.display()))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(config: &Config) -> String {
        let mut out = Vec::new();
        write_status(&mut out, config, Path::new("/home/u/.config/tzh/config.toml")).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_status_shows_settings_but_not_the_key() {
        let config = Config::new("https://api.deepseek.com/v1", "deepseek-chat", "sk-secret-123");

        let rendered = render(&config);

        assert!(rendered.contains("https://api.deepseek.com/v1"));
        assert!(rendered.contains("deepseek-chat"));
        assert!(rendered.contains("set"));
        assert!(rendered.contains("2000"));
        assert!(rendered.contains("/home/u/.config/tzh/config.toml"));
        assert!(!rendered.contains("sk-secret-123"));
    }

    #[test]
    fn test_status_zero_cap_is_unlimited() {
        let mut config = Config::new("https://a.example", "m", "k");
        config.max_tokens = 0;
        assert!(render(&config).contains("unlimited"));
    }
}
