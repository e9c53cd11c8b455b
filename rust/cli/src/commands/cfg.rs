//! `cfg`: prints the resolved configuration as JSON, one `{value, source}`
//! pair per key.
//!
//! ```json
//! {
//!   "starting_stack": { "value": "100", "source": "default" },
//!   "hero": { "value": null, "source": "default" },
//!   "log_level": { "value": null, "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack.to_string(),
            "source": sources.starting_stack,
        },
        "hero": {
            "value": config.hero,
            "source": sources.hero,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn prints_values_with_sources() {
        unsafe {
            std::env::remove_var(config::CONFIG_ENV);
            std::env::remove_var(config::STACK_ENV);
            std::env::remove_var(config::LOG_ENV);
            std::env::set_var(config::HERO_ENV, "CO");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var(config::HERO_ENV);
        }
        result.unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["starting_stack"]["value"], "100");
        assert_eq!(json["starting_stack"]["source"], "default");
        assert_eq!(json["hero"]["value"], "CO");
        assert_eq!(json["hero"]["source"], "env");
        assert!(json["log_level"]["value"].is_null());
        assert!(err.is_empty());
    }

    #[test]
    #[serial]
    fn bad_env_value_is_a_config_error() {
        unsafe {
            std::env::remove_var(config::CONFIG_ENV);
            std::env::set_var(config::STACK_ENV, "lots");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var(config::STACK_ENV);
        }
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().starts_with("Error: Invalid configuration"));
        assert!(out.is_empty());
    }
}
