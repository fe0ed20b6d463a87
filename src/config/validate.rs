// src/config/validate.rs

use anyhow::{anyhow, Result};

use crate::config::model::ConfigFile;

/// Run basic sanity checks against loaded settings.
///
/// This checks:
/// - node dimensions are positive and finite
/// - spacing values are non-negative and finite
/// - the generation model and base URL are non-empty
///
/// Course data is validated separately (see `catalog::validate`); settings
/// problems are hard errors while catalog problems are warnings.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_layout(cfg)?;
    validate_generate(cfg)?;
    Ok(())
}

fn validate_layout(cfg: &ConfigFile) -> Result<()> {
    let layout = &cfg.layout;

    for (name, value) in [
        ("node_width", layout.node_width),
        ("node_height", layout.node_height),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(anyhow!(
                "[layout].{} must be a positive number (got {})",
                name,
                value
            ));
        }
    }

    for (name, value) in [("nodesep", layout.nodesep), ("ranksep", layout.ranksep)] {
        if !value.is_finite() || value < 0.0 {
            return Err(anyhow!(
                "[layout].{} must be a non-negative number (got {})",
                name,
                value
            ));
        }
    }

    Ok(())
}

fn validate_generate(cfg: &ConfigFile) -> Result<()> {
    if cfg.generate.model.trim().is_empty() {
        return Err(anyhow!("[generate].model must not be empty"));
    }
    if cfg.generate.base_url.trim().is_empty() {
        return Err(anyhow!("[generate].base_url must not be empty"));
    }
    Ok(())
}
