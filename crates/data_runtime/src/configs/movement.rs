//! Movement configuration loaded from data/config/movement.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MovementCfg {
    pub walk_speed: Option<f32>,
    pub run_speed: Option<f32>,
    pub stop_distance: Option<f32>,
    pub deadzone: Option<f32>,
    pub gravity: Option<f32>,
    pub jump_height: Option<f32>,
}

impl Default for MovementCfg {
    fn default() -> Self {
        Self {
            walk_speed: Some(5.0),
            run_speed: Some(8.0),
            stop_distance: Some(0.5),
            deadzone: Some(0.1),
            gravity: Some(-20.0),
            jump_height: Some(2.0),
        }
    }
}

pub fn load_default() -> Result<MovementCfg> {
    let path = crate::data_root().join("config/movement.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<MovementCfg>(&txt).context("parse movement TOML")?
    } else {
        MovementCfg::default()
    };
    if let Ok(v) = std::env::var("WALK_SPEED") {
        cfg.walk_speed = v.parse().ok();
    }
    if let Ok(v) = std::env::var("RUN_SPEED") {
        cfg.run_speed = v.parse().ok();
    }
    Ok(cfg)
}
