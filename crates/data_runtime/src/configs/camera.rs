//! Camera rig configuration loaded from data/config/camera.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CameraCfg {
    pub sensitivity_deg_per_count: Option<f32>,
    pub invert_y: Option<bool>,
    pub min_pitch_deg: Option<f32>,
    pub max_pitch_deg: Option<f32>,
    pub initial_pitch_deg: Option<f32>,
    pub boom_length: Option<f32>,
    pub boom_height: Option<f32>,
    pub shoulder_offset: Option<f32>,
    pub iso_distance: Option<f32>,
    pub iso_yaw_deg: Option<f32>,
    pub iso_pitch_deg: Option<f32>,
    pub transition_speed: Option<f32>,
    pub shoulder_switch_speed: Option<f32>,
}

impl Default for CameraCfg {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_count: Some(0.15),
            invert_y: Some(false),
            min_pitch_deg: Some(-60.0),
            max_pitch_deg: Some(30.0),
            initial_pitch_deg: Some(-20.0),
            boom_length: Some(5.0),
            boom_height: Some(1.5),
            shoulder_offset: Some(0.5),
            iso_distance: Some(20.0),
            iso_yaw_deg: Some(45.0),
            iso_pitch_deg: Some(45.0),
            transition_speed: Some(5.0),
            shoulder_switch_speed: Some(8.0),
        }
    }
}

pub fn load_default() -> Result<CameraCfg> {
    let path = crate::data_root().join("config/camera.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<CameraCfg>(&txt).context("parse camera TOML")?
    } else {
        CameraCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(s) = std::env::var("MOUSE_SENS_DEG") {
        cfg.sensitivity_deg_per_count = s.parse().ok();
    }
    if let Ok(v) = std::env::var("INVERT_Y") {
        cfg.invert_y = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MIN_PITCH_DEG") {
        cfg.min_pitch_deg = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MAX_PITCH_DEG") {
        cfg.max_pitch_deg = v.parse().ok();
    }
    Ok(cfg)
}
