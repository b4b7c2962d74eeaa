// Runtime configuration.
// Defaults come from `constants.rs`. A page may override any field with a
// JSON object; missing fields keep their defaults and unknown fields are
// rejected.

use crate::constants::{
    FOCUS_DELAY_MS, REVEAL_EASE_NAME, REVEAL_SELECTOR, REVEAL_START, TILT_GROUPS, TOUR_MESSAGE,
};
use crate::easing::Easing;
use crate::error::{MotionError, Result};
use crate::reveal::ScrollTrigger;
use crate::tilt::TiltConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TiltGroup {
    pub selector: String,
    #[serde(default)]
    pub tilt: TiltConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MotionConfig {
    pub tilt_groups: Vec<TiltGroup>,
    pub reveal_selector: String,
    /// Scroll trigger line, e.g. `"top 85%"`.
    pub reveal_start: String,
    /// Curve name for the reveal tween, e.g. `"power3.out"`.
    pub reveal_ease: String,
    pub focus_delay_ms: u32,
    pub tour_message: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            tilt_groups: TILT_GROUPS
                .iter()
                .map(|&(selector, x, y, perspective)| TiltGroup {
                    selector: selector.to_string(),
                    tilt: TiltConfig::new(x, y, perspective),
                })
                .collect(),
            reveal_selector: REVEAL_SELECTOR.to_string(),
            reveal_start: REVEAL_START.to_string(),
            reveal_ease: REVEAL_EASE_NAME.to_string(),
            focus_delay_ms: FOCUS_DELAY_MS,
            tour_message: TOUR_MESSAGE.to_string(),
        }
    }
}

impl MotionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MotionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for group in &self.tilt_groups {
            if group.selector.trim().is_empty() {
                return Err(MotionError::InvalidConfig(
                    "tilt group with empty selector".into(),
                ));
            }
            let t = &group.tilt;
            if !t.max_rotation_x.is_finite() || !t.max_rotation_y.is_finite() {
                return Err(MotionError::InvalidConfig(format!(
                    "tilt group `{}`: rotation must be finite",
                    group.selector
                )));
            }
            if !(t.perspective.is_finite() && t.perspective > 0.0) {
                return Err(MotionError::InvalidConfig(format!(
                    "tilt group `{}`: perspective must be positive",
                    group.selector
                )));
            }
        }
        if self.reveal_selector.trim().is_empty() {
            return Err(MotionError::InvalidConfig("empty reveal selector".into()));
        }
        self.reveal_trigger()?;
        self.reveal_ease.parse::<Easing>()?;
        Ok(())
    }

    pub fn reveal_trigger(&self) -> Result<ScrollTrigger> {
        self.reveal_start.parse()
    }

    pub fn reveal_easing(&self) -> Easing {
        Easing::parse_or_default(&self.reveal_ease)
    }
}
