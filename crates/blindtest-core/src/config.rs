use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TOTAL_GROUPS, EXPANDED_CONTAINER, NORMAL_CONTAINER, SLOT_COUNT};
use crate::error::{BlindTestError, Result};
use crate::geometry::Size;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    pub title: String,
    /// Label shown next to the group counter, e.g. "front_a".
    pub group_label: String,
    pub total_groups: usize,
    /// One image per slot.
    pub images: Vec<PathBuf>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            title: "Nothing Photo Blind Test".into(),
            group_label: "front_a".into(),
            total_groups: DEFAULT_TOTAL_GROUPS,
            images: (1..=SLOT_COUNT)
                .map(|i| PathBuf::from(format!("sampleimage/{i}.png")))
                .collect(),
            layout: LayoutConfig::default(),
        }
    }
}

impl SurveyConfig {
    /// Check slot count, group count and container presets.
    pub fn validate(&self) -> Result<()> {
        if self.images.len() != SLOT_COUNT {
            return Err(BlindTestError::ImageCountMismatch {
                expected: SLOT_COUNT,
                actual: self.images.len(),
            });
        }
        if self.total_groups == 0 {
            return Err(BlindTestError::NoGroups);
        }
        self.layout.validate()
    }
}

/// Container presets, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub normal: Size,
    pub expanded: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            normal: NORMAL_CONTAINER.into(),
            expanded: EXPANDED_CONTAINER.into(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        for size in [self.normal, self.expanded] {
            if size.is_empty() {
                return Err(BlindTestError::InvalidContainer {
                    width: size.width,
                    height: size.height,
                });
            }
        }
        Ok(())
    }
}
