use crate::{ConfigError, ConfigErrorResult};

use cb_core::validation::{
    DEFAULT_MAX_IMAGE_LENGTH, DEFAULT_MAX_INGREDIENT_LENGTH, DEFAULT_MAX_INGREDIENTS, DEFAULT_MAX_STEPS_LENGTH,
    DEFAULT_MAX_TITLE_LENGTH,
};

use serde::Deserialize;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 1_000;

pub const MIN_INGREDIENTS: usize = 1;
pub const MAX_INGREDIENTS: usize = 1_000;

pub const MIN_INGREDIENT_LENGTH: usize = 1;
pub const MAX_INGREDIENT_LENGTH: usize = 10_000;

pub const MIN_STEPS_LENGTH: usize = 1;
pub const MAX_STEPS_LENGTH: usize = 200_000;

pub const MAX_IMAGE_LENGTH: usize = 10_000_000;

/// Field limits for recipe payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    pub max_ingredients: usize,
    pub max_ingredient_length: usize,
    pub max_steps_length: usize,
    /// Inline data URIs count towards this
    pub max_image_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_ingredients: DEFAULT_MAX_INGREDIENTS,
            max_ingredient_length: DEFAULT_MAX_INGREDIENT_LENGTH,
            max_steps_length: DEFAULT_MAX_STEPS_LENGTH,
            max_image_length: DEFAULT_MAX_IMAGE_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "max_title_length",
            self.max_title_length,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        )?;
        Self::check_range(
            "max_ingredients",
            self.max_ingredients,
            MIN_INGREDIENTS,
            MAX_INGREDIENTS,
        )?;
        Self::check_range(
            "max_ingredient_length",
            self.max_ingredient_length,
            MIN_INGREDIENT_LENGTH,
            MAX_INGREDIENT_LENGTH,
        )?;
        Self::check_range(
            "max_steps_length",
            self.max_steps_length,
            MIN_STEPS_LENGTH,
            MAX_STEPS_LENGTH,
        )?;
        Self::check_range("max_image_length", self.max_image_length, 0, MAX_IMAGE_LENGTH)?;
        Ok(())
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::validation(format!(
                "validation.{} must be {}-{}, got {}",
                name, min, max, value
            )));
        }
        Ok(())
    }
}
