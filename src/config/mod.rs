pub mod loader;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::error::{PhysicsError, PhysicsResult};
use crate::game::{DEFAULT_SPEED, FIELD_HEIGHT, FIELD_WIDTH, GRAPHICS_FRAME_RATE, PHYSICS_FRAME_RATE};

// Global configuration instance with thread-safe access
pub static CONFIG: once_cell::sync::Lazy<Arc<RwLock<GameConfig>>> =
    once_cell::sync::Lazy::new(|| Arc::new(RwLock::new(GameConfig::default())));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub physics: PhysicsConfig,
    pub graphics: GraphicsConfig,
}

// Playing field dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

// Simulation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Lines per second.
    pub falling_speed: u32,
    /// Physics frames per second.
    pub frame_rate: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            falling_speed: DEFAULT_SPEED,
            frame_rate: PHYSICS_FRAME_RATE,
        }
    }
}

// Presentation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    pub frame_rate: u32,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            frame_rate: GRAPHICS_FRAME_RATE,
        }
    }
}

impl GameConfig {
    /// Rejects zero dimensions and zero rates.
    pub fn validate(&self) -> PhysicsResult<()> {
        if self.field.width == 0 || self.field.height == 0 {
            return Err(PhysicsError::Dimension {
                width: self.field.width,
                height: self.field.height,
            });
        }
        for (name, value) in [
            ("falling speed", self.physics.falling_speed),
            ("physics frame rate", self.physics.frame_rate),
            ("graphics frame rate", self.graphics.frame_rate),
        ] {
            if value == 0 {
                return Err(PhysicsError::InvalidRate { name, value });
            }
        }
        Ok(())
    }

    /// Copy of the process-wide configuration.
    #[must_use]
    pub fn current() -> Self {
        match CONFIG.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replaces the process-wide configuration.
    pub fn install(self) {
        match CONFIG.write() {
            Ok(mut config) => *config = self,
            Err(poisoned) => *poisoned.into_inner() = self,
        }
    }
}
