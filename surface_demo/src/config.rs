//! Demo configuration

use glfw_vulkan::config::{BridgeConfig, Config};
use serde::{Deserialize, Serialize};

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Whether the window is shown
    pub visible: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Surface demo".to_string(),
            visible: true,
        }
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub app_name: String,
    pub window: WindowSettings,
    pub bridge: BridgeConfig,
}

impl Config for DemoConfig {}
