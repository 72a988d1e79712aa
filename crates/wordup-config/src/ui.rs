use std::env;

use serde::Deserialize;

fn default_drawer_breakpoint() -> u32 {
    768
}

fn default_viewport_width() -> u32 {
    1024
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Viewports narrower than this close the history drawer
    #[serde(default = "default_drawer_breakpoint")]
    pub drawer_breakpoint: u32,
    /// Width reported at mount
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            drawer_breakpoint: default_drawer_breakpoint(),
            viewport_width: default_viewport_width(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let drawer_breakpoint = env::var("WORDUP_DRAWER_BREAKPOINT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_drawer_breakpoint);

        let viewport_width = env::var("WORDUP_VIEWPORT_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_viewport_width);

        Self {
            drawer_breakpoint,
            viewport_width,
        }
    }
}
