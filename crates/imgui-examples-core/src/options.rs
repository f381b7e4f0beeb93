//! Configuration options for the example applications.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ClientApi, ExampleError, Result};

/// Environment variable naming a JSON file with [`ExampleOptions`].
pub const CONFIG_ENV_VAR: &str = "IMGUI_EXAMPLES_CONFIG";

/// Options shared by every platform/renderer pairing.
///
/// Missing fields in a configuration file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleOptions {
    /// Initial window width in screen coordinates.
    pub window_width: u32,

    /// Initial window height in screen coordinates.
    pub window_height: u32,

    /// Window title. `None` derives one from the client API.
    pub title: Option<String>,

    /// Buffer swap interval (1 = vsync, 0 = unlimited).
    pub swap_interval: u32,

    /// Idle time after each presented frame, in milliseconds.
    pub idle_ms: u64,

    /// Initial clear color of the frame buffer.
    pub clear_color: [f32; 3],

    /// Whether the showcase window is open at start.
    pub show_showcase_window: bool,
}

impl Default for ExampleOptions {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            title: None,
            swap_interval: 1,
            idle_ms: 25,
            clear_color: [0.0, 0.0, 0.0],
            show_showcase_window: false,
        }
    }
}

impl ExampleOptions {
    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let options: Self = serde_json::from_str(&text)?;
        options.validate()?;
        log::debug!("loaded options from {}", path.as_ref().display());
        Ok(options)
    }

    /// Loads options from the file named by [`CONFIG_ENV_VAR`], or returns
    /// the defaults when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks values that would make window creation meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ExampleError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Idle time inserted after each frame.
    #[must_use]
    pub fn idle_duration(&self) -> Duration {
        Duration::from_millis(self.idle_ms)
    }

    /// The window title for the given client API.
    #[must_use]
    pub fn window_title(&self, api: ClientApi) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Dear ImGui GLFW+{api} example"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExampleOptions::default();
        assert_eq!(options.window_width, 1280);
        assert_eq!(options.window_height, 720);
        assert_eq!(options.idle_duration(), Duration::from_millis(25));
        assert_eq!(options.clear_color, [0.0, 0.0, 0.0]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_window_title() {
        let mut options = ExampleOptions::default();
        assert_eq!(
            options.window_title(ClientApi::OpenGl3),
            "Dear ImGui GLFW+OpenGL3 example"
        );
        options.title = Some("custom".to_string());
        assert_eq!(options.window_title(ClientApi::OpenGl2), "custom");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "window_width": 800, "idle_ms": 0 }}"#).unwrap();

        let options = ExampleOptions::load(file.path()).unwrap();
        assert_eq!(options.window_width, 800);
        assert_eq!(options.window_height, 720);
        assert_eq!(options.idle_duration(), Duration::ZERO);
    }

    #[test]
    fn test_load_rejects_zero_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "window_height": 0 }}"#).unwrap();

        let err = ExampleOptions::load(file.path()).unwrap_err();
        assert!(matches!(err, ExampleError::Config(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ExampleOptions::load(file.path()).unwrap_err();
        assert!(matches!(err, ExampleError::JsonError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ExampleOptions::load("/nonexistent/imgui-examples.json").unwrap_err();
        assert!(matches!(err, ExampleError::IoError(_)));
    }
}
