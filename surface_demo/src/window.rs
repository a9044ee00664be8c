//! Window management using GLFW
//!
//! Creates a window with no client API so Vulkan can own its surface.

use thiserror::Error;

use crate::config::WindowSettings;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// Initialize GLFW and open a Vulkan-ready window
pub fn create(settings: &WindowSettings) -> WindowResult<(glfw::Glfw, glfw::PWindow)> {
    let mut glfw = glfw::init(glfw::fail_on_errors)
        .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

    // Configure for Vulkan (no OpenGL context)
    glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
    glfw.window_hint(glfw::WindowHint::Resizable(false));
    glfw.window_hint(glfw::WindowHint::Visible(settings.visible));

    let (window, _events) = glfw
        .create_window(settings.width, settings.height, &settings.title, glfw::WindowMode::Windowed)
        .ok_or(WindowError::CreationFailed)?;

    log::info!("Created {}x{} window '{}'", settings.width, settings.height, settings.title);
    Ok((glfw, window))
}
