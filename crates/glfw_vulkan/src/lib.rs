//! # GLFW Vulkan
//!
//! GLFW's Vulkan interop entry points, packaged for a scripting host.
//!
//! ## Features
//!
//! - **Extension Enumeration**: instance extensions GLFW needs for surfaces
//! - **Presentation Queries**: whether a queue family can present
//! - **Surface Lifecycle**: create and destroy `VkSurfaceKHR` for GLFW windows
//! - **Capability Gate**: build without the `vulkan` feature and every call
//!   except `vulkan_supported` reports "Vulkan is not available"
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glfw_vulkan::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let glfw = glfw::init(glfw::fail_on_errors)?;
//!     let bridge = glfw_vulkan::open(glfw);
//!
//!     let mut module = ModuleTable::new("glfw");
//!     open_vulkan(&mut module);
//!
//!     let supported = module.call(&bridge, "vulkan_supported", &[])?;
//!     println!("Vulkan supported: {:?}", supported.as_bool());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod bridge;
pub mod config;
pub mod foundation;
pub mod host;

#[cfg(test)]
mod testing;

pub use bridge::{open, BridgeError, BridgeResult, DefaultBridge, VulkanBridge};
pub use host::{open_vulkan, HostError, HostValue, ModuleTable};

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        bridge::{AllocatorRef, BridgeError, BridgeResult, DefaultBridge, VulkanBridge},
        config::{BridgeConfig, Config, ConfigError},
        host::{open_vulkan, HandleKind, HostError, HostResult, HostValue, ModuleTable, OpaqueHandle, Userdata},
    };
}
