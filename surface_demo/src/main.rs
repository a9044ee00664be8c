//! Surface demo host
//!
//! Opens a GLFW window, registers the Vulkan functions into a module table
//! and drives every one of them by name, the way a script would.

mod config;
mod instance;
mod window;

use std::rc::Rc;

use ash::vk::{self, Handle};
use glfw_vulkan::foundation::logging;
use glfw_vulkan::prelude::*;

use crate::config::DemoConfig;
use crate::instance::VulkanInstance;

const CONFIG_PATH: &str = "surface_demo.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load_or_default(CONFIG_PATH)?;
    logging::init_with_level(&config.bridge.log_level);

    let (glfw, window) = window::create(&config.window)?;
    let window = Rc::new(window);

    let bridge = glfw_vulkan::open(glfw);
    let mut module = ModuleTable::new(config.bridge.module_name.clone());
    open_vulkan(&mut module);

    let supported = module.call(&bridge, "vulkan_supported", &[])?;
    if supported.as_bool() != Some(true) {
        log::warn!("Vulkan is not supported here, nothing to demo");
        return Ok(());
    }

    let extensions: Vec<String> = module
        .call(&bridge, "get_required_instance_extensions", &[])?
        .as_sequence()
        .unwrap_or_default()
        .iter()
        .filter_map(|name| name.as_str().map(str::to_string))
        .collect();
    for name in &extensions {
        log::info!("Required instance extension: {}", name);
    }

    let app_name = if config.app_name.is_empty() { "surface_demo" } else { config.app_name.as_str() };
    let vulkan = VulkanInstance::new(app_name, &extensions)?;
    let instance = HostValue::from(OpaqueHandle::instance(vulkan.instance.handle()));

    let mut presentable = None;
    for (device, family_count) in vulkan.physical_devices()? {
        for family in 0..family_count {
            let args = [
                instance.clone(),
                HostValue::from(OpaqueHandle::physical_device(device)),
                HostValue::from(i64::from(family)),
            ];
            let verdict = module.call(&bridge, "get_physical_device_presentation_support", &args)?;
            log::info!("Device {:#x} queue family {}: presentation {:?}", device.as_raw(), family, verdict.as_bool());
            if presentable.is_none() && verdict.as_bool() == Some(true) {
                presentable = Some((device, family));
            }
        }
    }
    match presentable {
        Some((device, family)) => log::info!("Presenting from device {:#x} family {}", device.as_raw(), family),
        None => log::warn!("No queue family can present to GLFW surfaces"),
    }

    let window_value = HostValue::from(Userdata::from_rc("window", Rc::clone(&window)));
    let surface = module.call(&bridge, "create_window_surface", &[window_value, instance.clone()])?;
    match surface.as_handle().and_then(OpaqueHandle::to_surface) {
        Some(handle) if handle != vk::SurfaceKHR::null() => log::info!("Created surface {:#x}", handle.as_raw()),
        _ => log::warn!("create_window_surface returned {:?}", surface),
    }

    module.call(&bridge, "destroy_surface", &[instance, surface])?;
    log::info!("Destroyed surface");

    Ok(())
}
