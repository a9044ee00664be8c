//! Minimal Vulkan instance for exercising the bridge

use std::ffi::CString;

use ash::{vk, Entry, Instance};
use thiserror::Error;

/// Instance setup errors
#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("Failed to load Vulkan: {0}")]
    Loading(#[from] ash::LoadingError),

    #[error("Vulkan API error: {0:?}")]
    Api(#[from] vk::Result),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] std::ffi::NulError),
}

/// Vulkan instance wrapper with RAII cleanup
pub struct VulkanInstance {
    pub entry: Entry,
    pub instance: Instance,
}

impl VulkanInstance {
    /// Create an instance enabling exactly `extensions`, in the given order
    pub fn new(app_name: &str, extensions: &[String]) -> Result<Self, InstanceError> {
        let entry = unsafe { Entry::load() }?;

        let app_name_cstr = CString::new(app_name)?;
        let engine_name_cstr = CString::new("glfw_vulkan")?;
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name_cstr)
            .application_version(vk::make_api_version(0, 1, 0, 0))
            .engine_name(&engine_name_cstr)
            .engine_version(vk::make_api_version(0, 1, 0, 0))
            .api_version(vk::API_VERSION_1_0);

        let cstr_extensions = extensions
            .iter()
            .map(|ext| CString::new(ext.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let extension_ptrs: Vec<*const std::os::raw::c_char> =
            cstr_extensions.iter().map(|ext| ext.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs);

        let instance = unsafe { entry.create_instance(&create_info, None) }?;
        log::info!("Created Vulkan instance with {} extension(s)", extensions.len());

        Ok(Self { entry, instance })
    }

    /// Physical devices with their queue family counts
    pub fn physical_devices(&self) -> Result<Vec<(vk::PhysicalDevice, u32)>, InstanceError> {
        let devices = unsafe { self.instance.enumerate_physical_devices() }?;
        Ok(devices
            .into_iter()
            .map(|device| {
                let families = unsafe { self.instance.get_physical_device_queue_family_properties(device) };
                (device, u32::try_from(families.len()).unwrap_or(u32::MAX))
            })
            .collect())
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}
