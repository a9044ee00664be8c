//! GLFW implementation of the native Vulkan layer
//!
//! Surface queries and creation go straight to GLFW. GLFW has no destroy
//! counterpart, so `vkDestroySurfaceKHR` is resolved through the Vulkan
//! loader with `ash`.

use std::ffi::{c_void, CStr};

use ash::vk;

use super::{allocator_ptr, AllocatorRef, NativeVulkan};

/// GLFW-backed native layer
pub struct GlfwVulkan {
    glfw: glfw::Glfw,
    /// Vulkan loader, `None` if it could not be found at startup
    entry: Option<ash::Entry>,
}

impl GlfwVulkan {
    /// Wrap an initialized GLFW library and load the Vulkan loader
    ///
    /// A missing loader is not an error here: GLFW will report Vulkan as
    /// unsupported and surface destruction becomes a no-op.
    pub fn new(glfw: glfw::Glfw) -> Self {
        let entry = match unsafe { ash::Entry::load() } {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Vulkan loader unavailable, surfaces cannot be destroyed: {}", e);
                None
            }
        };

        Self { glfw, entry }
    }
}

impl NativeVulkan for GlfwVulkan {
    type Window = glfw::PWindow;

    fn vulkan_supported(&self) -> bool {
        self.glfw.vulkan_supported()
    }

    fn required_instance_extensions(&self) -> Option<Vec<String>> {
        self.glfw.get_required_instance_extensions()
    }

    fn physical_device_presentation_support(
        &self,
        instance: vk::Instance,
        device: vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> bool {
        self.glfw
            .get_physical_device_presentation_support_raw(instance, device, queue_family_index)
    }

    fn create_window_surface(
        &self,
        window: &glfw::PWindow,
        instance: vk::Instance,
        allocator: Option<AllocatorRef>,
    ) -> Result<vk::SurfaceKHR, vk::Result> {
        let mut surface = vk::SurfaceKHR::null();
        let result = window.create_window_surface(instance, allocator_ptr(allocator), &mut surface);

        if result == vk::Result::SUCCESS {
            Ok(surface)
        } else {
            Err(result)
        }
    }

    fn destroy_surface(
        &self,
        instance: vk::Instance,
        surface: vk::SurfaceKHR,
        allocator: Option<AllocatorRef>,
    ) {
        let Some(entry) = &self.entry else {
            log::warn!("Skipping vkDestroySurfaceKHR: no Vulkan loader");
            return;
        };

        let surface_fn = load_surface_fn(|name| unsafe {
            std::mem::transmute(entry.get_instance_proc_addr(instance, name.as_ptr()))
        });

        // The caller vouches for `instance`, `surface` and the allocator
        // callbacks; the bridge only relays them.
        unsafe {
            (surface_fn.destroy_surface_khr)(instance, surface, allocator_ptr(allocator));
        }
    }
}

/// Resolve the `VK_KHR_surface` entry points, and nothing else, via `get_proc`
fn load_surface_fn(mut get_proc: impl FnMut(&CStr) -> *const c_void) -> vk::KhrSurfaceFn {
    vk::KhrSurfaceFn::load(|name| get_proc(name))
}
