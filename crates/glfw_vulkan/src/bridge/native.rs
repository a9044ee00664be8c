//! Forwarding bridge over a native Vulkan windowing layer

use ash::vk;

use super::{AllocatorRef, BridgeError, BridgeResult, VulkanBridge};

/// The native calls the bridge forwards to
///
/// This mirrors the GLFW Vulkan entry points plus `vkDestroySurfaceKHR`.
/// Results are returned exactly as the native layer reports them; turning
/// them into bridge results is [`NativeBridge`]'s job.
pub trait NativeVulkan {
    /// Native window type surfaces are created for
    type Window: 'static;

    /// `glfwVulkanSupported`
    fn vulkan_supported(&self) -> bool;

    /// `glfwGetRequiredInstanceExtensions`, `None` for a null list
    fn required_instance_extensions(&self) -> Option<Vec<String>>;

    /// `glfwGetPhysicalDevicePresentationSupport`
    fn physical_device_presentation_support(
        &self,
        instance: vk::Instance,
        device: vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> bool;

    /// `glfwCreateWindowSurface`, with the non-success status as the error
    fn create_window_surface(
        &self,
        window: &Self::Window,
        instance: vk::Instance,
        allocator: Option<AllocatorRef>,
    ) -> Result<vk::SurfaceKHR, vk::Result>;

    /// `vkDestroySurfaceKHR`
    fn destroy_surface(
        &self,
        instance: vk::Instance,
        surface: vk::SurfaceKHR,
        allocator: Option<AllocatorRef>,
    );
}

/// Bridge that forwards every operation to a native layer
pub struct NativeBridge<N> {
    native: N,
}

impl<N: NativeVulkan> NativeBridge<N> {
    /// Wrap a native layer
    pub const fn new(native: N) -> Self {
        Self { native }
    }

    /// Access the native layer
    pub const fn native(&self) -> &N {
        &self.native
    }
}

impl<N: NativeVulkan> VulkanBridge for NativeBridge<N> {
    type Window = N::Window;

    fn ensure_available(&self) -> BridgeResult<()> {
        Ok(())
    }

    fn vulkan_supported(&self) -> bool {
        self.native.vulkan_supported()
    }

    fn required_instance_extensions(&self) -> BridgeResult<Vec<String>> {
        let extensions = self.native.required_instance_extensions().unwrap_or_default();
        log::debug!("GLFW requires {} instance extension(s): {:?}", extensions.len(), extensions);
        Ok(extensions)
    }

    fn physical_device_presentation_support(
        &self,
        instance: vk::Instance,
        device: vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> BridgeResult<bool> {
        Ok(self
            .native
            .physical_device_presentation_support(instance, device, queue_family_index))
    }

    fn create_window_surface(
        &self,
        window: &N::Window,
        instance: vk::Instance,
        allocator: Option<AllocatorRef>,
    ) -> BridgeResult<vk::SurfaceKHR> {
        self.native
            .create_window_surface(window, instance, allocator)
            .map_err(|status| {
                log::warn!("glfwCreateWindowSurface failed: {:?}", status);
                BridgeError::native(status)
            })
    }

    fn destroy_surface(
        &self,
        instance: vk::Instance,
        surface: vk::SurfaceKHR,
        allocator: Option<AllocatorRef>,
    ) -> BridgeResult<()> {
        self.native.destroy_surface(instance, surface, allocator);
        Ok(())
    }
}
