//! Bridge used when Vulkan support is compiled out

use std::marker::PhantomData;

use ash::vk;

use super::{AllocatorRef, BridgeError, BridgeResult, VulkanBridge};

/// Bridge that reports every operation as unavailable
///
/// No native code is reachable from this type. The window type parameter
/// only keeps its signature identical to the native bridge it replaces.
pub struct UnavailableBridge<W> {
    _window: PhantomData<fn(&W)>,
}

impl<W> UnavailableBridge<W> {
    /// Create the bridge
    pub const fn new() -> Self {
        Self { _window: PhantomData }
    }
}

impl<W> Default for UnavailableBridge<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: 'static> VulkanBridge for UnavailableBridge<W> {
    type Window = W;

    fn ensure_available(&self) -> BridgeResult<()> {
        Err(BridgeError::CapabilityUnavailable)
    }

    fn vulkan_supported(&self) -> bool {
        false
    }

    fn required_instance_extensions(&self) -> BridgeResult<Vec<String>> {
        Err(BridgeError::CapabilityUnavailable)
    }

    fn physical_device_presentation_support(
        &self,
        _instance: vk::Instance,
        _device: vk::PhysicalDevice,
        _queue_family_index: u32,
    ) -> BridgeResult<bool> {
        Err(BridgeError::CapabilityUnavailable)
    }

    fn create_window_surface(
        &self,
        _window: &W,
        _instance: vk::Instance,
        _allocator: Option<AllocatorRef>,
    ) -> BridgeResult<vk::SurfaceKHR> {
        Err(BridgeError::CapabilityUnavailable)
    }

    fn destroy_surface(
        &self,
        _instance: vk::Instance,
        _surface: vk::SurfaceKHR,
        _allocator: Option<AllocatorRef>,
    ) -> BridgeResult<()> {
        Err(BridgeError::CapabilityUnavailable)
    }
}
