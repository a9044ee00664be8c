//! Capability-gated Vulkan bridge
//!
//! The bridge is the typed surface behind the host function table. It comes
//! in two flavours implementing the same [`VulkanBridge`] trait:
//!
//! - [`NativeBridge`] forwards every call to a [`NativeVulkan`] layer (GLFW
//!   when the `vulkan` feature is enabled)
//! - [`UnavailableBridge`] fails every call with
//!   [`BridgeError::CapabilityUnavailable`] without touching native code
//!
//! Which one [`open`] hands out is decided at compile time, so individual
//! operations never branch on the capability.
//!
//! # Handle Ownership
//! The bridge never owns instances, devices, windows or surfaces. A surface
//! returned by [`VulkanBridge::create_window_surface`] belongs to the caller
//! from that point on and must be released with
//! [`VulkanBridge::destroy_surface`].

use ash::vk;
use thiserror::Error;

pub mod native;
pub mod status;
pub mod unavailable;

#[cfg(feature = "vulkan")]
pub mod glfw_backend;

pub use native::{NativeBridge, NativeVulkan};
pub use status::result_string;
pub use unavailable::UnavailableBridge;

#[cfg(feature = "vulkan")]
pub use glfw_backend::GlfwVulkan;

/// Bridge errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The crate was built without the `vulkan` feature
    #[error("Vulkan is not available")]
    CapabilityUnavailable,

    /// A native call that can fail returned a non-success status
    #[error("{message}")]
    NativeOperationFailed {
        /// Status returned by the native call
        status: vk::Result,
        /// Phrase looked up for `status`
        message: &'static str,
    },
}

impl BridgeError {
    /// Build a native failure from a status code
    pub fn native(status: vk::Result) -> Self {
        Self::NativeOperationFailed {
            status,
            message: result_string(status),
        }
    }
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Opaque reference to a caller-provided `VkAllocationCallbacks`
///
/// The bridge never reads through it; it is only handed back to the native
/// layer. `None` wherever an allocator is accepted means "native default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatorRef(usize);

impl AllocatorRef {
    /// Wrap a raw allocator address
    ///
    /// `None` for a null address, or one that does not fit this target's
    /// pointer width and so cannot name callbacks in this process.
    pub fn from_raw(raw: u64) -> Option<Self> {
        usize::try_from(raw).ok().filter(|&addr| addr != 0).map(Self)
    }

    /// Wrap a pointer to allocation callbacks, `None` for null
    pub fn from_ptr(callbacks: *const vk::AllocationCallbacks) -> Option<Self> {
        (!callbacks.is_null()).then_some(Self(callbacks as usize))
    }

    /// Raw address of the callbacks
    pub const fn as_raw(self) -> usize {
        self.0
    }

    /// Pointer form expected by the Vulkan entry points
    pub fn as_ptr(self) -> *const vk::AllocationCallbacks {
        self.0 as *const vk::AllocationCallbacks
    }
}

/// Pointer for an optional allocator, null meaning the default allocator
pub fn allocator_ptr(allocator: Option<AllocatorRef>) -> *const vk::AllocationCallbacks {
    allocator.map_or(std::ptr::null(), AllocatorRef::as_ptr)
}

/// Typed Vulkan interop operations exposed to the host
///
/// Every method except [`vulkan_supported`](Self::vulkan_supported) fails
/// with [`BridgeError::CapabilityUnavailable`] on a bridge built without the
/// capability.
///
/// # Thread Safety
/// Implementations add no locking. GLFW requires most of these calls to
/// happen on the main thread, so callers must not share a bridge across
/// threads.
pub trait VulkanBridge {
    /// Window type accepted by surface creation
    type Window: 'static;

    /// Fail with [`BridgeError::CapabilityUnavailable`] if the capability is
    /// compiled out
    ///
    /// The host function table calls this before looking at any argument.
    fn ensure_available(&self) -> BridgeResult<()>;

    /// Whether the Vulkan loader and a minimally functional ICD were found
    fn vulkan_supported(&self) -> bool;

    /// Instance extensions GLFW needs to create surfaces, in native order
    ///
    /// A null or empty native list is returned as an empty vector.
    fn required_instance_extensions(&self) -> BridgeResult<Vec<String>>;

    /// Whether `queue_family_index` on `device` can present to GLFW surfaces
    fn physical_device_presentation_support(
        &self,
        instance: vk::Instance,
        device: vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> BridgeResult<bool>;

    /// Create a surface for `window`; the caller owns the returned handle
    fn create_window_surface(
        &self,
        window: &Self::Window,
        instance: vk::Instance,
        allocator: Option<AllocatorRef>,
    ) -> BridgeResult<vk::SurfaceKHR>;

    /// Destroy a surface previously created for `instance`
    fn destroy_surface(
        &self,
        instance: vk::Instance,
        surface: vk::SurfaceKHR,
        allocator: Option<AllocatorRef>,
    ) -> BridgeResult<()>;
}

/// Bridge type selected by the `vulkan` feature
#[cfg(feature = "vulkan")]
pub type DefaultBridge = NativeBridge<GlfwVulkan>;

/// Bridge type selected by the `vulkan` feature
#[cfg(not(feature = "vulkan"))]
pub type DefaultBridge = UnavailableBridge<glfw::PWindow>;

/// Open the bridge for an initialized GLFW library
#[cfg(feature = "vulkan")]
pub fn open(glfw: glfw::Glfw) -> DefaultBridge {
    log::debug!("Opening GLFW Vulkan bridge");
    NativeBridge::new(GlfwVulkan::new(glfw))
}

/// Open the bridge for an initialized GLFW library
#[cfg(not(feature = "vulkan"))]
pub fn open(_glfw: glfw::Glfw) -> DefaultBridge {
    log::debug!("Vulkan support not compiled in; opening unavailable bridge");
    UnavailableBridge::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_error_message_is_status_phrase() {
        let err = BridgeError::native(vk::Result::ERROR_OUT_OF_HOST_MEMORY);
        assert_eq!(err.to_string(), "out of host memory");

        let err = BridgeError::native(vk::Result::from_raw(-424_242));
        assert_eq!(err.to_string(), "unknown vulkan error code");
    }

    #[test]
    fn test_unavailable_message() {
        assert_eq!(BridgeError::CapabilityUnavailable.to_string(), "Vulkan is not available");
    }

    #[test]
    fn test_null_allocator_is_default() {
        assert_eq!(AllocatorRef::from_raw(0), None);
        assert!(allocator_ptr(None).is_null());

        let allocator = AllocatorRef::from_raw(0x1000).unwrap();
        assert_eq!(allocator.as_raw(), 0x1000);
        assert_eq!(allocator_ptr(Some(allocator)) as usize, 0x1000);
    }

    #[test]
    fn test_allocator_address_must_fit_pointer() {
        let wide = u64::from(u32::MAX) + 0x10;
        assert_eq!(AllocatorRef::from_raw(wide).is_some(), usize::try_from(wide).is_ok());
        #[cfg(target_pointer_width = "32")]
        assert_eq!(AllocatorRef::from_raw(wide), None);

        let callbacks = vk::AllocationCallbacks::default();
        let ptr: *const vk::AllocationCallbacks = &callbacks;
        assert_eq!(AllocatorRef::from_ptr(ptr).map(AllocatorRef::as_ptr), Some(ptr));
        assert_eq!(AllocatorRef::from_ptr(std::ptr::null()), None);
    }

    #[cfg(feature = "vulkan")]
    #[test]
    fn test_default_bridge_forwards_to_glfw() {
        let _: fn(GlfwVulkan) -> DefaultBridge = NativeBridge::new;
        let _: fn(glfw::Glfw) -> DefaultBridge = open;
    }

    #[cfg(not(feature = "vulkan"))]
    #[test]
    fn test_default_bridge_is_unavailable() {
        fn takes_glfw_windows<B: VulkanBridge<Window = glfw::PWindow>>(_: &B) {}

        let _: fn(glfw::Glfw) -> DefaultBridge = open;
        let bridge: DefaultBridge = UnavailableBridge::new();
        takes_glfw_windows(&bridge);

        assert!(!bridge.vulkan_supported());
        assert_eq!(bridge.ensure_available(), Err(BridgeError::CapabilityUnavailable));
        assert_eq!(bridge.required_instance_extensions(), Err(BridgeError::CapabilityUnavailable));
    }
}
