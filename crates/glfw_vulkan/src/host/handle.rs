//! Tagged opaque handles
//!
//! Native handles cross the host boundary as an identity plus a kind tag.
//! The tag exists only so argument checking can tell an instance from a
//! surface; nothing ever looks inside the identity.

use std::fmt;

use ash::vk::{self, Handle};

use crate::bridge::AllocatorRef;

/// What an [`OpaqueHandle`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// `VkInstance`
    Instance,
    /// `VkPhysicalDevice`
    PhysicalDevice,
    /// `VkSurfaceKHR`
    Surface,
    /// `VkAllocationCallbacks*`
    Allocator,
}

impl HandleKind {
    /// Name used in argument errors
    pub const fn name(self) -> &'static str {
        match self {
            Self::Instance => "instance handle",
            Self::PhysicalDevice => "physical device handle",
            Self::Surface => "surface handle",
            Self::Allocator => "allocator handle",
        }
    }
}

/// Opaque reference to a native object
///
/// Equality compares identity only; whether two equal handles name the same
/// object is up to the native layer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OpaqueHandle {
    kind: HandleKind,
    raw: u64,
}

impl OpaqueHandle {
    /// Wrap a raw native identity
    pub const fn from_raw(kind: HandleKind, raw: u64) -> Self {
        Self { kind, raw }
    }

    /// Kind tag
    pub const fn kind(self) -> HandleKind {
        self.kind
    }

    /// Raw native identity
    pub const fn as_raw(self) -> u64 {
        self.raw
    }

    /// Handle for a Vulkan instance
    pub fn instance(instance: vk::Instance) -> Self {
        Self::from_raw(HandleKind::Instance, instance.as_raw())
    }

    /// Handle for a physical device
    pub fn physical_device(device: vk::PhysicalDevice) -> Self {
        Self::from_raw(HandleKind::PhysicalDevice, device.as_raw())
    }

    /// Handle for a surface
    pub fn surface(surface: vk::SurfaceKHR) -> Self {
        Self::from_raw(HandleKind::Surface, surface.as_raw())
    }

    /// Handle for a set of allocation callbacks
    pub fn allocator(callbacks: *const vk::AllocationCallbacks) -> Self {
        Self::from_raw(HandleKind::Allocator, callbacks as usize as u64)
    }

    /// The instance this handle names, if it is an instance handle
    pub fn to_instance(self) -> Option<vk::Instance> {
        (self.kind == HandleKind::Instance).then(|| vk::Instance::from_raw(self.raw))
    }

    /// The physical device this handle names, if it is a device handle
    pub fn to_physical_device(self) -> Option<vk::PhysicalDevice> {
        (self.kind == HandleKind::PhysicalDevice).then(|| vk::PhysicalDevice::from_raw(self.raw))
    }

    /// The surface this handle names, if it is a surface handle
    pub fn to_surface(self) -> Option<vk::SurfaceKHR> {
        (self.kind == HandleKind::Surface).then(|| vk::SurfaceKHR::from_raw(self.raw))
    }

    /// The allocator this handle names, if it is an allocator handle
    ///
    /// A null allocator handle reads as `None`, the native default.
    /// An address wider than this target's pointers reads as `None` too.
    pub fn to_allocator(self) -> Option<AllocatorRef> {
        if self.kind == HandleKind::Allocator {
            AllocatorRef::from_raw(self.raw)
        } else {
            None
        }
    }
}

impl fmt::Debug for OpaqueHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#x}", self.kind.name(), self.raw)
    }
}
