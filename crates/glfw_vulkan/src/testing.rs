//! Scriptable native layer for unit tests

use std::cell::{Cell, RefCell};

use ash::vk::{self, Handle};

use crate::bridge::{AllocatorRef, NativeVulkan};

/// A native call observed by [`MockVulkan`], with handles as raw values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    VulkanSupported,
    RequiredExtensions,
    PresentationSupport { instance: u64, device: u64, queue_family_index: u32 },
    CreateSurface { instance: u64, allocator: Option<usize> },
    DestroySurface { instance: u64, surface: u64, allocator: Option<usize> },
}

/// In-memory stand-in for GLFW
///
/// Surfaces are numbered from a counter, so every successful creation yields
/// a fresh handle.
pub struct MockVulkan {
    supported: bool,
    extensions: Option<Vec<String>>,
    presentable_family: Option<u32>,
    surface_status: vk::Result,
    next_surface: Cell<u64>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockVulkan {
    pub fn new() -> Self {
        Self {
            supported: true,
            extensions: Some(vec!["VK_KHR_surface".to_string(), "VK_KHR_xlib_surface".to_string()]),
            presentable_family: Some(0),
            surface_status: vk::Result::SUCCESS,
            next_surface: Cell::new(0x1_0000),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_support(mut self, supported: bool) -> Self {
        self.supported = supported;
        self
    }

    pub fn with_extensions(mut self, extensions: Option<Vec<String>>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_presentable_family(mut self, family: u32) -> Self {
        self.presentable_family = Some(family);
        self
    }

    pub fn with_surface_status(mut self, status: vk::Result) -> Self {
        self.surface_status = status;
        self
    }

    /// Every native call made so far, oldest first
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl NativeVulkan for MockVulkan {
    type Window = ();

    fn vulkan_supported(&self) -> bool {
        self.record(MockCall::VulkanSupported);
        self.supported
    }

    fn required_instance_extensions(&self) -> Option<Vec<String>> {
        self.record(MockCall::RequiredExtensions);
        self.extensions.clone()
    }

    fn physical_device_presentation_support(
        &self,
        instance: vk::Instance,
        device: vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> bool {
        self.record(MockCall::PresentationSupport {
            instance: instance.as_raw(),
            device: device.as_raw(),
            queue_family_index,
        });
        self.presentable_family == Some(queue_family_index)
    }

    fn create_window_surface(
        &self,
        _window: &(),
        instance: vk::Instance,
        allocator: Option<AllocatorRef>,
    ) -> Result<vk::SurfaceKHR, vk::Result> {
        self.record(MockCall::CreateSurface {
            instance: instance.as_raw(),
            allocator: allocator.map(AllocatorRef::as_raw),
        });
        if self.surface_status != vk::Result::SUCCESS {
            return Err(self.surface_status);
        }
        let raw = self.next_surface.get();
        self.next_surface.set(raw + 1);
        Ok(vk::SurfaceKHR::from_raw(raw))
    }

    fn destroy_surface(
        &self,
        instance: vk::Instance,
        surface: vk::SurfaceKHR,
        allocator: Option<AllocatorRef>,
    ) {
        self.record(MockCall::DestroySurface {
            instance: instance.as_raw(),
            surface: surface.as_raw(),
            allocator: allocator.map(AllocatorRef::as_raw),
        });
    }
}
