//! Host function table
//!
//! Each entry checks the capability gate, then its arguments, then forwards
//! to the bridge and wraps the result as a host value.

use std::collections::BTreeMap;

use ash::vk::{self, Handle};

use super::args::{Args, HostError, HostResult};
use super::handle::{HandleKind, OpaqueHandle};
use super::value::HostValue;
use crate::bridge::VulkanBridge;

/// A host-callable function
pub type HostFn<B> = fn(&B, &[HostValue]) -> HostResult<HostValue>;

/// Names and functions in registration order
pub fn functions<B: VulkanBridge>() -> [(&'static str, HostFn<B>); 5] {
    [
        ("vulkan_supported", vulkan_supported::<B>),
        ("get_required_instance_extensions", get_required_instance_extensions::<B>),
        ("get_physical_device_presentation_support", get_physical_device_presentation_support::<B>),
        ("create_window_surface", create_window_surface::<B>),
        ("destroy_surface", destroy_surface::<B>),
    ]
}

/// Host module table the functions are registered into
pub struct ModuleTable<B> {
    name: String,
    entries: BTreeMap<&'static str, HostFn<B>>,
}

impl<B: VulkanBridge> ModuleTable<B> {
    /// Create an empty module table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Module name as seen by host scripts
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a function, replacing any previous entry with that name
    pub fn set(&mut self, name: &'static str, function: HostFn<B>) {
        self.entries.insert(name, function);
    }

    /// Look up a function
    pub fn get(&self, name: &str) -> Option<HostFn<B>> {
        self.entries.get(name).copied()
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Call a registered function by name
    pub fn call(&self, bridge: &B, name: &str, args: &[HostValue]) -> HostResult<HostValue> {
        let function = self
            .get(name)
            .ok_or_else(|| HostError::UnknownFunction(name.to_string()))?;
        function(bridge, args)
    }
}

/// Register the Vulkan functions into `module`
pub fn open_vulkan<B: VulkanBridge>(module: &mut ModuleTable<B>) {
    for (name, function) in functions::<B>() {
        module.set(name, function);
    }
    log::debug!("Registered Vulkan functions into '{}'", module.name());
}

/// Call one of the Vulkan functions by name without a module table
pub fn call<B: VulkanBridge>(bridge: &B, name: &str, args: &[HostValue]) -> HostResult<HostValue> {
    let (_, function) = functions::<B>()
        .into_iter()
        .find(|(entry, _)| *entry == name)
        .ok_or_else(|| HostError::UnknownFunction(name.to_string()))?;
    function(bridge, args)
}

fn vulkan_supported<B: VulkanBridge>(bridge: &B, _args: &[HostValue]) -> HostResult<HostValue> {
    Ok(HostValue::Boolean(bridge.vulkan_supported()))
}

fn get_required_instance_extensions<B: VulkanBridge>(
    bridge: &B,
    _args: &[HostValue],
) -> HostResult<HostValue> {
    bridge.ensure_available()?;
    let names = bridge.required_instance_extensions()?;
    Ok(HostValue::from(names))
}

fn get_physical_device_presentation_support<B: VulkanBridge>(
    bridge: &B,
    args: &[HostValue],
) -> HostResult<HostValue> {
    bridge.ensure_available()?;
    let args = Args::new("get_physical_device_presentation_support", args);
    let instance = instance_arg(&args, 1)?;
    let device = vk::PhysicalDevice::from_raw(args.check_handle(2, HandleKind::PhysicalDevice)?.as_raw());
    let queue_family_index = args.check_u32(3)?;

    let supported = bridge.physical_device_presentation_support(instance, device, queue_family_index)?;
    Ok(HostValue::Boolean(supported))
}

fn create_window_surface<B: VulkanBridge>(bridge: &B, args: &[HostValue]) -> HostResult<HostValue> {
    bridge.ensure_available()?;
    let args = Args::new("create_window_surface", args);
    let window = args.check_userdata::<B::Window>(1, "window")?;
    let instance = instance_arg(&args, 2)?;
    let allocator = args
        .opt_handle(3, HandleKind::Allocator)?
        .and_then(OpaqueHandle::to_allocator);

    let surface = bridge.create_window_surface(window, instance, allocator)?;
    Ok(HostValue::Handle(OpaqueHandle::surface(surface)))
}

fn destroy_surface<B: VulkanBridge>(bridge: &B, args: &[HostValue]) -> HostResult<HostValue> {
    bridge.ensure_available()?;
    let args = Args::new("destroy_surface", args);
    let instance = instance_arg(&args, 1)?;
    let surface = vk::SurfaceKHR::from_raw(args.check_handle(2, HandleKind::Surface)?.as_raw());
    let allocator = args
        .opt_handle(3, HandleKind::Allocator)?
        .and_then(OpaqueHandle::to_allocator);

    bridge.destroy_surface(instance, surface, allocator)?;
    Ok(HostValue::Nil)
}

fn instance_arg(args: &Args<'_>, position: usize) -> HostResult<vk::Instance> {
    let handle = args.check_handle(position, HandleKind::Instance)?;
    Ok(vk::Instance::from_raw(handle.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeError, NativeBridge, UnavailableBridge};
    use crate::host::value::Userdata;
    use crate::testing::{MockCall, MockVulkan};

    fn instance() -> HostValue {
        HostValue::from(OpaqueHandle::instance(vk::Instance::from_raw(0x100)))
    }

    fn device() -> HostValue {
        HostValue::from(OpaqueHandle::physical_device(vk::PhysicalDevice::from_raw(0x200)))
    }

    fn window() -> HostValue {
        HostValue::from(Userdata::new("window", ()))
    }

    fn allocator(raw: u64) -> HostValue {
        HostValue::from(OpaqueHandle::from_raw(HandleKind::Allocator, raw))
    }

    #[test]
    fn test_open_registers_all_functions() {
        let mut module = ModuleTable::<NativeBridge<MockVulkan>>::new("glfw");
        open_vulkan(&mut module);
        let names: Vec<&str> = module.names().collect();
        assert_eq!(
            names,
            [
                "create_window_surface",
                "destroy_surface",
                "get_physical_device_presentation_support",
                "get_required_instance_extensions",
                "vulkan_supported",
            ]
        );
    }

    #[test]
    fn test_unknown_function() {
        let bridge = NativeBridge::new(MockVulkan::new());
        let err = call(&bridge, "create_instance", &[]).unwrap_err();
        assert_eq!(err, HostError::UnknownFunction("create_instance".to_string()));

        let module = ModuleTable::<NativeBridge<MockVulkan>>::new("glfw");
        let err = module.call(&bridge, "vulkan_supported", &[]).unwrap_err();
        assert_eq!(err.to_string(), "no function named 'vulkan_supported'");
    }

    #[test]
    fn test_unknown_function_named_alike_by_both_lookups() {
        let bridge = NativeBridge::new(MockVulkan::new());
        let mut module = ModuleTable::<NativeBridge<MockVulkan>>::new("glfw");
        open_vulkan(&mut module);

        let direct = call(&bridge, "get_instance_proc_address", &[]).unwrap_err();
        let through_module = module.call(&bridge, "get_instance_proc_address", &[]).unwrap_err();
        assert_eq!(direct, through_module);
        assert_eq!(direct, HostError::UnknownFunction("get_instance_proc_address".to_string()));
    }

    #[test]
    fn test_gated_out_build_fails_before_arguments() {
        let bridge = UnavailableBridge::<()>::new();

        assert_eq!(call(&bridge, "vulkan_supported", &[]).unwrap().as_bool(), Some(false));
        for name in [
            "get_required_instance_extensions",
            "get_physical_device_presentation_support",
            "create_window_surface",
            "destroy_surface",
        ] {
            // Deliberately wrong arguments: the gate must win
            let err = call(&bridge, name, &[HostValue::from("bogus")]).unwrap_err();
            assert_eq!(err, HostError::Bridge(BridgeError::CapabilityUnavailable), "{}", name);
            assert_eq!(err.to_string(), "Vulkan is not available");
        }
    }

    #[test]
    fn test_extensions_as_sequence() {
        let bridge = NativeBridge::new(MockVulkan::new().with_extensions(Some(vec![
            "VK_KHR_surface".to_string(),
            "VK_KHR_wayland_surface".to_string(),
        ])));
        let value = call(&bridge, "get_required_instance_extensions", &[]).unwrap();
        let names: Vec<&str> = value.as_sequence().unwrap().iter().filter_map(HostValue::as_str).collect();
        assert_eq!(names, ["VK_KHR_surface", "VK_KHR_wayland_surface"]);

        let bridge = NativeBridge::new(MockVulkan::new().with_extensions(None));
        let value = call(&bridge, "get_required_instance_extensions", &[]).unwrap();
        assert_eq!(value.as_sequence().map(<[HostValue]>::len), Some(0));
    }

    #[test]
    fn test_presentation_support() {
        let bridge = NativeBridge::new(MockVulkan::new().with_presentable_family(1));
        let args = [instance(), device(), HostValue::from(1_i64)];
        let value = call(&bridge, "get_physical_device_presentation_support", &args).unwrap();
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(
            bridge.native().calls(),
            [MockCall::PresentationSupport { instance: 0x100, device: 0x200, queue_family_index: 1 }]
        );
    }

    #[test]
    fn test_presentation_support_argument_errors() {
        let bridge = NativeBridge::new(MockVulkan::new());

        let args = [instance(), instance(), HostValue::from(0_i64)];
        let err = call(&bridge, "get_physical_device_presentation_support", &args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad argument #2 to 'get_physical_device_presentation_support' \
             (physical device handle expected, got instance handle)"
        );

        let args = [instance(), device(), HostValue::from(-3_i64)];
        let err = call(&bridge, "get_physical_device_presentation_support", &args).unwrap_err();
        assert!(matches!(err, HostError::BadArgument { position: 3, .. }));

        // Nothing reached the native layer
        assert!(bridge.native().calls().is_empty());
    }

    #[test]
    fn test_create_returns_distinct_surfaces() {
        let bridge = NativeBridge::new(MockVulkan::new());
        let args = [window(), instance()];
        let first = call(&bridge, "create_window_surface", &args).unwrap().as_handle().unwrap();
        let second = call(&bridge, "create_window_surface", &args).unwrap().as_handle().unwrap();

        assert_eq!(first.kind(), HandleKind::Surface);
        assert_ne!(first, second);
    }

    #[test]
    fn test_create_failure_message() {
        let statuses = [
            (vk::Result::ERROR_OUT_OF_HOST_MEMORY, "out of host memory"),
            (vk::Result::ERROR_OUT_OF_DEVICE_MEMORY, "out of device memory"),
            (vk::Result::ERROR_EXTENSION_NOT_PRESENT, "extension not present"),
            (vk::Result::ERROR_NATIVE_WINDOW_IN_USE_KHR, "native window in use khr"),
            (vk::Result::ERROR_INITIALIZATION_FAILED, "initialization failed"),
            (vk::Result::from_raw(-31_337), "unknown vulkan error code"),
        ];
        for (status, phrase) in statuses {
            let bridge = NativeBridge::new(MockVulkan::new().with_surface_status(status));
            let err = call(&bridge, "create_window_surface", &[window(), instance()]).unwrap_err();
            assert_eq!(err.to_string(), phrase);
        }
    }

    #[test]
    fn test_create_requires_window() {
        let bridge = NativeBridge::new(MockVulkan::new());
        let err = call(&bridge, "create_window_surface", &[instance(), instance()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad argument #1 to 'create_window_surface' (window expected, got instance handle)"
        );
    }

    #[test]
    fn test_omitted_allocator_equals_nil() {
        let omitted = NativeBridge::new(MockVulkan::new());
        let surface = call(&omitted, "create_window_surface", &[window(), instance()]).unwrap();
        call(&omitted, "destroy_surface", &[instance(), surface]).unwrap();

        let explicit = NativeBridge::new(MockVulkan::new());
        let surface = call(&explicit, "create_window_surface", &[window(), instance(), HostValue::Nil]).unwrap();
        call(&explicit, "destroy_surface", &[instance(), surface, HostValue::Nil]).unwrap();

        assert_eq!(omitted.native().calls(), explicit.native().calls());
        assert_eq!(
            omitted.native().calls()[0],
            MockCall::CreateSurface { instance: 0x100, allocator: None }
        );
    }

    #[test]
    fn test_allocator_passes_through() {
        let bridge = NativeBridge::new(MockVulkan::new());
        let surface = call(&bridge, "create_window_surface", &[window(), instance(), allocator(0x9000)]).unwrap();
        let raw_surface = surface.as_handle().unwrap().as_raw();
        call(&bridge, "destroy_surface", &[instance(), surface, allocator(0x9000)]).unwrap();

        assert_eq!(
            bridge.native().calls(),
            [
                MockCall::CreateSurface { instance: 0x100, allocator: Some(0x9000) },
                MockCall::DestroySurface { instance: 0x100, surface: raw_surface, allocator: Some(0x9000) },
            ]
        );
    }

    #[test]
    fn test_destroy_returns_nothing() {
        let bridge = NativeBridge::new(MockVulkan::new());
        let surface = HostValue::from(OpaqueHandle::surface(vk::SurfaceKHR::from_raw(0x77)));
        for _ in 0..2 {
            let value = call(&bridge, "destroy_surface", &[instance(), surface.clone()]).unwrap();
            assert!(value.is_nil());
        }
    }
}
