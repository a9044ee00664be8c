//! Vulkan status code phrases
//!
//! Maps `vk::Result` codes to the short, lower-case phrases the host sees as
//! error messages. Codes not listed here fall through to a generic phrase.

use ash::vk;

/// Phrase used for any status code missing from the table
pub const UNKNOWN_STATUS: &str = "unknown vulkan error code";

/// Get the host-facing phrase for a Vulkan status code
pub fn result_string(rc: vk::Result) -> &'static str {
    match rc {
        vk::Result::SUCCESS => "success",
        vk::Result::NOT_READY => "not ready",
        vk::Result::TIMEOUT => "timeout",
        vk::Result::EVENT_SET => "event set",
        vk::Result::EVENT_RESET => "event reset",
        vk::Result::INCOMPLETE => "incomplete",
        vk::Result::ERROR_OUT_OF_HOST_MEMORY => "out of host memory",
        vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => "out of device memory",
        vk::Result::ERROR_INITIALIZATION_FAILED => "initialization failed",
        vk::Result::ERROR_DEVICE_LOST => "device lost",
        vk::Result::ERROR_MEMORY_MAP_FAILED => "memory map failed",
        vk::Result::ERROR_LAYER_NOT_PRESENT => "layer not present",
        vk::Result::ERROR_EXTENSION_NOT_PRESENT => "extension not present",
        vk::Result::ERROR_FEATURE_NOT_PRESENT => "feature not present",
        vk::Result::ERROR_INCOMPATIBLE_DRIVER => "incompatible driver",
        vk::Result::ERROR_TOO_MANY_OBJECTS => "too many objects",
        vk::Result::ERROR_FORMAT_NOT_SUPPORTED => "format not supported",
        vk::Result::ERROR_FRAGMENTED_POOL => "fragmented pool",
        vk::Result::ERROR_SURFACE_LOST_KHR => "surface lost khr",
        vk::Result::ERROR_NATIVE_WINDOW_IN_USE_KHR => "native window in use khr",
        vk::Result::SUBOPTIMAL_KHR => "suboptimal khr",
        vk::Result::ERROR_OUT_OF_DATE_KHR => "out of date khr",
        vk::Result::ERROR_INCOMPATIBLE_DISPLAY_KHR => "incompatible display khr",
        vk::Result::ERROR_VALIDATION_FAILED_EXT => "validation failed ext",
        vk::Result::ERROR_INVALID_SHADER_NV => "invalid shader nv",
        vk::Result::ERROR_OUT_OF_POOL_MEMORY => "out of pool memory",

        // Codes introduced after Vulkan 1.0
        vk::Result::ERROR_UNKNOWN => "unknown",
        vk::Result::ERROR_FRAGMENTATION => "fragmentation",
        vk::Result::ERROR_INVALID_EXTERNAL_HANDLE => "invalid external handle",
        vk::Result::ERROR_INVALID_OPAQUE_CAPTURE_ADDRESS => "invalid opaque capture address",
        vk::Result::ERROR_FULL_SCREEN_EXCLUSIVE_MODE_LOST_EXT => "full screen exclusive mode lost ext",
        vk::Result::PIPELINE_COMPILE_REQUIRED => "pipeline compile required",

        _ => UNKNOWN_STATUS,
    }
}
