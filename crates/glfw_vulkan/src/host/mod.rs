//! Scripting host surface
//!
//! What the host sees of the bridge: a small value model, argument checking
//! with host-style error messages, and the named function table registered
//! by [`open_vulkan`].

pub mod args;
pub mod handle;
pub mod registry;
pub mod value;

pub use args::{Args, HostError, HostResult};
pub use handle::{HandleKind, OpaqueHandle};
pub use registry::{call, functions, open_vulkan, HostFn, ModuleTable};
pub use value::{HostValue, Userdata};
