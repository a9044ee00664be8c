//! Values exchanged with the scripting host

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::handle::OpaqueHandle;

/// Host-owned object passed by reference, such as a window
///
/// The bridge only borrows the object for the duration of one call.
#[derive(Clone)]
pub struct Userdata {
    type_name: &'static str,
    data: Rc<dyn Any>,
}

impl Userdata {
    /// Wrap a host object under a type name shown in argument errors
    pub fn new<T: Any>(type_name: &'static str, value: T) -> Self {
        Self::from_rc(type_name, Rc::new(value))
    }

    /// Share an object the host already holds
    pub fn from_rc<T: Any>(type_name: &'static str, value: Rc<T>) -> Self {
        Self { type_name, data: value }
    }

    /// Type name given at construction
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the object as `T`, if that is what it holds
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.data.downcast_ref::<T>()
    }
}

impl fmt::Debug for Userdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:p}", self.type_name, Rc::as_ptr(&self.data))
    }
}

/// A host value
#[derive(Debug, Clone, Default)]
pub enum HostValue {
    /// Absent value
    #[default]
    Nil,
    /// Boolean
    Boolean(bool),
    /// Integer
    Integer(i64),
    /// String
    String(String),
    /// Ordered sequence, indexed from 1 on the host side
    Sequence(Vec<HostValue>),
    /// Opaque native handle
    Handle(OpaqueHandle),
    /// Host-owned object
    Userdata(Userdata),
}

impl HostValue {
    /// Type name used in argument errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Handle(handle) => handle.kind().name(),
            Self::Userdata(userdata) => userdata.type_name(),
        }
    }

    /// Whether this is nil
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// The boolean, if this is one
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The handle, if this is one
    pub const fn as_handle(&self) -> Option<OpaqueHandle> {
        match self {
            Self::Handle(handle) => Some(*handle),
            _ => None,
        }
    }

    /// The elements, if this is a sequence
    pub fn as_sequence(&self) -> Option<&[HostValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The string, if this is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<OpaqueHandle> for HostValue {
    fn from(value: OpaqueHandle) -> Self {
        Self::Handle(value)
    }
}

impl From<Userdata> for HostValue {
    fn from(value: Userdata) -> Self {
        Self::Userdata(value)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}
