//! Argument checking for host calls
//!
//! Positions are 1-based, as the host counts them. A missing trailing
//! argument reads as nil.

use std::any::Any;

use thiserror::Error;

use super::handle::{HandleKind, OpaqueHandle};
use super::value::HostValue;
use crate::bridge::BridgeError;

/// Errors raised to the host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A bridge operation failed; the message passes through unchanged
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// An argument had the wrong type or range
    #[error("bad argument #{position} to '{function}' ({expected} expected, got {got})")]
    BadArgument {
        /// Function being called
        function: &'static str,
        /// 1-based argument position
        position: usize,
        /// What the function wanted
        expected: &'static str,
        /// What it received
        got: String,
    },

    /// No function is registered under this name
    #[error("no function named '{0}'")]
    UnknownFunction(String),
}

/// Result type for host calls
pub type HostResult<T> = Result<T, HostError>;

/// Positional arguments of one host call
pub struct Args<'a> {
    function: &'static str,
    values: &'a [HostValue],
}

impl<'a> Args<'a> {
    /// Arguments passed to `function`
    pub const fn new(function: &'static str, values: &'a [HostValue]) -> Self {
        Self { function, values }
    }

    fn get(&self, position: usize) -> Option<&'a HostValue> {
        position.checked_sub(1).and_then(|index| self.values.get(index))
    }

    fn bad(&self, position: usize, expected: &'static str, got: impl Into<String>) -> HostError {
        HostError::BadArgument {
            function: self.function,
            position,
            expected,
            got: got.into(),
        }
    }

    /// Required handle of the given kind
    pub fn check_handle(&self, position: usize, kind: HandleKind) -> HostResult<OpaqueHandle> {
        match self.get(position) {
            Some(HostValue::Handle(handle)) if handle.kind() == kind => Ok(*handle),
            other => Err(self.bad(position, kind.name(), type_name(other))),
        }
    }

    /// Optional handle of the given kind; absent and nil both give `None`
    pub fn opt_handle(&self, position: usize, kind: HandleKind) -> HostResult<Option<OpaqueHandle>> {
        if self.get(position).map_or(true, HostValue::is_nil) {
            Ok(None)
        } else {
            self.check_handle(position, kind).map(Some)
        }
    }

    /// Required integer
    pub fn check_integer(&self, position: usize) -> HostResult<i64> {
        match self.get(position) {
            Some(HostValue::Integer(value)) => Ok(*value),
            other => Err(self.bad(position, "integer", type_name(other))),
        }
    }

    /// Required integer in `u32` range
    pub fn check_u32(&self, position: usize) -> HostResult<u32> {
        let value = self.check_integer(position)?;
        u32::try_from(value).map_err(|_| self.bad(position, "non-negative 32-bit integer", value.to_string()))
    }

    /// Required userdata holding a `T`, described as `expected` in errors
    pub fn check_userdata<T: Any>(&self, position: usize, expected: &'static str) -> HostResult<&'a T> {
        match self.get(position) {
            Some(HostValue::Userdata(userdata)) => userdata
                .downcast_ref::<T>()
                .ok_or_else(|| self.bad(position, expected, userdata.type_name())),
            other => Err(self.bad(position, expected, type_name(other))),
        }
    }
}

fn type_name(value: Option<&HostValue>) -> &'static str {
    value.map_or("nil", HostValue::type_name)
}
