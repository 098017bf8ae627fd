#![no_std]

//! Typed accessors for the standard UVC controls.
//!
//! The accessors themselves are generated by `uvc-ctrl-gen` at build time and exposed
//! through [`UvcControls`], which is implemented for every [`ControlTransfer`].

use core::fmt;

pub mod power;
pub mod selector;

mod controls {
    include!(concat!(env!("OUT_DIR"), "/ctrl_decl.rs"));
}

mod ctrl_gen {
    include!(concat!(env!("OUT_DIR"), "/ctrl_def.rs"));
}

pub use controls::UvcControls;
pub use power::{DevicePowerMode, PowerControl};

/// Declares a fieldless `#[repr(u8)]` enum along with its `TryFrom<u8>`
macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $value:expr,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant = $value,)*
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(x if x == $name::$variant as u8 => Ok($name::$variant),)*
                    other => Err(other),
                }
            }
        }
    };
}
pub(crate) use byte_enum;

/// The transport the accessors run on top of.
///
/// Mirrors a libusb control transfer on the video control interface.
pub trait ControlTransfer {
    /// Perform one control transfer.
    ///
    /// For IN requests `data` is filled from the device, for OUT requests its contents are
    /// sent. Returns the number of bytes transferred or a negative error code.
    fn control_transfer(&mut self, request_type: u8, request: u8, value: u16, index: u16, data: &mut [u8]) -> i32;
}

impl<T: ControlTransfer + ?Sized> ControlTransfer for &mut T {
    fn control_transfer(&mut self, request_type: u8, request: u8, value: u16, index: u16, data: &mut [u8]) -> i32 {
        (**self).control_transfer(request_type, request, value, index, data)
    }
}

byte_enum! {
    /// UVC request code (A.8)
    pub enum RequestCode {
        Undefined = 0x00,
        SetCur = 0x01,
        GetCur = 0x81,
        GetMin = 0x82,
        GetMax = 0x83,
        GetRes = 0x84,
        GetLen = 0x85,
        GetInfo = 0x86,
        GetDef = 0x87,
    }
}

/// Alias for `Result<T, ControlError>`
pub type ControlResult<T = ()> = Result<T, ControlError>;

/// A transfer that did not move exactly the control's length.
///
/// Holds the transport's return value untouched: a short byte count and a negative error
/// code are reported the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlError(pub i32);

impl ControlError {
    pub fn code(self) -> i32 {
        self.0
    }

    pub fn kind(self) -> UvcErrorKind {
        UvcErrorKind::from_code(self.0)
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 0 {
            write!(f, "Short transfer ({} bytes)", self.0)
        } else {
            write!(f, "{}", self.kind())
        }
    }
}

/// libuvc / libusb error codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UvcErrorKind {
    Io,
    InvalidParam,
    Access,
    NoDevice,
    NotFound,
    Busy,
    Timeout,
    Overflow,
    Pipe,
    Interrupted,
    NoMem,
    NotSupported,
    /// Device is not UVC-compliant
    InvalidDevice,
    InvalidMode,
    /// Resource has a callback (can't use polling and async)
    CallbackExists,
    Other,
}

impl UvcErrorKind {
    pub const OTHER_CODE: i32 = -99;

    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => UvcErrorKind::Io,
            -2 => UvcErrorKind::InvalidParam,
            -3 => UvcErrorKind::Access,
            -4 => UvcErrorKind::NoDevice,
            -5 => UvcErrorKind::NotFound,
            -6 => UvcErrorKind::Busy,
            -7 => UvcErrorKind::Timeout,
            -8 => UvcErrorKind::Overflow,
            -9 => UvcErrorKind::Pipe,
            -10 => UvcErrorKind::Interrupted,
            -11 => UvcErrorKind::NoMem,
            -12 => UvcErrorKind::NotSupported,
            -50 => UvcErrorKind::InvalidDevice,
            -51 => UvcErrorKind::InvalidMode,
            -52 => UvcErrorKind::CallbackExists,
            _ => UvcErrorKind::Other,
        }
    }
}

impl fmt::Display for UvcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UvcErrorKind::Io => "Input/output error",
            UvcErrorKind::InvalidParam => "Invalid parameter",
            UvcErrorKind::Access => "Access denied",
            UvcErrorKind::NoDevice => "No such device",
            UvcErrorKind::NotFound => "Not found",
            UvcErrorKind::Busy => "Busy",
            UvcErrorKind::Timeout => "Timeout",
            UvcErrorKind::Overflow => "Overflow",
            UvcErrorKind::Pipe => "Pipe",
            UvcErrorKind::Interrupted => "Interrupted",
            UvcErrorKind::NoMem => "Insufficient memory",
            UvcErrorKind::NotSupported => "Operation not supported",
            UvcErrorKind::InvalidDevice => "Invalid device",
            UvcErrorKind::InvalidMode => "Invalid mode",
            UvcErrorKind::CallbackExists => "Callback exists",
            UvcErrorKind::Other => "Unknown error",
        };
        write!(f, "{s}")
    }
}
