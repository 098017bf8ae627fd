//! Device power mode, a video control interface control.
//!
//! Unlike the unit controls it addresses the interface itself (index 0) and its byte is an
//! enumerated value, so it is written out by hand instead of generated.

use crate::selector::VcSelector;
use crate::{byte_enum, ControlError, ControlResult, ControlTransfer, RequestCode};

const REQ_TYPE_SET: u8 = 0x21;
const REQ_TYPE_GET: u8 = 0xa1;

byte_enum! {
    pub enum DevicePowerMode {
        Full = 0x0b,
        DeviceDependent = 0x1b,
    }
}

pub trait PowerControl {
    /// Reads the device power mode.
    ///
    /// A byte that names no known mode is handed back as `Err(byte)` inside the `Ok`.
    fn get_power_mode(&mut self, req_code: RequestCode) -> ControlResult<Result<DevicePowerMode, u8>>;
    /// Sets the device power mode
    fn set_power_mode(&mut self, mode: DevicePowerMode) -> ControlResult;
}

impl<T: ControlTransfer + ?Sized> PowerControl for T {
    fn get_power_mode(&mut self, req_code: RequestCode) -> ControlResult<Result<DevicePowerMode, u8>> {
        let mut data = [0u8; 1];
        let ret = self.control_transfer(
            REQ_TYPE_GET,
            req_code as u8,
            (VcSelector::VideoPowerMode as u16) << 8,
            0,
            &mut data,
        );

        if ret == data.len() as i32 {
            Ok(DevicePowerMode::try_from(data[0]))
        } else {
            Err(ControlError(ret))
        }
    }

    fn set_power_mode(&mut self, mode: DevicePowerMode) -> ControlResult {
        let mut data = [mode as u8];
        let ret = self.control_transfer(
            REQ_TYPE_SET,
            RequestCode::SetCur as u8,
            (VcSelector::VideoPowerMode as u16) << 8,
            0,
            &mut data,
        );

        if ret == data.len() as i32 {
            Ok(())
        } else {
            Err(ControlError(ret))
        }
    }
}
