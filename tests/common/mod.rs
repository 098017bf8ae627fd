#![allow(dead_code)]

use std::collections::HashMap;

use uvc_ctrl::ControlTransfer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub request_type: u8,
    pub request: u8,
    pub value: u16,
    pub index: u16,
    pub data: Vec<u8>,
}

/// Remembers the last bytes written per selector and plays them back on reads.
///
/// `result` overrides the return value of every transfer when set.
#[derive(Default)]
pub struct Loopback {
    pub stored: HashMap<(u16, u16), Vec<u8>>,
    pub transfers: Vec<Transfer>,
    pub result: Option<i32>,
}

impl Loopback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(result: i32) -> Self {
        Loopback {
            result: Some(result),
            ..Self::default()
        }
    }

    /// Preload what the device answers for `value`
    pub fn with_response(mut self, value: u16, index: u16, bytes: &[u8]) -> Self {
        self.stored.insert((value, index), bytes.to_vec());
        self
    }

    pub fn last(&self) -> &Transfer {
        self.transfers.last().expect("no transfer performed")
    }
}

impl ControlTransfer for Loopback {
    fn control_transfer(&mut self, request_type: u8, request: u8, value: u16, index: u16, data: &mut [u8]) -> i32 {
        if request_type & 0x80 != 0 {
            if let Some(bytes) = self.stored.get(&(value, index)) {
                let n = bytes.len().min(data.len());
                data[..n].copy_from_slice(&bytes[..n]);
            }
        } else {
            self.stored.insert((value, index), data.to_vec());
        }

        self.transfers.push(Transfer {
            request_type,
            request,
            value,
            index,
            data: data.to_vec(),
        });

        self.result.unwrap_or(data.len() as i32)
    }
}
