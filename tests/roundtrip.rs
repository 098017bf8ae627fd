mod common;

use common::Loopback;
use proptest::prelude::*;
use uvc_ctrl::{RequestCode, UvcControls};

proptest! {
    #[test]
    fn unsigned_byte(mode: u8) {
        let mut dev = Loopback::new();
        dev.set_scanning_mode(mode).unwrap();

        let mut read = 0;
        dev.get_scanning_mode(&mut read, RequestCode::GetCur).unwrap();
        prop_assert_eq!(read, mode);
    }

    #[test]
    fn signed_byte(step: i8) {
        let mut dev = Loopback::new();
        dev.set_exposure_rel(step).unwrap();

        let mut read = 0;
        dev.get_exposure_rel(&mut read, RequestCode::GetCur).unwrap();
        prop_assert_eq!(read, step);
    }

    #[test]
    fn unsigned_short(contrast: u16) {
        let mut dev = Loopback::new();
        dev.set_contrast(contrast).unwrap();
        prop_assert_eq!(&dev.last().data, &contrast.to_le_bytes().to_vec());

        let mut read = 0;
        dev.get_contrast(&mut read, RequestCode::GetCur).unwrap();
        prop_assert_eq!(read, contrast);
    }

    #[test]
    fn signed_short(brightness: i16) {
        let mut dev = Loopback::new();
        dev.set_brightness(brightness).unwrap();

        let mut read = 0;
        dev.get_brightness(&mut read, RequestCode::GetCur).unwrap();
        prop_assert_eq!(read, brightness);
    }

    #[test]
    fn unsigned_long(time: u32) {
        let mut dev = Loopback::new();
        dev.set_exposure_abs(time).unwrap();

        let mut read = 0;
        dev.get_exposure_abs(&mut read, RequestCode::GetCur).unwrap();
        prop_assert_eq!(read, time);
    }

    #[test]
    fn signed_long_pair(pan: i32, tilt: i32) {
        let mut dev = Loopback::new();
        dev.set_pantilt_abs(pan, tilt).unwrap();

        let (mut read_pan, mut read_tilt) = (0, 0);
        dev.get_pantilt_abs(&mut read_pan, &mut read_tilt, RequestCode::GetCur).unwrap();
        prop_assert_eq!((read_pan, read_tilt), (pan, tilt));
    }

    #[test]
    fn mixed_bytes(pan_rel: i8, pan_speed: u8, tilt_rel: i8, tilt_speed: u8) {
        let mut dev = Loopback::new();
        dev.set_pantilt_rel(pan_rel, pan_speed, tilt_rel, tilt_speed).unwrap();

        let mut read = (0, 0, 0, 0);
        dev.get_pantilt_rel(&mut read.0, &mut read.1, &mut read.2, &mut read.3, RequestCode::GetCur).unwrap();
        prop_assert_eq!(read, (pan_rel, pan_speed, tilt_rel, tilt_speed));
    }
}
