mod common;

use common::{Loopback, Transfer};
use uvc_ctrl::selector::{CtSelector, PuSelector, SuSelector, VcSelector};
use uvc_ctrl::{ControlError, ControlTransfer, DevicePowerMode, PowerControl, RequestCode, UvcControls, UvcErrorKind};

const INDEX: u16 = 1 << 8;

fn value(selector: u8) -> u16 {
    (selector as u16) << 8
}

#[test]
fn unsigned_short_is_little_endian() {
    let mut dev = Loopback::new();

    dev.set_contrast(300).unwrap();
    assert_eq!(
        dev.last(),
        &Transfer {
            request_type: 0x21,
            request: RequestCode::SetCur as u8,
            value: value(PuSelector::Contrast as u8),
            index: INDEX,
            data: vec![0x2c, 0x01],
        }
    );

    let mut contrast = 0;
    dev.get_contrast(&mut contrast, RequestCode::GetCur).unwrap();
    assert_eq!(contrast, 300);
}

#[test]
fn getter_sends_caller_request_code() {
    let mut dev = Loopback::new().with_response(value(PuSelector::Brightness as u8), INDEX, &[0x00, 0x80]);

    let mut brightness = 0;
    dev.get_brightness(&mut brightness, RequestCode::GetMin).unwrap();

    assert_eq!(brightness, i16::MIN);
    assert_eq!(dev.last().request_type, 0xa1);
    assert_eq!(dev.last().request, 0x82);
    assert_eq!(dev.last().index, 0x0100);
}

#[test]
fn signed_byte_pair() {
    let mut dev = Loopback::new();

    dev.set_focus_rel(-1, 5).unwrap();
    assert_eq!(dev.last().data, vec![0xff, 0x05]);
    assert_eq!(dev.last().value, 0x0700);

    let (mut focus_rel, mut speed) = (0, 0);
    dev.get_focus_rel(&mut focus_rel, &mut speed, RequestCode::GetCur).unwrap();
    assert_eq!((focus_rel, speed), (-1, 5));
}

#[test]
fn short_transfer_is_returned_verbatim() {
    let mut dev = Loopback::failing(1);

    let (mut focus_rel, mut speed) = (7, 9);
    let result = dev.get_focus_rel(&mut focus_rel, &mut speed, RequestCode::GetCur);

    assert_eq!(result, Err(ControlError(1)));
    assert_eq!((focus_rel, speed), (7, 9));
    assert_eq!(dev.set_focus_rel(-1, 5), Err(ControlError(1)));
}

#[test]
fn transport_error_is_returned_verbatim() {
    let mut dev = Loopback::failing(-9);

    let mut mode = 0;
    let err = dev.get_scanning_mode(&mut mode, RequestCode::GetCur).unwrap_err();

    assert_eq!(err, ControlError(-9));
    assert_eq!(err.kind(), UvcErrorKind::Pipe);
    assert_eq!(dev.set_scanning_mode(1), Err(ControlError(-9)));
    assert_eq!(dev.transfers.len(), 2);
}

#[test]
fn all_ones_decodes_by_signedness() {
    let ff2 = [0xff; 2];
    let ff4 = [0xff; 4];
    let ff8 = [0xff; 8];
    let mut dev = Loopback::new()
        .with_response(value(PuSelector::Brightness as u8), INDEX, &ff2)
        .with_response(value(PuSelector::Contrast as u8), INDEX, &ff2)
        .with_response(value(CtSelector::ExposureTimeAbsolute as u8), INDEX, &ff4)
        .with_response(value(CtSelector::PantiltAbsolute as u8), INDEX, &ff8)
        .with_response(value(CtSelector::ExposureTimeRelative as u8), INDEX, &[0xff])
        .with_response(value(CtSelector::Privacy as u8), INDEX, &[0xff]);

    let (mut brightness, mut contrast) = (0, 0);
    dev.get_brightness(&mut brightness, RequestCode::GetCur).unwrap();
    dev.get_contrast(&mut contrast, RequestCode::GetCur).unwrap();
    assert_eq!(brightness, -1);
    assert_eq!(contrast, u16::MAX);

    let mut time = 0;
    dev.get_exposure_abs(&mut time, RequestCode::GetCur).unwrap();
    assert_eq!(time, u32::MAX);

    let (mut pan, mut tilt) = (0, 0);
    dev.get_pantilt_abs(&mut pan, &mut tilt, RequestCode::GetCur).unwrap();
    assert_eq!((pan, tilt), (-1, -1));

    let (mut step, mut privacy) = (0, 0);
    dev.get_exposure_rel(&mut step, RequestCode::GetCur).unwrap();
    dev.get_privacy(&mut privacy, RequestCode::GetCur).unwrap();
    assert_eq!(step, -1);
    assert_eq!(privacy, u8::MAX);
}

#[test]
fn multi_field_layout() {
    let mut dev = Loopback::new();

    dev.set_digital_window(0x0102, 0x0304, 0x0506, 0x0708, 0x090a, 0x0b0c).unwrap();
    assert_eq!(
        dev.last().data,
        vec![0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07, 0x0a, 0x09, 0x0c, 0x0b]
    );
    assert_eq!(dev.last().value, value(CtSelector::DigitalWindow as u8));

    dev.set_pantilt_abs(-2, 0x1234_5678).unwrap();
    assert_eq!(dev.last().data, vec![0xfe, 0xff, 0xff, 0xff, 0x78, 0x56, 0x34, 0x12]);

    dev.set_white_balance_component(6500, 4000).unwrap();
    let (mut blue, mut red) = (0, 0);
    dev.get_white_balance_component(&mut blue, &mut red, RequestCode::GetCur).unwrap();
    assert_eq!((blue, red), (6500, 4000));
}

#[test]
fn selector_unit() {
    let mut dev = Loopback::new();

    dev.set_input_select(2).unwrap();
    assert_eq!(dev.last().value, value(SuSelector::InputSelect as u8));
    assert_eq!(dev.last().data, vec![2]);
}

#[test]
fn works_through_trait_objects() {
    let mut backing = Loopback::new();
    {
        let dev: &mut dyn ControlTransfer = &mut backing;
        dev.set_gain(42).unwrap();

        let mut gain = 0;
        dev.get_gain(&mut gain, RequestCode::GetCur).unwrap();
        assert_eq!(gain, 42);
    }
    assert_eq!(backing.transfers.len(), 2);
}

#[test]
fn power_mode_addresses_the_interface() {
    let mut dev = Loopback::new();

    dev.set_power_mode(DevicePowerMode::DeviceDependent).unwrap();
    assert_eq!(
        dev.last(),
        &Transfer {
            request_type: 0x21,
            request: 0x01,
            value: value(VcSelector::VideoPowerMode as u8),
            index: 0,
            data: vec![0x1b],
        }
    );

    assert_eq!(dev.get_power_mode(RequestCode::GetCur), Ok(Ok(DevicePowerMode::DeviceDependent)));
    assert_eq!(dev.last().request_type, 0xa1);
}

#[test]
fn power_mode_errors() {
    let mut dev = Loopback::new().with_response(value(VcSelector::VideoPowerMode as u8), 0, &[0x42]);
    assert_eq!(dev.get_power_mode(RequestCode::GetCur), Ok(Err(0x42)));

    let mut dev = Loopback::failing(-4);
    assert_eq!(dev.get_power_mode(RequestCode::GetCur), Err(ControlError(-4)));
    assert_eq!(dev.set_power_mode(DevicePowerMode::Full), Err(ControlError(-4)));
}
