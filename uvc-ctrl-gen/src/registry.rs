//! Standard UVC controls with fixed layouts.
//!
//! Tables mostly follow selector order. The generated
//! output follows table order, so appending keeps diffs small.

use crate::control::{Control, ControlDocs, Unit};
use crate::field::Field;

pub const CT_CONTROLS: &[Control] = &[
    Control::new("scanning_mode", "SCANNING_MODE", 1, &[
        Field::unsigned("mode", 0, 1).doc("0: interlaced, 1: progressive"),
    ]),
    Control::new("ae_mode", "AE_MODE", 1, &[
        Field::unsigned("mode", 0, 1)
            .doc("1: manual mode; 2: auto mode; 4: shutter priority mode; 8: aperture priority mode"),
    ])
    .docs(ControlDocs::Split {
        getter: "Reads the camera's auto-exposure mode.\n\n\
                 See `set_ae_mode` for a description of the available modes.",
        setter: "Sets the camera's auto-exposure mode.\n\n\
                 Cameras may support any of the following AE modes:\n\
                 * `1` manual exposure time, manual iris\n\
                 * `2` auto exposure time, auto iris\n\
                 * `4` manual exposure time, auto iris (shutter priority)\n\
                 * `8` auto exposure time, manual iris (aperture priority)\n\n\
                 Most cameras provide manual mode and aperture priority mode.",
    }),
    Control::new("ae_priority", "AE_PRIORITY", 1, &[
        Field::unsigned("priority", 0, 1)
            .doc("0: frame rate must remain constant; 1: frame rate may be varied for AE purposes"),
    ])
    .docs(ControlDocs::Split {
        getter: "Checks whether the camera may vary the frame rate for exposure control reasons.\n\n\
                 See `set_ae_priority` for a description of the `priority` field.",
        setter: "Chooses whether the camera may vary the frame rate for exposure control reasons.\n\n\
                 A `priority` value of zero means the camera may not vary its frame rate. A value\n\
                 of 1 means the frame rate is variable. This setting has no effect outside of the\n\
                 `auto` and `shutter_priority` auto-exposure modes.",
    }),
    Control::new("exposure_abs", "EXPOSURE_TIME_ABSOLUTE", 4, &[
        Field::unsigned("time", 0, 4),
    ])
    .docs(ControlDocs::Split {
        getter: "Gets the absolute exposure time.\n\n\
                 See `set_exposure_abs` for a description of the `time` field.",
        setter: "Sets the absolute exposure time.\n\n\
                 The `time` parameter should be provided in units of 0.0001 seconds (e.g., use the\n\
                 value 100 for a 10ms exposure period). Auto exposure should be set to `manual` or\n\
                 `shutter_priority` before attempting to change this setting.",
    }),
    Control::new("exposure_rel", "EXPOSURE_TIME_RELATIVE", 1, &[
        Field::signed("step", 0, 1),
    ]),
    Control::new("focus_abs", "FOCUS_ABSOLUTE", 2, &[
        Field::unsigned("focus", 0, 2),
    ]),
    Control::new("focus_rel", "FOCUS_RELATIVE", 2, &[
        Field::signed("focus_rel", 0, 1),
        Field::unsigned("speed", 1, 1),
    ]),
    Control::new("focus_simple_range", "FOCUS_SIMPLE", 1, &[
        Field::unsigned("focus", 0, 1),
    ]),
    Control::new("focus_auto", "FOCUS_AUTO", 1, &[
        Field::unsigned("state", 0, 1),
    ]),
    Control::new("iris_abs", "IRIS_ABSOLUTE", 2, &[
        Field::unsigned("iris", 0, 2),
    ]),
    Control::new("iris_rel", "IRIS_RELATIVE", 1, &[
        Field::unsigned("iris_rel", 0, 1),
    ]),
    Control::new("zoom_abs", "ZOOM_ABSOLUTE", 2, &[
        Field::unsigned("focal_length", 0, 2),
    ]),
    Control::new("zoom_rel", "ZOOM_RELATIVE", 3, &[
        Field::signed("zoom_rel", 0, 1),
        Field::unsigned("digital_zoom", 1, 1),
        Field::unsigned("speed", 2, 1),
    ]),
    Control::new("pantilt_abs", "PANTILT_ABSOLUTE", 8, &[
        Field::signed("pan", 0, 4),
        Field::signed("tilt", 4, 4),
    ]),
    Control::new("pantilt_rel", "PANTILT_RELATIVE", 4, &[
        Field::signed("pan_rel", 0, 1),
        Field::unsigned("pan_speed", 1, 1),
        Field::signed("tilt_rel", 2, 1),
        Field::unsigned("tilt_speed", 3, 1),
    ]),
    Control::new("roll_abs", "ROLL_ABSOLUTE", 2, &[
        Field::signed("roll", 0, 2),
    ]),
    Control::new("roll_rel", "ROLL_RELATIVE", 2, &[
        Field::signed("roll_rel", 0, 1),
        Field::unsigned("speed", 1, 1),
    ]),
    Control::new("privacy", "PRIVACY", 1, &[
        Field::unsigned("privacy", 0, 1),
    ]),
    Control::new("digital_window", "DIGITAL_WINDOW", 12, &[
        Field::unsigned("window_top", 0, 2),
        Field::unsigned("window_left", 2, 2),
        Field::unsigned("window_bottom", 4, 2),
        Field::unsigned("window_right", 6, 2),
        Field::unsigned("num_steps", 8, 2),
        Field::unsigned("num_steps_units", 10, 2),
    ]),
    Control::new("digital_roi", "REGION_OF_INTEREST", 10, &[
        Field::unsigned("roi_top", 0, 2),
        Field::unsigned("roi_left", 2, 2),
        Field::unsigned("roi_bottom", 4, 2),
        Field::unsigned("roi_right", 6, 2),
        Field::unsigned("auto_controls", 8, 2),
    ]),
];

pub const PU_CONTROLS: &[Control] = &[
    Control::new("backlight_compensation", "BACKLIGHT_COMPENSATION", 2, &[
        Field::unsigned("backlight_compensation", 0, 2).doc(
            "device-dependent backlight compensation mode; zero means backlight compensation is disabled",
        ),
    ]),
    Control::new("brightness", "BRIGHTNESS", 2, &[
        Field::signed("brightness", 0, 2),
    ]),
    Control::new("contrast", "CONTRAST", 2, &[
        Field::unsigned("contrast", 0, 2),
    ]),
    Control::new("contrast_auto", "CONTRAST_AUTO", 1, &[
        Field::unsigned("contrast_auto", 0, 1),
    ]),
    Control::new("gain", "GAIN", 2, &[
        Field::unsigned("gain", 0, 2),
    ]),
    Control::new("power_line_frequency", "POWER_LINE_FREQUENCY", 1, &[
        Field::unsigned("power_line_frequency", 0, 1).doc("0: disabled; 1: 50 Hz; 2: 60 Hz; 3: auto"),
    ]),
    Control::new("hue", "HUE", 2, &[
        Field::signed("hue", 0, 2),
    ]),
    Control::new("hue_auto", "HUE_AUTO", 1, &[
        Field::unsigned("hue_auto", 0, 1),
    ]),
    Control::new("saturation", "SATURATION", 2, &[
        Field::unsigned("saturation", 0, 2),
    ]),
    Control::new("sharpness", "SHARPNESS", 2, &[
        Field::unsigned("sharpness", 0, 2),
    ]),
    Control::new("gamma", "GAMMA", 2, &[
        Field::unsigned("gamma", 0, 2),
    ]),
    Control::new("white_balance_temperature", "WHITE_BALANCE_TEMPERATURE", 2, &[
        Field::unsigned("temperature", 0, 2),
    ]),
    Control::new("white_balance_temperature_auto", "WHITE_BALANCE_TEMPERATURE_AUTO", 1, &[
        Field::unsigned("temperature_auto", 0, 1),
    ]),
    Control::new("white_balance_component", "WHITE_BALANCE_COMPONENT", 4, &[
        Field::unsigned("blue", 0, 2),
        Field::unsigned("red", 2, 2),
    ]),
    Control::new("white_balance_component_auto", "WHITE_BALANCE_COMPONENT_AUTO", 1, &[
        Field::unsigned("white_balance_component_auto", 0, 1),
    ]),
    Control::new("digital_multiplier", "DIGITAL_MULTIPLIER", 2, &[
        Field::unsigned("multiplier_step", 0, 2),
    ]),
    Control::new("digital_multiplier_limit", "DIGITAL_MULTIPLIER_LIMIT", 2, &[
        Field::unsigned("multiplier_step", 0, 2),
    ]),
    Control::new("analog_video_standard", "ANALOG_VIDEO_STANDARD", 1, &[
        Field::unsigned("video_standard", 0, 1),
    ]),
    Control::new("analog_video_lock_status", "ANALOG_LOCK_STATUS", 1, &[
        Field::unsigned("status", 0, 1),
    ]),
];

pub const SU_CONTROLS: &[Control] = &[
    Control::new("input_select", "INPUT_SELECT", 1, &[
        Field::unsigned("selector", 0, 1),
    ]),
];

/// The three unit groups, in emission order
pub fn units() -> [(Unit, &'static [Control]); 3] {
    [
        (Unit::CameraTerminal, CT_CONTROLS),
        (Unit::ProcessingUnit, PU_CONTROLS),
        (Unit::SelectorUnit, SU_CONTROLS),
    ]
}
