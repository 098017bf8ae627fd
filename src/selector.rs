//! Control selectors, one enum per entity type.
//!
//! The generated accessors shift these into the high byte of `wValue`.

use crate::byte_enum;

byte_enum! {
    /// Video control interface selector (A.9.1)
    pub enum VcSelector {
        VideoPowerMode = 0x01,
        RequestErrorCode = 0x02,
    }
}

byte_enum! {
    /// Camera terminal control selector (A.9.4)
    pub enum CtSelector {
        ScanningMode = 0x01,
        AeMode = 0x02,
        AePriority = 0x03,
        ExposureTimeAbsolute = 0x04,
        ExposureTimeRelative = 0x05,
        FocusAbsolute = 0x06,
        FocusRelative = 0x07,
        FocusAuto = 0x08,
        IrisAbsolute = 0x09,
        IrisRelative = 0x0a,
        ZoomAbsolute = 0x0b,
        ZoomRelative = 0x0c,
        PantiltAbsolute = 0x0d,
        PantiltRelative = 0x0e,
        RollAbsolute = 0x0f,
        RollRelative = 0x10,
        Privacy = 0x11,
        FocusSimple = 0x12,
        DigitalWindow = 0x13,
        RegionOfInterest = 0x14,
    }
}

byte_enum! {
    /// Processing unit control selector (A.9.5)
    pub enum PuSelector {
        BacklightCompensation = 0x01,
        Brightness = 0x02,
        Contrast = 0x03,
        Gain = 0x04,
        PowerLineFrequency = 0x05,
        Hue = 0x06,
        Saturation = 0x07,
        Sharpness = 0x08,
        Gamma = 0x09,
        WhiteBalanceTemperature = 0x0a,
        WhiteBalanceTemperatureAuto = 0x0b,
        WhiteBalanceComponent = 0x0c,
        WhiteBalanceComponentAuto = 0x0d,
        DigitalMultiplier = 0x0e,
        DigitalMultiplierLimit = 0x0f,
        HueAuto = 0x10,
        AnalogVideoStandard = 0x11,
        AnalogLockStatus = 0x12,
        ContrastAuto = 0x13,
    }
}

byte_enum! {
    /// Selector unit control selector (A.9.3)
    pub enum SuSelector {
        InputSelect = 0x01,
    }
}
