//! Ccs811 device definitions
//!
//! Copyright 2019 Ryan Kurte


/// Ccs811 default I2C address (ADDR pin low)
pub const DEFAULT_ADDRESS: u8 = 0x5A;

/// Ccs811 alternate I2C address (ADDR pin high)
pub const ALTERNATE_ADDRESS: u8 = 0x5B;

/// Value of the HW_ID register for every CCS811
pub const HARDWARE_ID: u8 = 0x81;

/// Sequence written to SW_RESET to reset the device
pub const RESET_SEQUENCE: [u8; 4] = [0x11, 0xE5, 0x72, 0x8A];

/// Sequence written to APP_ERASE to erase the application firmware
pub const APP_ERASE_SEQUENCE: [u8; 4] = [0xE7, 0xA7, 0xE6, 0x09];

/// Number of HW_ID read retries after a failed first attempt
pub const COMMS_CHECK_RETRIES: u8 = 10;

/// Delay before each HW_ID read retry
pub const COMMS_CHECK_DELAY_MS: u8 = 10;

/// Largest register payload (a single APP_DATA block)
pub const MAX_PAYLOAD: usize = 9;

/// Ccs811 register (mailbox) addresses
/// Multi-byte registers are big endian on the wire unless noted
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Register {
    /// Status flags, 1 byte, R
    Status = 0x00,

    /// Measurement mode and interrupt configuration, 1 byte, R/W
    MeasMode = 0x01,

    /// Algorithm results, up to 8 bytes, R
    /// eCO2 (2), eTVOC (2), STATUS (1), ERROR_ID (1), RAW_DATA (2)
    AlgResultData = 0x02,

    /// Raw ADC and sense current, 2 bytes, R
    RawData = 0x03,

    /// Humidity and temperature compensation, 4 bytes, W
    EnvData = 0x05,

    /// eCO2 interrupt zone thresholds, 4 bytes, W
    Thresholds = 0x10,

    /// Algorithm baseline, 2 bytes opaque, R/W
    Baseline = 0x11,

    /// Hardware ID, 1 byte, R (always 0x81)
    HwId = 0x20,

    /// Hardware version, 1 byte, R
    HwVersion = 0x21,

    /// Bootloader firmware version, 2 bytes, R
    FwBootVersion = 0x23,

    /// Application firmware version, 2 bytes, R
    FwAppVersion = 0x24,

    /// Error source flags, 1 byte, R
    ErrorId = 0xE0,

    /// Application erase, 4 byte sequence, W (boot mode)
    AppErase = 0xF1,

    /// Application firmware block, 9 bytes, W (boot mode)
    AppData = 0xF2,

    /// Application verify, no data, W (boot mode)
    AppVerify = 0xF3,

    /// Application start, no data, W (boot mode)
    AppStart = 0xF4,

    /// Software reset, 4 byte sequence, W
    SwReset = 0xFF,
}

