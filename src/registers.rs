//! Ccs811 register representations
//!
//! Each register type wraps the bytes in wire order, fields are decoded on access
//! so the raw and typed forms cannot disagree.
//!
//! Copyright 2019 Ryan Kurte

use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use crate::base::swap_endianness;
use crate::device::{Register, HARDWARE_ID};

/// Compensation values are in 1/512 units
pub const COMPENSATION_SCALE: f32 = 512.0;

/// Temperature compensation offset in degrees celsius
pub const TEMPERATURE_OFFSET: f32 = 25.0;

/// Lowest encodable temperature offset (about -28 C), stored in two's complement
pub const TEMPERATURE_RAW_MIN: i32 = -27135;

/// Highest encodable temperature offset (100 C)
pub const TEMPERATURE_RAW_MAX: i32 = 38400;

/// Decode a big endian wire field to a host value
fn decode_u16(wire: &[u8]) -> u16 {
    let mut b = [wire[0], wire[1]];
    swap_endianness(&mut b);
    u16::from_le_bytes(b)
}

/// Encode a host value to a big endian wire field
fn encode_u16(value: u16) -> [u8; 2] {
    let mut b = value.to_le_bytes();
    swap_endianness(&mut b);
    b
}

/// Encode a temperature in degrees celsius for ENV_DATA
///
/// Temperatures below the 25 C offset wrap to two's complement,
/// values outside the encodable window saturate.
pub fn encode_temperature(celsius: f32) -> u16 {
    // Float to int casts saturate (and map NaN to zero)
    let offset = ((celsius - TEMPERATURE_OFFSET) * COMPENSATION_SCALE).round() as i32;
    let offset = offset.clamp(TEMPERATURE_RAW_MIN, TEMPERATURE_RAW_MAX);

    offset as u16
}

/// Decode an ENV_DATA temperature to degrees celsius
pub fn decode_temperature(raw: u16) -> f32 {
    let offset = match raw as i32 {
        v if v > TEMPERATURE_RAW_MAX => v - 0x1_0000,
        v => v,
    };

    offset as f32 / COMPENSATION_SCALE + TEMPERATURE_OFFSET
}

/// Encode a relative humidity in percent for ENV_DATA, saturating at the field limits
pub fn encode_humidity(percent: f32) -> u16 {
    (percent * COMPENSATION_SCALE)
        .round()
        .max(0.0)
        .min(u16::MAX as f32) as u16
}

/// Decode an ENV_DATA humidity to percent
pub fn decode_humidity(raw: u16) -> f32 {
    raw as f32 / COMPENSATION_SCALE
}

/// Status register flags
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StatusFlag {
    /// An error occurred, ERROR_ID contains the source
    Error = 0x01,
    /// A new sample is ready in ALG_RESULT_DATA
    DataReady = 0x08,
    /// Valid application firmware is loaded
    AppValid = 0x10,
    /// Application verify completed successfully (boot mode)
    AppVerify = 0x20,
    /// Application erase completed (boot mode)
    AppErase = 0x40,
    /// Firmware is in application mode and ready to measure
    AppMode = 0x80,
}

/// Device firmware execution state
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum FirmwareMode {
    Boot,
    Application,
}

/// STATUS register (0x00)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Status(u8);

impl Status {
    pub const REGISTER: Register = Register::Status;
    pub const LEN: usize = 1;

    pub fn from_bits(bits: u8) -> Self {
        Status(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Check whether a status flag is set
    pub fn is_set(&self, flag: StatusFlag) -> bool {
        self.0 & flag as u8 != 0
    }

    pub fn error(&self) -> bool {
        self.is_set(StatusFlag::Error)
    }

    pub fn data_ready(&self) -> bool {
        self.is_set(StatusFlag::DataReady)
    }

    pub fn app_valid(&self) -> bool {
        self.is_set(StatusFlag::AppValid)
    }

    pub fn app_verified(&self) -> bool {
        self.is_set(StatusFlag::AppVerify)
    }

    pub fn app_erased(&self) -> bool {
        self.is_set(StatusFlag::AppErase)
    }

    pub fn firmware_mode(&self) -> FirmwareMode {
        match self.is_set(StatusFlag::AppMode) {
            true => FirmwareMode::Application,
            false => FirmwareMode::Boot,
        }
    }
}

/// Measurement drive mode
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum DriveMode {
    /// Measurements disabled
    Idle = 0,
    /// Constant power, a measurement every second
    ConstantPower1s = 1,
    /// Pulsed heating, a measurement every 10 seconds
    Pulsed10s = 2,
    /// Low power pulsed heating, a measurement every 60 seconds
    Pulsed60s = 3,
    /// Constant power, raw data only every 250 ms
    /// ALG_RESULT_DATA is not updated in this mode
    ConstantPower250ms = 4,
}

impl TryFrom<u8> for DriveMode {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(DriveMode::Idle),
            1 => Ok(DriveMode::ConstantPower1s),
            2 => Ok(DriveMode::Pulsed10s),
            3 => Ok(DriveMode::Pulsed60s),
            4 => Ok(DriveMode::ConstantPower250ms),
            _ => Err(v),
        }
    }
}

impl FromStr for DriveMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(DriveMode::Idle),
            "1s" => Ok(DriveMode::ConstantPower1s),
            "10s" => Ok(DriveMode::Pulsed10s),
            "60s" => Ok(DriveMode::Pulsed60s),
            "250ms" => Ok(DriveMode::ConstantPower250ms),
            _ => Err("expected one of idle, 1s, 10s, 60s, 250ms"),
        }
    }
}

/// MEAS_MODE register (0x01)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct MeasureConfig(u8);

impl MeasureConfig {
    pub const REGISTER: Register = Register::MeasMode;
    pub const LEN: usize = 1;

    const THRESHOLD_INTERRUPT: u8 = 1 << 2;
    const DATA_READY_INTERRUPT: u8 = 1 << 3;
    const DRIVE_MODE_SHIFT: u8 = 4;
    const DRIVE_MODE_MASK: u8 = 0b111;

    /// Build a measurement configuration
    pub fn new(drive_mode: DriveMode, interrupt_on_data_ready: bool, interrupt_on_threshold: bool) -> Self {
        let mut bits = (drive_mode as u8) << Self::DRIVE_MODE_SHIFT;
        if interrupt_on_data_ready {
            bits |= Self::DATA_READY_INTERRUPT;
        }
        if interrupt_on_threshold {
            bits |= Self::THRESHOLD_INTERRUPT;
        }
        MeasureConfig(bits)
    }

    pub fn from_bits(bits: u8) -> Self {
        MeasureConfig(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Drive mode, `None` if the device reports an undefined mode
    pub fn drive_mode(&self) -> Option<DriveMode> {
        DriveMode::try_from((self.0 >> Self::DRIVE_MODE_SHIFT) & Self::DRIVE_MODE_MASK).ok()
    }

    /// Data ready interrupt enabled (nINT is active low)
    pub fn interrupt_on_data_ready(&self) -> bool {
        self.0 & Self::DATA_READY_INTERRUPT != 0
    }

    /// Interrupt only when eCO2 crosses a threshold zone
    pub fn interrupt_on_threshold(&self) -> bool {
        self.0 & Self::THRESHOLD_INTERRUPT != 0
    }
}

/// Equivalent CO2 reading
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Eco2([u8; 2]);

impl Eco2 {
    pub const REGISTER: Register = Register::AlgResultData;
    pub const LEN: usize = 2;

    pub fn from_bytes(raw: [u8; 2]) -> Self {
        Eco2(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Equivalent CO2 in parts per million
    pub fn ppm(&self) -> i16 {
        decode_u16(&self.0) as i16
    }
}

/// Equivalent total volatile organic compounds reading
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Etvoc([u8; 2]);

impl Etvoc {
    pub const LEN: usize = 2;

    pub fn from_bytes(raw: [u8; 2]) -> Self {
        Etvoc(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Equivalent TVOC in parts per billion
    pub fn ppb(&self) -> i16 {
        decode_u16(&self.0) as i16
    }
}

/// eCO2 and eTVOC, read in a single burst from ALG_RESULT_DATA
/// Bytes 0-1 are eCO2 and bytes 2-3 are eTVOC, each big endian
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct AirQuality([u8; 4]);

impl AirQuality {
    pub const REGISTER: Register = Register::AlgResultData;
    pub const LEN: usize = 4;

    pub fn from_bytes(raw: [u8; 4]) -> Self {
        AirQuality(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn eco2(&self) -> Eco2 {
        Eco2([self.0[0], self.0[1]])
    }

    pub fn etvoc(&self) -> Etvoc {
        Etvoc([self.0[2], self.0[3]])
    }
}

/// RAW_DATA register (0x03)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct RawData([u8; 2]);

impl RawData {
    pub const REGISTER: Register = Register::RawData;
    pub const LEN: usize = 2;

    pub fn from_bytes(raw: [u8; 2]) -> Self {
        RawData(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Current through the sensor in uA (6 bits)
    pub fn current_ua(&self) -> u8 {
        (decode_u16(&self.0) >> 10) as u8
    }

    /// Raw ADC reading across the sensor (10 bits, 1023 = 1.65 V)
    pub fn adc(&self) -> u16 {
        decode_u16(&self.0) & 0x03FF
    }
}

/// Complete ALG_RESULT_DATA burst
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct AlgorithmResult([u8; 8]);

impl AlgorithmResult {
    pub const REGISTER: Register = Register::AlgResultData;
    pub const LEN: usize = 8;

    pub fn from_bytes(raw: [u8; 8]) -> Self {
        AlgorithmResult(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn air_quality(&self) -> AirQuality {
        AirQuality([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn status(&self) -> Status {
        Status(self.0[4])
    }

    pub fn error_flags(&self) -> ErrorFlags {
        ErrorFlags(self.0[5])
    }

    pub fn raw_data(&self) -> RawData {
        RawData([self.0[6], self.0[7]])
    }
}

/// ENV_DATA register (0x05), humidity then temperature
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct EnvironmentalData([u8; 4]);

impl EnvironmentalData {
    pub const REGISTER: Register = Register::EnvData;
    pub const LEN: usize = 4;

    /// Build compensation data from a temperature (C) and relative humidity (%)
    pub fn new(celsius: f32, humidity: f32) -> Self {
        Self::from_raw(encode_humidity(humidity), encode_temperature(celsius))
    }

    /// Build compensation data from encoded 1/512 unit values
    pub fn from_raw(humidity: u16, temperature: u16) -> Self {
        let h = encode_u16(humidity);
        let t = encode_u16(temperature);
        EnvironmentalData([h[0], h[1], t[0], t[1]])
    }

    pub fn from_bytes(raw: [u8; 4]) -> Self {
        EnvironmentalData(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn humidity_raw(&self) -> u16 {
        decode_u16(&self.0[0..2])
    }

    pub fn temperature_raw(&self) -> u16 {
        decode_u16(&self.0[2..4])
    }

    pub fn humidity(&self) -> f32 {
        decode_humidity(self.humidity_raw())
    }

    pub fn temperature(&self) -> f32 {
        decode_temperature(self.temperature_raw())
    }
}

impl Default for EnvironmentalData {
    /// Device power-on compensation, 25 C and 50 %RH
    fn default() -> Self {
        Self::new(25.0, 50.0)
    }
}

/// THRESHOLDS register (0x10)
///
/// An interrupt is asserted (if enabled) when eCO2 moves between the low,
/// medium and high zones these limits define.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Co2Thresholds([u8; 4]);

impl Co2Thresholds {
    pub const REGISTER: Register = Register::Thresholds;
    pub const LEN: usize = 4;

    /// Build thresholds from low-medium and medium-high limits in ppm
    pub fn new(low: u16, high: u16) -> Self {
        let l = encode_u16(low);
        let h = encode_u16(high);
        Co2Thresholds([l[0], l[1], h[0], h[1]])
    }

    pub fn from_bytes(raw: [u8; 4]) -> Self {
        Co2Thresholds(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn low(&self) -> u16 {
        decode_u16(&self.0[0..2])
    }

    pub fn high(&self) -> u16 {
        decode_u16(&self.0[2..4])
    }
}

/// BASELINE register (0x11)
/// Opaque to the host, saved and restored verbatim (see AN000370)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Baseline([u8; 2]);

impl Baseline {
    pub const REGISTER: Register = Register::Baseline;
    pub const LEN: usize = 2;

    pub fn from_bytes(raw: [u8; 2]) -> Self {
        Baseline(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Baseline as a host integer, for storage
    pub fn value(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }

    pub fn from_value(value: u16) -> Self {
        Baseline(value.to_le_bytes())
    }
}

/// HW_ID register (0x20)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HardwareId(u8);

impl HardwareId {
    pub const REGISTER: Register = Register::HwId;
    pub const LEN: usize = 1;

    pub fn from_bits(bits: u8) -> Self {
        HardwareId(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Check the id matches a CCS811
    pub fn is_valid(&self) -> bool {
        self.0 == HARDWARE_ID
    }
}

/// HW_VERSION register (0x21)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HardwareVersion(u8);

impl HardwareVersion {
    pub const REGISTER: Register = Register::HwVersion;
    pub const LEN: usize = 1;

    pub fn from_bits(bits: u8) -> Self {
        HardwareVersion(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Major hardware version, 1 for the CCS811
    pub fn major(&self) -> u8 {
        self.0 >> 4
    }

    pub fn build_variant(&self) -> u8 {
        self.0 & 0x0F
    }
}

/// FW_BOOT_VERSION (0x23) and FW_APP_VERSION (0x24) registers
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct FirmwareVersion([u8; 2]);

impl FirmwareVersion {
    pub const LEN: usize = 2;

    pub fn from_bytes(raw: [u8; 2]) -> Self {
        FirmwareVersion(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn major(&self) -> u8 {
        self.0[0] >> 4
    }

    pub fn minor(&self) -> u8 {
        self.0[0] & 0x0F
    }

    pub fn trivial(&self) -> u8 {
        self.0[1]
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.trivial())
    }
}

/// ERROR_ID register (0xE0)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ErrorFlags(u8);

impl ErrorFlags {
    pub const REGISTER: Register = Register::ErrorId;
    pub const LEN: usize = 1;

    pub fn from_bits(bits: u8) -> Self {
        ErrorFlags(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Check whether any error source is flagged
    pub fn any(&self) -> bool {
        self.0 & 0x3F != 0
    }

    /// Write to an invalid register address
    pub fn write_register_invalid(&self) -> bool {
        self.0 & (1 << 0) != 0
    }

    /// Read from an invalid register address
    pub fn read_register_invalid(&self) -> bool {
        self.0 & (1 << 1) != 0
    }

    /// Unsupported MEAS_MODE requested
    pub fn measurement_mode_invalid(&self) -> bool {
        self.0 & (1 << 2) != 0
    }

    /// Sensor resistance measurement out of range
    pub fn max_resistance(&self) -> bool {
        self.0 & (1 << 3) != 0
    }

    /// Heater current out of range
    pub fn heater_fault(&self) -> bool {
        self.0 & (1 << 4) != 0
    }

    /// Heater voltage not applied correctly
    pub fn heater_supply(&self) -> bool {
        self.0 & (1 << 5) != 0
    }
}

/// APP_DATA register (0xF2), one block of application firmware
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ApplicationData([u8; 9]);

impl ApplicationData {
    pub const REGISTER: Register = Register::AppData;
    pub const LEN: usize = 9;

    pub fn from_bytes(raw: [u8; 9]) -> Self {
        ApplicationData(raw)
    }

    pub fn as_bytes(&self) -> &[u8; 9] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    extern crate assert_approx_eq;
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_temperature_conversion() {
        // Fixed vectors (offset from 25 C in 1/512 C)
        let tests = &[
            (25.0, 0x0000),
            (26.0, 0x0200),
            (50.0, 0x3200),
            (100.0, 0x9600),
            (24.0, 0xFE00),
            (0.0, 0xCE00),
            (-25.0, 0x9C00),
        ];

        for t in tests {
            assert_eq!(encode_temperature(t.0), t.1, "encode {}", t.0);
            assert_approx_eq!(decode_temperature(t.1), t.0, 1e-3);
        }
    }

    #[test]
    fn test_temperature_round_trip() {
        for i in 0..=500 {
            let celsius = -25.0 + i as f32 * 0.25 + 0.0013;
            if celsius > 100.0 {
                break;
            }

            let decoded = decode_temperature(encode_temperature(celsius));
            assert_approx_eq!(decoded, celsius, 1.0 / COMPENSATION_SCALE);
        }
    }

    #[test]
    fn test_temperature_saturation() {
        assert_eq!(encode_temperature(150.0), TEMPERATURE_RAW_MAX as u16);
        assert_eq!(encode_temperature(-60.0), TEMPERATURE_RAW_MIN as u16);
        assert_eq!(encode_temperature(f32::NAN), 0);

        assert_approx_eq!(decode_temperature(encode_temperature(-60.0)), -27.998, 1e-3);
    }

    #[test]
    fn test_humidity_round_trip() {
        assert_eq!(encode_humidity(50.0), 0x6400);
        assert_eq!(encode_humidity(0.0), 0x0000);

        for i in 0..=400 {
            let percent = i as f32 * 0.25;

            let decoded = decode_humidity(encode_humidity(percent));
            assert_approx_eq!(decoded, percent, 1.0 / COMPENSATION_SCALE);
        }
    }

    #[test]
    fn test_humidity_saturation() {
        assert_eq!(encode_humidity(-5.0), 0);
        assert_eq!(encode_humidity(200.0), u16::MAX);
    }

    #[test]
    fn test_environmental_data() {
        // 48.5 %RH, 23.5 C
        let d = EnvironmentalData::new(23.5, 48.5);
        assert_eq!(d.as_bytes(), &[0x61, 0x00, 0xFD, 0x00]);

        assert_approx_eq!(d.humidity(), 48.5, 1e-3);
        assert_approx_eq!(d.temperature(), 23.5, 1e-3);

        let d = EnvironmentalData::default();
        assert_eq!(d.as_bytes(), &[0x64, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_status() {
        let s = Status::from_bits(0x98);

        assert!(s.data_ready());
        assert!(s.app_valid());
        assert!(!s.error());
        assert!(!s.app_verified());
        assert!(!s.app_erased());
        assert_eq!(s.firmware_mode(), FirmwareMode::Application);

        let s = Status::from_bits(0x71);
        assert!(s.error());
        assert!(s.app_erased());
        assert!(s.app_verified());
        assert_eq!(s.firmware_mode(), FirmwareMode::Boot);
    }

    #[test]
    fn test_measure_config() {
        let c = MeasureConfig::new(DriveMode::ConstantPower1s, true, false);
        assert_eq!(c.bits(), 0x18);

        let c = MeasureConfig::new(DriveMode::ConstantPower250ms, false, true);
        assert_eq!(c.bits(), 0x44);

        let c = MeasureConfig::from_bits(0x2C);
        assert_eq!(c.drive_mode(), Some(DriveMode::Pulsed10s));
        assert!(c.interrupt_on_data_ready());
        assert!(c.interrupt_on_threshold());

        // Modes 5..7 are undefined
        assert_eq!(MeasureConfig::from_bits(0x70).drive_mode(), None);
    }

    #[test]
    fn test_drive_mode_parse() {
        assert_eq!("idle".parse::<DriveMode>(), Ok(DriveMode::Idle));
        assert_eq!("60s".parse::<DriveMode>(), Ok(DriveMode::Pulsed60s));
        assert_eq!("250ms".parse::<DriveMode>(), Ok(DriveMode::ConstantPower250ms));
        assert!("5s".parse::<DriveMode>().is_err());
    }

    #[test]
    fn test_air_quality() {
        let a = AirQuality::from_bytes([0x01, 0x90, 0x00, 0x2A]);
        assert_eq!(a.eco2().ppm(), 400);
        assert_eq!(a.etvoc().ppb(), 42);
    }

    #[test]
    fn test_raw_data() {
        // 12 uA, ADC 0x1A3
        let r = RawData::from_bytes([0x31, 0xA3]);
        assert_eq!(r.current_ua(), 12);
        assert_eq!(r.adc(), 0x1A3);
    }

    #[test]
    fn test_algorithm_result() {
        let r = AlgorithmResult::from_bytes([0x02, 0x58, 0x00, 0x64, 0x98, 0x00, 0x31, 0xA3]);

        assert_eq!(r.air_quality().eco2().ppm(), 600);
        assert_eq!(r.air_quality().etvoc().ppb(), 100);
        assert!(r.status().data_ready());
        assert!(!r.error_flags().any());
        assert_eq!(r.raw_data().adc(), 0x1A3);
    }

    #[test]
    fn test_thresholds() {
        let t = Co2Thresholds::new(1500, 2500);
        assert_eq!(t.as_bytes(), &[0x05, 0xDC, 0x09, 0xC4]);
        assert_eq!(t.low(), 1500);
        assert_eq!(t.high(), 2500);
    }

    #[test]
    fn test_thresholds_round_trip() {
        let tests = &[
            (0x0000, 0x0001),
            (0x00FF, 0xFF00),
            (0x0100, 0x01FF),
            (400, 1500),
            (1500, 2500),
            (2000, 8192),
            (0xFFFE, 0xFFFF),
        ];

        for t in tests {
            let th = Co2Thresholds::new(t.0, t.1);
            assert_eq!((th.low(), th.high()), *t);

            // Decoding the wire bytes yields the same limits
            let th = Co2Thresholds::from_bytes(*th.as_bytes());
            assert_eq!((th.low(), th.high()), *t);
        }

        assert_eq!(Co2Thresholds::new(0x00FF, 0xFF00).as_bytes(), &[0x00, 0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_baseline() {
        let b = Baseline::from_bytes([0x84, 0xA3]);
        assert_eq!(Baseline::from_value(b.value()), b);
    }

    #[test]
    fn test_versions() {
        let h = HardwareVersion::from_bits(0x12);
        assert_eq!(h.major(), 1);
        assert_eq!(h.build_variant(), 2);

        let f = FirmwareVersion::from_bytes([0x20, 0x07]);
        assert_eq!(f.major(), 2);
        assert_eq!(f.minor(), 0);
        assert_eq!(f.trivial(), 7);
        assert_eq!(format!("{}", f), "2.0.7");

        assert!(HardwareId::from_bits(0x81).is_valid());
        assert!(!HardwareId::from_bits(0xFF).is_valid());
    }

    #[test]
    fn test_error_flags() {
        let e = ErrorFlags::from_bits(0x11);
        assert!(e.any());
        assert!(e.write_register_invalid());
        assert!(e.heater_fault());
        assert!(!e.read_register_invalid());
        assert!(!e.measurement_mode_invalid());
        assert!(!e.max_resistance());
        assert!(!e.heater_supply());

        assert!(!ErrorFlags::from_bits(0xC0).any());
    }
}
