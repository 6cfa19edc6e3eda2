//! Ccs811 air quality sensor driver
//!
//! Register level driver for the ams CCS811 eCO2 / eTVOC sensor, generic over
//! an `embedded-hal` blocking I2C implementation.
//!
//! Copyright 2019 Ryan Kurte

use core::fmt::Debug;
use core::marker::PhantomData;

extern crate embedded_hal;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

#[macro_use]
extern crate log;

pub mod base;
use base::Base;

pub mod device;
use device::*;

pub mod registers;
use registers::*;

/// Ccs811 sensor object
/// This is generic over an I2C connector and associated error type
pub struct Ccs811<Conn, Err> {
    conn: Conn,
    address: u8,
    _err: PhantomData<Err>,
}

/// Ccs811 error object
#[derive(Debug)]
pub enum Error<ConnErr> {
    /// Underlying bus error
    Conn(ConnErr),
    /// Device responded with an unexpected hardware id (or not at all)
    NoDevice,
    /// Register payload exceeds the largest register width
    Payload(usize),
}

impl <ConnErr> From<ConnErr> for Error<ConnErr> {
    fn from(conn_err: ConnErr) -> Self {
        Error::Conn(conn_err)
    }
}

impl <Conn, Err> Ccs811 <Conn, Err> where
    Conn: i2c::Read<Error=Err> + i2c::Write<Error=Err> + i2c::WriteRead<Error=Err>,
    Err: Debug,
{
    /// Create a new Ccs811 sensor instance at the provided address
    /// This does not communicate with the device, see `begin` or `comms_check`
    pub fn new(conn: Conn, address: u8) -> Self {
        Ccs811{ conn, address, _err: PhantomData }
    }

    /// Create a new Ccs811 sensor instance and check communication
    pub fn begin<D: DelayMs<u8>>(conn: Conn, address: u8, delay: &mut D) -> Result<Self, Error<Err>> {
        // Create sensor object
        let mut s = Self::new(conn, address);

        debug!("Checking CCS811 communication (address: 0x{:02x})", address);

        // Check communication
        if !s.comms_check(delay) {
            return Err(Error::NoDevice)
        }

        // Return sensor
        Ok(s)
    }

    /// Device I2C address for this session
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Check the device is present by reading the hardware id
    ///
    /// Bus failures are retried (with a short delay) up to `COMMS_CHECK_RETRIES` times,
    /// returns true only if the id matches `HARDWARE_ID`.
    pub fn comms_check<D: DelayMs<u8>>(&mut self, delay: &mut D) -> bool {
        let mut id = self.hardware_id();
        let mut retries = 0;

        while id.is_err() && retries < COMMS_CHECK_RETRIES {
            retries += 1;
            trace!("Hardware id read failed, retrying ({}/{})", retries, COMMS_CHECK_RETRIES);

            delay.delay_ms(COMMS_CHECK_DELAY_MS);
            id = self.hardware_id();
        }

        match id {
            Ok(id) if id.is_valid() => true,
            Ok(id) => {
                debug!("Unexpected hardware id: 0x{:02x}", id.bits());
                false
            },
            Err(e) => {
                debug!("Hardware id read failed: {:?}", e);
                false
            },
        }
    }

    /// Read the device status
    pub fn status(&mut self) -> Result<Status, Error<Err>> {
        let mut buff = [0u8; Status::LEN];
        self.conn.read_register(self.address, Status::REGISTER, &mut buff)?;
        Ok(Status::from_bits(buff[0]))
    }

    /// Poll the status register until a flag is set
    /// Returns false if the flag was not set within the provided number of attempts
    pub fn wait_for<D: DelayMs<u8>>(&mut self, delay: &mut D, flag: StatusFlag, attempts: u16, interval_ms: u8) -> Result<bool, Error<Err>> {
        for _i in 0..attempts {
            if self.status()?.is_set(flag) {
                return Ok(true);
            }
            delay.delay_ms(interval_ms);
        }

        debug!("Timeout waiting for status flag: {:?}", flag);

        Ok(false)
    }

    /// Read the measurement mode configuration
    pub fn measure_config(&mut self) -> Result<MeasureConfig, Error<Err>> {
        let mut buff = [0u8; MeasureConfig::LEN];
        self.conn.read_register(self.address, MeasureConfig::REGISTER, &mut buff)?;
        Ok(MeasureConfig::from_bits(buff[0]))
    }

    /// Write a new measurement mode configuration
    pub fn set_measure_config(&mut self, config: MeasureConfig) -> Result<(), Error<Err>> {
        self.conn.write_register(self.address, MeasureConfig::REGISTER, &[config.bits()])
    }

    /// Read the eCO2 interrupt thresholds
    pub fn co2_thresholds(&mut self) -> Result<Co2Thresholds, Error<Err>> {
        let mut buff = [0u8; Co2Thresholds::LEN];
        self.conn.read_register(self.address, Co2Thresholds::REGISTER, &mut buff)?;
        Ok(Co2Thresholds::from_bytes(buff))
    }

    /// Write eCO2 interrupt thresholds
    pub fn set_co2_thresholds(&mut self, thresholds: Co2Thresholds) -> Result<(), Error<Err>> {
        self.conn.write_register(self.address, Co2Thresholds::REGISTER, thresholds.as_bytes())
    }

    /// Write eCO2 interrupt zone limits in ppm
    /// The device interrupts (if enabled) when eCO2 moves between zones
    pub fn write_co2_thresholds(&mut self, low: u16, high: u16) -> Result<(), Error<Err>> {
        self.set_co2_thresholds(Co2Thresholds::new(low, high))
    }

    /// Read the latest eCO2 measurement
    pub fn eco2(&mut self) -> Result<Eco2, Error<Err>> {
        let mut buff = [0u8; Eco2::LEN];
        self.conn.read_register(self.address, Eco2::REGISTER, &mut buff)?;
        Ok(Eco2::from_bytes(buff))
    }

    /// Read the latest eTVOC measurement
    pub fn etvoc(&mut self) -> Result<Etvoc, Error<Err>> {
        Ok(self.air_quality()?.etvoc())
    }

    /// Read the latest eCO2 and eTVOC measurements
    pub fn air_quality(&mut self) -> Result<AirQuality, Error<Err>> {
        let mut buff = [0u8; AirQuality::LEN];
        self.conn.read_register(self.address, AirQuality::REGISTER, &mut buff)?;
        Ok(AirQuality::from_bytes(buff))
    }

    /// Read all algorithm results, including status, error and raw data
    pub fn algorithm_result(&mut self) -> Result<AlgorithmResult, Error<Err>> {
        let mut buff = [0u8; AlgorithmResult::LEN];
        self.conn.read_register(self.address, AlgorithmResult::REGISTER, &mut buff)?;
        Ok(AlgorithmResult::from_bytes(buff))
    }

    /// Fetch the latest equivalent CO2 concentration in ppm
    pub fn get_eco2(&mut self) -> Result<i16, Error<Err>> {
        Ok(self.eco2()?.ppm())
    }

    /// Fetch the latest equivalent TVOC concentration in ppb
    pub fn get_etvoc(&mut self) -> Result<i16, Error<Err>> {
        Ok(self.etvoc()?.ppb())
    }

    /// Read raw sensor current and ADC values
    pub fn raw_data(&mut self) -> Result<RawData, Error<Err>> {
        let mut buff = [0u8; RawData::LEN];
        self.conn.read_register(self.address, RawData::REGISTER, &mut buff)?;
        Ok(RawData::from_bytes(buff))
    }

    /// Write environmental compensation data
    pub fn set_environmental_data(&mut self, data: EnvironmentalData) -> Result<(), Error<Err>> {
        self.conn.write_register(self.address, EnvironmentalData::REGISTER, data.as_bytes())
    }

    /// Write ambient temperature (C) and relative humidity (%) for compensation
    pub fn write_environmental_data(&mut self, temperature: f32, humidity: f32) -> Result<(), Error<Err>> {
        self.set_environmental_data(EnvironmentalData::new(temperature, humidity))
    }

    /// Read the algorithm baseline
    pub fn baseline(&mut self) -> Result<Baseline, Error<Err>> {
        let mut buff = [0u8; Baseline::LEN];
        self.conn.read_register(self.address, Baseline::REGISTER, &mut buff)?;
        Ok(Baseline::from_bytes(buff))
    }

    /// Restore a previously saved algorithm baseline
    pub fn set_baseline(&mut self, baseline: Baseline) -> Result<(), Error<Err>> {
        self.conn.write_register(self.address, Baseline::REGISTER, baseline.as_bytes())
    }

    /// Read the hardware id (0x81 for a CCS811)
    pub fn hardware_id(&mut self) -> Result<HardwareId, Error<Err>> {
        let mut buff = [0u8; HardwareId::LEN];
        self.conn.read_register(self.address, HardwareId::REGISTER, &mut buff)?;
        Ok(HardwareId::from_bits(buff[0]))
    }

    /// Read the hardware version
    pub fn hardware_version(&mut self) -> Result<HardwareVersion, Error<Err>> {
        let mut buff = [0u8; HardwareVersion::LEN];
        self.conn.read_register(self.address, HardwareVersion::REGISTER, &mut buff)?;
        Ok(HardwareVersion::from_bits(buff[0]))
    }

    /// Read the bootloader firmware version
    pub fn firmware_boot_version(&mut self) -> Result<FirmwareVersion, Error<Err>> {
        let mut buff = [0u8; FirmwareVersion::LEN];
        self.conn.read_register(self.address, Register::FwBootVersion, &mut buff)?;
        Ok(FirmwareVersion::from_bytes(buff))
    }

    /// Read the application firmware version
    pub fn firmware_app_version(&mut self) -> Result<FirmwareVersion, Error<Err>> {
        let mut buff = [0u8; FirmwareVersion::LEN];
        self.conn.read_register(self.address, Register::FwAppVersion, &mut buff)?;
        Ok(FirmwareVersion::from_bytes(buff))
    }

    /// Read the error source flags
    pub fn error_flags(&mut self) -> Result<ErrorFlags, Error<Err>> {
        let mut buff = [0u8; ErrorFlags::LEN];
        self.conn.read_register(self.address, ErrorFlags::REGISTER, &mut buff)?;
        Ok(ErrorFlags::from_bits(buff[0]))
    }

    /// Soft reset the underlying device
    /// This only confirms the sequence was sent
    pub fn reset(&mut self) -> Result<(), Error<Err>> {
        debug!("Resetting device");
        self.conn.write_register(self.address, Register::SwReset, &RESET_SEQUENCE)
    }

    /// Start erasing the application firmware (boot mode only)
    /// Completion is signalled by `StatusFlag::AppErase`
    pub fn start_application_erase(&mut self) -> Result<(), Error<Err>> {
        debug!("Starting application erase");
        self.conn.write_register(self.address, Register::AppErase, &APP_ERASE_SEQUENCE)
    }

    /// Write a block of application firmware (boot mode only)
    pub fn write_application_data(&mut self, data: ApplicationData) -> Result<(), Error<Err>> {
        self.conn.write_register(self.address, ApplicationData::REGISTER, data.as_bytes())
    }

    /// Start verifying the application firmware (boot mode only)
    /// Completion is signalled by `StatusFlag::AppVerify`
    pub fn start_application_verify(&mut self) -> Result<(), Error<Err>> {
        debug!("Starting application verify");
        self.conn.write_register(self.address, Register::AppVerify, &[])
    }

    /// Switch from boot mode to the application firmware
    /// Completion is signalled by `StatusFlag::AppMode`
    pub fn start_application_mode(&mut self) -> Result<(), Error<Err>> {
        debug!("Starting application mode");
        self.conn.write_register(self.address, Register::AppStart, &[])
    }
}
