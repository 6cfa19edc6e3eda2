//! Ccs811 command-line utility
//!
//! Copyright 2019 Ryan Kurte

use std::fmt::Debug;
use std::time::Duration;

extern crate embedded_hal;
use embedded_hal::blocking::i2c;

extern crate linux_embedded_hal;
use linux_embedded_hal::{Delay, I2cdev};

extern crate structopt;
use structopt::StructOpt;

extern crate humantime;
use humantime::{Duration as HumanDuration};

#[macro_use] extern crate log;
extern crate simplelog;
use simplelog::{TermLogger, LevelFilter};

extern crate sensor_ccs811;
use sensor_ccs811::{Ccs811, Error};
use sensor_ccs811::registers::{Baseline, DriveMode, FirmwareVersion, HardwareVersion, MeasureConfig, Status, StatusFlag};

#[derive(StructOpt)]
#[structopt(name = "ccs811-util")]
/// A Command Line Interface (CLI) for interacting with a local Ccs811 air quality sensor over I2C
pub struct Options {

    /// Specify the i2c interface to use to connect to the ccs811 device
    #[structopt(short="d", long = "i2c", default_value = "/dev/i2c-1", env = "CCS811_I2C")]
    i2c: String,

    /// Specify the (hex) I2C address of the ccs811 device
    #[structopt(short="a", long = "address", default_value = "5a", env = "CCS811_ADDRESS", parse(try_from_str = "parse_hex_u8"))]
    address: u8,

    /// Enable verbose logging
    #[structopt(long = "log-level", default_value = "info")]
    level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
pub enum Command {
    #[structopt(name = "info")]
    /// Print hardware and firmware information
    Info,

    #[structopt(name = "start")]
    /// Switch the device from boot to application mode
    Start {
        /// Number of status polls before giving up
        #[structopt(long = "attempts", default_value="100")]
        attempts: u16,
    },

    #[structopt(name = "measure")]
    /// Configure measurement and log readings
    Measure {
        /// Drive mode (idle, 1s, 10s, 60s, 250ms)
        #[structopt(short = "m", long = "drive-mode", default_value="1s")]
        drive_mode: DriveMode,

        /// Ambient temperature in degrees C for compensation
        #[structopt(long = "temperature")]
        temperature: Option<f32>,

        /// Ambient relative humidity in % for compensation
        #[structopt(long = "humidity")]
        humidity: Option<f32>,

        /// Specify period for reading measurements
        #[structopt(short = "p", long = "sample-period", default_value="1s")]
        period: HumanDuration,

        /// Delay between sensor poll operations
        #[structopt(long = "poll-delay", default_value="100ms")]
        poll_delay: HumanDuration,

        /// Number of allowed I2C errors (per measurement attempt) prior to exiting
        #[structopt(long = "allowed-errors", default_value="3")]
        allowed_errors: usize,
    },

    #[structopt(name = "baseline")]
    /// Print the algorithm baseline, or restore a saved (hex) value
    Baseline {
        #[structopt(long = "restore", parse(try_from_str = "parse_hex_u16"))]
        restore: Option<u16>,
    },

    #[structopt(name = "reset")]
    /// Soft reset the device
    Reset,
}

fn parse_hex_u8(s: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(s.trim_start_matches("0x"), 16)
}

fn parse_hex_u16(s: &str) -> Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16)
}

fn main() {
    // Load options
    let opts = Options::from_args();

    // Setup logging
    if let Err(e) = TermLogger::init(opts.level, simplelog::Config::default()) {
        eprintln!("Error initialising logger: {:?}", e);
    }

    debug!("Connecting to I2C device");
    let i2c = match I2cdev::new(&opts.i2c) {
        Ok(v) => v,
        Err(e) => {
            error!("Error opening I2C device '{}': {:?}", &opts.i2c, e);
            std::process::exit(-1);
        }
    };

    let mut delay = Delay;

    debug!("Connecting to CCS811");
    let mut sensor = match Ccs811::begin(i2c, opts.address, &mut delay) {
        Ok(v) => v,
        Err(e) => {
            error!("Error connecting to CCS811: {:?}", e);
            std::process::exit(-2);
        }
    };

    match opts.command {
        Command::Info => {
            let info = device_info(&mut sensor);

            match info {
                Ok((hw, boot, app, status)) => {
                    info!("Hardware version: {}.{}", hw.major(), hw.build_variant());
                    info!("Boot firmware: {}, application firmware: {}", boot, app);
                    info!("Mode: {:?}, application valid: {}", status.firmware_mode(), status.app_valid());
                },
                Err(e) => {
                    error!("Error reading device information: {:?}", e);
                    std::process::exit(-3);
                }
            }
        },
        Command::Start{ attempts } => {
            match sensor.status() {
                Ok(s) if !s.app_valid() => {
                    error!("No valid application firmware loaded");
                    std::process::exit(-3);
                },
                Ok(_) => (),
                Err(e) => {
                    error!("Error reading status: {:?}", e);
                    std::process::exit(-3);
                }
            }

            if let Err(e) = sensor.start_application_mode() {
                error!("Error starting application mode: {:?}", e);
                std::process::exit(-3);
            }

            match sensor.wait_for(&mut delay, StatusFlag::AppMode, attempts, 10) {
                Ok(true) => info!("Application mode started"),
                Ok(false) => {
                    error!("Timeout waiting for application mode");
                    std::process::exit(-4);
                },
                Err(e) => {
                    error!("Error polling status: {:?}", e);
                    std::process::exit(-4);
                }
            }
        },
        Command::Measure{ drive_mode, temperature, humidity, period, poll_delay, allowed_errors } => {
            debug!("Setting drive mode: {:?}", drive_mode);
            if let Err(e) = sensor.set_measure_config(MeasureConfig::new(drive_mode, false, false)) {
                error!("Error setting measurement mode: {:?}", e);
                std::process::exit(-3);
            }

            if temperature.is_some() || humidity.is_some() {
                let t = temperature.unwrap_or(25.0);
                let h = humidity.unwrap_or(50.0);

                debug!("Writing compensation data: {:.1} C, {:.1} %", t, h);
                if let Err(e) = sensor.write_environmental_data(t, h) {
                    error!("Error writing compensation data: {:?}", e);
                    std::process::exit(-3);
                }
            }

            measure(&mut sensor, *period, *poll_delay, allowed_errors);
        },
        Command::Baseline{ restore } => {
            let res = match restore {
                Some(v) => sensor.set_baseline(Baseline::from_value(v)).map(|_| info!("Restored baseline: {:04x}", v)),
                None => sensor.baseline().map(|b| info!("Baseline: {:04x}", b.value())),
            };

            if let Err(e) = res {
                error!("Error accessing baseline: {:?}", e);
                std::process::exit(-3);
            }
        },
        Command::Reset => {
            if let Err(e) = sensor.reset() {
                error!("Error resetting device: {:?}", e);
                std::process::exit(-3);
            }
            info!("Reset sequence sent");
        },
    }
}

/// Read hardware version, firmware versions and status
fn device_info<Conn, Err>(sensor: &mut Ccs811<Conn, Err>) -> Result<(HardwareVersion, FirmwareVersion, FirmwareVersion, Status), Error<Err>> where
    Conn: i2c::Read<Error=Err> + i2c::Write<Error=Err> + i2c::WriteRead<Error=Err>,
    Err: Debug,
{
    let hw = sensor.hardware_version()?;
    let boot = sensor.firmware_boot_version()?;
    let app = sensor.firmware_app_version()?;
    let status = sensor.status()?;

    Ok((hw, boot, app, status))
}

/// Poll for and log measurements until an error limit is exceeded
fn measure<Conn, Err>(sensor: &mut Ccs811<Conn, Err>, period: Duration, poll_delay: Duration, allowed_errors: usize) where
    Conn: i2c::Read<Error=Err> + i2c::Write<Error=Err> + i2c::WriteRead<Error=Err>,
    Err: Debug,
{
    loop {
        debug!("Starting sensor read cycle");

        let mut ready = false;
        let mut errors = 0;

        // Poll for sensor ready
        for _i in 0..100 {
            match sensor.status() {
                Ok(s) if s.data_ready() => {
                    ready = true;
                    break;
                },
                Ok(s) if s.error() => {
                    warn!("Sensor error flags: {:?}", sensor.error_flags());
                    errors += 1;
                },
                Ok(_) => {
                    std::thread::sleep(poll_delay);
                },
                Err(e) => {
                    warn!("Error polling for sensor ready: {:?}", e);
                    errors += 1;
                }
            };

            if errors > allowed_errors {
                error!("Exceeded maximum allowed I2C errors");
                std::process::exit(-5);
            }
        }

        debug!("Sensor data ready state: {:?}", ready);

        if !ready {
            warn!("Sensor data ready timed-out");
            std::thread::sleep(period);
            continue;
        }

        match sensor.algorithm_result() {
            Ok(r) => {
                let aq = r.air_quality();
                info!("eCO2: {} ppm, eTVOC: {} ppb", aq.eco2().ppm(), aq.etvoc().ppb());
                trace!("Raw current: {} uA, ADC: {}", r.raw_data().current_ua(), r.raw_data().adc());
            },
            Err(e) => {
                warn!("Error reading sensor data: {:?}", e);
            },
        }

        // Wait for enough time for another sensor reading
        std::thread::sleep(period);
    }
}
