//! Base communication implementation for interacting with Ccs811 device
//!
//! Copyright 2019 Ryan Kurte

use core::fmt::Debug;

use embedded_hal::blocking::i2c;

use crate::{Error};
use crate::device::*;

/// Base API for reading and writing device registers
/// This should not be required by consumers, but is exposed to support alternate use
pub trait Base<Err> {
    /// Write data to a register, an empty slice writes only the register address
    fn write_register(&mut self, address: u8, register: Register, data: &[u8]) -> Result<(), Error<Err>>;
    /// Read data from a register (or a burst starting at a register)
    fn read_register(&mut self, address: u8, register: Register, data: &mut [u8]) -> Result<(), Error<Err>>;
}

/// Reverse the order of a byte buffer in place
///
/// Converts multi-byte fields between the big endian wire format
/// and little endian host layout (and back again)
pub fn swap_endianness(buff: &mut [u8]) {
    let len = buff.len();

    for i in 0..len / 2 {
        buff.swap(i, len - 1 - i);
    }
}

/// Base implementation for I2C devices
impl <Conn, Err> Base<Err> for Conn where
    Conn: i2c::Read<Error=Err> + i2c::Write<Error=Err> + i2c::WriteRead<Error=Err>,
    Err: Debug,
{
    fn write_register(&mut self, address: u8, register: Register, data: &[u8]) -> Result<(), Error<Err>> {
        // Payloads are fixed by register, APP_DATA is the largest
        if data.len() > MAX_PAYLOAD {
            return Err(Error::Payload(data.len()));
        }

        let mut buff = [0u8; MAX_PAYLOAD + 1];
        buff[0] = register as u8;
        buff[1..data.len() + 1].copy_from_slice(data);

        trace!("Writing register: {:?} data: {:x?}", register, data);

        self.write(address, &buff[..data.len() + 1]).map_err(|e| Error::Conn(e) )
    }

    fn read_register(&mut self, address: u8, register: Register, data: &mut [u8]) -> Result<(), Error<Err>> {
        trace!("Selecting register: {:?}", register);

        // First select the register
        self.write(address, &[register as u8])
            .map_err(|e| Error::Conn(e) )?;

        // Then, read the data back
        self.read(address, data)
            .map_err(|e| Error::Conn(e) )?;

        trace!("Read data: {:x?}", data);

        Ok(())
    }
}

#[cfg(test)]
mod test {
    extern crate std;
    use std::vec;

    extern crate embedded_hal_mock;
    use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::*;

    #[test]
    fn test_swap_endianness() {
        let tests: &[(&[u8], &[u8])] = &[
            (&[], &[]),
            (&[0xAB], &[0xAB]),
            (&[0x01, 0x2C], &[0x2C, 0x01]),
            (&[0x01, 0x02, 0x03], &[0x03, 0x02, 0x01]),
            (&[0x11, 0xE5, 0x72, 0x8A], &[0x8A, 0x72, 0xE5, 0x11]),
        ];

        for t in tests {
            let mut buff = t.0.to_vec();

            swap_endianness(&mut buff);
            assert_eq!(&buff[..], t.1);

            // Swapping again restores the original
            swap_endianness(&mut buff);
            assert_eq!(&buff[..], t.0);
        }
    }

    #[test]
    fn test_swap_endianness_odd_middle() {
        let mut buff = [0x10, 0x20, 0x30, 0x40, 0x50];
        swap_endianness(&mut buff);

        assert_eq!(buff[2], 0x30);
        assert_eq!(buff, [0x50, 0x40, 0x30, 0x20, 0x10]);
    }

    #[test]
    fn test_write_register() {
        let expectations = [
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x01, 0x10]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0xF4]),
        ];
        let mut i2c = I2cMock::new(&expectations);

        i2c.write_register(DEFAULT_ADDRESS, Register::MeasMode, &[0x10]).unwrap();
        i2c.write_register(DEFAULT_ADDRESS, Register::AppStart, &[]).unwrap();

        i2c.done();
    }

    #[test]
    fn test_write_register_oversize() {
        // Nothing reaches the bus
        let mut i2c = I2cMock::new(&[]);

        match i2c.write_register(DEFAULT_ADDRESS, Register::AppData, &[0u8; MAX_PAYLOAD + 1]) {
            Err(Error::Payload(len)) => assert_eq!(len, MAX_PAYLOAD + 1),
            r => panic!("expected payload error, got {:?}", r),
        }

        i2c.done();
    }

    #[test]
    fn test_read_register() {
        let expectations = [
            I2cTransaction::write(ALTERNATE_ADDRESS, vec![0x23]),
            I2cTransaction::read(ALTERNATE_ADDRESS, vec![0x10, 0x00]),
        ];
        let mut i2c = I2cMock::new(&expectations);

        let mut buff = [0u8; 2];
        i2c.read_register(ALTERNATE_ADDRESS, Register::FwBootVersion, &mut buff).unwrap();
        assert_eq!(buff, [0x10, 0x00]);

        i2c.done();
    }
}
