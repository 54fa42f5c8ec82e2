use super::RegisterBus;
use crate::endian::Endianness;
use crate::error::Error;
use crate::wire::Wire;
use crate::word::Word;

/// A device on the bus, addressed with a fixed bus address and byte order.
pub struct Device<'a, W> {
    bus: &'a mut RegisterBus<W>,
    address: u8,
    endianness: Endianness,
}

impl<'a, W> Device<'a, W> {
    pub(crate) fn new(bus: &'a mut RegisterBus<W>, address: u8, endianness: Endianness) -> Self {
        Self {
            bus,
            address,
            endianness,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }
}

impl<'a, W> Device<'a, W>
where
    W: Wire,
{
    pub fn write<T: Word>(&mut self, register: u8, value: T) -> Result<(), Error> {
        self.bus
            .write(register, value, self.address, self.endianness)
    }

    pub fn write_array<T: Word, const N: usize>(
        &mut self,
        register: u8,
        values: &[T; N],
    ) -> Result<(), Error> {
        self.bus
            .write_array(register, values, self.address, self.endianness)
    }

    pub fn read<T: Word>(&mut self, register: u8, value: &mut T) -> Result<(), Error> {
        self.bus
            .read(register, value, self.address, self.endianness)
    }

    pub fn read_value<T: Word>(&mut self, register: u8) -> Result<T, Error> {
        self.bus
            .read_value(register, self.address, self.endianness)
    }

    pub fn read_array<T: Word, const N: usize>(
        &mut self,
        register: u8,
        values: &mut [T; N],
    ) -> Result<(), Error> {
        self.bus
            .read_array(register, values, self.address, self.endianness)
    }
}
