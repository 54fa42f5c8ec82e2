mod device;

pub use device::Device;

use crate::endian::Endianness;
use crate::error::{check, Error, ErrorKind};
use crate::wire::Wire;
use crate::word::{NotEmpty, Word};

/// Register access over a [`Wire`] channel.
///
/// Every call is one complete exchange: the register selector byte is sent
/// first, followed by (or answered with) the value bytes. Multi-byte values
/// are reversed on the bus whenever the device byte order differs from
/// [`Endianness::NATIVE`]. Array elements always travel in ascending order.
pub struct RegisterBus<W> {
    wire: W,
}

impl<W> RegisterBus<W> {
    pub fn new(wire: W) -> Self {
        Self { wire }
    }

    /// Give back the underlying channel.
    pub fn release(self) -> W {
        self.wire
    }
}

impl<W> RegisterBus<W>
where
    W: Wire,
{
    /// Bind a device address and byte order.
    pub fn device(&mut self, address: u8, endianness: Endianness) -> Device<'_, W> {
        Device::new(self, address, endianness)
    }

    /// Write `value` to `register` of the device at `address`.
    pub fn write<T: Word>(
        &mut self,
        register: u8,
        value: T,
        address: u8,
        endianness: Endianness,
    ) -> Result<(), Error> {
        self.write_elements(register, &[value], address, endianness)
    }

    /// Write consecutive values starting at `register`.
    pub fn write_array<T: Word, const N: usize>(
        &mut self,
        register: u8,
        values: &[T; N],
        address: u8,
        endianness: Endianness,
    ) -> Result<(), Error> {
        #[allow(clippy::let_unit_value)]
        let () = NotEmpty::<N>::ASSERT;
        self.write_elements(register, values, address, endianness)
    }

    /// Read `register` of the device at `address` into `value`. On error
    /// `value` is left untouched.
    pub fn read<T: Word>(
        &mut self,
        register: u8,
        value: &mut T,
        address: u8,
        endianness: Endianness,
    ) -> Result<(), Error> {
        self.read_elements(register, core::slice::from_mut(value), address, endianness)
    }

    /// Read `register` of the device at `address` and return its value.
    pub fn read_value<T: Word>(
        &mut self,
        register: u8,
        address: u8,
        endianness: Endianness,
    ) -> Result<T, Error> {
        let mut value = [T::from_ne_bytes(T::Bytes::default())];
        self.read_elements(register, &mut value, address, endianness)?;
        Ok(value[0])
    }

    /// Read consecutive values starting at `register`. On error `values`
    /// are left untouched.
    pub fn read_array<T: Word, const N: usize>(
        &mut self,
        register: u8,
        values: &mut [T; N],
        address: u8,
        endianness: Endianness,
    ) -> Result<(), Error> {
        #[allow(clippy::let_unit_value)]
        let () = NotEmpty::<N>::ASSERT;
        self.read_elements(register, values, address, endianness)
    }

    fn write_elements<T: Word>(
        &mut self,
        register: u8,
        values: &[T],
        address: u8,
        endianness: Endianness,
    ) -> Result<(), Error> {
        #[allow(clippy::let_unit_value)]
        let () = T::NOT_EMPTY;
        trace!(
            "write {} x {} bytes to register {} of {}",
            values.len(),
            T::SIZE,
            register,
            address
        );

        self.wire.begin_transmission(address);
        self.wire.write(register);
        for value in values {
            let bytes = value.to_ne_bytes();
            let bytes = bytes.as_ref();
            for i in 0..bytes.len() {
                self.wire.write(bytes[endianness.index(i, bytes.len())]);
            }
        }
        check(self.wire.end_transmission()).map_err(|e| {
            warn!("write to register {} of {} failed: {:?}", register, address, e);
            e
        })
    }

    fn read_elements<T: Word>(
        &mut self,
        register: u8,
        values: &mut [T],
        address: u8,
        endianness: Endianness,
    ) -> Result<(), Error> {
        #[allow(clippy::let_unit_value)]
        let () = T::NOT_EMPTY;
        let count = T::SIZE * values.len();
        trace!("read {} bytes from register {} of {}", count, register, address);

        // Select the register.
        self.wire.begin_transmission(address);
        self.wire.write(register);
        check(self.wire.end_transmission()).map_err(|e| {
            warn!("select register {} of {} failed: {:?}", register, address, e);
            e
        })?;

        let received = self.wire.request_from(address, count);
        let available = self.wire.available();
        if available != count {
            debug!(
                "expected {} bytes from {}, {} available ({} received)",
                count,
                address,
                available,
                received
            );
            return Err(ErrorKind::Timeout.into());
        }

        for value in values.iter_mut() {
            let mut bytes = T::Bytes::default();
            let buffer = bytes.as_mut();
            let len = buffer.len();
            for i in 0..len {
                buffer[endianness.index(i, len)] = self.wire.read();
            }
            *value = T::from_ne_bytes(bytes);
        }
        Ok(())
    }
}
