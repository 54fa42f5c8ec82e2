//! Transactional two-wire byte channel.
//!
//! [`Wire`] is the contract a register transfer is driven through. The
//! status codes returned by [`Wire::end_transmission`] follow the two-wire
//! convention and are translated by [`ErrorKind::from_code`]:
//!
//! | code | meaning                     |
//! |------|-----------------------------|
//! | 0    | success                     |
//! | 1    | data too long for buffer    |
//! | 2    | NACK on transmit of address |
//! | 3    | NACK on transmit of data    |
//! | 4    | other error                 |
//! | 5    | timeout                     |
//!
//! [`ErrorKind::from_code`]: crate::ErrorKind::from_code
pub mod hal;
#[cfg(test)]
pub(crate) mod mock;

pub trait Wire {
    /// Open a transaction addressed to the device at `address`.
    fn begin_transmission(&mut self, address: u8);

    /// Append one byte to the outgoing transaction.
    fn write(&mut self, byte: u8);

    /// Close the transaction, perform the transfer and return its status
    /// code.
    fn end_transmission(&mut self) -> u8;

    /// Request `count` bytes from the device at `address`. Returns the
    /// number of bytes made available.
    fn request_from(&mut self, address: u8, count: usize) -> usize;

    /// Number of received bytes not yet consumed.
    fn available(&self) -> usize;

    /// Consume one received byte.
    fn read(&mut self) -> u8;
}

impl<T> Wire for &mut T
where
    T: Wire + ?Sized,
{
    fn begin_transmission(&mut self, address: u8) {
        T::begin_transmission(self, address)
    }

    fn write(&mut self, byte: u8) {
        T::write(self, byte)
    }

    fn end_transmission(&mut self) -> u8 {
        T::end_transmission(self)
    }

    fn request_from(&mut self, address: u8, count: usize) -> usize {
        T::request_from(self, address, count)
    }

    fn available(&self) -> usize {
        T::available(self)
    }

    fn read(&mut self) -> u8 {
        T::read(self)
    }
}
