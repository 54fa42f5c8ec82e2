use super::Wire;
use crate::error::ErrorKind;
use embedded_hal::i2c::{Error as _, ErrorKind as HalErrorKind, I2c, NoAcknowledgeSource};
use heapless::Vec;

/// Size of the transmit and receive buffers of the two-wire library.
pub const BUFFER_LENGTH: usize = 32;

/// Value returned when reading past the received bytes; the idle bus level.
const IDLE: u8 = 0xff;

/// [`Wire`] over an `embedded_hal` I2C bus.
///
/// Outgoing bytes are queued until [`Wire::end_transmission`] sends them in a
/// single write. Incoming bytes are fetched by [`Wire::request_from`] in a
/// single read. Both buffers hold at most `N` bytes.
pub struct HalWire<PHY, const N: usize = BUFFER_LENGTH> {
    phy: PHY,
    address: u8,
    tx: Vec<u8, N>,
    overflow: bool,
    rx: Vec<u8, N>,
    cursor: usize,
}

impl<PHY, const N: usize> HalWire<PHY, N> {
    pub fn new(phy: PHY) -> Self {
        Self {
            phy,
            address: 0,
            tx: Vec::new(),
            overflow: false,
            rx: Vec::new(),
            cursor: 0,
        }
    }

    /// Give back the underlying bus.
    pub fn release(self) -> PHY {
        self.phy
    }
}

impl<PHY, const N: usize> Wire for HalWire<PHY, N>
where
    PHY: I2c,
{
    fn begin_transmission(&mut self, address: u8) {
        self.address = address;
        self.tx.clear();
        self.overflow = false;
    }

    fn write(&mut self, byte: u8) {
        if self.tx.push(byte).is_err() {
            self.overflow = true;
        }
    }

    fn end_transmission(&mut self) -> u8 {
        let code = if self.overflow {
            ErrorKind::BufferOverflow as u8
        } else {
            match self.phy.write(self.address, &self.tx) {
                Ok(()) => 0,
                Err(e) => status_code(e.kind()),
            }
        };
        self.tx.clear();
        self.overflow = false;
        code
    }

    fn request_from(&mut self, address: u8, count: usize) -> usize {
        self.rx.clear();
        self.cursor = 0;
        let count = count.min(N);
        // Cannot fail, `count` is within capacity.
        if self.rx.resize(count, 0x00).is_err() {
            return 0;
        }
        if let Err(e) = self.phy.read(address, &mut self.rx) {
            warn!("read from {} failed: {:?}", address, status_code(e.kind()));
            self.rx.clear();
        }
        self.rx.len()
    }

    fn available(&self) -> usize {
        self.rx.len() - self.cursor
    }

    fn read(&mut self) -> u8 {
        match self.rx.get(self.cursor) {
            Some(byte) => {
                self.cursor += 1;
                *byte
            }
            None => IDLE,
        }
    }
}

/// Map a bus error onto the two-wire status codes.
fn status_code(kind: HalErrorKind) -> u8 {
    let kind = match kind {
        HalErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => ErrorKind::AddressNack,
        HalErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => ErrorKind::DataNack,
        _ => ErrorKind::Other,
    };
    kind as u8
}
