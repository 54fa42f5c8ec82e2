use super::Wire;
use heapless::Vec;

/// Scripted channel. Records every transaction and serves `response` to
/// read requests.
#[derive(Default)]
pub(crate) struct MockWire {
    /// Bytes of the transaction in progress.
    pending: Vec<u8, 64>,
    pending_address: Option<u8>,
    /// Closed transactions, in order.
    pub(crate) sent: Vec<(u8, Vec<u8, 64>), 8>,
    /// Codes returned by successive `end_transmission` calls, `0` once
    /// exhausted.
    pub(crate) codes: Vec<u8, 8>,
    /// Bytes served on `request_from`.
    pub(crate) response: Vec<u8, 64>,
    /// Overrides the number of bytes made available.
    pub(crate) available_override: Option<usize>,
    pub(crate) requests: Vec<(u8, usize), 8>,
    next_code: usize,
    cursor: usize,
    served: usize,
}

impl MockWire {
    pub(crate) fn with_response(bytes: &[u8]) -> Self {
        Self {
            response: Vec::from_slice(bytes).unwrap(),
            ..Self::default()
        }
    }

    pub(crate) fn with_codes(codes: &[u8]) -> Self {
        Self {
            codes: Vec::from_slice(codes).unwrap(),
            ..Self::default()
        }
    }

    /// Data bytes of the last transaction, without the register byte.
    pub(crate) fn last_payload(&self) -> &[u8] {
        &self.sent.last().unwrap().1[1..]
    }

    /// Serve the payload of the last transaction back on the next read.
    pub(crate) fn echo(&mut self) {
        let payload = Vec::from_slice(self.last_payload()).unwrap();
        self.response = payload;
    }
}

impl Wire for MockWire {
    fn begin_transmission(&mut self, address: u8) {
        self.pending.clear();
        self.pending_address = Some(address);
    }

    fn write(&mut self, byte: u8) {
        self.pending.push(byte).unwrap();
    }

    fn end_transmission(&mut self) -> u8 {
        let address = self.pending_address.take().unwrap();
        let bytes = core::mem::take(&mut self.pending);
        self.sent.push((address, bytes)).unwrap();
        let code = self.codes.get(self.next_code).copied().unwrap_or(0);
        self.next_code += 1;
        code
    }

    fn request_from(&mut self, address: u8, count: usize) -> usize {
        self.requests.push((address, count)).unwrap();
        self.cursor = 0;
        self.served = self
            .available_override
            .unwrap_or_else(|| count.min(self.response.len()));
        self.served
    }

    fn available(&self) -> usize {
        self.served.saturating_sub(self.cursor)
    }

    fn read(&mut self) -> u8 {
        let byte = self.response.get(self.cursor).copied().unwrap_or(0xff);
        self.cursor += 1;
        byte
    }
}
