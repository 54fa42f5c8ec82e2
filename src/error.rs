use core::fmt;

/// An error type representing a failed register transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Numeric status as reported by the bus channel. `Timeout` is the only
    /// code synthesized locally.
    pub fn code(&self) -> u8 {
        self.kind as u8
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.kind.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A list of specific error causes. Discriminants are the status codes
/// returned by the channel when a transaction is closed; `0` means success
/// and has no variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Data too long to fit in the transmit buffer
    BufferOverflow = 0x01,
    /// Address sent, NACK received
    AddressNack = 0x02,
    /// Data sent, NACK received
    DataNack = 0x03,
    /// Other bus error (lost arbitration, bus error, ..)
    Other = 0x04,
    /// Number of bytes made available differs from the number requested
    Timeout = 0x05,
}

impl ErrorKind {
    /// Translate a channel status code. Unknown nonzero codes are reported
    /// as `Other`.
    pub fn from_code(code: u8) -> Option<Self> {
        use ErrorKind::*;
        match code {
            0x00 => None,
            x if x == BufferOverflow as u8 => BufferOverflow.into(),
            x if x == AddressNack as u8 => AddressNack.into(),
            x if x == DataNack as u8 => DataNack.into(),
            x if x == Timeout as u8 => Timeout.into(),
            _ => Other.into(),
        }
    }

    fn as_str(&self) -> &'static str {
        use ErrorKind::*;
        match self {
            BufferOverflow => "data too long to fit in transmit buffer",
            AddressNack => "received NACK on transmit of address",
            DataNack => "received NACK on transmit of data",
            Other => "other bus error",
            Timeout => "device returned an unexpected number of bytes",
        }
    }
}

/// Turn a channel status code into a `Result`.
pub(crate) fn check(code: u8) -> Result<(), Error> {
    match ErrorKind::from_code(code) {
        None => Ok(()),
        Some(kind) => Err(kind.into()),
    }
}
