/// Byte order of multi-byte register values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Byte order of the build target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Endianness::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Endianness::Big;

    pub const fn native() -> Self {
        Self::NATIVE
    }

    pub fn is_native(&self) -> bool {
        *self == Self::NATIVE
    }

    /// Position in the native representation of the `i`-th byte on the bus.
    pub(crate) fn index(&self, i: usize, len: usize) -> usize {
        if self.is_native() {
            i
        } else {
            len - 1 - i
        }
    }

    #[cfg(test)]
    pub(crate) fn foreign() -> Self {
        match Self::NATIVE {
            Endianness::Big => Endianness::Little,
            Endianness::Little => Endianness::Big,
        }
    }
}
