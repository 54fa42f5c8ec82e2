use core::mem::size_of;

/// A fixed-width value that can be moved to and from a register.
///
/// The value is converted through its native byte representation; the
/// transfer decides per element whether the bytes go out in that order or
/// reversed.
pub trait Word: Copy {
    /// Native byte representation, `[u8; size_of::<Self>()]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Width in bytes.
    const SIZE: usize = size_of::<Self::Bytes>();

    #[doc(hidden)]
    const NOT_EMPTY: () = assert!(
        size_of::<Self::Bytes>() > 0,
        "Data type cannot have zero size for I2C transfer."
    );

    fn to_ne_bytes(self) -> Self::Bytes;

    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Word for $ty {
                type Bytes = [u8; size_of::<$ty>()];

                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

/// Compile-time guard against zero-length arrays.
pub(crate) struct NotEmpty<const N: usize>;

impl<const N: usize> NotEmpty<N> {
    pub(crate) const ASSERT: () = assert!(N > 0, "Array size cannot be zero for I2C transfer.");
}
