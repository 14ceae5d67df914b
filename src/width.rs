//! Unsigned integers narrower than their storage. Every constructor truncates to the declared
//! width, so a value of one of these types never carries bits above its most significant bit.

use core::fmt::{Debug, Display, Formatter};

macro_rules! narrow_uint {
    ($(#[$meta:meta])* $name:ident, $bits:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[allow(non_camel_case_types)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const BITS: u32 = $bits;
            pub const MASK: u32 = (1 << $bits) - 1;
            pub const ZERO: Self = Self(0);

            /// Truncates `num` to the width of the type.
            #[inline(always)]
            pub const fn from_u32(num: u32) -> Self {
                Self(num & Self::MASK)
            }

            #[inline(always)]
            pub const fn to_u32(self) -> u32 {
                self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                f.write_fmt(format_args!(
                    "0x{:0>width$x}",
                    self.0,
                    width = ($bits as usize).div_ceil(4)
                ))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                Debug::fmt(self, f)
            }
        }

        impl From<$name> for u32 {
            fn from(val: $name) -> Self {
                val.to_u32()
            }
        }
    };
}

narrow_uint!(
    /// State of the XFE LFSR and output of the by-4 compressor.
    u18,
    18
);

narrow_uint!(
    /// Output of the by-2 compressor.
    u20,
    20
);

narrow_uint!(
    /// State of the linear and KF LFSR.
    u24,
    24
);
