use crate::error::Error;
use crate::width::{u18, u24};
use crate::{crc24, kf, xfe};
#[cfg(feature = "defmt")]
use defmt::{trace, warn};

/// Plain function form of a word based page CRC, e.g. for tables indexed by flash region.
pub type FnFlashCrc = fn(data: &[u16], seed: u32) -> Result<u32, Error>;

/// A word based CRC guarding a flash page whose last `PAGE.trailing_words()` words hold the
/// stored value.
///
/// Implemented by one zero-sized type per page layout, see [`PageCrc`] for the runtime selection.
pub trait FlashCrc {
    const PAGE: PageCrc;

    fn calc(data: &[u16], seed: u32) -> Result<u32, Error>;
}

/// Plain 24-bit LFSR over raw words.
pub struct Linear24;

impl FlashCrc for Linear24 {
    const PAGE: PageCrc = PageCrc::Linear24;

    fn calc(data: &[u16], seed: u32) -> Result<u32, Error> {
        crc24::crc24(data, seed).map(Into::into)
    }
}

/// 24-bit LFSR over word pairs compressed to 20 bits.
pub struct GanymedeKf;

impl FlashCrc for GanymedeKf {
    const PAGE: PageCrc = PageCrc::GanymedeKf;

    fn calc(data: &[u16], seed: u32) -> Result<u32, Error> {
        kf::kf_crc(data, seed).map(Into::into)
    }
}

/// 18-bit LFSR over word quadruples compressed to 18 bits.
pub struct GanymedeXfe;

impl FlashCrc for GanymedeXfe {
    const PAGE: PageCrc = PageCrc::GanymedeXfe;

    fn calc(data: &[u16], seed: u32) -> Result<u32, Error> {
        xfe::xfe_crc(data, seed).map(Into::into)
    }
}

/// The flash page layouts and the CRC protecting each of them.
#[derive(
    strum::FromRepr, strum::Display, strum::EnumIter, Debug, Eq, PartialEq, Hash, Copy, Clone,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PageCrc {
    Linear24 = 0,
    GanymedeKf = 1,
    GanymedeXfe = 2,
}

impl PageCrc {
    /// Number of words at the end of a page which hold the stored CRC and are skipped.
    pub const fn trailing_words(self) -> usize {
        match self {
            PageCrc::Linear24 | PageCrc::GanymedeKf => 2,
            PageCrc::GanymedeXfe => 4,
        }
    }

    /// Width of the calculated CRC in bits. Higher bits of the result are always zero.
    pub const fn width(self) -> u32 {
        match self {
            PageCrc::Linear24 | PageCrc::GanymedeKf => u24::BITS,
            PageCrc::GanymedeXfe => u18::BITS,
        }
    }

    pub fn as_fn(self) -> FnFlashCrc {
        match self {
            PageCrc::Linear24 => Linear24::calc,
            PageCrc::GanymedeKf => GanymedeKf::calc,
            PageCrc::GanymedeXfe => GanymedeXfe::calc,
        }
    }

    /// Calculates the CRC of a page, excluding its trailing CRC words.
    pub fn calc(self, data: &[u16], seed: u32) -> Result<u32, Error> {
        (self.as_fn())(data, seed)
    }

    /// Calculates the CRC of a page and compares it against the value read from its trailing words.
    /// Returns the calculated CRC on success.
    pub fn verify(self, data: &[u16], seed: u32, expected: u32) -> Result<u32, Error> {
        let actual = self.calc(data, seed)?;
        if actual != expected {
            #[cfg(feature = "defmt")]
            warn!(
                "verify: {} mismatch, expected {:#08x}, calculated {:#08x}",
                self, expected, actual
            );

            #[cfg(feature = "debug-logs")]
            println!(
                "page: verify {self} mismatch: expected 0x{expected:0>6x}, calculated 0x{actual:0>6x}"
            );

            return Err(Error::CrcMismatch { expected, actual });
        }

        #[cfg(feature = "defmt")]
        trace!("verify: {} ok", self);

        Ok(actual)
    }
}
