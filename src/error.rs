use crate::page::PageCrc;
use thiserror::Error;

/// Errors returned by the word based CRC algorithms. The checksum and the 16-bit CRC are total
/// and never fail. Marked as non-exhaustive to allow for future additions without breaking the API.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The data is shorter than the trailing words reserved for the stored CRC.
    /// `required` is the size of that window, `actual` the number of words passed in.
    #[error("invalid length: {actual} words, at least {required} required")]
    InvalidLength { required: usize, actual: usize },

    /// The calculated CRC doesn't match the value stored with the page.
    #[error("crc mismatch: expected {expected:#08x}, calculated {actual:#08x}")]
    CrcMismatch { expected: u32, actual: u32 },
}

impl Error {
    pub(crate) fn check_length(page: PageCrc, data: &[u16]) -> Result<(), Error> {
        let required = page.trailing_words();
        if data.len() < required {
            return Err(Error::InvalidLength {
                required,
                actual: data.len(),
            });
        }
        Ok(())
    }
}
