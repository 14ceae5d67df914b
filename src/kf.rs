//! KF flash pages store every two 16-bit words as one 40-bit flash word (32 data bits plus
//! 8 ECC bits). The CRC runs over a 20-bit compressed form of each flash word and is driven by the
//! same 24-bit LFSR as the linear CRC.

use crate::crc24;
use crate::error::Error;
use crate::page::PageCrc;
use crate::width::{u20, u24};
#[cfg(feature = "defmt")]
use defmt::trace;

/// Number of bits in a flash word including the ECC byte.
pub const FLASH_WORD_BITS: u32 = 40;

/// Compresses a 40-bit flash word to 20 bits.
///
/// Output bit `k / 2` is the XOR of input bits `k`, `k + 1` and `k + 2` for every even `k` up to
/// 36. The last output bit wraps around and combines bits 38, 39 and 0. Bits above 39 are ignored.
pub const fn compress_by_2(flash_word: u64) -> u20 {
    let mut result = 0u32;

    let mut i = 0;
    while i < FLASH_WORD_BITS - 2 {
        let b0 = (flash_word >> i) & 1;
        let b1 = (flash_word >> (i + 1)) & 1;
        let b2 = (flash_word >> (i + 2)) & 1;
        result |= ((b0 ^ b1 ^ b2) as u32) << (i / 2);
        i += 2;
    }

    let b38 = (flash_word >> 38) & 1;
    let b39 = (flash_word >> 39) & 1;
    let b0 = flash_word & 1;
    result |= ((b38 ^ b39 ^ b0) as u32) << 19;

    u20::from_u32(result)
}

/// Assembles the flash word for the word pair starting at `low`: `data[low + 1]` lands in bits
/// 16..32, `data[low]` in bits 0..16 and the ECC byte is left at zero.
#[inline(always)]
fn flash_word(data: &[u16], low: usize) -> u64 {
    ((data[low + 1] as u64) << 16) | data[low] as u64
}

/// Calculates the 24-bit KF CRC over `data`, excluding the last 2 words which hold the stored CRC.
///
/// Words are consumed in pairs. With an odd number of payload words the final pair takes the
/// first stored CRC word as its high half.
pub fn kf_crc(data: &[u16], seed: u32) -> Result<u24, Error> {
    Error::check_length(PageCrc::GanymedeKf, data)?;

    #[cfg(feature = "defmt")]
    trace!("kf_crc: {} words, seed {:#08x}", data.len(), seed);

    #[cfg(feature = "debug-logs")]
    println!("kf: kf_crc over {} words, seed 0x{seed:0>6x}", data.len());

    let end = data.len() - PageCrc::GanymedeKf.trailing_words();
    Ok((0..end).step_by(2).fold(u24::from_u32(seed), |crc, low| {
        crc24::step(crc, compress_by_2(flash_word(data, low)).to_u32())
    }))
}
