use crate::error::Error;
use crate::page::PageCrc;
use crate::width::u24;
#[cfg(feature = "defmt")]
use defmt::trace;

/// Feedback taps of the 24-bit LFSR: bits 23, 22, 21 and 16.
const TAPS: u32 = 0xE1_0000;

/// Advances the 24-bit LFSR by one input. `input` is either a raw 16-bit flash word or a 20-bit
/// compressed word, both fit below bit 24.
#[inline(always)]
pub(crate) const fn step(crc: u24, input: u32) -> u24 {
    let d0 = (crc.to_u32() & TAPS).count_ones() & 1;
    u24::from_u32((crc.to_u32() << 1) ^ input ^ d0)
}

/// Calculates the 24-bit CRC over `data`, excluding the last 2 words which hold the stored CRC.
pub fn crc24(data: &[u16], seed: u32) -> Result<u24, Error> {
    Error::check_length(PageCrc::Linear24, data)?;

    #[cfg(feature = "defmt")]
    trace!("crc24: {} words, seed {:#08x}", data.len(), seed);

    #[cfg(feature = "debug-logs")]
    println!("crc24: {} words, seed 0x{seed:0>6x}", data.len());

    let payload = &data[..data.len() - PageCrc::Linear24.trailing_words()];
    Ok(payload
        .iter()
        .fold(u24::from_u32(seed), |crc, &word| step(crc, word as u32)))
}
