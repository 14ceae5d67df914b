//! Byte and word sums that carry no trailing check value: the 8-bit page checksum and the
//! 16-bit rolling CRC. Both are total, so they return the value directly instead of a `Result`.

#[cfg(feature = "defmt")]
use defmt::trace;

/// Calculates the 8-bit checksum of a page.
///
/// Mirrors the `adc` chain of the boot ROM: the words are added with end-around carry into a
/// 16-bit accumulator, then the high byte is added to the low byte, again with carry.
/// An empty page yields 0.
pub fn page_checksum(data: &[u16]) -> u8 {
    #[cfg(feature = "defmt")]
    trace!("page_checksum: {} words", data.len());

    #[cfg(feature = "debug-logs")]
    println!("checksum: page_checksum over {} words", data.len());

    let mut sum = 0u32;
    for &word in data {
        sum += word as u32;
        // carry is added back one word at a time, not once at the end
        if sum > 0xFFFF {
            sum = (sum + 1) & 0xFFFF;
        }
    }

    let mut folded = ((sum >> 8) & 0xFF) + (sum & 0xFF);
    if folded > 0xFF {
        folded += 1;
    }

    (folded & 0xFF) as u8
}

/// Calculates the 16-bit CRC of a byte stream, starting from `seed`.
///
/// This is the nibble-wise formulation of the CCITT polynomial (0x1021), so a seed of `0xFFFF`
/// gives CRC-16/CCITT-FALSE and a seed of `0` gives CRC-16/XMODEM.
pub fn crc16(data: &[u8], seed: u16) -> u16 {
    #[cfg(feature = "defmt")]
    trace!("crc16: {} bytes, seed {:#06x}", data.len(), seed);

    #[cfg(feature = "debug-logs")]
    println!("checksum: crc16 over {} bytes, seed 0x{seed:0>4x}", data.len());

    data.iter().fold(seed, |crc, &byte| crc16_step(crc, byte))
}

#[inline(always)]
const fn crc16_step(crc: u16, byte: u8) -> u16 {
    let mut crc = crc.swap_bytes();
    crc ^= byte as u16;
    crc ^= (crc >> 4) & 0x000F;
    crc ^= crc << 12;
    crc ^= (crc & 0x00FF) << 5;
    crc
}
