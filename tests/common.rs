#![allow(dead_code)]

// filename according to https://doc.rust-lang.org/book/ch11-03-test-organization.html

/// Generates a page of pseudo random words using xorshift32, so tests don't depend on an rng crate
/// and the expected values stay stable.
pub fn page(seed: u32, len: usize) -> Vec<u16> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u16
        })
        .collect()
}

/// Appends `n` trailing words to `data`, standing in for a previously stored CRC.
pub fn with_trailer(data: &[u16], trailer: &[u16]) -> Vec<u16> {
    let mut page = data.to_vec();
    page.extend_from_slice(trailer);
    page
}

/// Bit-by-bit model of the 24-bit LFSR, written against the tap list instead of a mask.
pub fn reference_step24(crc: u32, input: u32) -> u32 {
    let d0 = [23, 22, 21, 16]
        .iter()
        .fold(0, |acc, &tap| acc ^ ((crc >> tap) & 1));
    ((crc << 1) ^ input ^ d0) & 0xFF_FFFF
}

/// Bit-by-bit model of the 18-bit LFSR.
pub fn reference_step18(crc: u32, input: u32) -> u32 {
    let d0 = [17, 6].iter().fold(0, |acc, &tap| acc ^ ((crc >> tap) & 1));
    ((crc << 1) ^ input ^ d0) & 0x3_FFFF
}

/// Ring formulation of the by-2 compressor: output bit `k` is the parity of input bits `2k`,
/// `2k + 1` and `2k + 2`, all modulo 40.
pub fn reference_compress_by_2(flash_word: u64) -> u32 {
    let bit = |n: u32| ((flash_word >> (n % 40)) & 1) as u32;
    (0..20).fold(0, |acc, k| acc | ((bit(2 * k) ^ bit(2 * k + 1) ^ bit(2 * k + 2)) << k))
}

/// The 16-bit CRC written as the textbook CCITT (0x1021) shift register, MSB first.
pub fn reference_crc16_ccitt(data: &[u8], seed: u16) -> u16 {
    let mut crc = seed;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}
