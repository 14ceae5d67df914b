//! XFE flash pages store every four 16-bit words as one 72-bit flash word (64 data bits plus
//! 8 ECC bits). The CRC runs over an 18-bit compressed form of each flash word and is driven by a
//! dedicated 18-bit LFSR.

use crate::error::Error;
use crate::page::PageCrc;
use crate::width::u18;
#[cfg(feature = "defmt")]
use defmt::trace;

/// Words per flash word as seen by the compressor: the ECC slot followed by four data words.
pub const FLASH_WORD_LEN: usize = 5;

/// Feedback taps of the 18-bit LFSR: bits 17 and 6.
const TAPS: u32 = 0x2_0040;

/// For every compressed bit, most significant first, the seven `(word index, bit mask)` pairs
/// of the flash word whose parity forms that bit. Word 0 is the ECC slot.
pub const INDICES_MAP: [[(usize, u16); 7]; 18] = [
    [(0, 0x0080), (0, 0x0040), (0, 0x0020), (0, 0x0010), (4, 0x0100), (4, 0x0020), (4, 0x0004)],
    [(0, 0x0008), (0, 0x0004), (0, 0x0002), (0, 0x0001), (0, 0x0040), (4, 0x0010), (4, 0x0002)],
    [(1, 0x8000), (1, 0x4000), (1, 0x2000), (1, 0x1000), (0, 0x0020), (0, 0x0004), (4, 0x0001)],
    [(1, 0x0800), (1, 0x0400), (1, 0x0200), (1, 0x0100), (0, 0x0010), (0, 0x0002), (1, 0x4000)],
    [(1, 0x0080), (1, 0x0040), (1, 0x0020), (1, 0x0010), (1, 0x0400), (0, 0x0001), (1, 0x2000)],
    [(1, 0x0008), (1, 0x0004), (1, 0x0002), (1, 0x0001), (1, 0x0200), (1, 0x0040), (1, 0x1000)],
    [(2, 0x8000), (2, 0x4000), (2, 0x2000), (2, 0x1000), (1, 0x0100), (1, 0x0020), (1, 0x0004)],
    [(2, 0x0800), (2, 0x0400), (2, 0x0200), (2, 0x0100), (2, 0x4000), (1, 0x0010), (1, 0x0002)],
    [(2, 0x0080), (2, 0x0040), (2, 0x0020), (2, 0x0010), (2, 0x2000), (2, 0x0400), (1, 0x0001)],
    [(2, 0x0008), (2, 0x0004), (2, 0x0002), (2, 0x0001), (2, 0x1000), (2, 0x0200), (2, 0x0040)],
    [(3, 0x8000), (3, 0x4000), (3, 0x2000), (3, 0x1000), (2, 0x0004), (2, 0x0100), (2, 0x0020)],
    [(3, 0x0800), (3, 0x0400), (3, 0x0200), (3, 0x0100), (2, 0x0002), (3, 0x4000), (2, 0x0010)],
    [(3, 0x0080), (3, 0x0040), (3, 0x0020), (3, 0x0010), (2, 0x0001), (3, 0x2000), (3, 0x0400)],
    [(3, 0x0008), (3, 0x0004), (3, 0x0002), (3, 0x0001), (3, 0x0040), (3, 0x1000), (3, 0x0200)],
    [(4, 0x8000), (4, 0x4000), (4, 0x2000), (4, 0x1000), (3, 0x0020), (3, 0x0004), (3, 0x0100)],
    [(4, 0x0800), (4, 0x0400), (4, 0x0200), (4, 0x0100), (3, 0x0010), (3, 0x0002), (4, 0x4000)],
    [(4, 0x0080), (4, 0x0040), (4, 0x0020), (4, 0x0010), (4, 0x0400), (3, 0x0001), (4, 0x2000)],
    [(4, 0x0008), (4, 0x0004), (4, 0x0002), (4, 0x0001), (4, 0x0200), (4, 0x0040), (4, 0x1000)],
];

// Every row selects exactly one bit per pair, and only from words of the flash word.
const _: () = {
    let mut row = 0;
    while row < INDICES_MAP.len() {
        let mut col = 0;
        while col < INDICES_MAP[row].len() {
            let (word, mask) = INDICES_MAP[row][col];
            assert!(word < FLASH_WORD_LEN, "word index out of range");
            assert!(mask.is_power_of_two(), "mask must select a single bit");
            col += 1;
        }
        row += 1;
    }
    assert!(INDICES_MAP.len() == u18::BITS as usize);
};

/// Compresses a 72-bit flash word, given as `[ecc, w3, w2, w1, w0]`, to 18 bits.
pub const fn compress_by_4(flash_word: &[u16; FLASH_WORD_LEN]) -> u18 {
    let mut result = 0u32;

    let mut row = 0;
    while row < INDICES_MAP.len() {
        let mut parity = 0u32;
        let mut col = 0;
        while col < INDICES_MAP[row].len() {
            let (word, mask) = INDICES_MAP[row][col];
            parity ^= ((flash_word[word] & mask) != 0) as u32;
            col += 1;
        }
        result = (result << 1) | parity;
        row += 1;
    }

    u18::from_u32(result)
}

/// Assembles the flash word for the four words starting at `first`. The ECC slot is zero and the
/// data words are placed in reverse order.
#[inline(always)]
fn flash_word(data: &[u16], first: usize) -> [u16; FLASH_WORD_LEN] {
    [
        0,
        data[first + 3],
        data[first + 2],
        data[first + 1],
        data[first],
    ]
}

#[inline(always)]
const fn step(crc: u18, input: u18) -> u18 {
    let d0 = (crc.to_u32() & TAPS).count_ones() & 1;
    u18::from_u32((crc.to_u32() << 1) ^ input.to_u32() ^ d0)
}

/// Calculates the 18-bit XFE CRC over `data`, excluding the last 4 words which hold the stored CRC.
///
/// Words are consumed in groups of four. When the payload isn't a multiple of four the final group
/// reaches into the stored CRC words. The seed is truncated to 18 bits.
pub fn xfe_crc(data: &[u16], seed: u32) -> Result<u18, Error> {
    Error::check_length(PageCrc::GanymedeXfe, data)?;

    #[cfg(feature = "defmt")]
    trace!("xfe_crc: {} words, seed {:#08x}", data.len(), seed);

    #[cfg(feature = "debug-logs")]
    println!("xfe: xfe_crc over {} words, seed 0x{seed:0>5x}", data.len());

    let end = data.len() - PageCrc::GanymedeXfe.trailing_words();
    Ok((0..end).step_by(4).fold(u18::from_u32(seed), |crc, first| {
        step(crc, compress_by_4(&flash_word(data, first)))
    }))
}
