#![doc = include_str ! ("../README.md")]
#![cfg_attr(not(target_arch = "x86_64"), no_std)]

pub mod checksum;
pub mod crc24;
pub mod error;
pub mod kf;
pub mod page;
mod width;
pub mod xfe;

pub use checksum::{crc16, page_checksum};
pub use crc24::crc24;
pub use kf::{compress_by_2, kf_crc};
pub use page::{FlashCrc, FnFlashCrc, GanymedeKf, GanymedeXfe, Linear24, PageCrc};
pub use width::{u18, u20, u24};
pub use xfe::{compress_by_4, xfe_crc};
