pub mod bitstream;
pub mod golomb;
pub mod types;

pub use bitstream::{BitReader, BitWriter};
pub use golomb::{zigzag_decode, zigzag_encode, GolombCoder};
pub use types::*;
