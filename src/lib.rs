//! A (16,8) binary linear block code with syndrome error correction.
//!
//! Every 8-bit symbol is expanded into a 16-bit codeword carrying 8 check
//! bits derived from a fixed parity-check matrix. After transmission over a
//! noisy channel the codec locates flipped bits from the codeword's syndrome
//! and repairs any single- or double-bit error before decoding.
//!
//! ```
//! use blockcode::BlockCodec;
//!
//! let codec = BlockCodec::new();
//! let mut words = codec.encode_str("hello").unwrap();
//! words[0].flip(2);
//! words[4].flip(7);
//! words[4].flip(13);
//! let repaired: Vec<_> = codec
//!     .correct_all(&words)
//!     .unwrap()
//!     .into_iter()
//!     .map(|(word, _)| word)
//!     .collect();
//! assert_eq!(codec.decode_str(&repaired), "hello");
//! ```

pub mod codec;
pub mod error;
pub mod matrix;

pub use codec::{decode_text, encode_text, BlockCodec, Codeword, Correction};
pub use error::{Error, Result};
pub use matrix::{ErrorPattern, ParityCheckMatrix, CODEWORD_BITS, DATA_BITS};
