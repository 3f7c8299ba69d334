//! Parity-check matrix for the (16,8) block code.
//!
//! The code is defined entirely by a fixed 8×16 binary matrix `H`. Its first
//! 8 columns generate the check bits from the data bits during encoding; all
//! 16 columns participate in syndrome computation during correction. The
//! right 8×8 half is the identity, so each check bit is covered by exactly
//! one row.
//!
//! Decoding correctness depends on the exact column values, not merely on
//! "some valid parity-check matrix": a syndrome is located by matching it
//! against single columns and column-pair XORs, so any interoperable
//! implementation must reproduce this bit pattern exactly.
//!
//! Rather than scanning columns at correction time (O(n) for single-bit
//! errors, O(n²) for pairs), the matrix precomputes a 256-entry table mapping
//! every reachable syndrome to its error pattern, turning correction into a
//! single lookup. The table is populated in the same scan order the searches
//! would use, so lookup results are identical to the search-based reference.

/// Number of bits in a codeword.
pub const CODEWORD_BITS: usize = 16;

/// Number of data bits per codeword (the leading half).
pub const DATA_BITS: usize = 8;

/// The matrix rows, one `u16` per row with column 0 in the most significant
/// bit. The left byte of row `r` selects the data bits feeding check bit `r`;
/// the right byte is the identity column for that check bit.
const ROWS: [u16; DATA_BITS] = [
    0b1111_0000_1000_0000,
    0b1100_1100_0100_0000,
    0b1010_1010_0010_0000,
    0b0101_0110_0001_0000,
    0b1110_1001_0000_1000,
    0b1001_0101_0000_0100,
    0b0111_1011_0000_0010,
    0b1110_0111_0000_0001,
];

/// The bit positions of a codeword identified as faulty by a syndrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPattern {
    /// A single faulty bit at the given position (0..16).
    Single(u8),
    /// Two faulty bits, lower position first.
    Double(u8, u8),
}

impl ErrorPattern {
    /// Codeword mask with the faulty positions set, position 0 in the most
    /// significant bit.
    pub fn mask(self) -> u16 {
        match self {
            ErrorPattern::Single(p) => 1 << (15 - p),
            ErrorPattern::Double(p, q) => (1 << (15 - p)) | (1 << (15 - q)),
        }
    }
}

/// The fixed parity-check matrix, with its columns unpacked and the
/// syndrome-to-error-pattern table precomputed.
///
/// The matrix is immutable after construction and holds no interior
/// mutability, so a single instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ParityCheckMatrix {
    /// Column `c` packed as a `u8` with row 0 in the most significant bit.
    /// A column equals the syndrome produced by a single-bit error at that
    /// position.
    columns: [u8; CODEWORD_BITS],
    /// Error pattern for each of the 256 possible syndromes. Entry 0 and
    /// entries reachable by no 1- or 2-bit error are `None`.
    repairs: [Option<ErrorPattern>; 256],
}

impl ParityCheckMatrix {
    /// Builds the matrix and its syndrome lookup table.
    pub fn new() -> Self {
        let mut columns = [0u8; CODEWORD_BITS];
        for (c, column) in columns.iter_mut().enumerate() {
            for (r, row) in ROWS.iter().enumerate() {
                if row & (1 << (15 - c)) != 0 {
                    *column |= 1 << (7 - r);
                }
            }
        }

        // Populate the table in the scan order of the reference searches:
        // single columns first (index order), then column pairs in increasing
        // (i, j) order, never overwriting an earlier entry. The first match
        // in scan order therefore wins, exactly as a runtime scan would.
        let mut repairs = [None; 256];
        for (i, &col) in columns.iter().enumerate() {
            if repairs[col as usize].is_none() {
                repairs[col as usize] = Some(ErrorPattern::Single(i as u8));
            }
        }
        for i in 0..CODEWORD_BITS {
            for j in i + 1..CODEWORD_BITS {
                let syndrome = columns[i] ^ columns[j];
                if repairs[syndrome as usize].is_none() {
                    repairs[syndrome as usize] =
                        Some(ErrorPattern::Double(i as u8, j as u8));
                }
            }
        }

        ParityCheckMatrix { columns, repairs }
    }

    /// Row `r` of the matrix, column 0 in the most significant bit.
    pub fn row(&self, r: usize) -> u16 {
        ROWS[r]
    }

    /// The data half of row `r`: the first 8 columns, packed with column 0
    /// in the most significant bit. Check bit `r` is the parity of the data
    /// bits this mask selects.
    pub fn data_row(&self, r: usize) -> u8 {
        (ROWS[r] >> 8) as u8
    }

    /// Column `c` of the matrix, row 0 in the most significant bit.
    pub fn column(&self, c: usize) -> u8 {
        self.columns[c]
    }

    /// Computes `H · word (mod 2)`: the syndrome of a full 16-bit codeword,
    /// packed with row 0 in the most significant bit.
    ///
    /// Equivalently, the XOR of the columns at the codeword's set bit
    /// positions; syndrome computation is therefore linear over XOR, and the
    /// syndrome of a corrupted codeword equals the syndrome of the error
    /// pattern alone.
    pub fn syndrome(&self, word: u16) -> u8 {
        let mut syndrome = 0u8;
        for (c, &col) in self.columns.iter().enumerate() {
            if word & (1 << (15 - c)) != 0 {
                syndrome ^= col;
            }
        }
        syndrome
    }

    /// Looks up the error pattern for a non-zero syndrome, or `None` if the
    /// syndrome identifies no single- or double-bit fault.
    pub fn lookup(&self, syndrome: u8) -> Option<ErrorPattern> {
        self.repairs[syndrome as usize]
    }
}

impl Default for ParityCheckMatrix {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_matches_reference_literal() {
        let h = ParityCheckMatrix::new();
        let expected: [[u8; 16]; 8] = [
            [1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
            [1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
            [1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0],
            [0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0],
            [1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0],
            [1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0],
            [0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0],
            [1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1],
        ];
        for (r, row) in expected.iter().enumerate() {
            for (c, &bit) in row.iter().enumerate() {
                let got = (h.row(r) >> (15 - c)) & 1;
                assert_eq!(got as u8, bit, "mismatch at row {} column {}", r, c);
            }
        }
    }

    #[test]
    fn columns_are_nonzero_and_distinct() {
        let h = ParityCheckMatrix::new();
        for c in 0..CODEWORD_BITS {
            assert_ne!(h.column(c), 0, "column {} is zero", c);
            for d in c + 1..CODEWORD_BITS {
                assert_ne!(h.column(c), h.column(d), "columns {} and {} collide", c, d);
            }
        }
    }

    #[test]
    fn check_half_is_identity() {
        let h = ParityCheckMatrix::new();
        for r in 0..DATA_BITS {
            assert_eq!(h.column(DATA_BITS + r), 0x80 >> r);
        }
    }

    #[test]
    fn lookup_matches_linear_search() {
        // The table must reproduce the search-based reference exactly:
        // first matching column, else first matching pair in (i, j) order.
        let h = ParityCheckMatrix::new();
        for syndrome in 1..=255u8 {
            let mut expected = None;
            for c in 0..CODEWORD_BITS {
                if h.column(c) == syndrome {
                    expected = Some(ErrorPattern::Single(c as u8));
                    break;
                }
            }
            if expected.is_none() {
                'pairs: for i in 0..CODEWORD_BITS {
                    for j in i + 1..CODEWORD_BITS {
                        if h.column(i) ^ h.column(j) == syndrome {
                            expected = Some(ErrorPattern::Double(i as u8, j as u8));
                            break 'pairs;
                        }
                    }
                }
            }
            assert_eq!(h.lookup(syndrome), expected, "syndrome {:#04x}", syndrome);
        }
    }

    #[test]
    fn zero_syndrome_has_no_pattern() {
        let h = ParityCheckMatrix::new();
        assert_eq!(h.lookup(0), None);
    }

    #[test]
    fn syndrome_equals_column_for_unit_words() {
        let h = ParityCheckMatrix::new();
        for c in 0..CODEWORD_BITS {
            assert_eq!(h.syndrome(1 << (15 - c)), h.column(c));
        }
    }

    #[test]
    fn every_double_error_resolves_to_its_own_pair() {
        // For this particular matrix every column-pair XOR is unique and
        // distinct from every single column, so two-bit correction is exact
        // rather than merely best-effort.
        let h = ParityCheckMatrix::new();
        for i in 0..CODEWORD_BITS {
            for j in i + 1..CODEWORD_BITS {
                let syndrome = h.column(i) ^ h.column(j);
                assert_eq!(
                    h.lookup(syndrome),
                    Some(ErrorPattern::Double(i as u8, j as u8)),
                    "pair ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn error_pattern_masks() {
        assert_eq!(ErrorPattern::Single(0).mask(), 0x8000);
        assert_eq!(ErrorPattern::Single(15).mask(), 0x0001);
        assert_eq!(ErrorPattern::Double(0, 15).mask(), 0x8001);
    }
}
