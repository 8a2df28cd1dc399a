//! Seed fingerprint codec.
//!
//! Converts the byte fingerprint of a generated seed into a short sequence
//! of item indices, so two players can visually confirm they are playing
//! the same seed by comparing item icons. The mapping is a plain base-N
//! conversion: the fingerprint is read as one big-endian integer, folded
//! modulo N^K, and its K least-significant base-N digits become 1-based
//! indices into a [`SymbolTable`].
//!
//! The modulo fold intentionally collapses the fingerprint down to N^K
//! combinations. This is a cosmetic integrity check, not a cryptographic
//! one, and distinct seeds are allowed to share a sequence.

use crate::symbols::{IconResolver, SymbolTable};
use thiserror::Error;

/// Rendered icon width in pixels.
const ICON_WIDTH: u32 = 32;
/// Rendered icon height in pixels.
const ICON_HEIGHT: u32 = 16;

/// Errors from rendering a fingerprint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The decoded index has no entry in the symbol table. The alphabet
    /// size and the table were configured out of sync; this is a setup
    /// fault, not a runtime condition.
    #[error("no symbol with index {index} (table has {table_len} entries)")]
    UnknownSymbol { index: u32, table_len: usize },
}

/// Decodes byte fingerprints into bounded symbol sequences.
///
/// The alphabet size N and sequence length K are fixed at construction
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintCodec {
    alphabet: u32,
    length: usize,
}

impl FingerprintCodec {
    /// Create a codec with alphabet size `alphabet` (N) and sequence
    /// length `length` (K).
    pub fn new(alphabet: u32, length: usize) -> Self {
        debug_assert!(alphabet >= 1, "alphabet must be non-empty");
        Self { alphabet, length }
    }

    /// Create a codec whose alphabet size matches `table`.
    pub fn for_table(table: &SymbolTable, length: usize) -> Self {
        Self::new(table.len() as u32, length)
    }

    /// Alphabet size N.
    pub fn alphabet(&self) -> u32 {
        self.alphabet
    }

    /// Sequence length K.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Decode a fingerprint into exactly K indices, each in `[1, N]`.
    ///
    /// Every byte sequence is valid input; the empty fingerprint reads as
    /// zero and decodes to all 1's. Output is in extraction order, least
    /// significant digit first.
    pub fn decode(&self, bytes: &[u8]) -> Vec<u32> {
        let alphabet = self.alphabet as u128;
        let modulus = alphabet.pow(self.length as u32);

        // Streaming big-endian reduction: the accumulator stays below
        // modulus << 8, so arbitrary-length fingerprints never overflow.
        let mut num: u128 = 0;
        for &byte in bytes {
            num = ((num << 8) | byte as u128) % modulus;
        }

        let mut out = Vec::with_capacity(self.length);
        for _ in 0..self.length {
            out.push((num % alphabet) as u32 + 1);
            num /= alphabet;
        }
        out
    }

    /// Render a fingerprint as concatenated inline icon markup.
    ///
    /// Each decoded symbol is looked up in `table` and emitted as a fixed
    /// 32x16 `<img>` fragment whose source comes from `icons`. A missing
    /// table entry aborts with [`RenderError::UnknownSymbol`] rather than
    /// rendering a partial sequence.
    pub fn render(
        &self,
        bytes: &[u8],
        table: &SymbolTable,
        icons: &impl IconResolver,
    ) -> Result<String, RenderError> {
        let mut markup = String::new();
        for index in self.decode(bytes) {
            let name = table.name(index).ok_or(RenderError::UnknownSymbol {
                index,
                table_len: table.len(),
            })?;
            let path = icons.icon_path(name);
            markup.push_str(&format!(
                r#"<img src="{path}" alt="{name}" width="{ICON_WIDTH}" height="{ICON_HEIGHT}">"#
            ));
        }
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::IconFn;
    use rand::Rng;

    fn codec() -> FingerprintCodec {
        FingerprintCodec::new(39, 5)
    }

    #[test]
    fn test_zero_bytes_decode_to_all_ones() {
        assert_eq!(codec().decode(&[0, 0, 0, 0]), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_empty_input_reads_as_zero() {
        assert_eq!(codec().decode(&[]), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_known_values() {
        // 1 -> first digit 1, rest 0
        assert_eq!(codec().decode(&[1]), vec![2, 1, 1, 1, 1]);
        // 40 = 1*39 + 1
        assert_eq!(codec().decode(&[40]), vec![2, 2, 1, 1, 1]);
        // 39^4 -> only the most significant digit set
        let num = 39u64.pow(4);
        assert_eq!(codec().decode(&num.to_be_bytes()), vec![1, 1, 1, 1, 2]);
    }

    #[test]
    fn test_congruent_inputs_decode_identically() {
        let modulus = 39u64.pow(5);
        assert_eq!(
            codec().decode(&modulus.to_be_bytes()),
            codec().decode(&[])
        );
        assert_eq!(
            codec().decode(&(modulus + 40).to_be_bytes()),
            codec().decode(&[40])
        );
    }

    #[test]
    fn test_decode_is_deterministic() {
        let bytes = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23];
        assert_eq!(codec().decode(&bytes), codec().decode(&bytes));
    }

    #[test]
    fn test_decode_bounds_for_arbitrary_input() {
        let codec = codec();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let len = rng.gen_range(0..64);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let sequence = codec.decode(&bytes);
            assert_eq!(sequence.len(), 5);
            assert!(sequence.iter().all(|&i| (1..=39).contains(&i)));
        }
    }

    #[test]
    fn test_render_concatenates_in_decode_order() {
        let table = SymbolTable::from_names(["Brass Key", "Map Fragment", "Old Lantern"]);
        let codec = FingerprintCodec::for_table(&table, 2);
        let icons = IconFn(|name: &str| format!("icons/{name}.png"));

        // 5 = 1*3 + 2 -> digits [2, 1] -> indices [3, 2]
        assert_eq!(codec.decode(&[5]), vec![3, 2]);
        let markup = codec.render(&[5], &table, &icons).unwrap();
        assert_eq!(
            markup,
            r#"<img src="icons/Old Lantern.png" alt="Old Lantern" width="32" height="16"><img src="icons/Map Fragment.png" alt="Map Fragment" width="32" height="16">"#
        );
    }

    #[test]
    fn test_render_fails_on_short_table() {
        // Codec thinks the alphabet has 4 symbols, table only has 2.
        let table = SymbolTable::from_names(["Brass Key", "Map Fragment"]);
        let codec = FingerprintCodec::new(4, 3);

        // 3 decodes to index 4, which the table cannot resolve.
        let err = codec
            .render(&[3], &table, &IconFn(|name: &str| name.to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownSymbol {
                index: 4,
                table_len: 2
            }
        );
    }
}
