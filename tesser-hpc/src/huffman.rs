use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tesser_core::{ByteReader, CodecError, Encoder};

use crate::bits::{BitSource, BitWriter};

/// Canonical Huffman coder over `i32` quantization indices.
///
/// `preprocess_encode` counts frequencies and builds code lengths from a
/// heap-merged tree with deterministic tie-breaking; codes are then assigned
/// canonically (sorted by length, then symbol), so only `(symbol, length)`
/// pairs go on the wire and the decoder rebuilds identical codes.
///
/// Serialized table: `u32` symbol count, then per symbol `i32` value and
/// `u8` code length, in canonical order. The bitstream section is prefixed
/// with its `u64` bit count and padded to a whole byte.
#[derive(Debug, Default)]
pub struct HuffmanEncoder {
    /// Canonical `(symbol, length)` pairs, sorted by (length, symbol).
    table: Vec<(i32, u8)>,
    codes: HashMap<i32, (u64, u8)>,
}

impl HuffmanEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code lengths from symbol frequencies. `(symbol, freq)` pairs must be
    /// sorted by symbol so that heap ties resolve identically on every run.
    fn build_lengths(frequencies: &[(i32, u64)]) -> Vec<(i32, u8)> {
        if frequencies.len() == 1 {
            // A one-symbol alphabet still needs a bit to count elements by.
            return vec![(frequencies[0].0, 1)];
        }

        // Tree nodes: leaves first (in symbol order), merged nodes appended.
        let mut parents: Vec<Option<usize>> = vec![None; frequencies.len()];
        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = frequencies
            .iter()
            .enumerate()
            .map(|(node, &(_, freq))| Reverse((freq, node)))
            .collect();

        while let Some(Reverse((freq_a, node_a))) = heap.pop() {
            let Some(Reverse((freq_b, node_b))) = heap.pop() else {
                break; // node_a is the root
            };
            let merged = parents.len();
            parents.push(None);
            parents[node_a] = Some(merged);
            parents[node_b] = Some(merged);
            heap.push(Reverse((freq_a + freq_b, merged)));
        }

        let mut lengths: Vec<(i32, u8)> = frequencies
            .iter()
            .enumerate()
            .map(|(leaf, &(symbol, _))| {
                let mut depth = 0u8;
                let mut node = leaf;
                while let Some(parent) = parents[node] {
                    depth += 1;
                    node = parent;
                }
                (symbol, depth)
            })
            .collect();
        lengths.sort_by_key(|&(symbol, len)| (len, symbol));
        lengths
    }

    /// Canonical code assignment over a (length, symbol)-sorted table.
    fn assign_codes(table: &[(i32, u8)]) -> HashMap<i32, (u64, u8)> {
        let mut codes = HashMap::with_capacity(table.len());
        let mut code = 0u64;
        let mut prev_len = 0u8;
        for &(symbol, len) in table {
            code <<= len - prev_len;
            codes.insert(symbol, (code, len));
            code += 1;
            prev_len = len;
        }
        codes
    }
}

impl Encoder for HuffmanEncoder {
    fn preprocess_encode(&mut self, indices: &[i32], alphabet_size: usize) {
        let mut frequencies: HashMap<i32, u64> =
            HashMap::with_capacity(alphabet_size.min(indices.len()));
        for &index in indices {
            *frequencies.entry(index).or_insert(0) += 1;
        }
        let mut frequencies: Vec<(i32, u64)> = frequencies.into_iter().collect();
        frequencies.sort_by_key(|&(symbol, _)| symbol);

        self.table = if frequencies.is_empty() {
            Vec::new()
        } else {
            Self::build_lengths(&frequencies)
        };
        self.codes = Self::assign_codes(&self.table);
    }

    fn save(&self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&(self.table.len() as u32).to_le_bytes());
        for &(symbol, len) in &self.table {
            sink.extend_from_slice(&symbol.to_le_bytes());
            sink.push(len);
        }
    }

    fn load(&mut self, reader: &mut ByteReader<'_>) -> Result<(), CodecError> {
        let count = reader.read_u32()? as usize;
        let mut table = Vec::with_capacity(count.min(reader.remaining() / 5));
        for _ in 0..count {
            let symbol = reader.read_i32()?;
            let len = reader.read_u8()?;
            if len == 0 || len > 64 {
                return Err(CodecError::CorruptStream("Huffman code length out of range"));
            }
            table.push((symbol, len));
        }
        if table
            .windows(2)
            .any(|w| (w[0].1, w[0].0) >= (w[1].1, w[1].0))
        {
            return Err(CodecError::CorruptStream("Huffman table not in canonical order"));
        }
        self.codes = Self::assign_codes(&table);
        self.table = table;
        Ok(())
    }

    fn encode(&mut self, indices: &[i32], sink: &mut Vec<u8>) {
        let total_bits: u64 = indices
            .iter()
            .map(|index| self.codes[index].1 as u64)
            .sum();
        sink.extend_from_slice(&total_bits.to_le_bytes());

        let mut writer = BitWriter::new(sink);
        for index in indices {
            let (code, len) = self.codes[index];
            writer.push(code, len as u32);
        }
        writer.finish();
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>, count: usize) -> Result<Vec<i32>, CodecError> {
        let total_bits = reader.read_u64()?;
        let num_bytes = total_bits.div_ceil(8) as usize;
        let payload = reader.read_bytes(num_bytes)?;

        if count == 0 {
            return Ok(Vec::new());
        }
        if self.table.is_empty() {
            return Err(CodecError::CorruptStream("Huffman table is empty"));
        }

        // Per-length canonical layout: first code value and first table
        // index for each code length.
        let max_len = self.table.last().map(|&(_, len)| len).unwrap_or(0) as usize;
        let mut num_at = vec![0u64; max_len + 1];
        let mut first_index = vec![0usize; max_len + 1];
        for (position, &(_, len)) in self.table.iter().enumerate() {
            if num_at[len as usize] == 0 {
                first_index[len as usize] = position;
            }
            num_at[len as usize] += 1;
        }
        let mut first_code = vec![0u64; max_len + 1];
        let mut code = 0u64;
        for len in 1..=max_len {
            first_code[len] = code;
            code = (code + num_at[len]) << 1;
        }

        let mut source = BitSource::new(payload);
        let mut output = Vec::with_capacity(count);
        for _ in 0..count {
            let mut code = 0u64;
            let mut len = 0usize;
            loop {
                let bit = source.next_bit().ok_or(CodecError::CorruptStream(
                    "Huffman bitstream exhausted mid-symbol",
                ))?;
                code = (code << 1) | bit as u64;
                len += 1;
                if len > max_len {
                    return Err(CodecError::CorruptStream("invalid Huffman code"));
                }
                let offset = code.wrapping_sub(first_code[len]);
                if num_at[len] > 0 && code >= first_code[len] && offset < num_at[len] {
                    output.push(self.table[first_index[len] + offset as usize].0);
                    break;
                }
            }
        }
        Ok(output)
    }

    fn postprocess_encode(&mut self) {
        self.table.clear();
        self.codes.clear();
    }

    fn postprocess_decode(&mut self) {
        self.table.clear();
        self.codes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(indices: &[i32]) -> Vec<i32> {
        let mut encoder = HuffmanEncoder::new();
        encoder.preprocess_encode(indices, 256);

        let mut buf = Vec::new();
        encoder.save(&mut buf);
        encoder.encode(indices, &mut buf);

        let mut decoder = HuffmanEncoder::new();
        let mut reader = ByteReader::new(&buf);
        decoder.load(&mut reader).unwrap();
        let decoded = decoder.decode(&mut reader, indices.len()).unwrap();
        assert_eq!(reader.remaining(), 0);
        decoded
    }

    #[test]
    fn test_roundtrip_skewed() {
        let mut indices = vec![0i32; 200];
        indices.extend(vec![1; 50]);
        indices.extend(vec![-1; 50]);
        indices.extend(vec![7; 3]);
        assert_eq!(roundtrip(&indices), indices);
    }

    #[test]
    fn test_roundtrip_single_symbol() {
        let indices = vec![5i32; 64];
        assert_eq!(roundtrip(&indices), indices);
    }

    #[test]
    fn test_roundtrip_two_symbols() {
        let indices: Vec<i32> = (0..100).map(|v| if v % 3 == 0 { -4 } else { 9 }).collect();
        assert_eq!(roundtrip(&indices), indices);
    }

    #[test]
    fn test_skewed_stream_compresses() {
        let mut indices = vec![0i32; 4000];
        for chunk in indices.chunks_mut(40) {
            chunk[0] = 1;
        }
        let mut encoder = HuffmanEncoder::new();
        encoder.preprocess_encode(&indices, 256);
        let mut buf = Vec::new();
        encoder.save(&mut buf);
        encoder.encode(&indices, &mut buf);
        assert!(
            buf.len() < indices.len(),
            "{} bytes for {} mostly-constant indices",
            buf.len(),
            indices.len()
        );
    }

    #[test]
    fn test_frequent_symbols_get_short_codes() {
        let mut indices = vec![0i32; 1000];
        indices.extend(vec![1; 10]);
        indices.extend(vec![2; 10]);
        let mut encoder = HuffmanEncoder::new();
        encoder.preprocess_encode(&indices, 256);
        let frequent = encoder.codes[&0].1;
        let rare = encoder.codes[&1].1;
        assert!(frequent <= rare);
    }

    #[test]
    fn test_truncated_bitstream_is_an_error() {
        let indices = vec![1i32, 2, 3, 1, 2, 3];
        let mut encoder = HuffmanEncoder::new();
        encoder.preprocess_encode(&indices, 16);
        let mut buf = Vec::new();
        encoder.save(&mut buf);
        encoder.encode(&indices, &mut buf);

        let mut decoder = HuffmanEncoder::new();
        let mut reader = ByteReader::new(&buf[..buf.len() - 1]);
        decoder.load(&mut reader).unwrap();
        assert!(decoder.decode(&mut reader, indices.len()).is_err());
    }
}
