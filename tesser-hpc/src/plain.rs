use tesser_core::{ByteReader, CodecError, Encoder};

/// Verbatim index stream: each `i32` written little-endian, no tables.
///
/// No compression at all; useful as a baseline and when diagnosing a
/// pipeline, since the index stream is directly readable in the buffer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainEncoder;

impl PlainEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for PlainEncoder {
    fn preprocess_encode(&mut self, _indices: &[i32], _alphabet_size: usize) {}

    fn save(&self, _sink: &mut Vec<u8>) {}

    fn load(&mut self, _reader: &mut ByteReader<'_>) -> Result<(), CodecError> {
        Ok(())
    }

    fn encode(&mut self, indices: &[i32], sink: &mut Vec<u8>) {
        sink.reserve(indices.len() * 4);
        for &index in indices {
            sink.extend_from_slice(&index.to_le_bytes());
        }
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>, count: usize) -> Result<Vec<i32>, CodecError> {
        let mut indices = Vec::with_capacity(count.min(reader.remaining() / 4));
        for _ in 0..count {
            indices.push(reader.read_i32()?);
        }
        Ok(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let indices = vec![0i32, -5, 32768, i32::MIN, 17];
        let mut encoder = PlainEncoder::new();
        encoder.preprocess_encode(&indices, 16);

        let mut buf = Vec::new();
        encoder.save(&mut buf);
        encoder.encode(&indices, &mut buf);
        assert_eq!(buf.len(), indices.len() * 4);

        let mut reader = ByteReader::new(&buf);
        let mut decoder = PlainEncoder::new();
        decoder.load(&mut reader).unwrap();
        assert_eq!(decoder.decode(&mut reader, indices.len()).unwrap(), indices);
    }
}
