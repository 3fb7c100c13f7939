use tesser_core::{ByteReader, CodecError, Element, Quantizer};

/// Uniform residual quantizer with step `2 * eb` and no escape handling.
///
/// Indices are clamped to `(-radius, radius)`, which keeps the alphabet
/// bounded but silently loosens the error guarantee on residuals larger
/// than `radius * 2 * eb`. With the default radius that covers almost any
/// physically plausible field unless the data is divergent; use
/// [`crate::ErrorBoundedQuantizer`] when the strict bound must hold for
/// arbitrary inputs.
#[derive(Debug, Clone)]
pub struct UniformQuantizer {
    error_bound: f64,
    radius: i32,
}

impl UniformQuantizer {
    pub fn new() -> Self {
        Self::with_radius(32768)
    }

    pub fn with_radius(radius: i32) -> Self {
        Self {
            error_bound: 0.0,
            radius,
        }
    }
}

impl Default for UniformQuantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Quantizer<T> for UniformQuantizer {
    fn precompress_data(&mut self, eb: f64) {
        self.error_bound = eb;
    }

    fn quantize_and_overwrite(&mut self, value: &mut T, predicted: T) -> i32 {
        let step = 2.0 * self.error_bound;
        let diff = value.to_f64() - predicted.to_f64();
        let quant = (diff / step).round();
        let limit = (self.radius - 1) as f64;
        let index = quant.clamp(-limit, limit) as i32;
        *value = T::from_f64(predicted.to_f64() + index as f64 * step);
        index
    }

    fn recover(&mut self, predicted: T, index: i32) -> T {
        T::from_f64(predicted.to_f64() + index as f64 * 2.0 * self.error_bound)
    }

    fn radius(&self) -> i32 {
        self.radius
    }

    fn save(&self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&self.error_bound.to_le_bytes());
        sink.extend_from_slice(&self.radius.to_le_bytes());
    }

    fn load(&mut self, reader: &mut ByteReader<'_>) -> Result<(), CodecError> {
        self.error_bound = reader.read_f64()?;
        self.radius = reader.read_i32()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_within_bound() {
        let mut quantizer = UniformQuantizer::new();
        Quantizer::<f64>::precompress_data(&mut quantizer, 0.5);

        for original in [0.0f64, 1.3, -2.7, 9.99] {
            let mut value: f64 = original;
            let index = quantizer.quantize_and_overwrite(&mut value, 0.0);
            assert!((value - original).abs() <= 0.5);
            assert_eq!(quantizer.recover(0.0, index), value);
        }
    }

    #[test]
    fn test_clamps_to_alphabet() {
        let mut quantizer = UniformQuantizer::with_radius(4);
        Quantizer::<f64>::precompress_data(&mut quantizer, 0.5);

        let mut value = 1000.0;
        let index = quantizer.quantize_and_overwrite(&mut value, 0.0);
        assert_eq!(index, 3);
        assert_eq!(value, 3.0);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut quantizer = UniformQuantizer::with_radius(64);
        Quantizer::<f64>::precompress_data(&mut quantizer, 0.125);

        let mut buf = Vec::new();
        Quantizer::<f64>::save(&quantizer, &mut buf);

        let mut restored = UniformQuantizer::new();
        let mut reader = ByteReader::new(&buf);
        Quantizer::<f64>::load(&mut restored, &mut reader).unwrap();
        assert_eq!(Quantizer::<f64>::radius(&restored), 64);
        assert_eq!(restored.recover(1.0, 2), 1.5);
    }
}
