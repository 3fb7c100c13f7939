use tesser_core::{ByteReader, CodecError, Element, Quantizer};

/// Error-bounded residual quantizer with a lossless escape path.
///
/// Formula: `q = round((x - pred) / (2 * eb))`, reconstruction
/// `x_hat = pred + q * (2 * eb)`, so `|x - x_hat| <= eb` whenever the
/// sample quantizes at all. Samples whose index would leave
/// `(-radius, radius)`, or whose reconstruction misses the bound (including
/// non-finite values), are stored verbatim in an escape list and signalled
/// with the reserved index `radius`; those reconstruct exactly.
///
/// Serialized state: error bound, radius, then the escape list.
#[derive(Debug, Clone)]
pub struct ErrorBoundedQuantizer<T> {
    error_bound: f64,
    radius: i32,
    unpredictable: Vec<T>,
    unpred_cursor: usize,
}

const DEFAULT_RADIUS: i32 = 32768;

impl<T: Element> ErrorBoundedQuantizer<T> {
    pub fn new() -> Self {
        Self::with_radius(DEFAULT_RADIUS)
    }

    pub fn with_radius(radius: i32) -> Self {
        Self {
            error_bound: 0.0,
            radius,
            unpredictable: Vec::new(),
            unpred_cursor: 0,
        }
    }

    /// Number of samples that took the escape path in the last compression.
    pub fn num_unpredictable(&self) -> usize {
        self.unpredictable.len()
    }
}

impl<T: Element> Default for ErrorBoundedQuantizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Quantizer<T> for ErrorBoundedQuantizer<T> {
    fn precompress_data(&mut self, eb: f64) {
        self.error_bound = eb;
        self.unpredictable.clear();
    }

    fn predecompress_data(&mut self) {
        self.unpred_cursor = 0;
    }

    fn quantize_and_overwrite(&mut self, value: &mut T, predicted: T) -> i32 {
        let step = 2.0 * self.error_bound;
        let diff = value.to_f64() - predicted.to_f64();
        let quant = (diff / step).round();
        if quant.is_finite() && quant.abs() < self.radius as f64 {
            // Check the bound on the value as stored in T, so narrowing the
            // reconstruction to f32 cannot nudge it past the bound.
            let reconstructed = T::from_f64(predicted.to_f64() + quant * step);
            if (reconstructed.to_f64() - value.to_f64()).abs() <= self.error_bound {
                *value = reconstructed;
                return quant as i32;
            }
        }
        self.unpredictable.push(*value);
        self.radius
    }

    fn recover(&mut self, predicted: T, index: i32) -> T {
        if index == self.radius {
            let value = self.unpredictable[self.unpred_cursor];
            self.unpred_cursor += 1;
            return value;
        }
        T::from_f64(predicted.to_f64() + index as f64 * 2.0 * self.error_bound)
    }

    fn radius(&self) -> i32 {
        self.radius
    }

    fn save(&self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&self.error_bound.to_le_bytes());
        sink.extend_from_slice(&self.radius.to_le_bytes());
        sink.extend_from_slice(&(self.unpredictable.len() as u64).to_le_bytes());
        for &value in &self.unpredictable {
            value.write_le(sink);
        }
    }

    fn load(&mut self, reader: &mut ByteReader<'_>) -> Result<(), CodecError> {
        self.error_bound = reader.read_f64()?;
        self.radius = reader.read_i32()?;
        let count = reader.read_u64()? as usize;
        // Cap the pre-allocation by what the buffer could actually hold.
        self.unpredictable = Vec::with_capacity(count.min(reader.remaining() / T::WIRE_SIZE));
        for _ in 0..count {
            self.unpredictable.push(T::read_le(reader)?);
        }
        self.unpred_cursor = 0;
        Ok(())
    }
}
