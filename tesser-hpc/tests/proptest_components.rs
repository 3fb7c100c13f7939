use proptest::prelude::*;
use tesser_core::{ByteReader, Encoder, Quantizer};
use tesser_hpc::{ErrorBoundedQuantizer, HuffmanEncoder, UniformQuantizer};

// Property 1: error-bounded quantizer respects |x - x_hat| <= eb for
// arbitrary finite values and predictions, including when samples escape.
proptest! {
    #[test]
    fn prop_error_bound_holds(
        values in prop::collection::vec(-1e6f64..1e6, 1..200),
        predictions in prop::collection::vec(-1e6f64..1e6, 1..200),
        eb in 1e-6f64..10.0
    ) {
        let mut quantizer = ErrorBoundedQuantizer::<f64>::with_radius(256);
        quantizer.precompress_data(eb);

        let pairs: Vec<(f64, f64)> = values
            .iter()
            .zip(predictions.iter().cycle())
            .map(|(&v, &p)| (v, p))
            .collect();

        let mut reconstructed = Vec::new();
        let mut indices = Vec::new();
        for &(value, prediction) in &pairs {
            let mut cell = value;
            indices.push(quantizer.quantize_and_overwrite(&mut cell, prediction));
            prop_assert!(
                (cell - value).abs() <= eb,
                "bound violated: {} vs {} (eb {})", value, cell, eb
            );
            reconstructed.push(cell);
        }

        // Decoder side sees identical reconstructions.
        let mut buf = Vec::new();
        quantizer.save(&mut buf);
        let mut decoder = ErrorBoundedQuantizer::<f64>::new();
        let mut reader = ByteReader::new(&buf);
        decoder.load(&mut reader).unwrap();
        for ((&(_, prediction), &index), &expected) in
            pairs.iter().zip(indices.iter()).zip(reconstructed.iter())
        {
            prop_assert_eq!(decoder.recover(prediction, index), expected);
        }
    }
}

// Property 2: uniform quantizer round-trips exactly between encoder and
// decoder for residuals inside the alphabet.
proptest! {
    #[test]
    fn prop_uniform_encoder_decoder_agree(
        values in prop::collection::vec(-100.0f64..100.0, 1..100),
        eb in 0.01f64..1.0
    ) {
        let mut quantizer = UniformQuantizer::new();
        Quantizer::<f64>::precompress_data(&mut quantizer, eb);

        for &value in &values {
            let mut cell = value;
            let index = quantizer.quantize_and_overwrite(&mut cell, 0.0);
            prop_assert!((cell - value).abs() <= eb);
            prop_assert_eq!(quantizer.recover(0.0, index), cell);
        }
    }
}

// Property 3: Huffman round-trip recovers arbitrary index streams.
proptest! {
    #[test]
    fn prop_huffman_roundtrip(
        indices in prop::collection::vec(-5000i32..5000, 1..500)
    ) {
        let mut encoder = HuffmanEncoder::new();
        encoder.preprocess_encode(&indices, 131072);

        let mut buf = Vec::new();
        encoder.save(&mut buf);
        encoder.encode(&indices, &mut buf);

        let mut decoder = HuffmanEncoder::new();
        let mut reader = ByteReader::new(&buf);
        decoder.load(&mut reader).unwrap();
        let decoded = decoder.decode(&mut reader, indices.len()).unwrap();
        prop_assert_eq!(reader.remaining(), 0);
        prop_assert_eq!(decoded, indices);
    }
}

// Property 4: Huffman stays within the entropy-plus-one-bit budget per
// symbol on constant streams (degenerate one-symbol alphabet).
proptest! {
    #[test]
    fn prop_huffman_constant_stream_is_one_bit_per_symbol(
        symbol in -1000i32..1000,
        count in 8usize..2000
    ) {
        let indices = vec![symbol; count];
        let mut encoder = HuffmanEncoder::new();
        encoder.preprocess_encode(&indices, 16);
        let mut buf = Vec::new();
        encoder.encode(&indices, &mut buf);
        // u64 bit-count prefix plus ceil(count / 8) payload bytes.
        prop_assert_eq!(buf.len(), 8 + count.div_ceil(8));
    }
}
