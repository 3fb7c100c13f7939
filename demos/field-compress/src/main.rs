use anyhow::{Context, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use clap::Parser;
use rand::Rng;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use tesser_core::FieldCompressor;
use tesser_hpc::{
    ErrorBoundedQuantizer, HuffmanEncoder, LorenzoPredictor, PlainEncoder, ZeroPredictor,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output compressed file
    #[arg(long, default_value = "field.tsr")]
    output: PathBuf,

    /// Decompress an existing file and report stats (overrides other flags)
    #[arg(long)]
    decompress: bool,

    /// Absolute error bound
    #[arg(long, default_value_t = 1e-3)]
    eb: f64,

    /// Field width (axis 1)
    #[arg(long, default_value_t = 512)]
    width: usize,

    /// Field height (axis 0)
    #[arg(long, default_value_t = 512)]
    height: usize,

    /// Amplitude of additive noise on the synthetic field
    #[arg(long, default_value_t = 0.01)]
    noise: f64,

    /// Block edge length (0 selects the dimensionality default)
    #[arg(long, default_value_t = 0)]
    block: usize,

    /// Skip Lorenzo prediction (quantize raw values)
    #[arg(long)]
    no_predict: bool,

    /// Skip entropy coding (store the index stream verbatim)
    #[arg(long)]
    plain: bool,
}

// Container format: b"TSRF" [u8 version=1] [u8 codec] [u64 nbytes] [bytes...]
//   codec: 1 = Lorenzo+Huffman, 2 = Lorenzo+Plain, 3 = Zero+Huffman, 4 = Zero+Plain
const MAGIC: &[u8; 4] = b"TSRF";

fn main() -> Result<()> {
    let args = Args::parse();

    if args.decompress {
        let (codec, payload) = read_container(&args.output)?;
        let restored = decompress_payload(codec, &payload)?;
        println!(
            "Decompressed {} values from {} ({} payload bytes)",
            restored.len(),
            args.output.display(),
            payload.len()
        );
        return Ok(());
    }

    println!(
        "Generating {}x{} synthetic field (noise {})",
        args.height, args.width, args.noise
    );
    let field = generate_field(args.height, args.width, args.noise);

    let codec_id: u8 = match (args.no_predict, args.plain) {
        (false, false) => 1,
        (false, true) => 2,
        (true, false) => 3,
        (true, true) => 4,
    };
    let payload = compress_payload(codec_id, &field, [args.height, args.width], args.block, args.eb)?;

    let mut file = File::create(&args.output).context("create output")?;
    file.write_all(MAGIC).context("write magic")?;
    file.write_u8(1).context("write version")?;
    file.write_u8(codec_id).context("write codec")?;
    file.write_u64::<LittleEndian>(payload.len() as u64)
        .context("write payload length")?;
    file.write_all(&payload).context("write payload")?;

    let raw_bytes = field.len() * 8;
    println!(
        "Wrote {}: {} -> {} bytes ({:.2}x)",
        args.output.display(),
        raw_bytes,
        payload.len(),
        raw_bytes as f64 / payload.len() as f64
    );

    // Verify the round-trip against the bound before declaring success.
    let restored = decompress_payload(codec_id, &payload)?;
    let max_err = field
        .iter()
        .zip(&restored)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f64, f64::max);
    println!("Max round-trip error: {:.3e} (bound {:.3e})", max_err, args.eb);
    if max_err > args.eb {
        anyhow::bail!("error bound violated: {} > {}", max_err, args.eb);
    }
    Ok(())
}

/// Damped ripple plus uniform noise, a stand-in for smooth simulation output.
fn generate_field(height: usize, width: usize, noise: f64) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut field = Vec::with_capacity(height * width);
    for i in 0..height {
        for j in 0..width {
            let y = i as f64 / 64.0;
            let x = j as f64 / 64.0;
            let r = (x * x + y * y).sqrt();
            let value = (6.0 * r).cos() * (-r / 4.0).exp();
            field.push(value + rng.gen_range(-noise..=noise));
        }
    }
    field
}

fn compress_payload(
    codec: u8,
    field: &[f64],
    dims: [usize; 2],
    block: usize,
    eb: f64,
) -> Result<Vec<u8>> {
    let payload = match codec {
        1 => FieldCompressor::new(
            LorenzoPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            HuffmanEncoder::new(),
            dims,
            block,
        )
        .compress(field, eb)?,
        2 => FieldCompressor::new(
            LorenzoPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            PlainEncoder::new(),
            dims,
            block,
        )
        .compress(field, eb)?,
        3 => FieldCompressor::new(
            ZeroPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            HuffmanEncoder::new(),
            dims,
            block,
        )
        .compress(field, eb)?,
        _ => FieldCompressor::new(
            ZeroPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            PlainEncoder::new(),
            dims,
            block,
        )
        .compress(field, eb)?,
    };
    Ok(payload)
}

fn decompress_payload(codec: u8, payload: &[u8]) -> Result<Vec<f64>> {
    // Shape and block size come from the payload header; placeholders here.
    let restored = match codec {
        1 => FieldCompressor::new(
            LorenzoPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            HuffmanEncoder::new(),
            [1, 1],
            0,
        )
        .decompress(payload)?,
        2 => FieldCompressor::new(
            LorenzoPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            PlainEncoder::new(),
            [1, 1],
            0,
        )
        .decompress(payload)?,
        3 => FieldCompressor::new(
            ZeroPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            HuffmanEncoder::new(),
            [1, 1],
            0,
        )
        .decompress(payload)?,
        _ => FieldCompressor::new(
            ZeroPredictor::new(),
            ErrorBoundedQuantizer::<f64>::new(),
            PlainEncoder::new(),
            [1, 1],
            0,
        )
        .decompress(payload)?,
    };
    Ok(restored)
}

fn read_container(path: &PathBuf) -> Result<(u8, Vec<u8>)> {
    let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut magic = [0u8; 4];
    file.read_exact(&mut magic).context("read magic")?;
    anyhow::ensure!(&magic == MAGIC, "not a field-compress container");
    let version = file.read_u8().context("read version")?;
    anyhow::ensure!(version == 1, "unsupported container version {}", version);
    let codec = file.read_u8().context("read codec")?;
    let nbytes = file.read_u64::<LittleEndian>().context("read payload length")?;
    let mut payload = vec![0u8; nbytes as usize];
    file.read_exact(&mut payload).context("read payload")?;
    Ok((codec, payload))
}
