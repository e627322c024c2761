use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use libgolomb::{ContainerKind, ImagePredictor, NegativeMode};
use regolomb::{bits, ContainerInfo, EncodeOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regolomb")]
#[command(version)]
#[command(about = "Golomb lossless audio (GBL1) and grayscale image (GIMG) converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a PCM16 WAV to GBL1, or a grayscale image to GIMG
    Encode {
        /// Input WAV or image file (png, pgm, jpeg, ...)
        input: PathBuf,
        /// Output GBL1 / GIMG file
        output: PathBuf,
        /// Image predictor (0 = left, 1 = median)
        #[arg(default_value = "1")]
        predictor: u8,
        /// Code audio residuals as sign + magnitude instead of zigzag
        #[arg(long)]
        sign_magnitude: bool,
    },
    /// Decode GBL1 to WAV, or GIMG to an image (format from extension)
    Decode {
        /// Input GBL1 / GIMG file
        input: PathBuf,
        /// Output WAV or image file
        output: PathBuf,
    },
    /// Show information about a GBL1 / GIMG file
    Info {
        /// Input GBL1 / GIMG file
        input: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encode integers to golomb bit strings, or decode a bit string
    Golomb {
        /// Golomb parameter (>= 1)
        #[arg(short)]
        m: u64,
        /// Negative number handling: sign or interleave
        #[arg(long, default_value = "interleave")]
        mode: String,
        #[command(subcommand)]
        op: GolombOp,
    },
}

#[derive(Subcommand)]
enum GolombOp {
    /// Encode integers, then decode the concatenated stream
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode a string of 0/1 characters
    Decode {
        #[arg(required = true)]
        bits: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            predictor,
            sign_magnitude,
        } => {
            let mode = if sign_magnitude {
                NegativeMode::SignMagnitude
            } else {
                NegativeMode::ZigzagInterleaved
            };
            let predictor = ImagePredictor::try_from(predictor)?;
            let options = EncodeOptions::default()
                .with_predictor(predictor)
                .with_negative_mode(mode);
            encode(&input, &output, &options)?;
        }
        Commands::Decode { input, output } => {
            decode(&input, &output)?;
        }
        Commands::Info { input, json } => {
            info(&input, json)?;
        }
        Commands::Golomb { m, mode, op } => {
            let mode = bits::parse_mode(&mode)?;
            match op {
                GolombOp::Encode { values } => golomb_encode(m, mode, &values)?,
                GolombOp::Decode { bits } => golomb_decode(m, mode, &bits.join(" "))?,
            }
        }
    }

    Ok(())
}

fn encode(input: &PathBuf, output: &PathBuf, options: &EncodeOptions) -> Result<()> {
    println!("Reading {}...", input.display());

    let file_info = regolomb::encode_file(input, output, options)?;

    println!("Done!");
    println!("  Output: {}", output.display());
    print_summary(&file_info);

    Ok(())
}

fn decode(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Reading {}...", input.display());

    let kind = regolomb::decode_file(input, output)?;

    println!("Done!");
    match kind {
        ContainerKind::Audio => println!("  Output: {} (WAV)", output.display()),
        ContainerKind::Image => println!("  Output: {} (image)", output.display()),
    }

    Ok(())
}

fn info(input: &PathBuf, json: bool) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;
    let file_info = regolomb::get_info(&data)?;

    if json {
        let json_str =
            serde_json::to_string_pretty(&file_info).context("Failed to serialize info")?;
        println!("{}", json_str);
        return Ok(());
    }

    if let Some(ref h) = file_info.audio {
        println!("GBL1 Audio File");
        println!("───────────────────────────────");
        println!("  Sample rate: {} Hz", h.sample_rate);
        println!("  Channels:    {}", h.channels);
        println!("  Bit depth:   {}", h.bits_per_sample);
        println!("  Frames:      {}", h.frames);
        println!("  Negatives:   {:?}", h.negative_mode);
    }
    if let Some(ref h) = file_info.image {
        println!("GIMG Image File");
        println!("───────────────────────────────");
        println!("  Size:        {}x{}", h.width, h.height);
        println!("  Predictor:   {:?}", h.predictor);
        println!("  Golomb m:    {}", h.m);
    }
    print_summary(&file_info);

    Ok(())
}

fn print_summary(file_info: &ContainerInfo) {
    println!("  Codec:       libgolomb {}", file_info.codec_version);
    println!("  Payload:     {} bits", file_info.payload_bits);
    println!(
        "  Size:        {} bytes ({:.2}x compression)",
        file_info.file_size, file_info.compression_ratio
    );
}

fn golomb_encode(m: u64, mode: NegativeMode, values: &[i64]) -> Result<()> {
    let (coded, stream) = bits::encode_values(m, mode, values)?;

    println!("Parameters: m={} mode={:?}", m, mode);
    println!();
    for (i, c) in coded.iter().enumerate() {
        println!(
            "Value[{}] = {} -> bits: {} (len={})",
            i,
            c.value,
            c.bits,
            c.bits.len()
        );
    }

    let concat = stream.to_bit_string();
    println!();
    println!("Concatenated bitstream ({} bits):", concat.len());
    println!("{}", concat);
    println!();

    println!("Decoding concatenated stream to verify round-trip:");
    let decoded = bits::decode_bit_string(m, mode, &concat)?;
    for (i, d) in decoded.iter().enumerate() {
        println!("Decoded[{}] = {} (consumed={} bits)", i, d.value, d.consumed);
    }

    let back: Vec<i64> = decoded.iter().map(|d| d.value).collect();
    if back != values {
        bail!("Round-trip mismatch");
    }
    println!(
        "Round-trip OK: encoded {} values into {} bits.",
        values.len(),
        concat.len()
    );

    Ok(())
}

fn golomb_decode(m: u64, mode: NegativeMode, raw: &str) -> Result<()> {
    let decoded = bits::decode_bit_string(m, mode, raw)?;

    println!("Parameters: m={} mode={:?}", m, mode);
    println!();
    for (i, d) in decoded.iter().enumerate() {
        println!("Decoded[{}] = {} (consumed={} bits)", i, d.value, d.consumed);
    }
    println!();
    println!("Decoded {} value(s).", decoded.len());

    Ok(())
}
