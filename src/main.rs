mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::fs;
use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid --tag hex: {0}")]
    TagInvalidHex(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cmac(#[from] cmac_aes::Error),
}

fn main() {
    if let Err(e) = cmac_cli() {
        eprintln!("error: {e}");
    }
}

fn cmac_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute(compute) => {
            let input_path = compute.common.input; // move ownership
            let key_path = compute.common.key;

            // read message from input_path
            let message = fs::read(input_path)?;

            // read or generate key
            let key = if compute.gen_key {
                let rand_key = match compute.key_size {
                    args::KeySize::Bits128 => cmac_aes::random_key(cmac_aes::KeySize::Bits128)?,
                    args::KeySize::Bits192 => cmac_aes::random_key(cmac_aes::KeySize::Bits192)?,
                    args::KeySize::Bits256 => cmac_aes::random_key(cmac_aes::KeySize::Bits256)?,
                };
                fs::write(key_path, &rand_key)?;
                rand_key
            } else {
                // read key from key_path
                fs::read(key_path)?
            };

            let start = Instant::now();
            let tag = cmac_aes::compute_cmac(&message, &key)?;
            let duration = start.elapsed();

            if let Some(output_path) = compute.output {
                fs::write(output_path, tag)?;
            }

            print!("tag = ");
            for b in &tag {
                print!("{:02x}", b);
            }
            println!();

            println!(
                "Authenticated {} bytes in {} ms",
                message.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Verify(verify) => {
            let input_path = verify.common.input;
            let key_path = verify.common.key;

            // read inputs
            let message = fs::read(input_path)?;
            let key = fs::read(key_path)?;
            let tag = parse_tag(&verify.tag)?;

            let start = Instant::now();
            cmac_aes::verify_cmac(&message, &key, &tag)?;
            let duration = start.elapsed();

            println!(
                "Tag OK: verified {} bytes in {} ms",
                message.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

fn parse_tag(s: &str) -> Result<Vec<u8>, std::num::ParseIntError> {
    let mut hex: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if hex.len() % 2 == 1 {
        hex.insert(0, '0');
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
}
