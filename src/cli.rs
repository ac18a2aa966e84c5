//! Command line driver for the `jsonmend` binary.

use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};

use crate::{StreamOptions, StreamRepairer, repair, repair_to_writer};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         Repairs malformed JSON. INPUT is an optional input file; when\n\
         omitted, input is read from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE       Write output to FILE (default stdout)\n\
               --overwrite         Rewrite INPUT in place (requires INPUT)\n\
               --stream            Repair chunk by chunk (lower memory)\n\
               --window-size BYTES Streaming window size (default 65536)\n\
               --chunk-size BYTES  Streaming read size (default 65536)\n\
               --aggregate         Aggregate streamed values into one array\n\
           -h, --help              Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    overwrite: bool,
    stream: bool,
    opts: StreamOptions,
}

fn parse_args() -> CliMode {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut mode = CliMode {
        input: None,
        output: None,
        overwrite: false,
        stream: false,
        opts: StreamOptions::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "--overwrite" => {
                mode.overwrite = true;
            }
            "--stream" => {
                mode.stream = true;
            }
            "--window-size" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing BYTES for --window-size");
                    std::process::exit(2);
                }
                mode.opts.window_size = args[i].parse().unwrap_or(65536);
            }
            "--chunk-size" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing BYTES for --chunk-size");
                    std::process::exit(2);
                }
                mode.opts.chunk_size = args[i].parse().unwrap_or(65536);
            }
            "--aggregate" => {
                mode.opts.aggregate = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {s}");
                std::process::exit(2);
            }
            path => {
                mode.input = Some(path.to_string());
            }
        }
        i += 1;
    }
    if mode.overwrite && mode.input.is_none() {
        eprintln!("--overwrite requires INPUT");
        std::process::exit(2);
    }
    mode
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mode = parse_args();

    if mode.overwrite {
        let path = mode.input.as_ref().ok_or("--overwrite requires INPUT")?;
        let content = fs::read_to_string(path)?;
        let repaired = repair(&content)?;
        fs::write(path, repaired)?;
        return Ok(());
    }

    let mut writer: Box<dyn Write> = match mode.output {
        Some(ref path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    if mode.stream {
        let mut reader: Box<dyn Read> = match mode.input {
            Some(ref path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(io::stdin()),
        };
        stream_copy(&mut reader, &mut writer, &mode.opts)?;
    } else {
        let mut content = String::new();
        match mode.input {
            Some(ref path) => content = fs::read_to_string(path)?,
            None => {
                io::stdin().read_to_string(&mut content)?;
            }
        }
        repair_to_writer(&content, &mut writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Drive a reader through the streaming repairer in `chunk_size` reads.
/// Reads land on arbitrary byte offsets, so bytes of a split UTF-8 sequence
/// are carried over to the next round.
fn stream_copy(
    reader: &mut dyn Read,
    mut writer: &mut dyn Write,
    opts: &StreamOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut repairer = StreamRepairer::new(opts.clone());
    let mut buf = vec![0u8; opts.chunk_size.max(1024)];
    let mut pending: Vec<u8> = Vec::new();
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        pending.extend_from_slice(&buf[..n]);
        let valid_len = match std::str::from_utf8(&pending) {
            Ok(_) => pending.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => return Err("input is not valid UTF-8".into()),
        };
        if valid_len > 0 {
            // Safe split: valid_len is a checked UTF-8 boundary.
            let chunk = std::str::from_utf8(&pending[..valid_len])?;
            repairer.push_to_writer(chunk, &mut writer)?;
            pending.drain(..valid_len);
        }
    }
    if !pending.is_empty() {
        return Err("input ends mid UTF-8 sequence".into());
    }
    repairer.flush_to_writer(&mut writer)?;
    Ok(())
}
