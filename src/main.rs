//! `qrseq` command line tool.
//!
//! Splits a payload into carrier texts, joins carrier texts back into a
//! payload, or simulates a receiver scanning frames in random order.

mod cli;

use std::{
    fs,
    io::{self, BufRead, BufReader, Read, Write},
    path::Path,
};

use clap::Parser;
use qrseq::{AbsorbStatus, FrameSize, Sequence};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::cli::{Cli, Command};

type BoxError = Box<dyn std::error::Error>;

fn main() -> Result<(), BoxError> {
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Split {
            frame_size,
            input,
            output,
        } => split(frame_size, input.as_deref(), output.as_deref()),
        Command::Join { input, output } => join(input.as_deref(), output.as_deref()),
        Command::Simulate {
            frame_size,
            input,
            seed,
        } => simulate(frame_size, input.as_deref(), seed),
    }
}

fn split(frame_size: Option<u16>, input: Option<&Path>, output: Option<&Path>) -> Result<(), BoxError> {
    let data = read_input(input)?;
    let sequence = Sequence::from_data(&data, pick_frame_size(frame_size, data.len())?)?;
    tracing::info!(
        bytes = data.len(),
        frames = sequence.received(),
        frame_size = ?sequence.frame_size(),
        "payload split"
    );

    let mut out = open_output(output)?;
    for text in sequence.carrier_texts()? {
        writeln!(out, "{text}")?;
    }
    out.flush()?;
    Ok(())
}

fn join(input: Option<&Path>, output: Option<&Path>) -> Result<(), BoxError> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(fs::File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut sequence = Sequence::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match sequence.absorb_carrier_text(&line) {
            Ok(AbsorbStatus::AlreadyComplete) => break,
            Ok(status) => {
                tracing::info!(?status, progress = sequence.progress(), "frame absorbed");
            }
            Err(err) => tracing::warn!(%err, "skipping carrier text"),
        }
    }

    let data = sequence.reconstruct()?;
    let mut out = open_output(output)?;
    out.write_all(&data)?;
    out.flush()?;
    Ok(())
}

fn simulate(frame_size: Option<u16>, input: Option<&Path>, seed: u64) -> Result<(), BoxError> {
    let data = read_input(input)?;
    let source = Sequence::from_data(&data, pick_frame_size(frame_size, data.len())?)?;
    let texts = source.carrier_texts()?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sink = Sequence::new();
    let mut scans = 0_usize;
    while !sink.is_complete() {
        let pick = rng.gen_range(0..texts.len());
        scans += 1;
        if sink.absorb_carrier_text(&texts[pick])? == AbsorbStatus::Duplicate {
            tracing::debug!(pick, "duplicate scan");
            continue;
        }
        tracing::info!(
            pick,
            progress = sink.progress(),
            missing = sink.missing().len(),
            "frame scanned"
        );
    }

    if sink.reconstruct()? != data {
        return Err("reconstructed payload differs from input".into());
    }
    println!(
        "recovered {} bytes from {} frames after {scans} scans",
        data.len(),
        texts.len()
    );
    Ok(())
}

fn pick_frame_size(requested: Option<u16>, len: usize) -> Result<FrameSize, BoxError> {
    match requested {
        Some(raw) => Ok(FrameSize::try_from(raw)?),
        // Oversized input falls through to the chunker, which reports the limit.
        None => Ok(FrameSize::smallest_for(len).unwrap_or(FrameSize::Bytes1024)),
    }
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
