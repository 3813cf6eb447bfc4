//! K-best sequences as a polars frame, written to CSV or Parquet.

use anyhow::{Context, Result};
use foldratio::solver::Sequence;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// One row per sequence: rank, moves joined with ',', landmark, difference.
pub fn frame(ranked: &[Sequence]) -> Result<DataFrame> {
    let rank: Vec<u32> = (1..=ranked.len() as u32).collect();
    let moves: Vec<String> = ranked
        .iter()
        .map(|s| {
            s.moves
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    let landmark: Vec<f64> = ranked.iter().map(|s| s.landmark).collect();
    let difference: Vec<f64> = ranked.iter().map(|s| s.difference).collect();
    let df = df!(
        "rank" => rank,
        "moves" => moves,
        "landmark" => landmark,
        "difference" => difference,
    )?;
    Ok(df)
}

pub fn write_csv(ranked: &[Sequence], out: &Path) -> Result<()> {
    let mut df = frame(ranked)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

pub fn write_parquet(ranked: &[Sequence], out: &Path) -> Result<()> {
    let mut df = frame(ranked)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    ParquetWriter::new(file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
