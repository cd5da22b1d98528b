use std::error::Error;

use clap::Parser;
use serde::Serialize;

use recbuf::{increment_images, StructuredBuffer, ValidatedRange};

mod cli;
use cli::{Cli, Commands};

/// Summary of a completed walk, for text or JSON output.
#[derive(Serialize)]
struct WalkSummary {
    element_count: usize,
    passes: u32,
    first_image: i64,
    last_image: i64,
}

/// Summary of a validated range, for text or JSON output.
#[derive(Serialize)]
struct RangeSummary {
    min: i64,
    max: i64,
    average: i64,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Walk {
            count,
            passes,
            json,
        } => run_walk(count, passes, json),
        Commands::Range { min, max, json } => run_range(min, max, json),
        Commands::Peek { index, count } => run_peek(index, count),
        Commands::Poke {
            index,
            value,
            count,
        } => run_poke(index, value, count),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_walk(count: usize, passes: u32, json: bool) -> Result<(), Box<dyn Error>> {
    let mut buf = StructuredBuffer::create(count)?;

    for _ in 0..passes {
        increment_images(&mut buf)?;
    }

    let (first_image, last_image) = if count > 0 {
        (buf.image(0)?, buf.image(count as i64 - 1)?)
    } else {
        (0, 0)
    };

    buf.release()?;

    let summary = WalkSummary {
        element_count: count,
        passes,
        first_image,
        last_image,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "walked {} records x{} passes: image[0] = {}, image[{}] = {}",
            summary.element_count,
            summary.passes,
            summary.first_image,
            summary.element_count.saturating_sub(1),
            summary.last_image,
        );
    }
    Ok(())
}

fn run_range(min: i64, max: i64, json: bool) -> Result<(), Box<dyn Error>> {
    let range = ValidatedRange::new(min, max)?;

    if json {
        let summary = RangeSummary {
            min: range.min(),
            max: range.max(),
            average: range.average(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} average = {}", range, range.average());
    }
    Ok(())
}

fn run_peek(index: i64, count: usize) -> Result<(), Box<dyn Error>> {
    let buf = StructuredBuffer::create(count)?;
    let value = buf.image(index)?;
    println!("image[{}] = {}", index, value);
    Ok(())
}

fn run_poke(index: i64, value: i64, count: usize) -> Result<(), Box<dyn Error>> {
    let mut buf = StructuredBuffer::create(count)?;
    buf.set_image(index, value)?;
    println!("image[{}] = {}", index, buf.image(index)?);
    Ok(())
}
