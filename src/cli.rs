use clap::{Parser, Subcommand};

use recbuf::DEMO_ELEMENT_COUNT;

#[derive(Parser)]
#[command(
    name = "recbuf",
    about = "Bounds-checked structured record buffer demos",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Allocate a buffer and run the image-field increment walk
    Walk {
        /// Number of records to allocate
        #[arg(short, long, default_value_t = DEMO_ELEMENT_COUNT)]
        count: usize,

        /// Number of walk passes over the buffer
        #[arg(short, long, default_value_t = 2)]
        passes: u32,

        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Construct a validated range and print its average
    Range {
        /// Lower bound (must not exceed --max)
        #[arg(long)]
        min: i64,

        /// Upper bound
        #[arg(long)]
        max: i64,

        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read one image field from a fresh zeroed buffer
    Peek {
        /// Record index (negative or past-the-end indices are rejected)
        index: i64,

        /// Number of records to allocate
        #[arg(short, long, default_value_t = DEMO_ELEMENT_COUNT)]
        count: usize,
    },

    /// Write one image field in a fresh buffer and read it back
    Poke {
        /// Record index (negative or past-the-end indices are rejected)
        index: i64,

        /// Value to store in the image field
        value: i64,

        /// Number of records to allocate
        #[arg(short, long, default_value_t = DEMO_ELEMENT_COUNT)]
        count: usize,
    },
}
