use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "glintrace")]
#[command(about = "A one-bounce sphere-over-checkerboard ray tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(
        long,
        default_value = "512",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Image width in pixels"
    )]
    pub width: u32,

    /// Image height in pixels
    #[arg(
        long,
        default_value = "512",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Image height in pixels"
    )]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(
        long,
        short = 's',
        default_value = "64",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Number of jittered samples per pixel"
    )]
    pub samples_per_pixel: u32,

    /// Seed for the jitter random stream
    #[arg(long, default_value = "0", help = "Seed for the jitter random stream")]
    pub seed: u64,

    /// Output file path (.png or .ppm); omit to stream binary PPM to stdout
    #[arg(
        short,
        long,
        help = "Output file path (.png or .ppm); omit to stream binary PPM to stdout"
    )]
    pub output: Option<String>,
}
