use env_logger::Target;
use log::LevelFilter;

/// Initialize the logger at the given level, honouring RUST_LOG overrides.
///
/// Logs go to stderr unconditionally so they can never corrupt a PPM stream
/// on stdout.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(Target::Stderr)
        .init();
}
