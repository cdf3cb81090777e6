pub mod detector;
pub mod ranges;
pub mod recon;
pub mod resolver;
