pub mod hurst;
pub mod relief;

pub use hurst::{compute_hurst, HurstResult};
pub use relief::{bilinear, compute_stats, GridStats};
