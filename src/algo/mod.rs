//! Stroke processing algorithms.
//!
//! - **Texture mapping**: per-point UV factor/rotation and fill UV transforms
//!   ([`texture`])
//! - **Sampling**: Halton low-discrepancy sequences ([`halton`])
//! - **Hashing**: stable string and integer hashes for seeding ([`hash`])

pub mod halton;
pub mod hash;
mod progress;
pub mod texture;

pub use progress::Progress;
