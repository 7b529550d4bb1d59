//! Random planar point clouds (uniform box + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for the agreement tests, the benchmarks and the CLI
//!   `gen` command. A `(seed, index)` token always yields the same cloud.
//!
//! Model
//! - `count` points drawn uniformly from `[lo, hi)²`, optionally snapped to
//!   integers (the classic data-file shape: small integer grids produce
//!   duplicates and ties on purpose).

use super::types::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Lower bound for both coordinates.
    pub lo: f64,
    /// Upper bound for both coordinates (exclusive). Must exceed `lo`.
    pub hi: f64,
    /// Round coordinates down to integers.
    pub integer: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            lo: 0.0,
            hi: 1000.0,
            integer: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud. Returns an empty vector if `hi <= lo` or either bound is
/// not finite.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point2> {
    if !(cfg.lo.is_finite() && cfg.hi.is_finite()) || cfg.hi <= cfg.lo {
        return Vec::new();
    }
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| {
            let x = rng.gen_range(cfg.lo..cfg.hi);
            let y = rng.gen_range(cfg.lo..cfg.hi);
            if cfg.integer {
                Point2::new(x.floor(), y.floor())
            } else {
                Point2::new(x, y)
            }
        })
        .collect()
}
