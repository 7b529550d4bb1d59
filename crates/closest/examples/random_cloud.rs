//! Closest pair of a reproducible random cloud, both ways.
//!
//! Usage:
//!   cargo run -p closest --example random_cloud -- [count] [seed]

use closest::prelude::*;

fn main() -> Result<(), ClosestPairError> {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let cfg = CloudCfg {
        count,
        ..CloudCfg::default()
    };
    let pts = draw_cloud(cfg, ReplayToken { seed, index: 0 });
    let dc = closest_pair(&pts)?;
    let bf = closest_pair_brute_force(&pts)?;
    for (name, cp) in [("divide and conquer", dc), ("brute force", bf)] {
        println!(
            "{name:>18}: ({}, {}) - ({}, {})  d = {:.3}",
            cp.a.x, cp.a.y, cp.b.x, cp.b.y, cp.distance
        );
    }
    Ok(())
}
