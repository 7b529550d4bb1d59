use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closest::planar::rand::{draw_cloud, CloudCfg, ReplayToken};
use closest::{closest_pair, closest_pair_brute_force, ClosestPair, Point2};
use serde::Serialize;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod figure;
mod input;
mod provenance;

use provenance::{CloudRecord, RunRecord, Sidecar};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest pair of points: search, timing and figures")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the closest pair of a point file and print it
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::Both)]
        algo: Algo,
        /// Write the results as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Time both searches on the same input and check that they agree
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
    /// Render the points and the closest pair as SVG
    Figure {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible random point file (two-line format)
    Gen {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 0.0)]
        lo: f64,
        #[arg(long, default_value_t = 1000.0)]
        hi: f64,
        /// Keep fractional coordinates instead of integers
        #[arg(long)]
        float: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    Dnc,
    Brute,
    Both,
}

impl Algo {
    fn searches(self) -> &'static [Algo] {
        match self {
            Algo::Dnc => &[Algo::Dnc],
            Algo::Brute => &[Algo::Brute],
            Algo::Both => &[Algo::Dnc, Algo::Brute],
        }
    }

    fn label(self) -> &'static str {
        match self {
            Algo::Dnc => "divide and conquer",
            Algo::Brute => "brute force",
            Algo::Both => "both",
        }
    }
}

#[derive(Debug, Serialize)]
struct PairRecord {
    algo: &'static str,
    a: [f64; 2],
    b: [f64; 2],
    distance: f64,
    seconds: f64,
}

impl PairRecord {
    fn new(algo: Algo, cp: &ClosestPair, seconds: f64) -> Self {
        Self {
            algo: algo.label(),
            a: [cp.a.x, cp.a.y],
            b: [cp.b.x, cp.b.y],
            distance: cp.distance,
            seconds,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, algo, out } => run(&input, algo, out.as_deref(), cmd.tag),
        Action::Compare { input } => compare(&input, cmd.tag),
        Action::Figure { input, out } => figure(&input, &out, cmd.tag),
        Action::Gen {
            out,
            count,
            seed,
            index,
            lo,
            hi,
            float,
        } => gen(
            &out,
            CloudCfg {
                count,
                lo,
                hi,
                integer: !float,
            },
            ReplayToken { seed, index },
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

/// Run one search and measure its wall time in seconds.
fn solve(algo: Algo, points: &[Point2]) -> Result<(ClosestPair, f64)> {
    let start = Instant::now();
    let cp = match algo {
        Algo::Dnc => closest_pair(points)?,
        Algo::Brute => closest_pair_brute_force(points)?,
        Algo::Both => bail!("solve expects a single search"),
    };
    Ok((cp, start.elapsed().as_secs_f64()))
}

fn run(input: &Path, algo: Algo, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), algo = algo.label(), tag = ?tag, "run");
    let points = input::read_points(input)?;
    let mut records = Vec::new();
    for &a in algo.searches() {
        let (cp, secs) = solve(a, &points)?;
        println!(
            "closest pair ({}): ({}, {}) and ({}, {})",
            a.label(),
            cp.a.x,
            cp.a.y,
            cp.b.x,
            cp.b.y
        );
        println!("distance: {:.3}", cp.distance);
        println!("elapsed ({}): {:.3} s", a.label(), secs);
        records.push(PairRecord::new(a, &cp, secs));
    }

    if let Some(out) = out {
        create_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&records)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let run = RunRecord {
            command: "run",
            tag,
            algo: Some(algo.label()),
            input: Some(input.to_string_lossy().into_owned()),
            n: points.len(),
            distance: records.first().map(|r| r.distance),
            ..RunRecord::default()
        };
        provenance::write_sidecar(out, &run)?;
    }
    Ok(())
}

fn compare(input: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "compare");
    let points = input::read_points(input)?;
    let (dc, dc_secs) = solve(Algo::Dnc, &points)?;
    let (bf, bf_secs) = solve(Algo::Brute, &points)?;
    println!("n = {}", points.len());
    println!("{:>18}: d = {:.3}  {:.3} s", Algo::Dnc.label(), dc.distance, dc_secs);
    println!("{:>18}: d = {:.3}  {:.3} s", Algo::Brute.label(), bf.distance, bf_secs);
    if dc_secs > 0.0 {
        println!("speedup: {:.1}x", bf_secs / dc_secs);
    }
    if dc.distance != bf.distance {
        bail!(
            "searches disagree: divide and conquer {} vs brute force {}",
            dc.distance,
            bf.distance
        );
    }
    println!("agree: true");
    Ok(())
}

fn figure(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "figure");
    let points = input::read_points(input)?;
    let best = closest_pair(&points)?;
    create_parent(out)?;
    let file = fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let mut w = std::io::BufWriter::new(file);
    figure::write_svg(&mut w, &points, &best)?;
    w.flush()?;
    let run = RunRecord {
        command: "figure",
        tag,
        algo: Some(Algo::Dnc.label()),
        input: Some(input.to_string_lossy().into_owned()),
        n: points.len(),
        distance: Some(best.distance),
        ..RunRecord::default()
    };
    provenance::write_sidecar(out, &run)?;
    Ok(())
}

fn gen(out: &Path, cfg: CloudCfg, tok: ReplayToken, tag: Option<String>) -> Result<()> {
    tracing::info!(
        out = %out.display(),
        count = cfg.count,
        seed = tok.seed,
        index = tok.index,
        "gen"
    );
    if !(cfg.hi > cfg.lo) {
        bail!("empty coordinate range [{}, {})", cfg.lo, cfg.hi);
    }
    let points = draw_cloud(cfg, tok);
    create_parent(out)?;
    fs::write(out, input::format_two_line(&points))
        .with_context(|| format!("writing {}", out.display()))?;
    let run = RunRecord {
        command: "gen",
        tag,
        n: points.len(),
        cloud: Some(CloudRecord {
            seed: tok.seed,
            index: tok.index,
            lo: cfg.lo,
            hi: cfg.hi,
            integer: cfg.integer,
        }),
        ..RunRecord::default()
    };
    provenance::write_sidecar(out, &run)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", report_json(tag)?);
    Ok(())
}

fn report_json(tag: Option<String>) -> Result<String> {
    let run = RunRecord {
        command: "report",
        tag,
        ..RunRecord::default()
    };
    Ok(serde_json::to_string_pretty(&Sidecar::new(&run, Vec::new()))?)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
