use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use ndarray as nd;
use wavefield::{ C32, config::RunConfig, field, telemetry };
use lib::write_npz;

/// Evaluate a closed-form wavefunction over a grid at a series of times and
/// write the result to an `.npz` archive.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML run configuration.
    #[arg(short, long)]
    config: PathBuf,

    /// Write here instead of the configured output path.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let args = Args::parse();
    let config = RunConfig::load(&args.config)
        .with_context(|| format!("bad config {}", args.config.display()))?;

    let system = config.system::<f32>();
    let x: nd::Array1<f32> = config.positions();
    let t: nd::Array1<f32> = config.times();
    wavefield::info!("{}: {} points, {} frames", system, x.len(), t.len());

    let q: nd::Array2<C32> = field::evaluate_frames(&system, &x, &t);
    let bad = q.iter().filter(|z| !z.re.is_finite() || !z.im.is_finite()).count();
    if bad > 0 {
        wavefield::warn!("{} of {} samples are not finite", bad, q.len());
    }
    wavefield::info!(
        "integrated probability at t = {}: {}",
        t[0], field::integrated_probability(&system, &x, &q.row(0)),
    );

    let outpath = args.output.unwrap_or(config.output.path);
    write_npz!(
        &outpath,
        arrays: {
            "x" => &x,
            "t" => &t,
        },
        field: &q,
    )?;
    wavefield::info!("wrote {}", outpath.display());
    Ok(())
}
