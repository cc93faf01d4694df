use std::path::PathBuf;
use ndarray as nd;
use wavefield::{
    complex::C64,
    field,
    system::QuantumSystem,
    telemetry,
    units,
    utils,
};
use lib::write_npz;

const N_MAX: u32 = 10;
const MASS: f64 = 1.0;
const OMEGA: f64 = 1.0;
const HBAR: f64 = 1.0;

// first few harmonic oscillator eigenstates in natural units
fn main() -> anyhow::Result<()> {
    telemetry::init();
    let gs_length = units::oscillator_length(MASS, OMEGA, HBAR);
    let x: nd::Array1<f64>
        = field::linspace((-10.0 * gs_length, 10.0 * gs_length), 3001);
    let dx = x[1] - x[0];

    let systems: Vec<QuantumSystem<f64>>
        = (0..=N_MAX)
        .map(|n| QuantumSystem::harmonic_oscillator(n, OMEGA, MASS, HBAR))
        .collect();
    let energies: nd::Array1<f64> = systems.iter().map(|sys| sys.energy()).collect();
    let mut wfs: nd::Array2<C64>
        = nd::Array2::zeros((systems.len(), x.len()));
    for (sys, mut row) in systems.iter().zip(wfs.rows_mut()) {
        field::par_evaluate_into(sys, &x, 0.0, &mut row)?;
    }

    // largest deviation of the overlap matrix from the identity
    let overlap_err: f64
        = wfs.outer_iter().enumerate()
        .flat_map(|(m, qm)| {
            wfs.outer_iter().enumerate()
                .map(move |(n, qn)| {
                    let delta = if m == n { 1.0 } else { 0.0 };
                    (utils::wf_dot(&qm, &qn, dx) - delta).norm()
                })
        })
        .fold(0.0, f64::max);
    wavefield::info!("max |<m|n> - δ(m, n)| = {:.3e}", overlap_err);

    let wf: nd::Array2<f64> = field::project(&wfs, field::Observable::Real);
    let outdir = PathBuf::from("output");
    write_npz!(
        outdir.join("qho.npz"),
        arrays: {
            "x" => &x,
            "e" => &energies,
            "wf" => &wf,
        },
    )?;
    Ok(())
}
