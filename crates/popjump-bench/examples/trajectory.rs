//! Run the reference model once and print the trajectory, the jumps and
//! the coalescent as CSV sections on stdout.
//!
//! ```text
//! cargo run -p popjump-bench --example trajectory -- [seed] [lineages]
//! ```

use popjump_bench::{reference_config, reference_model};
use popjump_engine::{Coalescent, Simulation};
use popjump_test_utils::seeded_rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(42);
    let lineages: i64 = args.next().map(|s| s.parse::<i64>()).transpose()?.unwrap_or(100);

    let mut rng = seeded_rng(seed);
    let sim = Simulation::run(reference_model()?, reference_config(), &mut rng)?;
    let coal = Coalescent::new(&sim, lineages, &mut rng)?;

    println!("t,N");
    for (t, n) in sim.series() {
        println!("{t},{n}");
    }

    println!();
    println!("t,z_d,z_b,Np");
    for ((t, mark), np) in sim.realisation().iter().zip(sim.post_jump()) {
        println!("{t},{},{},{np}", mark.death, mark.birth);
    }

    println!();
    println!("t,lineages");
    for &(t, n) in coal.entries() {
        println!("{t},{n}");
    }

    eprintln!(
        "seed {seed}: {} jumps, N(T) = {:.6}, {} mergers, MRCA {}",
        sim.realisation().len(),
        sim.final_size(),
        coal.merge_count(),
        coal.most_recent_common_ancestor()
            .map_or_else(|| "not reached".to_string(), |t| format!("at t = {t:.6}")),
    );
    Ok(())
}
