use std::time::Instant;

use mazecarve::{Algorithm, Generator, Seed, config::validate_size};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let size = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(255);
    validate_size(size)?;

    for algorithm in Algorithm::ALL {
        let mut generator = Generator::new(algorithm, Seed::Fixed(0));
        let started = Instant::now();
        let mut path_cells = 0;
        for _ in 0..num_iters {
            let mut maze = generator.generate(size, size);
            path_cells += maze.solve().map_or(0, <[_]>::len);
        }
        tracing::info!(
            "[profile] {}: {} iterations of {}x{} in {:?} ({} solution cells)",
            algorithm,
            num_iters,
            size,
            size,
            started.elapsed(),
            path_cells
        );
    }
    Ok(())
}
