use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_lm_core::config::RunConfig;
use rs_lm_core::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The single optional argument is a JSON configuration file; every
    // field falls back to the historical defaults when absent
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_file(&path)?,
        None => RunConfig::default(),
    };

    // A fixed seed makes the sampled probability records reproducible;
    // everything else in the run is deterministic anyway
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    pipeline::run(&config, &mut rng)?;

    log::info!(
        "wrote {} and {}",
        config.unigram_probabilities_file.display(),
        config.bigram_probabilities_file.display()
    );

    Ok(())
}
