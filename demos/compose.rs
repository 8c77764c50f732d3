//! Renders one composition as SVG on stdout.
//!
//! Usage:
//! ```text
//! cargo run --example compose                  # random seed
//! cargo run --example compose -- 42            # fixed seed
//! cargo run --example compose -- 42 planar     # exact face recovery
//! ```

use mondrian::operations::compose::Compose;
use mondrian::operations::faces::FaceStrategy;
use mondrian::render::{draw, SvgCanvas};
use mondrian::{MondrianError, MondrianParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MondrianError> {
    // Default: WARN for everything, INFO for mondrian.
    // Override with RUST_LOG env var (e.g. RUST_LOG=mondrian=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mondrian=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let face_strategy = match args.next().as_deref() {
        Some("planar") => FaceStrategy::Planar,
        _ => FaceStrategy::Heuristic,
    };
    tracing::info!(seed, ?face_strategy, "composing");

    let params = MondrianParams {
        face_strategy,
        ..MondrianParams::default()
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let composition = Compose::new(params.clone()).execute(&mut rng)?;

    let mut canvas = SvgCanvas::new(params.width, params.height);
    draw(&composition, &mut canvas);
    print!("{}", canvas.finish());
    Ok(())
}
