//! Two simulated incident hotspots plus background noise, clustered with DBSCAN.
//!
//! Coordinates are metres in a local projected frame centred on the first hotspot.
//! Run with `RUST_LOG=hotspot=debug` to see the clustering trace.

use hotspot::{Dbscan, Point, Summary};
use rand::distr::Uniform;
use rand::prelude::*;
use rand_distr::Normal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn blob(
    rng: &mut StdRng,
    centre: Point,
    spread: f64,
    n: usize,
) -> Result<Vec<Point>, rand_distr::NormalError> {
    let dx = Normal::new(centre.x, spread)?;
    let dy = Normal::new(centre.y, spread)?;
    Ok((0..n)
        .map(|_| Point::new(dx.sample(rng), dy.sample(rng)))
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotspot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    // ~200 m spread around each hotspot; the second sits ~4.5 km to the north-west.
    let downtown = Point::new(0.0, 0.0);
    let mall = Point::new(-2_000.0, 4_150.0);
    let mut points = blob(&mut rng, downtown, 180.0, 50)?;
    points.extend(blob(&mut rng, mall, 180.0, 40)?);

    // Background incidents over a 50 km x 40 km county-sized box.
    let ux = Uniform::new(-25_000.0, 25_000.0)?;
    let uy = Uniform::new(-20_000.0, 20_000.0)?;
    points.extend((0..40).map(|_| Point::new(ux.sample(&mut rng), uy.sample(&mut rng))));

    let dbscan = Dbscan::default();
    let fit = dbscan.fit(&points)?;
    let summary = Summary::from_labels(&points, &fit.labels)?;

    println!("=== DBSCAN (eps={}m, min_samples={}) ===", dbscan.eps(), dbscan.min_samples());
    println!("{summary}");

    for c in &summary.clusters {
        let near = [("downtown", downtown), ("mall", mall)]
            .into_iter()
            .find(|(_, p)| p.distance(&c.centroid) < 1_000.0)
            .map_or("unnamed area", |(name, _)| name);
        println!("  cluster {}: {} incidents near {}", c.id, c.size, near);
    }

    Ok(())
}
