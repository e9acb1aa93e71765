//! locref - resolve location references from the command line
//!
//! This is the composition root that wires together all the components.
//!
//! Usage:
//!   locref <format> <reference>
//!   locref bbox <minLon,minLat,maxLon,maxLat>
//!   locref radius <lat> <lon> <radius> [unit]

use anyhow::Context;
use locref::adapters::outbound::{
    build_backend, DashMapParentLocationRepository, GeoTypesGeometryFactory,
};
use locref::{load_config, DistanceUnit, GeometryFactory, LocationResolver, SpatialSearch};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

const USAGE: &str = "usage:
  locref <format> <reference>
  locref bbox <minLon,minLat,maxLon,maxLat>
  locref radius <lat> <lon> <radius> [unit]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging; stdout is reserved for results
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "locref backend={} input_unit={} output_unit={} srid={:?}",
        cfg.backend,
        cfg.input_unit,
        cfg.output_unit,
        cfg.srid
    );

    // ===== COMPOSITION ROOT =====

    let factory: Arc<dyn GeometryFactory> = Arc::new(GeoTypesGeometryFactory::new(cfg.srid));
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [cmd, bbox] if cmd == "bbox" => {
            let search = SpatialSearch::new(factory, cfg.input_unit, cfg.output_unit);
            let polygon = search.search_polygon_from_bbox(bbox)?;
            println!("{}", polygon.to_ewkt());
        }
        [cmd, lat, lon, radius, rest @ ..] if cmd == "radius" && rest.len() <= 1 => {
            let lat: f64 = lat.parse().with_context(|| format!("invalid latitude '{}'", lat))?;
            let lon: f64 = lon.parse().with_context(|| format!("invalid longitude '{}'", lon))?;
            let radius: f64 = radius
                .parse()
                .with_context(|| format!("invalid radius '{}'", radius))?;
            let unit = rest
                .first()
                .map(|u| u.parse::<DistanceUnit>())
                .transpose()?;

            let search = SpatialSearch::new(factory, cfg.input_unit, cfg.output_unit);
            let polygon = search.search_polygon_from_point_radius(lat, lon, radius, unit)?;
            println!("{}", polygon.to_ewkt());
        }
        [format, reference] => {
            let parents = Arc::new(DashMapParentLocationRepository::new());
            let backend = build_backend(&cfg, factory, parents)?;
            let resolver = LocationResolver::new(backend);

            let resolved = resolver.resolve(reference, format).await?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);

            if !resolved.is_resolved() {
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
