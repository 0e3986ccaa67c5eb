use geojson::GeoJson;
use geoturf::meta::prop_each;
use geoturf::{points_within_polygon, JoinOptions};
use std::ops::ControlFlow;

const POINTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"name": "Se"}, "geometry": {"type": "Point", "coordinates": [-46.6318, -23.5523]}},
    {"type": "Feature", "properties": {"name": "Luz"}, "geometry": {"type": "Point", "coordinates": [-46.6246, -23.5325]}},
    {"type": "Feature", "properties": {"name": "Liberdade"}, "geometry": {"type": "Point", "coordinates": [-46.643, -23.557]}},
    {"type": "Feature", "properties": {"name": "Montreal"}, "geometry": {"type": "Point", "coordinates": [-73, 45]}}
  ]
}"#;

const DISTRICTS: &str = r#"{
  "type": "Feature",
  "properties": {"name": "Centro"},
  "geometry": {
    "type": "Polygon",
    "coordinates": [[
      [-46.653, -23.543], [-46.634, -23.5346], [-46.613, -23.543], [-46.614, -23.559],
      [-46.631, -23.567], [-46.653, -23.560], [-46.653, -23.543]
    ]]
  }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let points: GeoJson = POINTS.parse()?;
    let districts: GeoJson = DISTRICTS.parse()?;

    let inside = points_within_polygon(&points, &districts, &JoinOptions::default())?;

    let _ = prop_each(&inside, |properties, index| {
        let name = properties
            .and_then(|p| p.get("name"))
            .and_then(|name| name.as_str())
            .unwrap_or("unnamed");
        println!("{index}: {name}");
        ControlFlow::<()>::Continue(())
    });

    Ok(())
}
