//! Conversions between WKT text, GeoJSON, and `geo` geometries

use fieldgeo_core::error::{FieldgeoError, Result};
use geo::Geometry;
use geojson::{Feature, GeoJson, JsonObject};
use wkt::types::{Coord, Point};
use wkt::{ToWkt, Wkt};

/// Parse WKT into a geometry.
///
/// The whole input must be one geometry: text after the closing `)` or
/// `EMPTY` is rejected. Only 2D coordinates are accepted, and `POINT EMPTY`
/// is rejected since neither `geo` nor GeoJSON can carry it as a point.
pub fn wkt_to_geometry(wkt: &str) -> Result<Geometry<f64>> {
    let text = wkt.trim();
    let parsed: Wkt<f64> = text.parse().map_err(|e| FieldgeoError::parse("WKT", e))?;

    let end = geometry_end(text)
        .ok_or_else(|| FieldgeoError::parse("WKT", "unterminated geometry"))?;
    let rest = text[end..].trim_start();
    if !rest.is_empty() {
        return Err(FieldgeoError::parse(
            "WKT",
            format!("unexpected text after geometry: '{}'", rest),
        ));
    }

    check_supported(&parsed).map_err(|reason| FieldgeoError::parse("WKT", reason))?;
    Geometry::<f64>::try_from(parsed).map_err(|e| FieldgeoError::parse("WKT", e))
}

/// Byte offset just past the geometry: its outermost closing paren, or a
/// top-level `EMPTY`
fn geometry_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut word_start = None;

    for (i, c) in text.char_indices() {
        if c.is_ascii_alphabetic() {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            if depth == 0 && text[start..i].eq_ignore_ascii_case("EMPTY") {
                return Some(i);
            }
        }
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    let start = word_start?;
    (depth == 0 && text[start..].eq_ignore_ascii_case("EMPTY")).then_some(text.len())
}

fn check_supported(wkt: &Wkt<f64>) -> std::result::Result<(), &'static str> {
    match wkt {
        Wkt::Point(point) => check_point(point),
        Wkt::LineString(line) => check_coords(&line.0),
        Wkt::Polygon(polygon) => polygon.0.iter().try_for_each(|ring| check_coords(&ring.0)),
        Wkt::MultiPoint(points) => points.0.iter().try_for_each(check_point),
        Wkt::MultiLineString(lines) => lines.0.iter().try_for_each(|line| check_coords(&line.0)),
        Wkt::MultiPolygon(polygons) => polygons
            .0
            .iter()
            .flat_map(|polygon| &polygon.0)
            .try_for_each(|ring| check_coords(&ring.0)),
        Wkt::GeometryCollection(collection) => collection.0.iter().try_for_each(check_supported),
    }
}

fn check_point(point: &Point<f64>) -> std::result::Result<(), &'static str> {
    match &point.0 {
        Some(coord) => check_coords(std::slice::from_ref(coord)),
        None => Err("POINT EMPTY is not supported"),
    }
}

fn check_coords(coords: &[Coord<f64>]) -> std::result::Result<(), &'static str> {
    if coords.iter().any(|c| c.z.is_some() || c.m.is_some()) {
        return Err("only 2D coordinates are supported, found Z or M values");
    }
    Ok(())
}

/// Serialize a geometry as WKT
pub fn geometry_to_wkt(geometry: &Geometry<f64>) -> String {
    geometry.wkt_string()
}

/// Build the GeoJSON geometry object for a geometry
pub fn geometry_to_geojson_geometry(geometry: &Geometry<f64>) -> geojson::Geometry {
    geojson::Geometry::new(geojson::Value::from(geometry))
}

/// Serialize a geometry as a GeoJSON geometry string
pub fn geometry_to_geojson(geometry: &Geometry<f64>) -> Result<String> {
    serde_json::to_string(&geometry_to_geojson_geometry(geometry)).map_err(|e| {
        FieldgeoError::Serialization(format!("Failed to serialize geometry as GeoJSON: {}", e))
    })
}

/// Parse WKT and serialize it as a GeoJSON geometry string
pub fn wkt_to_geojson(wkt: &str) -> Result<String> {
    let geometry = wkt_to_geometry(wkt)?;
    geometry_to_geojson(&geometry)
}

/// Parse WKT and wrap it in a GeoJSON Feature with empty properties
pub fn wkt_to_feature(wkt: &str) -> Result<Feature> {
    let geometry = wkt_to_geometry(wkt)?;
    Ok(Feature {
        bbox: None,
        geometry: Some(geometry_to_geojson_geometry(&geometry)),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    })
}

/// Nested coordinate arrays of the GeoJSON form of a WKT geometry.
///
/// A point yields `[x, y]`, a polygon `[[[x, y], ...], ...]`, and so on.
/// Geometry collections have no `coordinates` member and are rejected.
pub fn geometry_wkt_to_coordinate_list(wkt: &str) -> Result<serde_json::Value> {
    let geometry = wkt_to_geometry(wkt)?;
    if matches!(geometry, Geometry::GeometryCollection(_)) {
        return Err(FieldgeoError::Serialization(
            "GeometryCollection has no coordinate array".to_string(),
        ));
    }

    let value = serde_json::to_value(geometry_to_geojson_geometry(&geometry)).map_err(|e| {
        FieldgeoError::Serialization(format!("Failed to serialize geometry as GeoJSON: {}", e))
    })?;

    match value {
        serde_json::Value::Object(mut object) => object.remove("coordinates").ok_or_else(|| {
            FieldgeoError::Serialization("GeoJSON geometry has no coordinates member".to_string())
        }),
        other => Err(FieldgeoError::Serialization(format!(
            "Expected a GeoJSON object, got {}",
            other
        ))),
    }
}

/// Convert a GeoJSON geometry (or a Feature carrying one) to WKT
pub fn geojson_to_wkt(geojson: &serde_json::Value) -> Result<String> {
    let parsed: GeoJson =
        serde_json::from_value(geojson.clone()).map_err(|e| FieldgeoError::parse("GeoJSON", e))?;
    let geometry = geojson_to_geometry(parsed)?;
    Ok(geometry_to_wkt(&geometry))
}

/// Convert GeoJSON text to WKT
pub fn geojson_str_to_wkt(geojson: &str) -> Result<String> {
    let parsed: GeoJson = geojson.parse().map_err(|e| FieldgeoError::parse("GeoJSON", e))?;
    let geometry = geojson_to_geometry(parsed)?;
    Ok(geometry_to_wkt(&geometry))
}

/// Extract the geometry of a GeoJSON document
pub fn geojson_to_geometry(geojson: GeoJson) -> Result<Geometry<f64>> {
    let geometry = match geojson {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature
            .geometry
            .ok_or_else(|| FieldgeoError::parse("GeoJSON", "Feature has no geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(FieldgeoError::parse(
                "GeoJSON",
                "expected a geometry or a Feature, got a FeatureCollection",
            ))
        }
    };

    Geometry::<f64>::try_from(geometry).map_err(|e| FieldgeoError::parse("GeoJSON", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELD: &str =
        "POLYGON((-93.65 42.02,-93.64 42.02,-93.64 42.03,-93.65 42.03,-93.65 42.02))";

    #[test]
    fn test_wkt_to_geometry_polygon() {
        let geometry = wkt_to_geometry(FIELD).unwrap();
        match geometry {
            Geometry::Polygon(poly) => {
                assert_eq!(poly.exterior().0.len(), 5);
                assert!(poly.interiors().is_empty());
            }
            other => panic!("Expected Polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_wkt_to_geometry_malformed() {
        for bad in [
            "POLYGON((0 0, 1 0",
            "CIRCLE(1 2 3)",
            "",
            "POINT(a b)",
            "POINT(1 2) garbage",
            "POLYGON((0 0,1 0,1 1,0 0)) x",
            "POINT(1 2))",
            "POINT EMPTY POINT(1 2)",
        ] {
            let err = wkt_to_geometry(bad).unwrap_err();
            assert!(
                matches!(err, FieldgeoError::Parse { ref input, .. } if input == "WKT"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_wkt_to_geometry_allows_surrounding_whitespace() {
        let geometry = wkt_to_geometry("  POINT (1 2)\n").unwrap();
        assert_eq!(geometry, Geometry::Point(geo::Point::new(1.0, 2.0)));
        assert!(wkt_to_geometry("LINESTRING EMPTY ").is_ok());
        assert!(wkt_to_geometry("GEOMETRYCOLLECTION(POINT(1 2),LINESTRING EMPTY)").is_ok());
    }

    #[test]
    fn test_wkt_to_geometry_rejects_empty_point() {
        for bad in ["POINT EMPTY", "GEOMETRYCOLLECTION(POINT EMPTY)"] {
            let err = wkt_to_geometry(bad).unwrap_err();
            assert!(matches!(err, FieldgeoError::Parse { .. }), "{bad}");
        }
        assert!(wkt_to_geojson("POINT EMPTY").is_err());
    }

    #[test]
    fn test_wkt_to_geometry_rejects_z_and_m() {
        for bad in [
            "POINT Z(1 2 3)",
            "POINT M(1 2 3)",
            "LINESTRING ZM(0 0 1 1,1 1 1 1)",
            "MULTIPOLYGON Z(((0 0 1,1 0 1,1 1 1,0 0 1)))",
        ] {
            let err = wkt_to_geometry(bad).unwrap_err();
            assert!(matches!(err, FieldgeoError::Parse { .. }), "{bad}");
        }
        assert!(geometry_wkt_to_coordinate_list("POINT Z(1 2 3)").is_err());
    }

    #[test]
    fn test_wkt_to_geojson_point() {
        let geojson = wkt_to_geojson("POINT(10.5 -3.25)").unwrap();
        let value: serde_json::Value = serde_json::from_str(&geojson).unwrap();
        assert_eq!(value["type"], "Point");
        assert_eq!(value["coordinates"], json!([10.5, -3.25]));
    }

    #[test]
    fn test_coordinate_list_polygon() {
        let coords = geometry_wkt_to_coordinate_list(FIELD).unwrap();
        let rings = coords.as_array().unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].as_array().unwrap().len(), 5);
        assert_eq!(rings[0][1], json!([-93.64, 42.02]));
    }

    #[test]
    fn test_coordinate_list_rejects_collection() {
        let err = geometry_wkt_to_coordinate_list("GEOMETRYCOLLECTION(POINT(1 2))").unwrap_err();
        assert!(matches!(err, FieldgeoError::Serialization(_)));
    }

    #[test]
    fn test_wkt_to_feature_has_empty_properties() {
        let feature = wkt_to_feature("POINT(1 2)").unwrap();
        assert!(feature.geometry.is_some());
        assert_eq!(feature.properties.map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_geojson_to_wkt_geometry_and_feature() {
        let geometry = json!({"type": "Point", "coordinates": [30.0, 10.0]});
        let wkt = geojson_to_wkt(&geometry).unwrap();
        assert_eq!(wkt_to_geometry(&wkt).unwrap(), Geometry::Point(geo::Point::new(30.0, 10.0)));

        let feature = json!({
            "type": "Feature",
            "properties": {"field_id": 7},
            "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
        });
        let wkt = geojson_to_wkt(&feature).unwrap();
        assert!(wkt.starts_with("LINESTRING"));
    }

    #[test]
    fn test_geojson_to_wkt_rejects_invalid_input() {
        assert!(geojson_to_wkt(&json!({"type": "Point"})).is_err());
        let empty_feature = json!({"type": "Feature", "properties": {}, "geometry": null});
        assert!(geojson_to_wkt(&empty_feature).is_err());
        assert!(geojson_to_wkt(&json!({"type": "FeatureCollection", "features": []})).is_err());
        assert!(geojson_str_to_wkt("{not json").is_err());
    }

    #[test]
    fn test_polygon_roundtrip() {
        let geojson = wkt_to_geojson(FIELD).unwrap();
        let value: serde_json::Value = serde_json::from_str(&geojson).unwrap();
        let wkt = geojson_to_wkt(&value).unwrap();
        assert_eq!(wkt_to_geometry(&wkt).unwrap(), wkt_to_geometry(FIELD).unwrap());
    }
}
