//! Round-trip properties between WKT and GeoJSON representations

use fieldgeo_geo::{geojson_to_wkt, wkt_to_geojson, wkt_to_geometry};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = (f64, f64)> {
    (-180.0f64..180.0, -90.0f64..90.0)
}

fn point_wkt() -> impl Strategy<Value = String> {
    coord().prop_map(|(x, y)| format!("POINT({} {})", x, y))
}

fn linestring_wkt() -> impl Strategy<Value = String> {
    prop::collection::vec(coord(), 2..12).prop_map(|coords| {
        let body: Vec<String> = coords.iter().map(|(x, y)| format!("{} {}", x, y)).collect();
        format!("LINESTRING({})", body.join(","))
    })
}

fn rectangle_ring((x, y): (f64, f64), w: f64, h: f64) -> String {
    format!(
        "({} {},{} {},{} {},{} {},{} {})",
        x,
        y,
        x + w,
        y,
        x + w,
        y + h,
        x,
        y + h,
        x,
        y
    )
}

fn polygon_wkt() -> impl Strategy<Value = String> {
    (coord(), 0.0001f64..1.0, 0.0001f64..1.0)
        .prop_map(|(origin, w, h)| format!("POLYGON({})", rectangle_ring(origin, w, h)))
}

fn multipolygon_wkt() -> impl Strategy<Value = String> {
    prop::collection::vec((coord(), 0.0001f64..1.0, 0.0001f64..1.0), 1..4).prop_map(|rects| {
        let polygons: Vec<String> = rects
            .into_iter()
            .map(|(origin, w, h)| format!("({})", rectangle_ring(origin, w, h)))
            .collect();
        format!("MULTIPOLYGON({})", polygons.join(","))
    })
}

fn any_wkt() -> impl Strategy<Value = String> {
    prop_oneof![point_wkt(), linestring_wkt(), polygon_wkt(), multipolygon_wkt()]
}

proptest! {
    #[test]
    fn geojson_wkt_geojson_roundtrip(wkt in any_wkt()) {
        let geojson = wkt_to_geojson(&wkt).unwrap();
        let value: serde_json::Value = serde_json::from_str(&geojson).unwrap();
        let back = geojson_to_wkt(&value).unwrap();
        let geojson_again = wkt_to_geojson(&back).unwrap();

        let first: serde_json::Value = serde_json::from_str(&geojson).unwrap();
        let second: serde_json::Value = serde_json::from_str(&geojson_again).unwrap();
        prop_assert_eq!(&first["type"], &second["type"]);
        prop_assert_eq!(wkt_to_geometry(&back).unwrap(), wkt_to_geometry(&wkt).unwrap());
    }
}

#[test]
fn test_polygon_with_hole_roundtrip() {
    let wkt = "POLYGON((0 0,10 0,10 10,0 10,0 0),(2 2,4 2,4 4,2 4,2 2))";
    let geojson = wkt_to_geojson(wkt).unwrap();
    let value: serde_json::Value = serde_json::from_str(&geojson).unwrap();

    assert_eq!(value["type"], "Polygon");
    assert_eq!(value["coordinates"].as_array().unwrap().len(), 2);
    let back = geojson_to_wkt(&value).unwrap();
    assert_eq!(wkt_to_geometry(&back).unwrap(), wkt_to_geometry(wkt).unwrap());
}

#[test]
fn test_geometry_collection_roundtrip() {
    let wkt = "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))";
    let geojson = wkt_to_geojson(wkt).unwrap();
    let value: serde_json::Value = serde_json::from_str(&geojson).unwrap();

    assert_eq!(value["type"], "GeometryCollection");
    assert_eq!(value["geometries"].as_array().unwrap().len(), 2);
    let back = geojson_to_wkt(&value).unwrap();
    assert_eq!(wkt_to_geometry(&back).unwrap(), wkt_to_geometry(wkt).unwrap());
}
