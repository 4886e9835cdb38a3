use geocodec::error::{CodecError, GeoCodecError};
use geocodec::io::wkb::{
    from_wkb, to_wkb, to_wkb_with_options, wkb_size, Endianness, WkbWriteOptions,
};
use geocodec::io::{gml, wkt};
use geocodec::{Dimension, Geometry, GeometryType};

const CASES: &[&str] = &[
    "POINT(47.0 19.2)",
    "POINT Z (1 2 3)",
    "POINT EMPTY",
    "POINT Z EMPTY",
    "LINESTRING(30 10,10 30,40 40)",
    "LINESTRING Z (0 0 0,1 1 1)",
    "LINESTRING EMPTY",
    "POLYGON((35 10,45 45,15 40,10 20,35 10),(20 30,35 35,30 20,20 30))",
    "POLYGON EMPTY",
    "MULTIPOINT((10 40),(40 30),(20 20),(30 10))",
    "MULTIPOINT(10 40,40 30)",
    "MULTIPOINT(EMPTY,(1 2))",
    "MULTILINESTRING((10 10,20 20,10 40),(40 40,30 30,40 20,30 10))",
    "MULTILINESTRING Z EMPTY",
    "MULTIPOLYGON(((30 20,45 40,10 40,30 20)),((15 5,40 10,10 20,5 10,15 5)))",
    "MULTIPOLYGON Z (((0 0 1,1 0 1,1 1 1,0 0 1)))",
    "GEOMETRYCOLLECTION(POINT(40 10),LINESTRING(10 10,20 20,10 40),POLYGON((40 40,20 45,45 30,40 40)))",
    "GEOMETRYCOLLECTION(POINT EMPTY,GEOMETRYCOLLECTION(MULTIPOINT EMPTY),POINT(0.1 -1e-300))",
    "GEOMETRYCOLLECTION EMPTY",
];

fn geometries() -> Vec<Geometry> {
    CASES
        .iter()
        .map(|text| wkt::parse_wkt(text).unwrap())
        .collect()
}

#[test]
fn wkt_wkb_wkt() {
    let big_endian = WkbWriteOptions::new(Endianness::BigEndian);
    for geom in geometries() {
        for options in [WkbWriteOptions::default(), big_endian] {
            let bytes = to_wkb_with_options(&geom, &options).unwrap();
            assert_eq!(bytes.len(), wkb_size(&geom), "{geom}");

            let (decoded, consumed) = from_wkb(&bytes).unwrap();
            assert_eq!(consumed, bytes.len());
            let text = wkt::to_wkt(&decoded);
            assert_eq!(wkt::parse_wkt(&text).unwrap(), geom, "{text}");
        }
    }
}

#[test]
fn wkt_gml_wkt() {
    for geom in geometries() {
        let text = gml::to_gml(&geom).unwrap();
        let decoded = gml::from_gml(&text).unwrap();
        assert_eq!(wkt::parse_wkt(&decoded.to_string()).unwrap(), geom, "{text}");
    }
}

#[test]
fn concrete_scenario() {
    let geom = wkt::parse_wkt("POINT(47.0 19.2)").unwrap();

    let bytes = to_wkb(&geom).unwrap();
    assert_eq!(
        bytes,
        [
            0x01, // little endian
            0x01, 0x00, 0x00, 0x00, // Point
            0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x47, 0x40, // 47.0
            0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x40, // 19.2
        ]
    );

    let (decoded, _) = from_wkb(&bytes).unwrap();
    assert_eq!(wkt::to_wkt(&decoded), "POINT(47 19.2)");

    let text = gml::to_gml(&decoded).unwrap();
    assert_eq!(
        text,
        "<gml:Point><gml:coordinates>47,19.2</gml:coordinates></gml:Point>"
    );
    assert_eq!(gml::from_gml(&text).unwrap().to_string(), "POINT(47 19.2)");
}

#[test]
fn empty_point() {
    let geom = wkt::parse_wkt("POINT EMPTY").unwrap();
    assert!(geom.is_empty());
    assert_eq!(geom.geometry_type(), GeometryType::Point);
    assert_eq!(geom.dimension(), Dimension::XY);

    let bytes = to_wkb(&geom).unwrap();
    assert_eq!(bytes, [0x01, 0x01, 0x00, 0x00, 0x00]);
    assert_eq!(from_wkb(&bytes).unwrap(), (geom.clone(), 5));
    assert_eq!(wkt::to_wkt(&geom), "POINT EMPTY");
}

#[test]
fn malformed_input() {
    let err = wkt::parse_wkt("POINT(1 2").unwrap_err();
    assert_eq!(err.offset, 9);

    assert!(matches!(from_wkb(&[0x01]), Err(CodecError::Truncated(_))));

    let err: GeoCodecError = "LINESTRING(1 2,".parse::<Geometry>().unwrap_err().into();
    assert!(matches!(err, GeoCodecError::Parse(_)));
}

#[test]
fn inspection() {
    let geom = wkt::parse_wkt(CASES[7]).unwrap();
    assert_eq!(geom.child_count(), 2);
    assert_eq!(geom.num_coords(), 9);
    assert_eq!(geom.coord_at(5).map(|c| (c.x, c.y)), Some((20., 30.)));
    assert_eq!(geom.coord_at(9), None);
}

#[test]
fn serde_round_trip() {
    for geom in geometries() {
        let json = serde_json::to_string(&geom).unwrap();
        let back: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, geom);
    }
}

#[test]
fn serde_rejects_invalid_geometry() {
    let polygon = wkt::parse_wkt("POLYGON((0 0,1 0,1 1,0 0))").unwrap();
    let mut json = serde_json::to_value(&polygon).unwrap();
    json["Polygon"]["rings"][0]["coords"]
        .as_array_mut()
        .unwrap()
        .truncate(2);
    assert!(serde_json::from_value::<Geometry>(json).is_err());

    let open = wkt::parse_wkt("LINESTRING(0 0,1 0,1 1,0 1)").unwrap();
    let mut json = serde_json::to_value(&polygon).unwrap();
    json["Polygon"]["rings"][0] = serde_json::to_value(&open).unwrap()["LineString"].clone();
    assert!(serde_json::from_value::<Geometry>(json).is_err());

    let point = wkt::parse_wkt("POINT Z (1 2 3)").unwrap();
    let mut json = serde_json::to_value(&point).unwrap();
    json["Point"]["dim"] = serde_json::to_value(Dimension::XY).unwrap();
    assert!(serde_json::from_value::<Geometry>(json).is_err());

    let collection = wkt::parse_wkt("MULTIPOINT((1 2))").unwrap();
    let mut json = serde_json::to_value(&collection).unwrap();
    json["MultiPoint"]["points"][0] = serde_json::to_value(&point).unwrap()["Point"].clone();
    assert!(serde_json::from_value::<Geometry>(json).is_err());
}
