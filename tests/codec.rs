//! End-to-end scenarios against the binary codec.
#[cfg(test)]
mod codec_tests {
    use geocodec::{
        decode_feature_collection, decode_geometry_collection, encode_feature_collection,
        encode_geometry_collection, Feature, FeatureCollection, GeoJson, Geometry,
        GeometryCollection, Position, Value,
    };
    use serde_json::json;

    const SRID: u32 = 4326;
    const SCALE: u32 = 10_000_000;

    fn point_feature_collection(text: &str) -> FeatureCollection {
        let geojson: GeoJson = text.parse().expect("valid GeoJSON");
        FeatureCollection::try_from(geojson).expect("a FeatureCollection")
    }

    #[test]
    fn scenario_1_point_wrapped_in_feature_collection() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": null,
                    "geometry": { "type": "Point", "coordinates": [4.9, 52.37] }
                }]
            }"#,
        );

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        assert_eq!(back.features.len(), 1);
        match &back.features[0].geometry.as_ref().unwrap().value {
            Value::Point(p) => assert_eq!(p.as_slice(), &[4.9, 52.37]),
            other => panic!("expected Point, got {other:?}"),
        }
        assert_eq!(back.features[0].properties, None);
    }

    #[test]
    fn scenario_2_linestring_with_repeated_point() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0,0],[0,0],[1,1]]
                    }
                }]
            }"#,
        );

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        match &back.features[0].geometry.as_ref().unwrap().value {
            Value::LineString(pts) => {
                assert_eq!(pts.len(), 3);
                assert_eq!(pts[0].as_slice(), &[0.0, 0.0]);
                assert_eq!(pts[1].as_slice(), &[0.0, 0.0]);
                assert_eq!(pts[2].as_slice(), &[1.0, 1.0]);
            }
            other => panic!("expected LineString, got {other:?}"),
        }
    }

    #[test]
    fn scenario_3_polygon_with_hole_closure_stripped_and_restored() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [
                            [[0,0],[0,1],[1,1],[1,0],[0,0]],
                            [[0.2,0.2],[0.2,0.8],[0.8,0.8],[0.8,0.2],[0.2,0.2]]
                        ]
                    }
                }]
            }"#,
        );

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        match &back.features[0].geometry.as_ref().unwrap().value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 2);
                for ring in rings {
                    assert_eq!(ring.len(), 5);
                    assert_eq!(ring.first().unwrap().as_slice(), ring.last().unwrap().as_slice());
                }
            }
            other => panic!("expected Polygon, got {other:?}"),
        }
    }

    #[test]
    fn scenario_4_delta_persists_across_feature_boundary() {
        let fc = FeatureCollection {
            bbox: None,
            features: vec![
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(Position::new(0.0, 0.0)))),
                    id: None,
                    properties: None,
                    foreign_members: None,
                },
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(Position::new(0.0000001, 0.0)))),
                    id: None,
                    properties: None,
                    foreign_members: None,
                },
            ],
            name: None,
            foreign_members: None,
        };

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        assert_eq!(back.features.len(), 2);
        match &back.features[1].geometry.as_ref().unwrap().value {
            Value::Point(p) => assert!((p.x() - 0.0000001).abs() < 1e-9),
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn scenario_5_property_null_round_trips() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": { "a": null, "b": 3 },
                    "geometry": { "type": "Point", "coordinates": [1, 2] }
                }]
            }"#,
        );

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        let properties = back.features[0].properties.as_ref().unwrap();
        assert_eq!(properties.get("a"), Some(&json!(null)));
        assert_eq!(properties.get("b"), Some(&json!(3.0)));
    }

    #[test]
    fn scenario_6_multipolygon_with_one_and_two_rings() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[0,0],[0,1],[1,1],[0,0]]],
                            [
                                [[10,10],[10,11],[11,11],[10,10]],
                                [[10.2,10.2],[10.2,10.8],[10.8,10.8],[10.2,10.2]]
                            ]
                        ]
                    }
                }]
            }"#,
        );

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        match &back.features[0].geometry.as_ref().unwrap().value {
            Value::MultiPolygon(polys) => {
                assert_eq!(polys.len(), 2);
                assert_eq!(polys[0].len(), 1);
                assert_eq!(polys[1].len(), 2);
            }
            other => panic!("expected MultiPolygon, got {other:?}"),
        }
    }

    #[test]
    fn srid_zero_round_trips() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [1, 1] }
                }]
            }"#,
        );
        let bytes = encode_feature_collection(&fc, 0, SCALE).unwrap();
        assert!(decode_feature_collection(&bytes).is_ok());
    }

    #[test]
    fn collection_bbox_and_name_round_trip() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "name": "sample",
                "bbox": [0, 0, 1, 1],
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [0.5, 0.5] }
                }]
            }"#,
        );

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        assert_eq!(back.name.as_deref(), Some("sample"));
        assert_eq!(back.bbox, Some(vec![0.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn foreign_members_round_trip_on_collection_and_feature() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "title": "custom feature key",
                    "geometry": { "type": "Point", "coordinates": [0, 0] }
                }],
                "generator": "custom collection key"
            }"#,
        );

        let bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();
        let back = decode_feature_collection(&bytes).unwrap();

        assert_eq!(
            back.foreign_members.unwrap().get("generator"),
            Some(&json!("custom collection key"))
        );
        assert_eq!(
            back.features[0]
                .foreign_members
                .as_ref()
                .unwrap()
                .get("title"),
            Some(&json!("custom feature key"))
        );
    }

    #[test]
    fn geometry_collection_round_trips_without_feature_wrapper() {
        let gc = GeometryCollection {
            bbox: None,
            geometries: vec![
                Geometry::new(Value::Point(Position::new(1.0, 2.0))),
                Geometry::new(Value::LineString(vec![
                    Position::new(0.0, 0.0),
                    Position::new(1.0, 1.0),
                ])),
            ],
            foreign_members: None,
        };

        let bytes = encode_geometry_collection(&gc, SRID, SCALE).unwrap();
        let back = decode_geometry_collection(&bytes).unwrap();

        assert_eq!(back.geometries.len(), 2);
        assert!(matches!(back.geometries[0].value, Value::Point(_)));
        assert!(matches!(back.geometries[1].value, Value::LineString(_)));
    }

    #[test]
    fn missing_geometry_is_rejected() {
        let fc = FeatureCollection {
            bbox: None,
            features: vec![Feature {
                bbox: None,
                geometry: None,
                id: None,
                properties: None,
                foreign_members: None,
            }],
            name: None,
            foreign_members: None,
        };
        assert!(encode_feature_collection(&fc, SRID, SCALE).is_err());
    }

    #[test]
    fn unknown_field_at_top_level_is_skipped() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [1, 2] }
                }]
            }"#,
        );
        let mut bytes = encode_feature_collection(&fc, SRID, SCALE).unwrap();

        // Append an unknown field (number 15, varint wire type) that no
        // message in `proto/geocodec.proto` declares; P6 requires prost's
        // decoder to skip it without disturbing the rest of the message.
        bytes.push(0b0111_1000); // tag: field 15, wire type 0 (varint)
        bytes.push(0x05); // value: 5

        let back = decode_feature_collection(&bytes).unwrap();
        assert_eq!(back.features.len(), 1);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let fc = point_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [0, 0] }
                }]
            }"#,
        );
        assert!(encode_feature_collection(&fc, SRID, 0).is_err());
    }
}
