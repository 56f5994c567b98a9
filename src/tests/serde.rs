#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::Generator;

    #[test]
    fn json_round_trip() {
        let generator = Generator {
            samples: 12,
            acceleration: true,
            method: Some("HERMITE"),
            degree: Some(3),
            useable: Some((1, 10)),
            ..Default::default()
        };
        let oem = OEM::parse(generator.lines()).unwrap();

        let json = serde_json::to_string(&oem).unwrap();
        assert!(json.contains("\"object_id\":\"2021-001-A\""));

        let parsed: OEM = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.header(), oem.header());

        let sat = parsed.satellite("2021-001-A").unwrap();
        let segment = &sat.segments()[0];
        assert_eq!(segment.metadata, oem.satellite("2021-001-A").unwrap().segments()[0].metadata);

        let expected = oem.satellite("2021-001-A").unwrap().segments()[0].state_vectors();
        assert_eq!(segment.state_vectors().len(), expected.len());
        for (state, expected) in segment.state_vectors().iter().zip(expected.iter()) {
            assert_eq!(state.epoch, expected.epoch);
            assert!((state.position - expected.position).norm() < 1.0E-6);
            assert!((state.velocity - expected.velocity).norm() < 1.0E-9);
        }
    }

    #[test]
    fn geodetic_point() {
        let point = GeodeticPoint::from_degrees(10.0, 20.0, 400.0E3);
        let json = serde_json::to_string(&point).unwrap();
        let parsed: GeodeticPoint = serde_json::from_str(&json).unwrap();
        assert!((parsed.latitude - point.latitude).abs() < 1.0E-12);
        assert!((parsed.altitude - point.altitude).abs() < 1.0E-6);
    }
}
