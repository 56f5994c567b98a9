#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::Generator;

    #[test]
    fn useable_prefix() {
        let repair = Repair::default();
        assert_eq!(
            repair.apply("USABLE_START_TIME = 2021-03-20T12:00:00.000"),
            "USEABLE_START_TIME = 2021-03-20T12:00:00.000"
        );
        assert_eq!(
            repair.apply("USABLE_STOP_TIME    = 2021-079T12:24:59Z"),
            "USEABLE_STOP_TIME    = 2021-079T12:24:59Z"
        );
        // only the prefix matters
        assert_eq!(repair.apply("USABLE_"), "USEABLE_");
    }

    #[test]
    fn untouched_lines() {
        let repair = Repair::default();
        for line in [
            "",
            "USEABLE_START_TIME = 2021-03-20T12:00:00.000",
            " USABLE_START_TIME = 2021-03-20T12:00:00.000",
            "COMMENT USABLE_START_TIME is misspelled",
            "usable_start_time = 2021-03-20T12:00:00.000",
            "2021-03-20T12:00:00.000 1.0 2.0 3.0 4.0 5.0 6.0",
        ] {
            assert_eq!(repair.apply(line), line);
        }
        assert!(Repair::none().rules().next().is_none());
        assert_eq!(
            Repair::none().apply("USABLE_START_TIME = 2021-03-20T12:00:00.000"),
            "USABLE_START_TIME = 2021-03-20T12:00:00.000"
        );
    }

    #[test]
    fn line_count_preserved() {
        let generator = Generator {
            useable: Some((1, 8)),
            misspelled: true,
            ..Default::default()
        };
        let raw = generator.lines();
        let repaired = Repair::default().lines(raw.iter()).collect::<Vec<_>>();
        assert_eq!(raw.len(), repaired.len());

        let mut fixed = 0;
        for (raw, repaired) in raw.iter().zip(repaired.iter()) {
            if raw.starts_with("USABLE_") {
                assert!(repaired.starts_with("USEABLE_"));
                assert_eq!(&raw[6..], &repaired[7..]);
                fixed += 1;
            } else {
                assert_eq!(raw, repaired);
            }
        }
        assert_eq!(fixed, 2);
    }

    #[test]
    fn fallible_source() {
        let source = vec![
            Ok("USABLE_START_TIME = 2021-03-20T12:00:00.000".to_string()),
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe")),
        ];
        let repair = Repair::default();
        let mut lines = repair.try_lines(source);
        assert_eq!(
            lines.next().unwrap().unwrap(),
            "USEABLE_START_TIME = 2021-03-20T12:00:00.000"
        );
        assert!(lines.next().unwrap().is_err());
        assert!(lines.next().is_none());
    }

    #[test]
    fn custom_rules() {
        // char offsets, not bytes
        let rule = RepairRule::new("ÉPOQUE", 1, "_");
        assert!(rule.matches("ÉPOQUE = 1"));
        assert_eq!(rule.fix("ÉPOQUE = 1"), "É_POQUE = 1");

        // offset beyond line length
        let rule = RepairRule::new("AB", 10, "C");
        assert_eq!(rule.fix("AB"), "ABC");

        let repair = Repair::default().with_rule(RepairRule::new("REF_FRAM ", 8, "E"));
        assert_eq!(repair.rules().count(), 2);
        assert_eq!(repair.apply("REF_FRAM = EME2000"), "REF_FRAME = EME2000");
        assert_eq!(
            repair.apply("USABLE_STOP_TIME = 2021-03-20T12:00:00.000"),
            "USEABLE_STOP_TIME = 2021-03-20T12:00:00.000"
        );

        // first matching rule applies
        let repair = Repair::none()
            .with_rule(RepairRule::new("US", 0, "A"))
            .with_rule(RepairRule::useable());
        assert_eq!(repair.apply("USABLE_"), "AUSABLE_");
    }
}
