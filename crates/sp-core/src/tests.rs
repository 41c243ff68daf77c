//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use crate::VolunteerId;

    #[test]
    fn index_roundtrip() {
        let id = VolunteerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VolunteerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VolunteerId(0) < VolunteerId(1));
    }

    #[test]
    fn display() {
        assert_eq!(VolunteerId(7).to_string(), "VolunteerId(7)");
    }
}

#[cfg(test)]
mod clock {
    use crate::{CoreError, SlotClock};

    #[test]
    fn rejects_zero_and_negative_widths() {
        assert!(matches!(SlotClock::new(0, 0), Err(CoreError::InvalidSlotWidth(0))));
        assert!(matches!(SlotClock::new(0, -3600), Err(CoreError::InvalidSlotWidth(-3600))));
    }

    #[test]
    fn odd_width_is_valid_without_exact_midpoint() {
        let clock = SlotClock::new(0, 3_601).unwrap();
        assert!(!clock.has_exact_midpoint());
        assert_eq!(clock.slot_start(2), 7_202);
        assert!(SlotClock::new(0, 3_600).unwrap().has_exact_midpoint());
    }

    #[test]
    fn slot_boundaries() {
        let clock = SlotClock::new(1_000, 3_600).unwrap();
        assert_eq!(clock.slot_start(0), 1_000);
        assert_eq!(clock.slot_mid(0), 2_800);
        assert_eq!(clock.slot_start(2), 8_200);
        assert_eq!(clock.end_for(3), Some(11_800));
    }

    #[test]
    fn end_for_reports_overflow() {
        let clock = SlotClock::new(i64::MAX - 4_000, 3_600).unwrap();
        assert_eq!(clock.end_for(1), Some(i64::MAX - 400));
        assert_eq!(clock.end_for(2), None);

        let low = SlotClock::new(i64::MIN, 3_600).unwrap();
        assert_eq!(low.end_for(0), Some(i64::MIN));
        assert_eq!(SlotClock::new(0, i64::MAX).unwrap().end_for(2), None);
    }

    #[test]
    fn negative_origin_is_allowed() {
        let clock = SlotClock::new(-7_200, 3_600).unwrap();
        assert_eq!(clock.end_for(2), Some(0));
    }
}

#[cfg(test)]
mod config {
    use crate::{ComposeConfig, CoreError};

    #[test]
    fn default_is_hourly() {
        let cfg = ComposeConfig::default();
        assert_eq!(cfg.slot_width_secs, 3_600);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_width_is_config_error() {
        let cfg = ComposeConfig { origin_unix_secs: 0, slot_width_secs: 0 };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        assert!(cfg.make_clock().is_err());
    }
}
