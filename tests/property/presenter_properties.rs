// Property-based tests for the preset list and countdown
use chronenberg::services::countdown::{Countdown, CountdownPhase};
use chronenberg::services::presets::PresetList;
use chronenberg::models::preset::PresetDuration;
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Instant;

fn preset_fields() -> impl Strategy<Value = (u32, u32, u32)> {
    (0u32..=3, 0u32..=59, 0u32..=59)
}

proptest! {
    #[test]
    fn preset_labels_stay_unique(adds in prop::collection::vec(preset_fields(), 0..40)) {
        let mut list = PresetList::new();
        for (h, m, s) in adds {
            let _ = list.add(h, m, s);
        }

        let labels = list.labels();
        let unique: HashSet<_> = labels.iter().collect();
        prop_assert_eq!(unique.len(), labels.len());
        prop_assert!(!labels.iter().any(|label| label == "00:00:00"));
    }

    #[test]
    fn countdown_expires_after_exactly_its_length(h in 0u32..=1, m in 0u32..=59, s in 1u32..=59) {
        let preset = PresetDuration::new(h, m, s).unwrap();
        let mut countdown = Countdown::new();
        countdown.select(preset);
        countdown.start(Instant::now()).unwrap();

        let total = preset.total_seconds();
        for _ in 1..total {
            prop_assert!(countdown.tick());
            prop_assert_eq!(countdown.phase(), CountdownPhase::Running);
        }
        prop_assert!(countdown.tick());
        prop_assert_eq!(countdown.phase(), CountdownPhase::Expired);
        prop_assert!(!countdown.tick());
        prop_assert_eq!(countdown.remaining_text(), "0:00:00");
    }
}
