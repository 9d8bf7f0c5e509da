//! 시계열 조회 속성 테스트

use chrono::{Days, NaiveDate};
use pricefeed_core::{Observation, Series};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
}

fn observations_strategy() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec((0u64..3000, -50_000i64..50_000), 1..80).prop_map(|points| {
        points
            .into_iter()
            .map(|(day, value)| Observation::new(base_date() + Days::new(day), Decimal::new(value, 1)))
            .collect()
    })
}

proptest! {
    #[test]
    fn series_is_sorted(observations in observations_strategy()) {
        let series = Series::new(observations).unwrap();
        let dates: Vec<NaiveDate> = series.observations().iter().map(|o| o.date).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn at_or_before_is_latest_not_after(
        observations in observations_strategy(),
        offset_days in 0u64..3200,
    ) {
        let series = Series::new(observations).unwrap();
        let target = base_date() + Days::new(offset_days);

        match series.at_or_before(target) {
            Some(found) => {
                prop_assert!(found.date <= target);
                prop_assert!(series
                    .observations()
                    .iter()
                    .all(|o| o.date <= found.date || o.date > target));
            }
            None => prop_assert!(series.start_date() > target),
        }
    }

    #[test]
    fn peak_is_first_maximum(observations in observations_strategy()) {
        let series = Series::new(observations).unwrap();
        let peak = series.peak();

        prop_assert!(series.observations().iter().all(|o| o.value <= peak.value));
        let first_max = series
            .observations()
            .iter()
            .find(|o| o.value == peak.value)
            .unwrap();
        prop_assert_eq!(first_max.date, peak.date);
    }
}
