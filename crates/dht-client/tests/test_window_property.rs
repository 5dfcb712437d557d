use dht_client::series::{ChartSeries, WINDOW_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn window_bound_holds_for_any_push_sequence(
        points in prop::collection::vec((-40.0f64..150.0, 0.0f64..100.0), 0..200)
    ) {
        let mut series = ChartSeries::new();
        for (i, (temperature, humidity)) in points.iter().enumerate() {
            series.push(format!("t{i}"), *temperature, *humidity);

            prop_assert!(series.len() <= WINDOW_SIZE);
            prop_assert_eq!(series.labels().count(), series.len());
            prop_assert_eq!(series.temperature().count(), series.len());
            prop_assert_eq!(series.humidity().count(), series.len());
        }
    }

    #[test]
    fn window_keeps_newest_points_in_order(count in 1usize..200) {
        let mut series = ChartSeries::new();
        for i in 0..count {
            series.push(format!("t{i}"), i as f64, (count - i) as f64);
        }

        let start = count.saturating_sub(WINDOW_SIZE);
        let temperatures: Vec<f64> = series.temperature().collect();
        let expected: Vec<f64> = (start..count).map(|i| i as f64).collect();
        prop_assert_eq!(temperatures, expected);

        let first_label = format!("t{start}");
        prop_assert_eq!(series.labels().next(), Some(first_label.as_str()));
    }
}
