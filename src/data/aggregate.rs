use super::model::{CategoryField, NumericField, Row};

// ---------------------------------------------------------------------------
// Per-group averages
// ---------------------------------------------------------------------------

/// One bar of the chart: a category value and the mean of the chosen
/// numeric variable over the rows sharing it.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedPoint {
    pub key: String,
    pub average: f64,
}

/// Group `rows` by the value of `category` and compute the mean of
/// `numeric` per group.
///
/// Groups are emitted in first-occurrence order, one per category value
/// actually present in the data. A cell that fails numeric coercion (or is
/// missing) counts as NaN and leaves the whole group's average NaN; a row
/// with no category cell groups under the empty string.
pub fn group_averages(
    rows: &[Row],
    numeric: NumericField,
    category: CategoryField,
) -> Vec<AggregatedPoint> {
    // (key, sum, count) per group. Linear key lookup keeps first-occurrence
    // order; the tables here are a few hundred rows at most.
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for row in rows {
        let key = row.get(category.as_str()).unwrap_or_default();
        let value = row
            .get(numeric.as_str())
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);

        match groups.iter_mut().find(|(k, _, _)| k == key) {
            Some((_, sum, count)) => {
                *sum += value;
                *count += 1;
            }
            None => groups.push((key.to_string(), value, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(key, sum, count)| AggregatedPoint {
            key,
            average: sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row {
            values: pairs
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn tips(day_tip: &[(&str, &str)]) -> Vec<Row> {
        day_tip
            .iter()
            .map(|&(day, tip)| row(&[("day", day), ("tip", tip)]))
            .collect()
    }

    #[test]
    fn means_per_group_in_first_occurrence_order() {
        let rows = tips(&[("Sun", "10"), ("Sun", "20"), ("Mon", "5")]);
        let points = group_averages(&rows, NumericField::Tip, CategoryField::Day);
        assert_eq!(
            points,
            vec![
                AggregatedPoint {
                    key: "Sun".into(),
                    average: 15.0
                },
                AggregatedPoint {
                    key: "Mon".into(),
                    average: 5.0
                },
            ]
        );
    }

    #[test]
    fn one_point_per_distinct_category_value() {
        let rows = tips(&[("Thur", "1"), ("Fri", "2"), ("Sat", "3"), ("Thur", "4")]);
        let points = group_averages(&rows, NumericField::Tip, CategoryField::Day);
        let keys: Vec<&str> = points.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["Thur", "Fri", "Sat"]);
    }

    #[test]
    fn mean_matches_arithmetic_mean() {
        let rows = tips(&[("Sat", "1.25"), ("Sat", "2.75"), ("Sat", "3.0")]);
        let points = group_averages(&rows, NumericField::Tip, CategoryField::Day);
        assert!((points[0].average - (1.25 + 2.75 + 3.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_aggregation_is_idempotent() {
        let rows = tips(&[("Sun", "10"), ("Mon", "20"), ("Sun", "7.5")]);
        let first = group_averages(&rows, NumericField::Tip, CategoryField::Day);
        let second = group_averages(&rows, NumericField::Tip, CategoryField::Day);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_no_points() {
        let points = group_averages(&[], NumericField::TotalBill, CategoryField::Day);
        assert!(points.is_empty());
    }

    #[test]
    fn unparseable_cell_poisons_its_group_average() {
        let rows = tips(&[("Sun", "10"), ("Sun", "abc"), ("Mon", "5")]);
        let points = group_averages(&rows, NumericField::Tip, CategoryField::Day);
        assert!(points[0].average.is_nan());
        assert!((points[1].average - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_category_cell_groups_under_empty_key() {
        let rows = vec![row(&[("tip", "4")]), row(&[("day", "Sun"), ("tip", "2")])];
        let points = group_averages(&rows, NumericField::Tip, CategoryField::Day);
        assert_eq!(points[0].key, "");
        assert_eq!(points[1].key, "Sun");
    }
}
