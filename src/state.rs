use crate::color::ColorMap;
use crate::data::aggregate::{group_averages, AggregatedPoint};
use crate::data::model::{CategoryField, NumericField, TableDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The current variable / grouping choice. Always valid: both fields are
/// drawn from the fixed option lists and default to the first option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub numeric: NumericField,
    pub category: CategoryField,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            numeric: NumericField::TotalBill,
            category: CategoryField::Day,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (empty until a file loads successfully).
    pub dataset: TableDataset,

    /// Current numeric variable and grouping field.
    pub selection: Selection,

    /// Per-group averages derived from `dataset` + `selection`.
    pub averages: Vec<AggregatedPoint>,

    /// Bar colours keyed by group value.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: TableDataset::default(),
            selection: Selection::default(),
            averages: Vec::new(),
            color_map: ColorMap::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table and recompute the chart data.
    pub fn set_dataset(&mut self, dataset: TableDataset) {
        self.dataset = dataset;
        self.status_message = None;
        self.reaggregate();
    }

    /// Change the averaged variable.
    pub fn set_numeric_field(&mut self, field: NumericField) {
        if self.selection.numeric != field {
            self.selection.numeric = field;
            self.reaggregate();
        }
    }

    /// Change the grouping field.
    pub fn set_category_field(&mut self, field: CategoryField) {
        if self.selection.category != field {
            self.selection.category = field;
            self.reaggregate();
        }
    }

    /// Recompute the per-group averages from scratch. Runs on every dataset
    /// or selection change; nothing is carried over from the previous result.
    fn reaggregate(&mut self) {
        self.averages = group_averages(
            &self.dataset.rows,
            self.selection.numeric,
            self.selection.category,
        );
        let keys: Vec<String> = self.averages.iter().map(|p| p.key.clone()).collect();
        self.color_map = ColorMap::new(&keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;
    use std::collections::BTreeMap;

    fn dataset() -> TableDataset {
        let headers = ["total_bill", "tip", "sex", "smoker", "day", "time", "size"];
        let rows = [
            ["16.99", "1.01", "Female", "No", "Sun", "Dinner", "2"],
            ["10.34", "1.66", "Male", "No", "Thur", "Lunch", "3"],
        ]
        .iter()
        .map(|cells| Row {
            values: headers
                .iter()
                .zip(cells.iter())
                .map(|(h, c)| (h.to_string(), c.to_string()))
                .collect::<BTreeMap<_, _>>(),
        })
        .collect();

        TableDataset {
            rows,
            column_names: headers.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[test]
    fn set_dataset_recomputes_averages() {
        let mut state = AppState::default();
        assert!(state.averages.is_empty());

        state.set_dataset(dataset());
        let keys: Vec<&str> = state.averages.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["Sun", "Thur"]);
        assert!((state.averages[0].average - 16.99).abs() < 1e-12);
    }

    #[test]
    fn changing_selection_recomputes_with_new_fields() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_category_field(CategoryField::Time);
        let keys: Vec<&str> = state.averages.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["Dinner", "Lunch"]);

        state.set_numeric_field(NumericField::Tip);
        assert!((state.averages[0].average - 1.01).abs() < 1e-12);
    }
}
