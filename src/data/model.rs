use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Row – one record of the source table
// ---------------------------------------------------------------------------

/// A single row of the source table: column name → raw cell text.
///
/// Cells stay unparsed; numeric coercion happens at aggregation time so a
/// malformed cell only affects the statistic it feeds into.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub values: BTreeMap<String, String>,
}

impl Row {
    /// Cell text for a column, if the row has one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// TableDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, rows in source order. Starts empty; a failed
/// load leaves it empty.
#[derive(Debug, Clone, Default)]
pub struct TableDataset {
    /// All rows, in file order.
    pub rows: Vec<Row>,
    /// Column names in header order.
    pub column_names: Vec<String>,
}

impl TableDataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Selectable fields
// ---------------------------------------------------------------------------

/// Numeric variables offered by the variable selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    TotalBill,
    Tip,
    Size,
}

impl NumericField {
    /// Options in display order.
    pub const ALL: [NumericField; 3] = [
        NumericField::TotalBill,
        NumericField::Tip,
        NumericField::Size,
    ];

    /// Column name in the source table.
    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::TotalBill => "total_bill",
            NumericField::Tip => "tip",
            NumericField::Size => "size",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical fields offered by the grouping selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Day,
    Time,
    Sex,
    Smoker,
}

impl CategoryField {
    /// Options in display order.
    pub const ALL: [CategoryField; 4] = [
        CategoryField::Day,
        CategoryField::Time,
        CategoryField::Sex,
        CategoryField::Smoker,
    ];

    /// Column name in the source table.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryField::Day => "day",
            CategoryField::Time => "time",
            CategoryField::Sex => "sex",
            CategoryField::Smoker => "smoker",
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
