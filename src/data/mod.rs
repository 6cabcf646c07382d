//! Data layer: core types, loading, and aggregation.
//!
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → TableDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ TableDataset  │  Vec<Row>, header order
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ aggregate   │  group by category → per-group means
//!   └────────────┘
//! ```

pub mod aggregate;
pub mod loader;
pub mod model;
