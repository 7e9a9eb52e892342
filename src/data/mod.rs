/// Data layer: core tabular types and column selection.
///
/// Architecture:
/// ```text
///  upstream loader (out of crate)
///        │
///        ▼
///   ┌─────────┐
///   │ Dataset  │  Vec<Row>, ordered column names
///   └─────────┘
///        │
///        ▼
///   ┌─────────┐
///   │ select   │  project feature + target columns
///   └─────────┘
///        │
///        ▼
///  downstream trainer (out of crate)
/// ```

pub mod model;
pub mod select;
