/// Data layer: launch records, loading, and the two chart queries.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, SiteCatalog, PayloadBounds
///   └───────────────┘
///        │                         │
///        ▼                         ▼
///   ┌──────────┐             ┌──────────┐
///   │ summary   │ site →      │  filter   │ site + payload range →
///   │           │ pie counts  │           │ scatter rows
///   └──────────┘             └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
