/// Data layer: the built-in vehicle table.
///
/// Architecture:
/// ```text
///  assets/mtcars.csv (compiled in)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → CarsDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ CarsDataset  │  Vec<Car>, column access by Field
///   └─────────────┘
/// ```

pub mod loader;
pub mod model;
