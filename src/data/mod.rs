/// Data layer: catalog, loading, and region construction.
///
/// Architecture:
/// ```text
///   catalog   ordered stems + colours → Discovery (paths, colours, labels)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  headerless CSV (eV) → Vec<SamplePoint> (µeV)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  region   │  sort by mass, close against the ceiling → ClosedRegion
///   └──────────┘
///        │
///        ▼
///   PlotLayerSet  Vec<Layer>, z-order base
/// ```

pub mod catalog;
pub mod loader;
pub mod model;
pub mod region;
