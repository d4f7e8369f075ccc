//! Geteilte Typen und reine Geometrie für layer-übergreifende Verträge.
//!
//! Enthält die Bézier-Grundfunktionen und die Editor-Optionen, die sowohl
//! `core` als auch `app` verwenden, ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod curve_geometry;
pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_SAMPLE_COUNT, HANDLE_PICK_RADIUS};
