//! Core-Domänentypen: Punkt-Arena, Segmente, Pfad.
//!
//! Dieses Modul definiert die Haupt-Datenstrukturen:
//! - PointArena: Id-indexierter Speicher der Kontrollpunkte
//! - CurveSegment: ein kubisches Bézier-Segment mit Sample-Cache
//! - BezierPath: geordnete Segment-Folge mit geteilten Joints

pub mod path;
pub mod point_arena;
pub mod segment;

pub use path::BezierPath;
pub use point_arena::PointArena;
pub use segment::CurveSegment;
