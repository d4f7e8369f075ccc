//! Editor-Kern für stückweise kubische Bézier-Pfade.
//!
//! Kern-Funktionalität als Library exportiert; die Host-Engine (Rendering,
//! Picking, Fenster, Property-Widgets) bindet über die Verträge in
//! [`render`] an und ruft die Edit-Operationen des [`app::PathController`].

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    joint_slot, slot_count, HandlePool, HandleRole, HandleSlot, PathController, SegmentDescriptor,
};
pub use core::{BezierPath, CurveSegment, PointArena};
pub use render::{HandleFactory, HandleVisual, PolylineGeometry, PolylineVertex};
pub use shared::{EditorOptions, DEFAULT_SAMPLE_COUNT};
