//! Applikations-Schicht: Controller, Handle-Pool, Slot-Zuordnung.

pub mod controller;
pub mod handle_pool;
pub mod slots;

pub use controller::{PathController, SegmentDescriptor};
pub use handle_pool::HandlePool;
pub use slots::{joint_slot, slot_count, HandleRole, HandleSlot};
