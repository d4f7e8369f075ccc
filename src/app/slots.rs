//! Slot-Zuordnung: Handle-Pool-Index → (Segment, Rolle).
//!
//! Die Zuordnung ist eine reine Funktion und wird je Rebuild einmal
//! angewendet statt ad hoc aus Index-Arithmetik abgeleitet.

/// Rolle eines Kontrollpunkts innerhalb eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    /// Startpunkt (Joint zum Vorgänger bzw. Pfad-Anfang)
    Start,
    /// Erster Steuerpunkt
    Ctrl1,
    /// Zweiter Steuerpunkt
    Ctrl2,
    /// Endpunkt (Joint zum Nachfolger bzw. Pfad-Ende)
    End,
}

/// Adressiert einen Kontrollpunkt über (Segment-Index, Rolle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSlot {
    /// Index des besitzenden Segments
    pub segment: usize,
    /// Rolle innerhalb des Segments
    pub role: HandleRole,
}

/// Anzahl der Joint-Handles für `segment_count` Segmente.
pub fn slot_count(segment_count: usize) -> usize {
    segment_count + 1
}

/// Bildet einen Pool-Slot auf (Segment, Rolle) ab.
///
/// Slot i < n adressiert den Start von Segment i; Slot n das Ende des
/// letzten Segments. An Joints fallen die Rollen (Ende von Segment i−1,
/// Start von Segment i) auf denselben Arena-Punkt — die Zuordnung nennt
/// den Start-Lesart. `None` außerhalb von 0..=n.
pub fn joint_slot(slot_index: usize, segment_count: usize) -> Option<HandleSlot> {
    if segment_count == 0 || slot_index > segment_count {
        return None;
    }
    if slot_index < segment_count {
        Some(HandleSlot {
            segment: slot_index,
            role: HandleRole::Start,
        })
    } else {
        Some(HandleSlot {
            segment: segment_count - 1,
            role: HandleRole::End,
        })
    }
}
