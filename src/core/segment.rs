//! Ein Segment des Pfads: kubische Bézier-Kurve über vier Kontrollpunkt-Ids.

use super::PointArena;
use crate::shared::curve_geometry::cubic_bezier_samples;
use glam::Vec3;

/// Ein kubisches Bézier-Segment (4 Kontrollpunkt-Ids + Sample-Cache).
///
/// `end_id` ist bei benachbarten Segmenten identisch mit der `start_id`
/// des Nachfolgers (geteilter Joint).
#[derive(Debug, Clone)]
pub struct CurveSegment {
    /// Startpunkt (Joint zum Vorgänger bzw. Pfad-Anfang)
    pub start_id: u64,
    /// Erster Steuerpunkt (segment-eigen)
    pub ctrl1_id: u64,
    /// Zweiter Steuerpunkt (segment-eigen)
    pub ctrl2_id: u64,
    /// Endpunkt (Joint zum Nachfolger bzw. Pfad-Ende)
    pub end_id: u64,
    /// Samples je Segment (Qualitäts-Regler, ≥ 1)
    sample_count: usize,
    /// Abgetastete Punkte; konsistent nach jedem `rebuild`
    cached_samples: Vec<Vec3>,
}

impl CurveSegment {
    /// Erstellt ein neues Segment (Cache leer bis zum ersten `rebuild`).
    pub fn new(start_id: u64, ctrl1_id: u64, ctrl2_id: u64, end_id: u64, sample_count: usize) -> Self {
        Self {
            start_id,
            ctrl1_id,
            ctrl2_id,
            end_id,
            sample_count: sample_count.max(1),
            cached_samples: Vec::new(),
        }
    }

    /// Aktuelle Sample-Anzahl.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Setzt die Sample-Anzahl. `count < 1` wird abgelehnt (Cache unberührt).
    pub fn set_sample_count(&mut self, count: usize) -> bool {
        if count < 1 {
            log::warn!("Segment: ungültige Sample-Anzahl {}", count);
            return false;
        }
        self.sample_count = count;
        true
    }

    /// Ids der vier Kontrollpunkte in Kurven-Reihenfolge.
    pub fn control_ids(&self) -> [u64; 4] {
        [self.start_id, self.ctrl1_id, self.ctrl2_id, self.end_id]
    }

    /// Tastet das Segment neu ab und aktualisiert den Cache.
    ///
    /// `false` wenn eine Punkt-Id nicht in der Arena liegt — der alte
    /// Cache bleibt dann erhalten.
    pub fn rebuild(&mut self, arena: &PointArena) -> bool {
        let (Some(p0), Some(p1), Some(p2), Some(p3)) = (
            arena.get(self.start_id),
            arena.get(self.ctrl1_id),
            arena.get(self.ctrl2_id),
            arena.get(self.end_id),
        ) else {
            log::warn!("Segment: Kontrollpunkt-Id fehlt in der Arena");
            return false;
        };

        match cubic_bezier_samples(p0, p1, p2, p3, self.sample_count) {
            Some(samples) => {
                self.cached_samples = samples;
                true
            }
            None => false,
        }
    }

    /// Abgetastete Punkte des letzten `rebuild`.
    pub fn samples(&self) -> &[Vec3] {
        &self.cached_samples
    }
}
