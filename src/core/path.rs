//! Der Pfad: geordnete Segment-Folge über einer gemeinsamen Punkt-Arena.
//!
//! Invariante: `segments[i].end_id == segments[i + 1].start_id` für alle
//! benachbarten Paare (geteilter Joint). Strukturelle Edits (remove/append)
//! stellen die Invariante selbst wieder her; jede Mutation tastet die
//! betroffenen Caches synchron neu ab — ein Segment-Cache ist nach außen
//! nie veraltet sichtbar.

use super::{CurveSegment, PointArena};
use crate::shared::curve_geometry::chord_thirds;
use crate::shared::options::DEFAULT_SAMPLE_COUNT;
use glam::Vec3;

/// Geordnete Folge kubischer Bézier-Segmente (Länge ≥ 1) mit geteilten Joints.
#[derive(Debug, Clone)]
pub struct BezierPath {
    /// Punktspeicher aller Segmente
    arena: PointArena,
    /// Segmente in Pfad-Reihenfolge
    segments: Vec<CurveSegment>,
}

impl BezierPath {
    /// Erstellt einen Pfad durch die gegebenen Joint-Positionen.
    ///
    /// `joints` sind die Segment-Grenzen (n+1 Stück für n Segmente);
    /// Steuerpunkte landen auf Sehnen-Dritteln. `None` bei weniger als
    /// 2 Joints (ein Pfad ohne Segment ist ungültig).
    pub fn from_joints(joints: &[Vec3], sample_count: usize) -> Option<Self> {
        if joints.len() < 2 {
            return None;
        }

        let mut arena = PointArena::new();
        let mut segments = Vec::with_capacity(joints.len() - 1);
        let mut start_id = arena.insert(joints[0]);

        for pair in joints.windows(2) {
            let (cp1, cp2) = chord_thirds(pair[0], pair[1]);
            let ctrl1_id = arena.insert(cp1);
            let ctrl2_id = arena.insert(cp2);
            let end_id = arena.insert(pair[1]);
            segments.push(CurveSegment::new(start_id, ctrl1_id, ctrl2_id, end_id, sample_count));
            start_id = end_id;
        }

        let mut path = Self { arena, segments };
        path.rebuild_all();
        Some(path)
    }

    /// Standard-Pfad beim Erstellen eines Renderables: zwei Segmente entlang X.
    pub fn default_two_segments() -> Self {
        Self::default_two_segments_with(DEFAULT_SAMPLE_COUNT)
    }

    /// Standard-Pfad mit konfigurierbarer Sample-Anzahl.
    pub fn default_two_segments_with(sample_count: usize) -> Self {
        Self::from_joints(
            &[
                Vec3::ZERO,
                Vec3::new(10.0, 0.0, 0.0),
                Vec3::new(20.0, 0.0, 0.0),
            ],
            sample_count,
        )
        .expect("Standard-Pfad hat drei Joints")
    }

    // ── Lesezugriffe ────────────────────────────────────────────────

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Alle Segmente in Pfad-Reihenfolge (read-only).
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Segment am Index.
    pub fn segment(&self, index: usize) -> Option<&CurveSegment> {
        self.segments.get(index)
    }

    /// Koordinaten eines Kontrollpunkts.
    pub fn point(&self, id: u64) -> Option<Vec3> {
        self.arena.get(id)
    }

    /// Anzahl der Punkte in der Arena (für Invarianten-Checks).
    pub fn point_count(&self) -> usize {
        self.arena.len()
    }

    /// Prüft die Kontinuitäts-Invariante per Id-Gleichheit.
    pub fn is_continuous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end_id == pair[1].start_id)
    }

    // ── Rebuild ─────────────────────────────────────────────────────

    /// Tastet alle Segmente neu ab und liefert die kombinierte Polyline.
    ///
    /// Idempotent: ohne zwischenliegende Mutation liefert ein zweiter
    /// Aufruf die identische Punktfolge.
    pub fn rebuild_all(&mut self) -> Vec<Vec3> {
        for (index, segment) in self.segments.iter_mut().enumerate() {
            if !segment.rebuild(&self.arena) {
                log::warn!("Pfad: Segment {} konnte nicht neu abgetastet werden", index);
            }
        }
        self.combined_polyline()
    }

    /// Kombinierte Polyline aus den aktuellen Segment-Caches.
    ///
    /// Joints erscheinen genau einmal: vom ersten Segment alle Samples,
    /// von jedem weiteren ohne den ersten (identisch mit dem letzten des
    /// Vorgängers). n Segmente à `count` Samples → n·count + 1 Punkte.
    pub fn combined_polyline(&self) -> Vec<Vec3> {
        let total: usize = self.segments.iter().map(|s| s.sample_count()).sum();
        let mut polyline = Vec::with_capacity(total + 1);

        for (index, segment) in self.segments.iter().enumerate() {
            let samples = segment.samples();
            if samples.is_empty() {
                continue;
            }
            if index == 0 {
                polyline.extend_from_slice(samples);
            } else {
                polyline.extend_from_slice(&samples[1..]);
            }
        }

        polyline
    }

    /// Kumulative Sample-Offsets der Segment-Starts plus Endpunkt.
    ///
    /// Offset i ist die Position des Joints i in der kombinierten
    /// Polyline (Handle-Platzierung); der letzte Eintrag zeigt auf den
    /// letzten Punkt.
    pub fn joint_offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.segments.len() + 1);
        let mut cumulative = 0usize;
        offsets.push(0);
        for segment in &self.segments {
            cumulative += segment.sample_count();
            offsets.push(cumulative);
        }
        offsets
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Überschreibt einen Kontrollpunkt und tastet den Pfad neu ab.
    ///
    /// Ein Joint-Schreiben wirkt über die geteilte Id auf beide
    /// Nachbar-Segmente. `false` bei unbekannter Id (kein Zustand verändert).
    pub fn set_point(&mut self, id: u64, position: Vec3) -> bool {
        if !self.arena.set(id, position) {
            log::warn!("Pfad: Punkt-Id {} unbekannt", id);
            return false;
        }
        self.rebuild_all();
        true
    }

    /// Setzt die vier Kontrollpunkt-Koordinaten eines Segments (Inspector-Edit).
    ///
    /// Joints werden dabei mitgeschrieben — der jeweilige Nachbar sieht
    /// die Änderung über die geteilte Id. `false` bei ungültigem Index.
    pub fn set_segment_points(&mut self, index: usize, points: [Vec3; 4]) -> bool {
        let Some(segment) = self.segments.get(index) else {
            log::warn!("Pfad: Segment-Index {} außerhalb (Anzahl {})", index, self.segments.len());
            return false;
        };

        for (id, position) in segment.control_ids().into_iter().zip(points) {
            self.arena.set(id, position);
        }
        self.rebuild_all();
        true
    }

    /// Setzt die Sample-Anzahl eines Segments. `count < 1` wird abgelehnt.
    pub fn set_sample_count(&mut self, index: usize, count: usize) -> bool {
        let Some(segment) = self.segments.get_mut(index) else {
            log::warn!("Pfad: Segment-Index {} außerhalb (Anzahl {})", index, self.segments.len());
            return false;
        };
        if !segment.set_sample_count(count) {
            return false;
        }
        self.rebuild_all();
        true
    }

    /// Entfernt das Segment am Index.
    ///
    /// Abgelehnt wenn nur noch ein Segment existiert oder der Index
    /// außerhalb liegt (`false`, kein Zustand verändert). Beim Entfernen
    /// eines mittleren Segments übernimmt der Endpunkt des Vorgängers den
    /// Joint (linker Nachbar gewinnt); verwaiste Punkte verlassen die Arena.
    pub fn remove_segment(&mut self, index: usize) -> bool {
        if self.segments.len() <= 1 {
            log::warn!("Pfad: letztes Segment kann nicht entfernt werden");
            return false;
        }
        if index >= self.segments.len() {
            log::warn!("Pfad: Segment-Index {} außerhalb (Anzahl {})", index, self.segments.len());
            return false;
        }

        let removed = self.segments.remove(index);

        // Mittleres Segment: Nachfolger an den Endpunkt des Vorgängers hängen.
        // Der Nachfolger ist nach dem remove() auf `index` nachgerückt.
        if index > 0 && index < self.segments.len() {
            let new_joint = self.segments[index - 1].end_id;
            self.segments[index].start_id = new_joint;
        }

        // Punkte des entfernten Segments, die kein verbleibendes Segment
        // mehr referenziert, aus der Arena entfernen.
        for id in removed.control_ids() {
            let still_used = self
                .segments
                .iter()
                .any(|segment| segment.control_ids().contains(&id));
            if !still_used {
                self.arena.remove(id);
            }
        }

        self.rebuild_all();
        true
    }

    /// Hängt ein neues Segment ans Pfad-Ende (Kettenfortsetzung).
    ///
    /// Startet am letzten Endpunkt (geteilter Joint), setzt das neue Ende
    /// in Verlängerung der letzten Sehne und die Steuerpunkte auf
    /// Sehnen-Drittel. Sample-Anzahl wird vom letzten Segment übernommen.
    /// Gibt den Index des neuen Segments zurück.
    pub fn append_segment(&mut self) -> usize {
        let last = &self.segments[self.segments.len() - 1];
        let start_id = last.end_id;
        let sample_count = last.sample_count();
        let anchor = self
            .arena
            .get(last.end_id)
            .expect("Pfad-Invariante: Joint-Punkt liegt in der Arena");
        let previous_start = self.arena.get(last.start_id).unwrap_or(anchor);

        // Letzte Sehne fortsetzen; degenerierte Sehne → fester X-Versatz.
        let mut chord = anchor - previous_start;
        if chord.length_squared() < f32::EPSILON {
            chord = Vec3::new(10.0, 0.0, 0.0);
        }
        let new_end = anchor + chord;

        let (cp1, cp2) = chord_thirds(anchor, new_end);
        let ctrl1_id = self.arena.insert(cp1);
        let ctrl2_id = self.arena.insert(cp2);
        let end_id = self.arena.insert(new_end);
        self.segments
            .push(CurveSegment::new(start_id, ctrl1_id, ctrl2_id, end_id, sample_count));

        self.rebuild_all();
        self.segments.len() - 1
    }
}

impl Default for BezierPath {
    fn default() -> Self {
        Self::default_two_segments()
    }
}
