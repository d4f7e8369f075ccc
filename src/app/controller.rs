//! Pfad-Controller: zentrale Orchestrierung von Kurven-Edits.
//!
//! Besitzt den Pfad, die Host-Anbindung (Geometrie + Handle-Factory) und
//! den Handle-Pool. Jede Mutation läuft synchron durch: Punkt schreiben →
//! Segmente neu abtasten → Vertex-Puffer ersetzen → Handles positionieren.

use super::handle_pool::HandlePool;
use super::slots::{joint_slot, slot_count, HandleRole};
use crate::core::BezierPath;
use crate::render::{HandleFactory, PolylineGeometry, PolylineVertex};
use crate::shared::EditorOptions;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Read-only Beschreibung eines Segments für Tree-View/Inspector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentDescriptor {
    /// Index des Segments im Pfad
    pub index: usize,
    /// Die vier Kontrollpunkte in Kurven-Reihenfolge (Start, CP1, CP2, Ende)
    pub points: [Vec3; 4],
    /// Samples je Segment
    pub sample_count: usize,
}

/// Sichtbarkeits-Zustand der Handle-Visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandleState {
    /// Keine Handles allokiert (Initial-Zustand)
    Hidden,
    /// Voller Handle-Satz (Segmente + 1) allokiert
    Visible,
}

/// Orchestriert Kurven-Edits auf dem Pfad und hält Geometrie und Handles
/// der Host-Engine synchron.
pub struct PathController {
    path: BezierPath,
    geometry: Box<dyn PolylineGeometry>,
    factory: Box<dyn HandleFactory>,
    pool: HandlePool,
    state: HandleState,
    options: EditorOptions,
    /// Kombinierte Polyline des letzten Rebuilds
    polyline: Vec<Vec3>,
    /// Joint-Offsets des letzten Rebuilds (Handle-Platzierung)
    joint_offsets: Vec<usize>,
}

impl PathController {
    /// Erstellt den Controller mit dem Standard-Zwei-Segment-Pfad.
    ///
    /// Initial-Zustand: Handles Hidden; die Polyline geht sofort an die
    /// Host-Geometrie.
    pub fn new(
        geometry: Box<dyn PolylineGeometry>,
        factory: Box<dyn HandleFactory>,
        options: EditorOptions,
    ) -> Self {
        let path = BezierPath::default_two_segments_with(options.samples_per_segment.max(1));
        Self::with_path(path, geometry, factory, options)
    }

    /// Erstellt den Controller über einem vorhandenen Pfad.
    pub fn with_path(
        path: BezierPath,
        geometry: Box<dyn PolylineGeometry>,
        factory: Box<dyn HandleFactory>,
        options: EditorOptions,
    ) -> Self {
        let mut controller = Self {
            path,
            geometry,
            factory,
            pool: HandlePool::new(),
            state: HandleState::Hidden,
            options,
            polyline: Vec::new(),
            joint_offsets: Vec::new(),
        };
        controller.rebuild_and_push();
        controller
    }

    // ── Lesezugriffe ────────────────────────────────────────────────

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.path.segment_count()
    }

    /// Der unterliegende Pfad (read-only).
    pub fn path(&self) -> &BezierPath {
        &self.path
    }

    /// Kombinierte Polyline des letzten Rebuilds.
    pub fn polyline(&self) -> &[Vec3] {
        &self.polyline
    }

    /// true wenn die Handle-Visuals sichtbar sind.
    pub fn handles_visible(&self) -> bool {
        self.state == HandleState::Visible
    }

    /// Aktuelle Handle-Anzahl im Pool.
    pub fn handle_count(&self) -> usize {
        self.pool.len()
    }

    /// Geordnete Segment-Beschreibungen für Tree-View/Inspector.
    pub fn segment_descriptors(&self) -> Vec<SegmentDescriptor> {
        self.path
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| SegmentDescriptor {
                index,
                points: segment
                    .control_ids()
                    .map(|id| self.path.point(id).unwrap_or(Vec3::ZERO)),
                sample_count: segment.sample_count(),
            })
            .collect()
    }

    // ── Rebuild ─────────────────────────────────────────────────────

    /// Tastet alle Segmente neu ab, ersetzt den Vertex-Puffer und
    /// positioniert sichtbare Handles (ohne Neuerstellung).
    pub fn rebuild_and_push(&mut self) {
        self.path.rebuild_all();
        self.refresh_from_path();
    }

    /// Übernimmt die aktuellen Segment-Caches in Polyline, Vertex-Puffer
    /// und Handle-Positionen (Pfad-Mutationen tasten selbst neu ab).
    fn refresh_from_path(&mut self) {
        self.polyline = self.path.combined_polyline();
        self.joint_offsets = self.path.joint_offsets();
        let vertices = self.build_vertices();
        self.geometry.replace_vertices(&vertices);
        if self.state == HandleState::Visible {
            self.pool.set_positions(&self.handle_positions());
        }
    }

    /// Vertex-Puffer mit alternierenden Segment-Farben.
    fn build_vertices(&self) -> Vec<PolylineVertex> {
        let mut vertices = Vec::with_capacity(self.polyline.len());
        let mut segment = 0usize;
        for (i, point) in self.polyline.iter().enumerate() {
            // Joint-Vertices zählen zum vorangehenden Segment
            while segment + 1 < self.joint_offsets.len() - 1 && i > self.joint_offsets[segment + 1]
            {
                segment += 1;
            }
            let color = if segment % 2 == 0 {
                self.options.curve_color_even
            } else {
                self.options.curve_color_odd
            };
            vertices.push(PolylineVertex::new(point.to_array(), color));
        }
        vertices
    }

    /// Handle-Positionen aus den Joint-Offsets der Polyline.
    fn handle_positions(&self) -> Vec<Vec3> {
        self.joint_offsets
            .iter()
            .filter_map(|&offset| self.polyline.get(offset).copied())
            .collect()
    }

    // ── Sichtbarkeit ────────────────────────────────────────────────

    /// Hidden → Visible: erstellt den vollen Handle-Satz (Segmente + 1).
    pub fn show(&mut self) {
        self.state = HandleState::Visible;
        self.sync_pool();
    }

    /// Visible → Hidden: disposed alle Handles und leert den Pool.
    /// Kurven-Daten und Polyline bleiben unverändert.
    pub fn hide(&mut self) {
        self.state = HandleState::Hidden;
        self.pool.clear();
    }

    /// Pool-Größe an die Segment-Anzahl angleichen und positionieren.
    fn sync_pool(&mut self) {
        if self.state != HandleState::Visible {
            return;
        }
        self.pool.resize(
            slot_count(self.path.segment_count()),
            self.factory.as_mut(),
            self.options.handle_radius_world,
            self.options.handle_color,
        );
        self.pool.set_positions(&self.handle_positions());
    }

    // ── Edits ───────────────────────────────────────────────────────

    /// Drag-Callback eines Handles: Slot auflösen, Punkt schreiben, Rebuild.
    ///
    /// Joint-Slots schreiben genau einen Arena-Punkt — beide Nachbar-
    /// Segmente sehen die Änderung über die geteilte Id. Während eines
    /// Drags werden Handles nur repositioniert, nie neu erstellt.
    pub fn on_handle_drag(&mut self, slot_index: usize, position: Vec3) -> bool {
        let Some(slot) = joint_slot(slot_index, self.path.segment_count()) else {
            log::warn!("Controller: Handle-Slot {} außerhalb", slot_index);
            return false;
        };
        self.update_control_point(slot.segment, slot.role, position)
    }

    /// Schreibt einen Kontrollpunkt (Rolle innerhalb des Segments) und
    /// stößt Rebuild + Handle-Repositionierung an.
    ///
    /// Start/End am Joint treffen die geteilte Id (beide Nachbarn sehen
    /// die Änderung); am Pfad-Anfang bzw. -Ende gibt es keinen Nachbarn —
    /// dann ändert sich nur das eine Segment.
    pub fn update_control_point(
        &mut self,
        segment_index: usize,
        role: HandleRole,
        position: Vec3,
    ) -> bool {
        let Some(segment) = self.path.segment(segment_index) else {
            log::warn!("Controller: Segment-Index {} außerhalb", segment_index);
            return false;
        };

        let ids = segment.control_ids();
        let id = match role {
            HandleRole::Start => ids[0],
            HandleRole::Ctrl1 => ids[1],
            HandleRole::Ctrl2 => ids[2],
            HandleRole::End => ids[3],
        };

        if !self.path.set_point(id, position) {
            return false;
        }
        self.refresh_from_path();
        true
    }

    /// Nächstes sichtbares Handle innerhalb des Pick-Radius.
    pub fn pick_handle(&self, position: Vec3) -> Option<usize> {
        self.pool.pick(position, self.options.handle_pick_radius)
    }

    /// Sichtbarkeit des Kurven-Renderables (Handle-Zustand unabhängig davon).
    pub fn set_curve_visible(&mut self, visible: bool) {
        self.geometry.set_visible(visible);
    }

    /// Entfernt ein Segment.
    ///
    /// Pool schrumpft synchron mit (überzählige Handles werden disposed,
    /// bevor ein weiterer Callback sie treffen könnte), danach Rebuild.
    pub fn remove_segment(&mut self, index: usize) -> bool {
        if !self.path.remove_segment(index) {
            return false;
        }
        self.refresh_from_path();
        self.sync_pool();
        true
    }

    /// Hängt ein Segment ans Pfad-Ende; Pool wächst bei sichtbaren Handles.
    pub fn append_segment(&mut self) -> usize {
        let index = self.path.append_segment();
        self.refresh_from_path();
        self.sync_pool();
        index
    }

    /// Inspector-Edit: die vier Kontrollpunkte eines Segments setzen.
    pub fn set_segment_points(&mut self, index: usize, points: [Vec3; 4]) -> bool {
        if !self.path.set_segment_points(index, points) {
            return false;
        }
        self.refresh_from_path();
        true
    }

    /// Qualitäts-Regler: Sample-Anzahl eines Segments.
    pub fn set_sample_count(&mut self, index: usize, count: usize) -> bool {
        if !self.path.set_sample_count(index, count) {
            return false;
        }
        self.refresh_from_path();
        true
    }
}
