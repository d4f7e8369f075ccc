//! Render-Verträge zur Host-Engine.
//!
//! Die eigentliche Szenen-/Rendering-Engine (Linien-Primitive, Picking,
//! Instancing, Fenster) ist extern; dieses Modul definiert den expliziten
//! Übergabevertrag, den der Host implementiert und der Controller konsumiert.

use glam::Vec3;

/// Vertex der Pfad-Polyline (Position + RGBA-Farbe).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineVertex {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// RGBA-Farbe des Vertex
    pub color: [f32; 4],
}

impl PolylineVertex {
    /// Erstellt einen neuen PolylineVertex.
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Polyline-Geometrie-Container des Hosts.
///
/// Der Vertex-Puffer wird bei jedem Rebuild komplett ersetzt —
/// inkrementelle Updates sind nicht Teil des Vertrags.
pub trait PolylineGeometry {
    /// Ersetzt den kompletten Vertex-Puffer (Positionen + Farben).
    fn replace_vertices(&mut self, vertices: &[PolylineVertex]);

    /// Schaltet die Sichtbarkeit des Renderables.
    fn set_visible(&mut self, visible: bool);
}

/// Kugel-artiges, pickbares Handle-Primitiv des Hosts (instanzierbar).
pub trait HandleVisual {
    /// Positioniert das Handle (Copy-From-Semantik der Engine).
    fn set_position(&mut self, position: Vec3);

    /// Aktuelle Handle-Position.
    fn position(&self) -> Vec3;

    /// Gibt die Engine-Ressource frei — nie den Kontrollpunkt dahinter.
    fn dispose(&mut self);
}

/// Factory für Handle-Primitive (Instancing-Naht zur Engine).
pub trait HandleFactory {
    /// Erstellt ein neues Handle an der gegebenen Position.
    fn create_handle(&mut self, position: Vec3, radius: f32, color: [f32; 4])
        -> Box<dyn HandleVisual>;
}
