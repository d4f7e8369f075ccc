//! Arena für Kontrollpunkte: Id-indexierter Punktspeicher.
//!
//! Joints (von zwei Segmenten geteilte Punkte) sind als geteilte Id
//! ausgedrückt — die Kontinuitäts-Invariante ist damit per Id-Gleichheit
//! prüfbar statt über Referenz-Aliasing.

use glam::Vec3;
use std::collections::HashMap;

/// Id-indexierter Speicher aller Kontrollpunkte eines Pfads.
#[derive(Debug, Clone, Default)]
pub struct PointArena {
    /// Alle Kontrollpunkte, indexiert nach ihrer Id
    points: HashMap<u64, Vec3>,
    /// Nächste freie Id (auto-increment)
    next_id: u64,
}

impl PointArena {
    /// Erstellt eine leere Arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Punkt hinzu und gibt die vergebene Id zurück.
    pub fn insert(&mut self, position: Vec3) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.points.insert(id, position);
        id
    }

    /// Liest die Koordinaten eines Punkts.
    pub fn get(&self, id: u64) -> Option<Vec3> {
        self.points.get(&id).copied()
    }

    /// Überschreibt die Koordinaten eines Punkts (Copy-From-Semantik).
    pub fn set(&mut self, id: u64, position: Vec3) -> bool {
        match self.points.get_mut(&id) {
            Some(point) => {
                *point = position;
                true
            }
            None => false,
        }
    }

    /// Entfernt einen Punkt aus der Arena.
    pub fn remove(&mut self, id: u64) -> Option<Vec3> {
        self.points.remove(&id)
    }

    /// Prüft ob die Id in der Arena liegt.
    pub fn contains(&self, id: u64) -> bool {
        self.points.contains_key(&id)
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt zurück ob die Arena leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_vergibt_fortlaufende_ids() {
        let mut arena = PointArena::new();
        let a = arena.insert(Vec3::ZERO);
        let b = arena.insert(Vec3::new(1.0, 2.0, 3.0));

        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(b), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_set_ueberschreibt_in_place() {
        let mut arena = PointArena::new();
        let id = arena.insert(Vec3::ZERO);

        assert!(arena.set(id, Vec3::new(5.0, 5.0, 5.0)));
        assert_eq!(arena.get(id), Some(Vec3::new(5.0, 5.0, 5.0)));
    }

    #[test]
    fn test_set_unbekannte_id_wird_abgelehnt() {
        let mut arena = PointArena::new();
        assert!(!arena.set(42, Vec3::ZERO));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_remove_gibt_ids_nicht_neu_aus() {
        let mut arena = PointArena::new();
        let a = arena.insert(Vec3::ZERO);
        arena.remove(a);

        let b = arena.insert(Vec3::ONE);
        assert_ne!(a, b, "entfernte Ids dürfen nicht wiederverwendet werden");
        assert!(!arena.contains(a));
    }
}
