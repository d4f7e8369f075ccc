//! Expliziter Handle-Pool: je Slot ein Engine-Handle.
//!
//! Wächst und schrumpft nur bei Segment-Änderungen; beim Schrumpfen
//! werden überzählige Handles synchron disposed, damit Callbacks auf
//! verwaiste Slots strukturell unmöglich sind. Kein verstecktes
//! Lazy-Prototyp-Klonen — alle Handles entstehen über die Host-Factory.

use crate::render::{HandleFactory, HandleVisual};
use glam::Vec3;

/// Pool der Joint-Handles, indiziert nach Slot.
#[derive(Default)]
pub struct HandlePool {
    handles: Vec<Box<dyn HandleVisual>>,
}

impl HandlePool {
    /// Erstellt einen leeren Pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Handle-Anzahl.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Gibt zurück ob der Pool leer ist.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Passt den Pool an `count` Slots an.
    ///
    /// Fehlende Handles werden über die Factory erzeugt (an Vec3::ZERO,
    /// Position folgt per `set_positions`), überzählige synchron disposed.
    pub fn resize(
        &mut self,
        count: usize,
        factory: &mut dyn HandleFactory,
        radius: f32,
        color: [f32; 4],
    ) {
        while self.handles.len() > count {
            if let Some(mut handle) = self.handles.pop() {
                handle.dispose();
            }
        }
        while self.handles.len() < count {
            self.handles.push(factory.create_handle(Vec3::ZERO, radius, color));
        }
    }

    /// Positioniert alle Handles (ohne Neuerstellung).
    pub fn set_positions(&mut self, positions: &[Vec3]) {
        for (handle, &position) in self.handles.iter_mut().zip(positions) {
            handle.set_position(position);
        }
    }

    /// Disposed alle Handles und leert den Pool.
    pub fn clear(&mut self) {
        for handle in &mut self.handles {
            handle.dispose();
        }
        self.handles.clear();
    }

    /// Nächstes Handle innerhalb `pick_radius` um `position`.
    pub fn pick(&self, position: Vec3, pick_radius: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (slot, handle) in self.handles.iter().enumerate() {
            let distance = handle.position().distance(position);
            if distance <= pick_radius && best.map_or(true, |(_, d)| distance < d) {
                best = Some((slot, distance));
            }
        }
        best.map(|(slot, _)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct TestHandle {
        position: Vec3,
        disposed: Rc<Cell<usize>>,
    }

    impl HandleVisual for TestHandle {
        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }
        fn position(&self) -> Vec3 {
            self.position
        }
        fn dispose(&mut self) {
            self.disposed.set(self.disposed.get() + 1);
        }
    }

    struct TestFactory {
        created: usize,
        disposed: Rc<Cell<usize>>,
    }

    impl HandleFactory for TestFactory {
        fn create_handle(
            &mut self,
            position: Vec3,
            _radius: f32,
            _color: [f32; 4],
        ) -> Box<dyn HandleVisual> {
            self.created += 1;
            Box::new(TestHandle {
                position,
                disposed: Rc::clone(&self.disposed),
            })
        }
    }

    fn factory() -> TestFactory {
        TestFactory {
            created: 0,
            disposed: Rc::new(Cell::new(0)),
        }
    }

    #[test]
    fn test_resize_waechst_und_schrumpft_mit_disposal() {
        let mut pool = HandlePool::new();
        let mut factory = factory();

        pool.resize(3, &mut factory, 0.4, [1.0; 4]);
        assert_eq!(pool.len(), 3);
        assert_eq!(factory.created, 3);

        pool.resize(2, &mut factory, 0.4, [1.0; 4]);
        assert_eq!(pool.len(), 2);
        assert_eq!(factory.disposed.get(), 1, "überzähliges Handle disposed");
        assert_eq!(factory.created, 3, "keine Neuerstellung beim Schrumpfen");
    }

    #[test]
    fn test_clear_disposed_alle() {
        let mut pool = HandlePool::new();
        let mut factory = factory();

        pool.resize(3, &mut factory, 0.4, [1.0; 4]);
        pool.clear();

        assert!(pool.is_empty());
        assert_eq!(factory.disposed.get(), 3);
    }

    #[test]
    fn test_pick_findet_naechstes_im_radius() {
        let mut pool = HandlePool::new();
        let mut factory = factory();
        pool.resize(3, &mut factory, 0.4, [1.0; 4]);
        pool.set_positions(&[
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(20.0, 0.0, 0.0),
        ]);

        assert_eq!(pool.pick(Vec3::new(9.2, 0.5, 0.0), 1.5), Some(1));
        assert_eq!(pool.pick(Vec3::new(50.0, 0.0, 0.0), 1.5), None);
    }
}
