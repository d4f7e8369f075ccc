//! Reine Geometrie-Funktionen für kubische Bézier-Kurven.
//!
//! Layer-neutral: kann von `core` und `app` importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Alle Funktionen sind deterministisch
//! und frei von Seiteneffekten.

use glam::Vec3;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Tastet eine kubische Bézier-Kurve gleichmäßig über t ∈ [0, 1] ab.
///
/// Liefert `count + 1` Punkte; der erste ist exakt `p0`, der letzte exakt
/// `p3` (bei t = 0 bzw. t = 1 fallen alle anderen Bernstein-Terme weg).
/// `count == 0` ist ungültig → `None`, der Aufrufer behält seinen Cache.
pub fn cubic_bezier_samples(
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    count: usize,
) -> Option<Vec<Vec3>> {
    if count == 0 {
        return None;
    }
    let mut samples = Vec::with_capacity(count + 1);
    for i in 0..=count {
        let t = i as f32 / count as f32;
        samples.push(cubic_bezier(p0, p1, p2, p3, t));
    }
    Some(samples)
}

/// Standard-Platzierung der Steuerpunkte auf Sehnen-Dritteln.
///
/// Liefert (CP1, CP2) bei 1/3 bzw. 2/3 der Sehne Start→Ende; mit diesen
/// Steuerpunkten degeneriert die Kurve zur Geraden. Degenerierte Sehne
/// (Länge ≈ 0) → beide CPs auf den Endpunkten.
pub fn chord_thirds(start: Vec3, end: Vec3) -> (Vec3, Vec3) {
    let chord = end - start;
    if chord.length_squared() < f32::EPSILON {
        return (start, end);
    }
    (start + chord / 3.0, start + chord * (2.0 / 3.0))
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(3.0, 10.0, 0.0);
        let p2 = Vec3::new(7.0, 10.0, 0.0);
        let p3 = Vec3::new(10.0, 0.0, 0.0);

        let start = cubic_bezier(p0, p1, p2, p3, 0.0);
        let end = cubic_bezier(p0, p1, p2, p3, 1.0);

        assert!((start - p0).length() < 0.001);
        assert!((end - p3).length() < 0.001);
    }

    #[test]
    fn test_cubic_bezier_midpoint() {
        // B(0.5) = 0.125·P0 + 0.375·P1 + 0.375·P2 + 0.125·P3
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 10.0, 0.0);
        let p2 = Vec3::new(10.0, 0.0, 0.0);
        let p3 = Vec3::new(10.0, 10.0, 0.0);

        let mid = cubic_bezier(p0, p1, p2, p3, 0.5);
        assert!((mid - Vec3::new(5.0, 5.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_samples_liefert_count_plus_eins_punkte() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(3.0, 8.0, 1.0);
        let p2 = Vec3::new(7.0, 8.0, -1.0);
        let p3 = Vec3::new(10.0, 0.0, 0.0);

        let samples = cubic_bezier_samples(p0, p1, p2, p3, 10).expect("Samples erwartet");
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0], p0);
        assert_eq!(samples[10], p3);
    }

    #[test]
    fn test_samples_count_null_wird_abgelehnt() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(cubic_bezier_samples(p, p, p, p, 0).is_none());
    }

    #[test]
    fn test_sehnen_drittel_ergeben_gerade() {
        let start = Vec3::ZERO;
        let end = Vec3::new(12.0, 0.0, 0.0);
        let (cp1, cp2) = chord_thirds(start, end);

        let samples = cubic_bezier_samples(start, cp1, cp2, end, 8).expect("Samples erwartet");
        for (i, p) in samples.iter().enumerate() {
            assert!(p.y.abs() < 0.001, "Sample {} hat y={:.4}, erwartet 0", i, p.y);
            assert!(p.z.abs() < 0.001, "Sample {} hat z={:.4}, erwartet 0", i, p.z);
        }
    }

    #[test]
    fn test_sehnen_drittel_degeneriert() {
        let p = Vec3::new(4.0, 4.0, 4.0);
        let (cp1, cp2) = chord_thirds(p, p);
        assert_eq!(cp1, p);
        assert_eq!(cp2, p);
    }

    #[test]
    fn test_polyline_length_gerade() {
        let points = [
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        ];
        assert!((polyline_length(&points) - 10.0).abs() < 0.001);
    }
}
