//! Zentrale Konfiguration für den Pfad-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven-Sampling ─────────────────────────────────────────────────

/// Standard-Anzahl der Samples je Bézier-Segment (Qualitäts-Regler).
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

// ── Handles ─────────────────────────────────────────────────────────

/// Radius der Handle-Kugeln in Welteinheiten.
pub const HANDLE_RADIUS_WORLD: f32 = 0.4;
/// Pick-Radius (Welteinheiten): ein Drag innerhalb dieses Radius greift das nächste Handle.
pub const HANDLE_PICK_RADIUS: f32 = 1.5;
/// Farbe der Joint-Handles (RGBA: Cyan).
pub const HANDLE_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];

// ── Kurven-Rendering ────────────────────────────────────────────────

/// Farbe gerader Segmente (RGBA: Grün).
pub const CURVE_COLOR_EVEN: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe ungerader Segmente (RGBA: Blau) — macht Segment-Grenzen sichtbar.
pub const CURVE_COLOR_ODD: [f32; 4] = [0.2, 0.7, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_path_editor.toml` neben der Host-Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Sampling ────────────────────────────────────────────────
    /// Samples je Segment für neu erstellte Segmente
    pub samples_per_segment: usize,

    // ── Handles ─────────────────────────────────────────────────
    /// Handle-Radius in Welteinheiten
    pub handle_radius_world: f32,
    /// Pick-Radius für Handle-Drags in Welteinheiten
    pub handle_pick_radius: f32,
    /// Farbe der Joint-Handles (RGBA)
    pub handle_color: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Farbe gerader Segmente (RGBA)
    pub curve_color_even: [f32; 4],
    /// Farbe ungerader Segmente (RGBA)
    #[serde(default = "default_curve_color_odd")]
    pub curve_color_odd: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: DEFAULT_SAMPLE_COUNT,

            handle_radius_world: HANDLE_RADIUS_WORLD,
            handle_pick_radius: HANDLE_PICK_RADIUS,
            handle_color: HANDLE_COLOR,

            curve_color_even: CURVE_COLOR_EVEN,
            curve_color_odd: CURVE_COLOR_ODD,
        }
    }
}

/// Serde-Default für `curve_color_odd` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_curve_color_odd() -> [f32; 4] {
    CURVE_COLOR_ODD
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_path_editor.toml")
    }
}
