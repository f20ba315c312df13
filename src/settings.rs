//! Game settings and tuning
//!
//! Persisted in LocalStorage. Both game variants are presets over the same
//! `Tuning` block rather than separate code paths.

use serde::{Deserialize, Serialize};

use crate::consts::INVADER_HEIGHT;

/// Game variant preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Grids march sideways, drop at the edges and shrink as invaders die
    #[default]
    Marching,
    /// Grids hold still; smaller ship, outlined shots
    Static,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Marching => "Marching",
            Variant::Static => "Static",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "marching" | "march" => Some(Variant::Marching),
            "static" => Some(Variant::Static),
            _ => None,
        }
    }

    /// Pick a variant from a URL query string such as `?variant=static`
    pub fn from_query(query: &str) -> Option<Self> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "variant")
            .and_then(|(_, value)| Self::from_str(value))
    }

    /// Tuning defaults for this preset
    pub fn tuning(&self) -> Tuning {
        match self {
            Variant::Marching => Tuning::default(),
            Variant::Static => Tuning {
                player: PlayerTuning {
                    scale: 0.2,
                    ..PlayerTuning::default()
                },
                projectile: ProjectileTuning {
                    style: ProjectileStyle::Outlined,
                    ..ProjectileTuning::default()
                },
                grid: GridTuning {
                    marching: false,
                    min_columns: 5,
                    max_columns: 10,
                    min_rows: 2,
                    max_rows: 5,
                    ..GridTuning::default()
                },
                ..Tuning::default()
            },
        }
    }
}

/// How projectiles are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectileStyle {
    #[default]
    Filled,
    Outlined,
}

/// Player ship tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerTuning {
    /// Scale applied to the 450x225 ship sprite
    pub scale: f32,
    /// Per-frame step on each axis (pixels)
    pub step: (f32, f32),
    /// Visual lean while turning (radians)
    pub lean: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            scale: 0.25,
            step: (10.0, 10.0),
            lean: 0.15,
        }
    }
}

/// Projectile tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectileTuning {
    /// Upward speed (pixels per tick)
    pub speed: f32,
    pub radius: f32,
    pub style: ProjectileStyle,
    /// CSS color
    pub color: String,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 8.0,
            radius: 5.0,
            style: ProjectileStyle::Filled,
            color: "#f00".to_string(),
        }
    }
}

/// Invader grid tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridTuning {
    /// Whether grids move at all
    pub marching: bool,
    /// Horizontal step (pixels per tick)
    pub speed: f32,
    /// Vertical drop applied on the frame the grid reverses
    pub drop: f32,
    pub min_columns: u32,
    pub max_columns: u32,
    pub min_rows: u32,
    pub max_rows: u32,
}

impl GridTuning {
    /// Largest column or row count accepted from stored settings
    pub const MAX_DIMENSION: u32 = 64;

    /// Pull hand-edited bounds back into `1..=MAX_DIMENSION`, min <= max
    pub fn clamp_dimensions(&mut self) {
        self.max_columns = self.max_columns.clamp(1, Self::MAX_DIMENSION);
        self.max_rows = self.max_rows.clamp(1, Self::MAX_DIMENSION);
        self.min_columns = self.min_columns.clamp(1, self.max_columns);
        self.min_rows = self.min_rows.clamp(1, self.max_rows);
    }
}

impl Default for GridTuning {
    fn default() -> Self {
        Self {
            marching: true,
            speed: 2.0,
            drop: INVADER_HEIGHT * 0.5,
            min_columns: 5,
            max_columns: 16,
            min_rows: 3,
            max_rows: 7,
        }
    }
}

/// Gameplay tuning, shared by the simulation and the renderer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tuning {
    /// Field size as a fraction of the viewport (width, height)
    pub field_scale: (f32, f32),
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub grid: GridTuning,
    /// Grids spawned at game start
    pub initial_grids: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_scale: (0.7, 0.8),
            player: PlayerTuning::default(),
            projectile: ProjectileTuning::default(),
            grid: GridTuning::default(),
            initial_grids: 1,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Variant the tuning was derived from
    pub variant: Variant,
    /// Effective tuning (may be hand-edited after the preset is applied)
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl Settings {
    /// Create settings from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            tuning: variant.tuning(),
        }
    }

    /// Apply a variant preset (replaces the tuning block)
    pub fn apply_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.tuning = variant.tuning();
    }

    /// Parse settings from JSON. Grid dimensions are clamped to sane bounds.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.tuning.grid.clamp_dimensions();
        Ok(settings)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_invaders_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage ({})", settings.variant.as_str());
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
