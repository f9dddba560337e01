//! Visual tag assignment for employees.

use crate::utils::colors::tag_to_rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default palette: distinguishable on dark and light terminals.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorAssigner {
    /// `palette[index % palette.len()]`
    Palette(Vec<String>),
    /// Pseudo-random hue, reproducible for a given seed and index.
    Seeded { seed: u64 },
}

impl Default for ColorAssigner {
    fn default() -> Self {
        ColorAssigner::Palette(default_palette())
    }
}

/// Tags the renderer understands: `#rrggbb` or `hsl(h, s%, l%)`.
pub fn is_valid_tag(tag: &str) -> bool {
    tag_to_rgb(tag).is_some()
}

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

impl ColorAssigner {
    pub fn palette(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            ColorAssigner::Palette(colors)
        }
    }

    /// Tag for the employee at ordinal `index` in the collection.
    pub fn tag_for(&self, index: usize) -> String {
        match self {
            ColorAssigner::Palette(colors) if !colors.is_empty() => {
                colors[index % colors.len()].clone()
            }
            ColorAssigner::Palette(_) => DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()].to_string(),
            ColorAssigner::Seeded { seed } => {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
                let hue: u16 = rng.gen_range(0..360);
                format!("hsl({hue}, 65%, 55%)")
            }
        }
    }
}
