//! Readability checks over a finished palette.
//!
//! Repairs never fail loudly, so this is the one place a shortfall becomes
//! visible. Every checked role is measured against both `background` and
//! `background_light`; the lower ratio is what counts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::Color;
use crate::contrast::contrast;
use crate::error::Result;
use crate::mode::ThemeMode;
use crate::palette::Palette;
use crate::policy::{
    MIN_DIM_CONTRAST, MIN_SEMANTIC_CONTRAST, MIN_TERMINAL_CONTRAST, MIN_TEXT_CONTRAST,
};
use crate::role::{Role, RoleFamily};

/// A group of roles held to one threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub roles: &'static [Role],
    pub required: f64,
}

pub const CATEGORIES: [Category; 9] = {
    use Role::*;
    [
        Category {
            name: "FOREGROUND (bright)",
            roles: &[ForegroundBright],
            required: MIN_TEXT_CONTRAST,
        },
        Category {
            name: "FOREGROUND (main)",
            roles: &[Foreground, ForegroundMedium],
            required: MIN_TEXT_CONTRAST,
        },
        Category {
            name: "FOREGROUND (dim)",
            roles: &[ForegroundDim],
            required: MIN_DIM_CONTRAST,
        },
        Category {
            name: "ACCENTS",
            roles: &[Primary, PrimaryVariant, Secondary, SecondaryVariant],
            required: MIN_TERMINAL_CONTRAST,
        },
        Category {
            name: "HIGHLIGHT",
            roles: &[Tertiary],
            required: MIN_SEMANTIC_CONTRAST,
        },
        Category {
            name: "SEMANTIC",
            roles: &[Error, Warning, Success, Info],
            required: MIN_SEMANTIC_CONTRAST,
        },
        Category {
            name: "TERMINAL BASE",
            roles: &[Red, Green, Yellow, Blue, Magenta, Cyan, White],
            required: MIN_TERMINAL_CONTRAST,
        },
        Category {
            name: "TERMINAL BRIGHT",
            roles: &[
                RedBright,
                GreenBright,
                YellowBright,
                BlueBright,
                MagentaBright,
                CyanBright,
                WhiteBright,
            ],
            required: MIN_TERMINAL_CONTRAST,
        },
        Category {
            name: "TERMINAL DIM",
            roles: &[RedDim, GreenDim, YellowDim, BlueDim, MagentaDim, CyanDim, WhiteDim],
            required: MIN_TERMINAL_CONTRAST,
        },
    ]
};

/// One role measured against both backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleCheck {
    pub role: Role,
    pub color: Color,
    pub vs_background: f64,
    pub vs_background_light: f64,
    pub required: f64,
}

impl RoleCheck {
    pub fn achieved(&self) -> f64 {
        self.vs_background.min(self.vs_background_light)
    }

    pub fn passes(&self) -> bool {
        self.achieved() >= self.required
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub name: &'static str,
    pub required: f64,
    pub checks: Vec<RoleCheck>,
}

/// A role that missed its category threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Issue {
    pub role: Role,
    pub color: Color,
    pub achieved: f64,
    pub required: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    pub mode: ThemeMode,
    pub background: Color,
    pub background_medium: Color,
    pub background_light: Color,
    pub categories: Vec<CategoryResult>,
    pub issues: Vec<Issue>,
}

impl ReadabilityReport {
    /// Checks every category in [`CATEGORIES`].
    ///
    /// Roles absent from the palette are skipped. The three background roles
    /// are required.
    pub fn evaluate(palette: &Palette, mode: ThemeMode) -> Result<Self> {
        let background = palette.require(Role::Background)?;
        let background_medium = palette.require(Role::BackgroundMedium)?;
        let background_light = palette.require(Role::BackgroundLight)?;

        let mut issues = Vec::new();
        let categories = CATEGORIES
            .iter()
            .map(|category| {
                let checks: Vec<RoleCheck> = category
                    .roles
                    .iter()
                    .filter_map(|&role| {
                        let color = palette.get(role)?;
                        Some(RoleCheck {
                            role,
                            color,
                            vs_background: contrast(&color, &background),
                            vs_background_light: contrast(&color, &background_light),
                            required: category.required,
                        })
                    })
                    .collect();
                issues.extend(checks.iter().filter(|c| !c.passes()).map(|c| Issue {
                    role: c.role,
                    color: c.color,
                    achieved: c.achieved(),
                    required: c.required,
                }));
                CategoryResult {
                    name: category.name,
                    required: category.required,
                    checks,
                }
            })
            .collect();

        Ok(Self {
            mode,
            background,
            background_medium,
            background_light,
            categories,
            issues,
        })
    }

    pub fn passes(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Minimum ratio against both backgrounds for every role that is drawn on
/// top of them. Backgrounds and elements are left out.
pub fn contrast_table(palette: &Palette) -> Result<BTreeMap<Role, f64>> {
    let bg = palette.require(Role::Background)?;
    let bg_light = palette.require(Role::BackgroundLight)?;
    Ok(palette
        .iter()
        .filter(|(role, _)| {
            !matches!(role.family(), RoleFamily::Backgrounds | RoleFamily::Elements)
        })
        .map(|(role, color)| {
            (role, contrast(&color, &bg).min(contrast(&color, &bg_light)))
        })
        .collect())
}
