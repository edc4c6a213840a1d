//! The role → color map and the stages that fill it.
//!
//! [`Palette`] is an ordered map keyed by [`Role`]. The stage modules each
//! take the palette built so far and return it with their roles added; the
//! [`generator`] sequences them.

pub mod accents;
pub mod backgrounds;
pub mod foregrounds;
pub mod generator;
pub mod semantic;
pub mod terminal;

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{PaletteError, Result};
use crate::mode::ThemeMode;
use crate::role::Role;

/// What every stage reads besides the palette built so far.
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    /// Colors extracted from the source image. Never empty.
    pub colors: &'a [Color],
    pub mode: ThemeMode,
}

/// One pipeline stage: takes the accumulated palette, returns it with the
/// stage's roles added.
pub type Stage = fn(&StageContext<'_>, Palette) -> Palette;

/// A mapping from role to color, iterated in [`Role`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    roles: BTreeMap<Role, Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a role, returning the color it replaced.
    pub fn insert(&mut self, role: Role, color: Color) -> Option<Color> {
        self.roles.insert(role, color)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, role: Role, color: Color) -> Self {
        self.roles.insert(role, color);
        self
    }

    pub fn get(&self, role: Role) -> Option<Color> {
        self.roles.get(&role).copied()
    }

    /// Like [`get`](Self::get), but a missing role is an error.
    pub fn require(&self, role: Role) -> Result<Color> {
        self.get(role).ok_or(PaletteError::MissingRole(role))
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains_key(&role)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        self.roles.iter().map(|(r, c)| (*r, *c))
    }

    /// Fixed roles not yet present, in role order.
    pub fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .iter()
            .copied()
            .filter(|r| !self.roles.contains_key(r))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.roles.len() == Role::ALL.len()
    }

    /// Errors on the first fixed role that is absent.
    pub fn ensure_complete(&self) -> Result<()> {
        match self.missing_roles().first() {
            Some(role) => Err(PaletteError::MissingRole(*role)),
            None => Ok(()),
        }
    }
}

/// Panics if the role is absent. Stages index roles written by earlier
/// stages, which the generator guarantees.
impl Index<Role> for Palette {
    type Output = Color;

    fn index(&self, role: Role) -> &Color {
        match self.roles.get(&role) {
            Some(color) => color,
            None => panic!("palette is missing role '{}'", role),
        }
    }
}

impl FromIterator<(Role, Color)> for Palette {
    fn from_iter<I: IntoIterator<Item = (Role, Color)>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Role, Color)> for Palette {
    fn extend<I: IntoIterator<Item = (Role, Color)>>(&mut self, iter: I) {
        self.roles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = (&'a Role, &'a Color);
    type IntoIter = std::collections::btree_map::Iter<'a, Role, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}

// ─── Candidate selection ────────────────────────────────────────────────────
//
// Stages pick extracted colors by "best score among a filtered list". Ties go
// to the earliest candidate, so results depend only on extraction order.

/// The first color with the greatest key.
pub(crate) fn first_max_by<'a, F>(colors: impl IntoIterator<Item = &'a Color>, key: F) -> Option<Color>
where
    F: Fn(&Color) -> f64,
{
    let mut best: Option<(f64, Color)> = None;
    for color in colors {
        let k = key(color);
        match best {
            Some((bk, _)) if k <= bk => {}
            _ => best = Some((k, *color)),
        }
    }
    best.map(|(_, c)| c)
}

/// The first color with the smallest key.
pub(crate) fn first_min_by<'a, F>(colors: impl IntoIterator<Item = &'a Color>, key: F) -> Option<Color>
where
    F: Fn(&Color) -> f64,
{
    first_max_by(colors, |c| -key(c))
}
