//! User edits layered over a generated palette.
//!
//! The generated palette is kept pristine underneath; edits live in their own
//! map and win on every read until restored. Regenerating swaps the base but
//! leaves edits in place.

use std::collections::BTreeMap;

use tracing::debug;

use crate::color::Color;
use crate::contrast::ensure_terminal_contrast;
use crate::error::Result;
use crate::mode::ThemeMode;
use crate::palette::Palette;
use crate::policy::contrast_requirement;
use crate::report::contrast_table;
use crate::role::Role;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditablePalette {
    base: Palette,
    overrides: BTreeMap<Role, Color>,
}

impl EditablePalette {
    pub fn new(base: Palette) -> Self {
        Self {
            base,
            overrides: BTreeMap::new(),
        }
    }

    /// The override for `role` if there is one, else the generated color.
    pub fn get(&self, role: Role) -> Option<Color> {
        self.overrides
            .get(&role)
            .copied()
            .or_else(|| self.base.get(role))
    }

    /// Pins `role` to `color`. Returns the previous override, if any.
    pub fn assign(&mut self, role: Role, color: Color) -> Option<Color> {
        self.overrides.insert(role, color)
    }

    /// Drops the override for `role` so the generated color shows again.
    pub fn restore(&mut self, role: Role) -> Option<Color> {
        self.overrides.remove(&role)
    }

    pub fn restore_all(&mut self) {
        self.overrides.clear();
    }

    /// Replaces the generated layer. Overrides survive.
    pub fn regenerate(&mut self, base: Palette) {
        self.base = base;
    }

    pub fn is_overridden(&self, role: Role) -> bool {
        self.overrides.contains_key(&role)
    }

    pub fn overrides(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        self.overrides.iter().map(|(r, c)| (*r, *c))
    }

    pub fn base(&self) -> &Palette {
        &self.base
    }

    /// Flattens both layers into one palette.
    pub fn resolved(&self) -> Palette {
        let mut palette = self.base.clone();
        palette.extend(self.overrides());
        palette
    }

    /// Repairs every role that falls short of its contrast requirement
    /// against the resolved backgrounds, pinning each repaired color as an
    /// override. Returns the roles that changed, in role order.
    ///
    /// Restoring a fixed role brings back the generated color, not any
    /// override it had before the pass.
    pub fn fix_contrast(&mut self, mode: ThemeMode) -> Result<Vec<Role>> {
        let resolved = self.resolved();
        let bg = resolved.require(Role::Background)?;
        let bg_light = resolved.require(Role::BackgroundLight)?;

        let mut fixed = Vec::new();
        for (role, achieved) in contrast_table(&resolved)? {
            let Some(required) = contrast_requirement(role) else {
                continue;
            };
            if achieved >= required {
                continue;
            }
            let color = resolved[role];
            let repaired = ensure_terminal_contrast(color, &bg, &bg_light, required, mode);
            if repaired != color {
                self.assign(role, repaired);
                fixed.push(role);
            }
        }

        debug!(%mode, fixed = fixed.len(), "contrast pass over overrides");
        Ok(fixed)
    }
}

impl From<Palette> for EditablePalette {
    fn from(base: Palette) -> Self {
        Self::new(base)
    }
}
