// Chunk: docs/chunks/font_zoom - Bounded font zoom stepper

//! Ordered font zoom levels with a single current selection.
//!
//! The index owns one authoritative `selected` position instead of a flag on
//! every level; [`ZoomIndex::is_selected`] projects it per level. The first
//! and last levels are the clamp boundaries for stepping. `at_min`/`at_max`
//! are cached for command gating and recomputed after every transition.

use std::collections::HashSet;

use crate::error::{Result, SessionError};

/// One selectable zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLevel {
    /// Stable identity, independent of the magnitude.
    pub key: u32,
    /// Zoom factor in percent.
    pub magnitude: u32,
}

impl ZoomLevel {
    pub const fn new(key: u32, magnitude: u32) -> Self {
        Self { key, magnitude }
    }
}

/// Ordered, non-empty list of zoom levels plus the current selection.
#[derive(Debug, Clone)]
pub struct ZoomIndex {
    levels: Vec<ZoomLevel>,
    default_pos: usize,
    selected: Option<usize>,
    at_min: bool,
    at_max: bool,
}

impl ZoomIndex {
    /// Builds an index with nothing selected yet.
    ///
    /// Fails when `levels` is empty, contains duplicate keys, or does not
    /// contain `default_key`.
    pub fn new(levels: Vec<ZoomLevel>, default_key: u32) -> Result<Self> {
        if levels.is_empty() {
            return Err(SessionError::InvalidConfiguration(
                "zoom index must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = levels.iter().find(|level| !seen.insert(level.key)) {
            return Err(SessionError::InvalidConfiguration(format!(
                "duplicate zoom key {}",
                dup.key
            )));
        }
        let default_pos = levels
            .iter()
            .position(|level| level.key == default_key)
            .ok_or_else(|| {
                SessionError::InvalidConfiguration(format!(
                    "default zoom key {} is not in the zoom index",
                    default_key
                ))
            })?;

        Ok(Self {
            levels,
            default_pos,
            selected: None,
            at_min: false,
            at_max: false,
        })
    }

    pub fn levels(&self) -> &[ZoomLevel] {
        &self.levels
    }

    pub fn default_level(&self) -> ZoomLevel {
        self.levels[self.default_pos]
    }

    pub fn selected(&self) -> Option<ZoomLevel> {
        self.selected.map(|pos| self.levels[pos])
    }

    pub fn selected_key(&self) -> Option<u32> {
        self.selected().map(|level| level.key)
    }

    /// Read-only projection of the selection onto a single level.
    pub fn is_selected(&self, key: u32) -> bool {
        self.selected_key() == Some(key)
    }

    /// True when the selection sits on the first level.
    pub fn at_min(&self) -> bool {
        self.at_min
    }

    /// True when the selection sits on the last level.
    pub fn at_max(&self) -> bool {
        self.at_max
    }

    /// Selects the level with `key`. Returns false (and leaves the selection
    /// alone) when no such level exists.
    pub fn select_key(&mut self, key: u32) -> bool {
        match self.levels.iter().position(|level| level.key == key) {
            Some(pos) => {
                self.select(pos);
                true
            }
            None => false,
        }
    }

    /// Selects the configured default level.
    pub fn restore_default(&mut self) {
        self.select(self.default_pos);
    }

    /// Steps to the next larger level.
    ///
    /// With no selection this restores the default and stops there. On the
    /// last level the selection stays put and `at_max` holds.
    ///
    /// Returns true if the selection changed.
    pub fn zoom_in(&mut self) -> bool {
        let Some(current) = self.selected else {
            self.restore_default();
            return true;
        };
        if current + 1 < self.levels.len() {
            self.select(current + 1);
            true
        } else {
            self.refresh_bounds();
            false
        }
    }

    /// Steps to the next smaller level. Mirror image of [`zoom_in`](Self::zoom_in).
    pub fn zoom_out(&mut self) -> bool {
        let Some(current) = self.selected else {
            self.restore_default();
            return true;
        };
        if current > 0 {
            self.select(current - 1);
            true
        } else {
            self.refresh_bounds();
            false
        }
    }

    fn select(&mut self, pos: usize) {
        self.selected = Some(pos);
        self.refresh_bounds();
    }

    fn refresh_bounds(&mut self) {
        let last = self.levels.len() - 1;
        self.at_min = self.selected == Some(0);
        self.at_max = self.selected == Some(last);
    }
}
