//! Active-section tracking from visibility observations.
//!
//! Observations arrive in batches, each entry carrying a region id and its
//! current visible fraction. A region whose fraction is at or above the
//! threshold becomes active; within a batch the last such entry wins. The
//! active region only ever changes to another region, it is never cleared.

use crate::constants::SECTION_VISIBILITY_THRESHOLD;
use crate::error::{BackdropError, Result};
use crate::notify::Observed;
use fnv::FnvHashMap;

#[derive(Clone, Debug)]
struct Section {
    id: String,
    ratio: f32,
    visible: bool,
}

pub struct SectionTracker {
    sections: Vec<Section>,
    index: FnvHashMap<String, usize>,
    threshold: f32,
    active: usize,
}

impl SectionTracker {
    pub fn new<I, S>(ids: I, threshold: f32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(BackdropError::InvalidThreshold(threshold));
        }
        let mut sections = Vec::new();
        let mut index = FnvHashMap::default();
        for id in ids {
            let id = id.into();
            if index.contains_key(&id) {
                return Err(BackdropError::DuplicateSection(id));
            }
            index.insert(id.clone(), sections.len());
            sections.push(Section {
                id,
                ratio: 0.0,
                visible: false,
            });
        }
        if sections.is_empty() {
            return Err(BackdropError::EmptyRegistry);
        }
        Ok(Self {
            sections,
            index,
            threshold,
            active: 0,
        })
    }

    pub fn with_default_threshold<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids, SECTION_VISIBILITY_THRESHOLD)
    }

    /// Apply one observation batch. Returns the new active id if it changed.
    pub fn observe<'a, I>(&mut self, batch: I) -> Option<&str>
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let previous = self.active;
        for (id, ratio) in batch {
            let Some(&i) = self.index.get(id) else {
                log::debug!("[sections] ignoring unknown section {:?}", id);
                continue;
            };
            let section = &mut self.sections[i];
            section.ratio = ratio;
            section.visible = ratio >= self.threshold;
            if section.visible {
                self.active = i;
            }
        }
        if self.active == previous {
            return None;
        }
        let id = self.sections[self.active].id.as_str();
        log::debug!("[sections] active -> {}", id);
        Some(id)
    }

    pub fn active(&self) -> &str {
        &self.sections[self.active].id
    }

    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.index.get(id).map(|&i| self.sections[i].visible)
    }

    pub fn ratio(&self, id: &str) -> Option<f32> {
        self.index.get(id).map(|&i| self.sections[i].ratio)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

/// Tracker shared between the observer callback and readers such as nav UI.
/// Subscribers hear the new active id once the tracker is no longer borrowed.
pub type SharedSections = Observed<SectionTracker, String>;

impl Observed<SectionTracker, String> {
    pub fn observe<'a, I>(&self, batch: I) -> Option<String>
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        self.update(|t| t.observe(batch).map(str::to_owned))
    }

    pub fn active(&self) -> String {
        self.state().active().to_owned()
    }
}
