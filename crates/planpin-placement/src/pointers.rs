//! Active pointer tracking.
//!
//! Mouse and touch contacts are tracked identically, keyed by pointer id, in
//! the order they went down. The gesture recognizer derives press vs. pan vs.
//! pinch purely from how many contacts are active here.

use planpin_core::{PointerId, PointerSample, ScreenPoint};
use smallvec::SmallVec;

/// One contact currently touching the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePointer {
    pub id: PointerId,
    pub position: ScreenPoint,
}

/// Contacts of the current input session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PointerSession {
    pointers: SmallVec<[ActivePointer; 4]>,
}

impl PointerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contact. A repeated down for a known id only refreshes its position.
    ///
    /// Returns `true` when the contact is new.
    pub fn press(&mut self, sample: &PointerSample) -> bool {
        if let Some(existing) = self.get_mut(sample.id) {
            existing.position = sample.position();
            return false;
        }
        self.pointers.push(ActivePointer {
            id: sample.id,
            position: sample.position(),
        });
        true
    }

    /// Updates a known contact and returns its previous position.
    pub fn update(&mut self, sample: &PointerSample) -> Option<ScreenPoint> {
        let pointer = self.get_mut(sample.id)?;
        let previous = pointer.position;
        pointer.position = sample.position();
        Some(previous)
    }

    /// Removes a contact, returning it if it was active.
    pub fn release(&mut self, id: PointerId) -> Option<ActivePointer> {
        let index = self.pointers.iter().position(|p| p.id == id)?;
        Some(self.pointers.remove(index))
    }

    pub fn get(&self, id: PointerId) -> Option<&ActivePointer> {
        self.pointers.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PointerId) -> Option<&mut ActivePointer> {
        self.pointers.iter_mut().find(|p| p.id == id)
    }

    pub fn count(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Oldest active contact.
    pub fn primary(&self) -> Option<&ActivePointer> {
        self.pointers.first()
    }

    /// The two oldest active contacts, which define a pinch.
    pub fn pinch_pair(&self) -> Option<(ScreenPoint, ScreenPoint)> {
        match self.pointers.as_slice() {
            [first, second, ..] => Some((first.position, second.position)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
    }
}
