use crate::pixel::Rgba;

/// Direct-mapped table of 64 recently seen colors.
///
/// Slots start as `(0, 0, 0, 0)`. There is no eviction policy: a store
/// simply replaces whatever the slot held.
#[derive(Clone, Debug)]
pub(crate) struct ColorCache {
    slots: [Rgba; 64],
}

impl ColorCache {
    pub(crate) fn new() -> Self {
        Self {
            slots: [Rgba::default(); 64],
        }
    }

    /// Color at `slot`. Only the low 6 bits of `slot` are used.
    #[inline]
    pub(crate) fn lookup(&self, slot: usize) -> Rgba {
        self.slots[slot & 63]
    }

    #[inline]
    pub(crate) fn store(&mut self, slot: usize, color: Rgba) {
        self.slots[slot & 63] = color;
    }

    /// Store `color` at its own hash slot.
    #[inline]
    pub(crate) fn insert(&mut self, color: Rgba) {
        self.store(color.hash_index(), color);
    }
}
