use crate::profiling::profile_function;
use std::fmt;
use std::num::NonZeroU64;

/// Generational index into a [`SlotArena`].
///
/// Packs `(generation, index + 1)` into a `NonZeroU64` so `Option<IndexSlot>`
/// costs nothing extra.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexSlot(NonZeroU64);

impl IndexSlot {
    pub fn new(generation: u32, idx: u32) -> Self {
        let packed = ((generation as u64) << 32) | (idx as u64 + 1);
        match NonZeroU64::new(packed) {
            Some(raw) => Self(raw),
            // idx + 1 never wraps inside a u64, so the low half is never zero.
            None => unreachable!("packed slot is never zero"),
        }
    }

    pub fn generation(&self) -> u32 {
        (self.0.get() >> 32) as u32
    }

    pub fn index(&self) -> u32 {
        ((self.0.get() & u32::MAX as u64) - 1) as u32
    }

    pub fn to_bits(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for IndexSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index(), self.generation())
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Arena with stable generational indices.
///
/// Removing a value bumps the slot generation, so indices handed out before
/// the removal stop resolving instead of aliasing whatever reuses the slot.
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotArena<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) -> IndexSlot {
        profile_function!();
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.value = Some(value);
            IndexSlot::new(slot.generation, idx)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
            });
            IndexSlot::new(0, idx)
        }
    }

    pub fn contains(&self, idx: IndexSlot) -> bool {
        self.get(idx).is_some()
    }

    pub fn get(&self, idx: IndexSlot) -> Option<&T> {
        let slot = self.slots.get(idx.index() as usize)?;
        if slot.generation != idx.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, idx: IndexSlot) -> Option<&mut T> {
        let slot = self.slots.get_mut(idx.index() as usize)?;
        if slot.generation != idx.generation() {
            return None;
        }
        slot.value.as_mut()
    }

    /// Remove the value at `idx`. Returns `None` for stale or unknown indices.
    pub fn remove(&mut self, idx: IndexSlot) -> Option<T> {
        profile_function!();
        let index = idx.index();
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != idx.generation() {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        Some(value)
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (IndexSlot, &T)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.value
                .as_ref()
                .map(|value| (IndexSlot::new(slot.generation, idx as u32), value))
        })
    }
}

static_assertions::assert_eq_size!(IndexSlot, Option<IndexSlot>);
