//! Slot and generation handle table for arrays crossing the C boundary.
//!
//! A handle packs a slot index (upper 32 bits) with that slot's generation
//! (lower 32 bits). Generations start at 1, so `0` is never issued and
//! reads as "no array". Removing an entry bumps the slot's generation, so
//! a destroyed handle no longer resolves.

/// The handle value that never names an array.
pub const NULL_HANDLE: u64 = 0;

fn encode(slot: u32, generation: u32) -> u64 {
    (u64::from(slot) << 32) | u64::from(generation)
}

fn decode(handle: u64) -> (u32, u32) {
    ((handle >> 32) as u32, handle as u32)
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Maps `u64` handles to owned values, reusing freed slots.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
}

impl<T> HandleTable<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Store `value` and return its handle. Never returns [`NULL_HANDLE`].
    pub(crate) fn insert(&mut self, value: T) -> u64 {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return encode(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            value: Some(value),
        });
        encode(index, 1)
    }

    /// The value behind `handle`, or `None` if it is stale or never issued.
    pub(crate) fn get(&self, handle: u64) -> Option<&T> {
        let (index, generation) = decode(handle);
        let slot = self.slots.get(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.value.as_ref()
    }

    /// Take the value behind `handle` out of the table.
    ///
    /// A slot whose generation would wrap to 0 is retired instead of being
    /// reused, so old handles can never resolve again.
    pub(crate) fn remove(&mut self, handle: u64) -> Option<T> {
        let (index, generation) = decode(handle);
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.value.take()?;
        self.live -= 1;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free.push(index);
        }
        Some(value)
    }

    /// Number of live entries.
    pub(crate) fn len(&self) -> usize {
        self.live
    }
}
