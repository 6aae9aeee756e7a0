//! Allocation and collection types.
//!
//! - [`HashMap`], AHash-backed
//! - [`SlotArena`], the generational arena that owns controls

pub mod slot_arena;

pub use ahash::AHashMap as HashMap;
pub use slot_arena::{IndexSlot, SlotArena};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("uiButton", 0x42746F6Eu32);
        assert_eq!(map.get("uiButton"), Some(&0x42746F6E));
    }

    #[test]
    fn test_hashmap_slot_keys() {
        let mut map = HashMap::new();
        map.insert(IndexSlot::new(0, 3), "live");
        assert!(map.contains_key(&IndexSlot::new(0, 3)));
        assert!(!map.contains_key(&IndexSlot::new(1, 3)));
    }
}
