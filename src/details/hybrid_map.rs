use crate::{Hash, HashableChar};
use std::collections::HashMap;

/// map from sequence elements to a value
///
/// Extended ascii is stored in a flat table, everything else falls back to a hashmap
/// which is only allocated on first write. Missing keys read as `ValueType::default()`.
pub(crate) struct HybridHashmap<ValueType>
where
    ValueType: Default + Copy,
{
    map: HashMap<Hash, ValueType>,
    extended_ascii: [ValueType; 256],
}

impl<ValueType> Default for HybridHashmap<ValueType>
where
    ValueType: Default + Copy,
{
    fn default() -> Self {
        HybridHashmap {
            map: HashMap::new(),
            extended_ascii: [Default::default(); 256],
        }
    }
}

fn ascii_index(key: Hash) -> Option<usize> {
    match key {
        Hash::SIGNED(value) if (0..=255).contains(&value) => Some(value as usize),
        Hash::UNSIGNED(value) if value <= 255 => Some(value as usize),
        _ => None,
    }
}

impl<ValueType> HybridHashmap<ValueType>
where
    ValueType: Default + Copy,
{
    pub fn get<CharT>(&self, key: CharT) -> ValueType
    where
        CharT: HashableChar,
    {
        let key = key.hash_char();
        match ascii_index(key) {
            Some(idx) => self.extended_ascii[idx],
            None => self.map.get(&key).copied().unwrap_or_default(),
        }
    }

    pub fn get_mut<CharT>(&mut self, key: CharT) -> &mut ValueType
    where
        CharT: HashableChar,
    {
        let key = key.hash_char();
        match ascii_index(key) {
            Some(idx) => &mut self.extended_ascii[idx],
            None => self.map.entry(key).or_default(),
        }
    }
}
