//! Per-cell mark state.
//!
//! Internally a fixed-size bool sequence indexed by flat cell position.
//! On the wire it stays a map with stringified indices (`"0"`..`"24"`),
//! matching what existing clients exchange; the string keys are purely a
//! serialization-boundary artifact.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::{smallvec, SmallVec};

use crate::core::Variant;

/// Mark state for one card, one flag per cell.
///
/// For 75-ball cards the free center cell is seeded marked; the unmark
/// guard for it lives on [`Card::set_mark`](crate::card::Card::set_mark).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marks {
    cells: SmallVec<[bool; 25]>,
}

impl Marks {
    /// Create the seeded mark state for a fresh card: all false, except
    /// the free cell for 75-ball.
    #[must_use]
    pub fn seeded(variant: Variant) -> Self {
        let mut cells: SmallVec<[bool; 25]> = smallvec![false; variant.cell_count()];
        if let Some(free) = variant.free_cell() {
            cells[free] = true;
        }
        Self { cells }
    }

    /// Number of cells tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at `position` is marked. Out-of-range is unmarked.
    #[must_use]
    pub fn is_marked(&self, position: usize) -> bool {
        self.cells.get(position).copied().unwrap_or(false)
    }

    /// Set the mark at `position`. Panics if out of range; validated
    /// callers go through `Card::set_mark`.
    pub fn set(&mut self, position: usize, marked: bool) {
        self.cells[position] = marked;
    }

    /// Iterate over the flags in cell order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }

    /// Whether every cell is marked.
    #[must_use]
    pub fn all_marked(&self) -> bool {
        self.cells.iter().all(|&m| m)
    }
}

impl Serialize for Marks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (i, &marked) in self.cells.iter().enumerate() {
            map.serialize_entry(&i.to_string(), &marked)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Marks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MarksVisitor)
    }
}

struct MarksVisitor;

impl<'de> Visitor<'de> for MarksVisitor {
    type Value = Marks;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of stringified cell indices to booleans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Marks, A::Error> {
        let mut entries: Vec<(usize, bool)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, bool>()? {
            let index: usize = key
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid cell index {key:?}")))?;
            entries.push((index, value));
        }

        let mut cells: SmallVec<[bool; 25]> = smallvec![false; entries.len()];
        let mut seen: SmallVec<[bool; 25]> = smallvec![false; entries.len()];
        for (index, marked) in entries {
            let slot = cells
                .get_mut(index)
                .ok_or_else(|| serde::de::Error::custom(format!("cell index {index} out of range")))?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(serde::de::Error::custom(format!("duplicate cell index {index}")));
            }
            *slot = marked;
        }

        Ok(Marks { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_seventy_five() {
        let marks = Marks::seeded(Variant::SeventyFive);
        assert_eq!(marks.len(), 25);
        for i in 0..25 {
            assert_eq!(marks.is_marked(i), i == 12);
        }
    }

    #[test]
    fn test_seeded_ninety() {
        let marks = Marks::seeded(Variant::Ninety);
        assert_eq!(marks.len(), 15);
        assert!(!marks.iter().any(|m| m));
    }

    #[test]
    fn test_set_and_all_marked() {
        let mut marks = Marks::seeded(Variant::Ninety);
        for i in 0..15 {
            marks.set(i, true);
        }
        assert!(marks.all_marked());

        marks.set(7, false);
        assert!(!marks.all_marked());
    }

    #[test]
    fn test_out_of_range_is_unmarked() {
        let marks = Marks::seeded(Variant::Ninety);
        assert!(!marks.is_marked(99));
    }

    #[test]
    fn test_serializes_as_string_keyed_map() {
        let marks = Marks::seeded(Variant::SeventyFive);
        let json = serde_json::to_value(&marks).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 25);
        assert_eq!(obj["12"], serde_json::Value::Bool(true));
        assert_eq!(obj["0"], serde_json::Value::Bool(false));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut marks = Marks::seeded(Variant::SeventyFive);
        marks.set(3, true);
        marks.set(17, true);

        let json = serde_json::to_string(&marks).unwrap();
        let back: Marks = serde_json::from_str(&json).unwrap();
        assert_eq!(marks, back);
    }

    #[test]
    fn test_deserialize_rejects_bad_keys() {
        assert!(serde_json::from_str::<Marks>(r#"{"x": true}"#).is_err());
        assert!(serde_json::from_str::<Marks>(r#"{"0": true, "5": false}"#).is_err());
    }
}
