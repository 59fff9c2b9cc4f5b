//! Domain models for the tile data pipeline.
//!
//! - [`InputRow`] - one CSV row, every value still text
//! - [`TileRecord`] - typed tile definition (the row minus its `Index`)
//! - [`TileCatalog`] - `Index` value to [`TileRecord`], insertion ordered

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TransformError, TransformResult};

// =============================================================================
// Column Names
// =============================================================================

/// Column holding the record identifier.
pub const INDEX_COLUMN: &str = "Index";

pub const SPEED_FACTOR: &str = "SpeedFactor";
pub const FLAT_TILE_SUBSTITUTION_INDEX: &str = "FlatTileSubstitionIndex";
pub const ANIMATION_INDEX: &str = "AnimationIndex";

pub const IS_WALKING_PASSABLE: &str = "IsWalking_Passable";
pub const IS_BOAT_PASSABLE: &str = "IsBoat_Passable";
pub const IS_SKIFF_PASSABLE: &str = "IsSkiff_Passable";
pub const IS_CARPET_PASSABLE: &str = "IsCarpet_Passable";
pub const IS_KLIMABLE: &str = "IsKlimable";
pub const IS_OPENABLE: &str = "IsOpenable";
pub const IS_PART_OF_ANIMATION: &str = "IsPartOfAnimation";
pub const IS_UPRIGHT: &str = "IsUpright";
pub const IS_ENEMY: &str = "IsEnemy";
pub const IS_NPC: &str = "IsNPC";
pub const IS_BUILDING: &str = "IsBuilding";
pub const DONT_DRAW: &str = "DontDraw";

/// Columns coerced to integers.
pub const INTEGER_COLUMNS: [&str; 3] = [SPEED_FACTOR, FLAT_TILE_SUBSTITUTION_INDEX, ANIMATION_INDEX];

/// Columns coerced with the `"TRUE"` sentinel rule.
pub const BOOLEAN_COLUMNS: [&str; 12] = [
    IS_WALKING_PASSABLE,
    IS_BOAT_PASSABLE,
    IS_SKIFF_PASSABLE,
    IS_CARPET_PASSABLE,
    IS_KLIMABLE,
    IS_OPENABLE,
    IS_PART_OF_ANIMATION,
    IS_UPRIGHT,
    IS_ENEMY,
    IS_NPC,
    IS_BUILDING,
    DONT_DRAW,
];

/// True for `Index` and every typed column.
pub fn is_known_column(name: &str) -> bool {
    name == INDEX_COLUMN || INTEGER_COLUMNS.contains(&name) || BOOLEAN_COLUMNS.contains(&name)
}

// =============================================================================
// Input Row
// =============================================================================

/// One row of the tabular source.
///
/// Fields keep the header's column order. `line` is the 1-based line in the
/// source file (the header is line 1) and only feeds error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub line: u64,
    fields: Vec<(String, String)>,
}

impl InputRow {
    pub fn new<K, V>(line: u64, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of a column. With repeated header names the rightmost column wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a column that must be present.
    pub fn require(&self, name: &str) -> TransformResult<&str> {
        self.get(name).ok_or_else(|| TransformError::MissingField {
            line: self.line,
            field: name.to_string(),
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// =============================================================================
// Tile Record
// =============================================================================

/// Typed tile definition.
///
/// Field names match the source columns so the JSON keys stay identical to
/// the spreadsheet headers. Columns outside the known schema are kept as
/// text in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    #[serde(rename = "SpeedFactor")]
    pub speed_factor: i64,
    #[serde(rename = "FlatTileSubstitionIndex")]
    pub flat_tile_substitution_index: i64,
    #[serde(rename = "AnimationIndex")]
    pub animation_index: i64,

    #[serde(rename = "IsWalking_Passable")]
    pub is_walking_passable: bool,
    #[serde(rename = "IsBoat_Passable")]
    pub is_boat_passable: bool,
    #[serde(rename = "IsSkiff_Passable")]
    pub is_skiff_passable: bool,
    #[serde(rename = "IsCarpet_Passable")]
    pub is_carpet_passable: bool,
    #[serde(rename = "IsKlimable")]
    pub is_klimable: bool,
    #[serde(rename = "IsOpenable")]
    pub is_openable: bool,
    #[serde(rename = "IsPartOfAnimation")]
    pub is_part_of_animation: bool,
    #[serde(rename = "IsUpright")]
    pub is_upright: bool,
    #[serde(rename = "IsEnemy")]
    pub is_enemy: bool,
    #[serde(rename = "IsNPC")]
    pub is_npc: bool,
    #[serde(rename = "IsBuilding")]
    pub is_building: bool,
    #[serde(rename = "DontDraw")]
    pub dont_draw: bool,

    /// Passthrough columns, rendered after the typed fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

// =============================================================================
// Tile Catalog
// =============================================================================

/// Mapping from `Index` value to tile record.
///
/// Keys keep the order of their first insertion; inserting an existing key
/// replaces the whole record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCatalog {
    entries: Vec<(String, TileRecord)>,
    positions: HashMap<String, usize>,
}

impl TileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the replaced record, if any.
    pub fn insert(&mut self, id: impl Into<String>, record: TileRecord) -> Option<TileRecord> {
        let id = id.into();
        match self.positions.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, record)),
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, record));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&TileRecord> {
        self.positions.get(id).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TileRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for TileCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TileCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = TileCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping tile indices to tile records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TileCatalog, A::Error> {
                let mut catalog = TileCatalog::new();
                while let Some((id, record)) = access.next_entry::<String, TileRecord>()? {
                    catalog.insert(id, record);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(speed: i64) -> TileRecord {
        TileRecord {
            speed_factor: speed,
            flat_tile_substitution_index: 0,
            animation_index: 0,
            is_walking_passable: true,
            is_boat_passable: false,
            is_skiff_passable: false,
            is_carpet_passable: false,
            is_klimable: false,
            is_openable: false,
            is_part_of_animation: false,
            is_upright: false,
            is_enemy: false,
            is_npc: false,
            is_building: false,
            dont_draw: false,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_input_row_lookup() {
        let row = InputRow::new(2, [("Index", "7"), ("SpeedFactor", "3")]);
        assert_eq!(row.get("Index"), Some("7"));
        assert_eq!(row.get("Missing"), None);

        let err = row.require("IsNPC").unwrap_err();
        assert!(matches!(err, TransformError::MissingField { line: 2, ref field } if field == "IsNPC"));
    }

    #[test]
    fn test_input_row_repeated_header_takes_rightmost() {
        let row = InputRow::new(2, [("Note", "first"), ("Note", "second")]);
        assert_eq!(row.get("Note"), Some("second"));
    }

    #[test]
    fn test_catalog_overwrite_keeps_position() {
        let mut catalog = TileCatalog::new();
        assert!(catalog.insert("1", record(1)).is_none());
        catalog.insert("2", record(2));
        let replaced = catalog.insert("1", record(10));

        assert_eq!(replaced.map(|r| r.speed_factor), Some(1));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(catalog.get("1").map(|r| r.speed_factor), Some(10));
    }

    #[test]
    fn test_known_columns() {
        assert!(is_known_column("Index"));
        assert!(is_known_column("AnimationIndex"));
        assert!(is_known_column("DontDraw"));
        assert!(!is_known_column("Comment"));
    }
}
