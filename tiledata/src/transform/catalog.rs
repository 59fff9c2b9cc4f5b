//! Record transformer: CSV rows to a keyed catalog of typed tile records.

use std::collections::BTreeMap;

use crate::error::TransformResult;
use crate::models::*;

use super::coerce::{to_bool, to_integer};

/// Build the tile catalog from parsed rows.
///
/// Rows are processed in order. Each one is coerced into a [`TileRecord`]
/// and stored under its `Index` value; a repeated `Index` replaces the
/// earlier record. The first bad row aborts the whole batch, so callers get
/// either a complete catalog or an error.
///
/// # Example
///
/// ```
/// use tiledata::models::InputRow;
/// use tiledata::transform::build_catalog;
///
/// let mut fields = vec![
///     ("Index", "1"),
///     ("SpeedFactor", "5"),
///     ("FlatTileSubstitionIndex", "0"),
///     ("AnimationIndex", "0"),
/// ];
/// for column in tiledata::models::BOOLEAN_COLUMNS {
///     fields.push((column, "FALSE"));
/// }
/// let catalog = build_catalog(&[InputRow::new(2, fields)]).unwrap();
///
/// assert_eq!(catalog.get("1").unwrap().speed_factor, 5);
/// ```
pub fn build_catalog(rows: &[InputRow]) -> TransformResult<TileCatalog> {
    let mut catalog = TileCatalog::new();

    for row in rows {
        let id = row.require(INDEX_COLUMN)?;
        let record = transform_row(row)?;
        catalog.insert(id, record);
    }

    Ok(catalog)
}

/// Coerce one row. `Index` is dropped; unknown columns pass through as text.
pub fn transform_row(row: &InputRow) -> TransformResult<TileRecord> {
    let int = |name: &str| -> TransformResult<i64> { to_integer(row.line, name, row.require(name)?) };
    let flag = |name: &str| -> TransformResult<bool> { row.require(name).map(to_bool) };

    let extra: BTreeMap<String, String> = row
        .fields()
        .filter(|(name, _)| !is_known_column(name))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Ok(TileRecord {
        speed_factor: int(SPEED_FACTOR)?,
        flat_tile_substitution_index: int(FLAT_TILE_SUBSTITUTION_INDEX)?,
        animation_index: int(ANIMATION_INDEX)?,
        is_walking_passable: flag(IS_WALKING_PASSABLE)?,
        is_boat_passable: flag(IS_BOAT_PASSABLE)?,
        is_skiff_passable: flag(IS_SKIFF_PASSABLE)?,
        is_carpet_passable: flag(IS_CARPET_PASSABLE)?,
        is_klimable: flag(IS_KLIMABLE)?,
        is_openable: flag(IS_OPENABLE)?,
        is_part_of_animation: flag(IS_PART_OF_ANIMATION)?,
        is_upright: flag(IS_UPRIGHT)?,
        is_enemy: flag(IS_ENEMY)?,
        is_npc: flag(IS_NPC)?,
        is_building: flag(IS_BUILDING)?,
        dont_draw: flag(DONT_DRAW)?,
        extra,
    })
}
