use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::geometry::Dimensions;

/// Unique identifier for catalog archetypes.
pub type ArchetypeId = String;

/// Room types the layout selector knows how to furnish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Bedroom,
    LivingRoom,
    Office,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Bedroom, RoomType::LivingRoom, RoomType::Office];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Bedroom => "bedroom",
            RoomType::LivingRoom => "living-room",
            RoomType::Office => "office",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.as_str() == value)
            .ok_or_else(|| PlannerError::UnknownRoomType(value.to_string()))
    }
}

/// Immutable catalog definition of a furniture type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub name: String,
    pub label: String,
    pub dimensions: Dimensions,
    pub price: u32,
    pub color: String,
    pub category: RoomType,
    pub model: String,
}

/// Read-only archetype table with an id index.
///
/// Built once and handed to the selector by reference; there is no global
/// instance.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Archetype>,
    index: HashMap<ArchetypeId, usize>,
}

impl Catalog {
    /// Validate and index a list of archetypes, keeping their order.
    pub fn from_archetypes(entries: Vec<Archetype>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, archetype) in entries.iter().enumerate() {
            validate(archetype)?;
            if index.insert(archetype.id.clone(), position).is_some() {
                return Err(PlannerError::DuplicateArchetype(archetype.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    pub(super) fn from_parts(entries: Vec<Archetype>, index: HashMap<ArchetypeId, usize>) -> Self {
        Self { entries, index }
    }

    /// Parse a JSON array of archetypes.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<Archetype> = serde_json::from_str(json)?;
        Self::from_archetypes(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn get(&self, id: &str) -> Result<&Archetype> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| PlannerError::ArchetypeNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Fail on the first id missing from the catalog.
    pub fn ensure_contains<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for id in ids {
            self.get(id)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.entries.iter()
    }

    pub fn by_room_type(&self, room_type: RoomType) -> impl Iterator<Item = &Archetype> {
        self.entries
            .iter()
            .filter(move |archetype| archetype.category == room_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(archetype: &Archetype) -> Result<()> {
    let invalid = |reason: &str| PlannerError::InvalidArchetype {
        id: archetype.id.clone(),
        reason: reason.to_string(),
    };

    if archetype.id.trim().is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if !archetype.dimensions.is_valid() {
        return Err(invalid("dimensions must be positive and finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stool(id: &str) -> Archetype {
        Archetype {
            id: id.to_string(),
            name: "Stool".to_string(),
            label: "Stool".to_string(),
            dimensions: Dimensions::new(0.4, 0.4, 0.45),
            price: 49,
            color: "#777777".to_string(),
            category: RoomType::Office,
            model: "/models/stool.glb".to_string(),
        }
    }

    #[test]
    fn room_type_parses_kebab_case() {
        assert_eq!("living-room".parse::<RoomType>().unwrap(), RoomType::LivingRoom);
        assert_eq!(RoomType::Office.to_string(), "office");
        assert!(matches!(
            "kitchen".parse::<RoomType>(),
            Err(PlannerError::UnknownRoomType(value)) if value == "kitchen"
        ));
    }

    #[test]
    fn lookup_is_exact_match() {
        let catalog = Catalog::from_archetypes(vec![stool("stool")]).unwrap();
        assert_eq!(catalog.get("stool").unwrap().price, 49);
        assert!(matches!(
            catalog.get("Stool"),
            Err(PlannerError::ArchetypeNotFound(id)) if id == "Stool"
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::from_archetypes(vec![stool("stool"), stool("stool")]);
        assert!(matches!(result, Err(PlannerError::DuplicateArchetype(id)) if id == "stool"));
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let mut broken = stool("stool");
        broken.dimensions.depth = 0.0;
        let result = Catalog::from_archetypes(vec![broken]);
        assert!(matches!(result, Err(PlannerError::InvalidArchetype { .. })));
    }

    #[test]
    fn json_catalog_keeps_declaration_order() {
        let json = r##"[
            {"id": "b", "name": "B", "label": "B", "dimensions": {"width": 1.0, "depth": 1.0, "height": 1.0},
             "price": 1, "color": "#000000", "category": "office", "model": "/models/b.glb"},
            {"id": "a", "name": "A", "label": "A", "dimensions": {"width": 1.0, "depth": 1.0, "height": 1.0},
             "price": 2, "color": "#ffffff", "category": "living-room", "model": "/models/a.glb"}
        ]"##;
        let catalog = Catalog::from_json(json).unwrap();
        let ids: Vec<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.by_room_type(RoomType::LivingRoom).count(), 1);
    }

    #[test]
    fn malformed_json_surfaces_json_error() {
        assert!(matches!(Catalog::from_json("{"), Err(PlannerError::Json(_))));
    }

    #[test]
    fn ensure_contains_reports_first_missing_id() {
        let catalog = Catalog::from_archetypes(vec![stool("stool")]).unwrap();
        assert!(catalog.ensure_contains(["stool"]).is_ok());
        assert!(matches!(
            catalog.ensure_contains(["stool", "desk", "lamp"]),
            Err(PlannerError::ArchetypeNotFound(id)) if id == "desk"
        ));
    }
}
