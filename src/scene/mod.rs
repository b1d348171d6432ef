//! Renderer-facing export of a layout.
//!
//! A [`ScenePlan`] carries everything a 3D collaborator needs to instantiate
//! the room: the wall shell and one entry per placed item, already in scene
//! coordinates (meters, room center at the origin, `y` up).

use serde::Serialize;

use crate::error::Result;
use crate::geometry::Wall;
use crate::layout::{Layout, PlacedFurniture};

/// Ceiling height used when none is configured.
pub const DEFAULT_WALL_HEIGHT: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePlan {
    pub width: f64,
    pub depth: f64,
    pub wall_height: f64,
    pub walls: Vec<WallPanel>,
    pub furniture: Vec<SceneItem>,
}

/// Flat wall panel, positioned at its center and turned to face the room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallPanel {
    pub side: &'static str,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneItem {
    pub id: String,
    pub label: String,
    pub model: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
}

impl ScenePlan {
    pub fn from_layout(layout: &Layout, wall_height: f64) -> Self {
        let width = layout.room.width;
        let depth = layout.room.depth;
        Self {
            width,
            depth,
            wall_height,
            walls: wall_panels(width, depth, wall_height),
            furniture: layout.iter().map(SceneItem::from_placement).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SceneItem {
    fn from_placement(item: &PlacedFurniture) -> Self {
        let archetype = &item.archetype;
        let size = archetype.dimensions;
        Self {
            id: archetype.id.clone(),
            label: archetype.label.clone(),
            model: archetype.model.clone(),
            color: archetype.color.clone(),
            x: item.position.x,
            y: size.height / 2.0,
            z: item.position.z,
            width: size.width,
            depth: size.depth,
            height: size.height,
            rotation_y: (!item.rotation.is_zero()).then(|| item.rotation.radians()),
        }
    }
}

fn wall_panels(width: f64, depth: f64, height: f64) -> Vec<WallPanel> {
    let panel = |wall: Wall, side: &'static str, x: f64, z: f64, span: f64| WallPanel {
        side,
        x,
        y: height / 2.0,
        z,
        width: span,
        height,
        rotation_y: wall.facing().radians(),
    };

    vec![
        panel(Wall::Back, "back", 0.0, -depth / 2.0, width),
        panel(Wall::Front, "front", 0.0, depth / 2.0, width),
        panel(Wall::Left, "left", -width / 2.0, 0.0, depth),
        panel(Wall::Right, "right", width / 2.0, 0.0, depth),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RoomType};
    use crate::layout::{RoomConfig, select_layout};
    use std::f64::consts::PI;

    fn plan() -> ScenePlan {
        let room = RoomConfig::new(4.0, 3.5, RoomType::Bedroom);
        let layout = select_layout(&Catalog::builtin(), &room).unwrap();
        ScenePlan::from_layout(&layout, DEFAULT_WALL_HEIGHT)
    }

    #[test]
    fn walls_enclose_the_room() {
        let plan = plan();
        assert_eq!(plan.walls.len(), 4);

        let back = &plan.walls[0];
        assert_eq!(back.side, "back");
        assert_eq!(back.z, -1.75);
        assert_eq!(back.width, 4.0);
        assert_eq!(back.y, 1.25);
        assert_eq!(back.rotation_y, 0.0);

        let right = &plan.walls[3];
        assert_eq!(right.x, 2.0);
        assert_eq!(right.width, 3.5);
        assert!((right.rotation_y - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn items_rest_on_the_floor() {
        let plan = plan();
        let bed = &plan.furniture[0];
        assert_eq!(bed.id, "king-bed");
        assert_eq!(bed.y, 0.4);
        assert_eq!(bed.rotation_y, None);

        let wardrobe = plan.furniture.iter().find(|item| item.id == "wardrobe").unwrap();
        assert!((wardrobe.rotation_y.unwrap() - PI).abs() < 1e-12);
    }

    #[test]
    fn json_omits_zero_rotation() {
        let json = plan().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["furniture"][0].get("rotation_y").is_none());
        assert!(value["furniture"][3].get("rotation_y").is_some());
        assert_eq!(value["wall_height"], 2.5);
        assert_eq!(value["furniture"][0]["model"], "/models/king-bed.glb");
    }
}
