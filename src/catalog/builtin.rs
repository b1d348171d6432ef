use super::core::{Archetype, Catalog, RoomType};
use crate::geometry::Dimensions;

struct Entry {
    id: &'static str,
    name: &'static str,
    label: &'static str,
    size: (f64, f64, f64),
    price: u32,
    color: &'static str,
    category: RoomType,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    size: (f64, f64, f64),
    price: u32,
    color: &'static str,
    category: RoomType,
) -> Entry {
    Entry {
        id,
        name,
        label,
        size,
        price,
        color,
        category,
    }
}

// Width x depth x height in meters.
const BUILTIN: &[Entry] = &[
    // Bedroom
    entry("king-bed", "King Size Bed", "King Bed", (2.0, 2.1, 0.8), 1299, "#a0856e", RoomType::Bedroom),
    entry("single-bed", "Single Bed", "Single Bed", (0.9, 2.0, 0.8), 499, "#a0856e", RoomType::Bedroom),
    entry("nightstand", "Bedside Table", "Nightstand", (0.4, 0.4, 0.5), 149, "#c9b99a", RoomType::Bedroom),
    entry("wardrobe", "Wardrobe", "Wardrobe", (1.2, 0.6, 1.8), 799, "#8b7355", RoomType::Bedroom),
    entry("dresser", "Dresser", "Dresser", (1.0, 0.5, 1.5), 549, "#b09070", RoomType::Bedroom),
    // Living room
    entry("sofa-3-seat", "3-Seat Sofa", "Sofa", (2.2, 0.95, 0.8), 1899, "#8b8b8b", RoomType::LivingRoom),
    entry("loveseat", "Small Sofa", "Loveseat", (1.5, 0.9, 0.9), 599, "#9b9080", RoomType::LivingRoom),
    entry("coffee-table", "Coffee Table", "Coffee Table", (1.2, 0.6, 0.45), 399, "#c9b99a", RoomType::LivingRoom),
    entry("tv-stand", "TV Console", "TV Console", (1.8, 0.45, 0.6), 699, "#6b5b4a", RoomType::LivingRoom),
    entry("armchair", "Armchair", "Armchair", (0.85, 0.85, 0.9), 649, "#9b9080", RoomType::LivingRoom),
    entry("bookshelf", "Bookshelf", "Bookshelf", (0.9, 0.35, 1.8), 349, "#8b7355", RoomType::LivingRoom),
    // Office
    entry("desk", "Office Desk", "Desk", (1.6, 0.8, 0.75), 599, "#c9b99a", RoomType::Office),
    entry("office-chair", "Ergonomic Chair", "Chair", (0.65, 0.65, 1.1), 449, "#4a4a4a", RoomType::Office),
    entry("filing-cabinet", "Filing Cabinet", "Cabinet", (0.5, 0.6, 1.2), 279, "#8b8b8b", RoomType::Office),
    entry("office-bookshelf", "Office Bookshelf", "Bookshelf", (0.8, 0.35, 1.5), 329, "#8b7355", RoomType::Office),
];

impl Catalog {
    /// Default furniture table covering every built-in layout strategy.
    pub fn builtin() -> Self {
        let entries: Vec<Archetype> = BUILTIN.iter().map(Entry::to_archetype).collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, archetype)| (archetype.id.clone(), position))
            .collect();
        Catalog::from_parts(entries, index)
    }
}

impl Entry {
    fn to_archetype(&self) -> Archetype {
        let (width, depth, height) = self.size;
        Archetype {
            id: self.id.to_string(),
            name: self.name.to_string(),
            label: self.label.to_string(),
            dimensions: Dimensions::new(width, depth, height),
            price: self.price,
            color: self.color.to_string(),
            category: self.category,
            model: format!("/models/{}.glb", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let ids: HashSet<_> = BUILTIN.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), BUILTIN.len());
        assert_eq!(Catalog::builtin().len(), BUILTIN.len());
    }

    #[test]
    fn builtin_passes_catalog_validation() {
        let entries: Vec<_> = Catalog::builtin().iter().cloned().collect();
        assert!(Catalog::from_archetypes(entries).is_ok());
    }

    #[test]
    fn builtin_covers_every_room_type() {
        let catalog = Catalog::builtin();
        for room_type in RoomType::ALL {
            assert!(catalog.by_room_type(room_type).count() >= 4, "{room_type}");
        }
        assert_eq!(catalog.get("wardrobe").unwrap().model, "/models/wardrobe.glb");
    }

    #[test]
    fn builtin_round_trips_through_json() {
        let json = Catalog::builtin().to_json().unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();
        let original: Vec<_> = Catalog::builtin().iter().cloned().collect();
        let parsed: Vec<_> = reloaded.iter().cloned().collect();
        assert_eq!(original, parsed);
    }
}
