//! Placement rules for every layout strategy.
//!
//! Items stand flush against the wall they back onto. Clearance is only kept
//! along a wall span, between an item and the perpendicular wall. All values
//! are meters in room-center coordinates (see [`crate::geometry`]).

use crate::error::Result;
use crate::geometry::{FIT_EPSILON, Position, Wall, fits_within};

use super::placer::Placer;

/// Gap kept between an item and a side wall along the wall it stands on.
pub const WALL_CLEARANCE: f64 = 0.1;
/// Gap between wardrobe and dresser on a shared wall.
pub const STORAGE_GAP: f64 = 0.2;
/// Cap on the gap between the sofa's front face and the console's front face.
pub const MAX_VIEWING_DISTANCE: f64 = 2.5;
/// Walking room kept on both sides of the coffee table.
pub const COFFEE_TABLE_CLEARANCE: f64 = 0.4;
/// Pull of the coffee table from the sofa–console midpoint toward the sofa.
pub const COFFEE_TABLE_SHIFT: f64 = 0.2;
pub const ARMCHAIR_GAP: f64 = 0.2;
/// Slack the living-room width needs beyond sofa, armchair and bookshelf.
pub const BOOKSHELF_MARGIN: f64 = 0.6;
pub const CHAIR_CLEARANCE: f64 = 0.2;
pub const CABINET_GAP: f64 = 0.15;

const KING_BED: &str = "king-bed";
const SINGLE_BED: &str = "single-bed";
const NIGHTSTAND: &str = "nightstand";
const WARDROBE: &str = "wardrobe";
const DRESSER: &str = "dresser";
const SOFA: &str = "sofa-3-seat";
const LOVESEAT: &str = "loveseat";
const COFFEE_TABLE: &str = "coffee-table";
const TV_STAND: &str = "tv-stand";
const ARMCHAIR: &str = "armchair";
const BOOKSHELF: &str = "bookshelf";
const DESK: &str = "desk";
const OFFICE_CHAIR: &str = "office-chair";
const FILING_CABINET: &str = "filing-cabinet";
const OFFICE_BOOKSHELF: &str = "office-bookshelf";

pub(super) const SPACIOUS_BEDROOM_IDS: &[&str] = &[KING_BED, NIGHTSTAND, WARDROBE, DRESSER];
pub(super) const COMPACT_BEDROOM_IDS: &[&str] = &[SINGLE_BED, NIGHTSTAND, WARDROBE, DRESSER];
pub(super) const SPACIOUS_LIVING_ROOM_IDS: &[&str] =
    &[SOFA, TV_STAND, COFFEE_TABLE, ARMCHAIR, BOOKSHELF];
pub(super) const COMPACT_LIVING_ROOM_IDS: &[&str] = &[LOVESEAT, TV_STAND];
pub(super) const OFFICE_IDS: &[&str] = &[DESK, OFFICE_CHAIR, FILING_CABINET, OFFICE_BOOKSHELF];

/// King bed centered on the back wall between two nightstands, wardrobe and
/// dresser along the front wall starting from the left corner.
pub(super) fn spacious_bedroom(placer: &mut Placer<'_>) -> Result<()> {
    let room = placer.room();
    let bed = placer.archetype(KING_BED)?;
    let nightstand = placer.archetype(NIGHTSTAND)?;
    let wardrobe = placer.archetype(WARDROBE)?;
    let dresser = placer.archetype(DRESSER)?;

    let back = Wall::Back.facing();
    let front = Wall::Front.facing();

    let (_, bed_depth) = bed.dimensions.floor_extent(back);
    let bed_spot = placer.require(
        bed,
        Position::new(0.0, room.back_wall() + bed_depth / 2.0),
        back,
    )?;

    let (stand_width, stand_depth) = nightstand.dimensions.floor_extent(back);
    let stand_z = room.back_wall() + stand_depth / 2.0;
    let left_span = bed_spot.left() - (room.left_wall() + WALL_CLEARANCE);
    placer.offer(
        nightstand,
        Position::new(bed_spot.left() - stand_width / 2.0, stand_z),
        back,
        fits_within(stand_width, left_span),
    );
    let right_span = room.right_wall() - WALL_CLEARANCE - bed_spot.right();
    placer.offer(
        nightstand,
        Position::new(bed_spot.right() + stand_width / 2.0, stand_z),
        back,
        fits_within(stand_width, right_span),
    );

    let (wardrobe_width, wardrobe_depth) = wardrobe.dimensions.floor_extent(front);
    let wardrobe_spot = placer.offer(
        wardrobe,
        Position::new(
            room.left_wall() + WALL_CLEARANCE + wardrobe_width / 2.0,
            room.front_wall() - wardrobe_depth / 2.0,
        ),
        front,
        fits_within(wardrobe_width + 2.0 * WALL_CLEARANCE, room.width),
    );

    let (dresser_width, dresser_depth) = dresser.dimensions.floor_extent(front);
    let dresser_start = match wardrobe_spot {
        Some(spot) => spot.right() + STORAGE_GAP,
        None => room.left_wall() + WALL_CLEARANCE,
    };
    placer.offer(
        dresser,
        Position::new(
            dresser_start + dresser_width / 2.0,
            room.front_wall() - dresser_depth / 2.0,
        ),
        front,
        fits_within(dresser_width, room.right_wall() - WALL_CLEARANCE - dresser_start),
    );

    Ok(())
}

/// Single bed in the back-left corner with one nightstand, wardrobe in the
/// front-right corner, dresser beside the wardrobe or along the right wall.
pub(super) fn compact_bedroom(placer: &mut Placer<'_>) -> Result<()> {
    let room = placer.room();
    let bed = placer.archetype(SINGLE_BED)?;
    let nightstand = placer.archetype(NIGHTSTAND)?;
    let wardrobe = placer.archetype(WARDROBE)?;
    let dresser = placer.archetype(DRESSER)?;

    let back = Wall::Back.facing();
    let front = Wall::Front.facing();

    let (bed_width, bed_depth) = bed.dimensions.floor_extent(back);
    let bed_spot = placer.require(
        bed,
        Position::new(
            room.left_wall() + bed_width / 2.0,
            room.back_wall() + bed_depth / 2.0,
        ),
        back,
    )?;

    let (stand_width, stand_depth) = nightstand.dimensions.floor_extent(back);
    placer.offer(
        nightstand,
        Position::new(
            bed_spot.right() + stand_width / 2.0,
            room.back_wall() + stand_depth / 2.0,
        ),
        back,
        fits_within(stand_width, room.right_wall() - WALL_CLEARANCE - bed_spot.right()),
    );

    let (wardrobe_width, wardrobe_depth) = wardrobe.dimensions.floor_extent(front);
    let wardrobe_spot = placer.offer(
        wardrobe,
        Position::new(
            room.right_wall() - WALL_CLEARANCE - wardrobe_width / 2.0,
            room.front_wall() - wardrobe_depth / 2.0,
        ),
        front,
        fits_within(wardrobe_width + 2.0 * WALL_CLEARANCE, room.width),
    );

    if let Some(spot) = wardrobe_spot {
        let (dresser_width, dresser_depth) = dresser.dimensions.floor_extent(front);
        let end = spot.left() - STORAGE_GAP;
        let center = Position::new(
            end - dresser_width / 2.0,
            room.front_wall() - dresser_depth / 2.0,
        );
        let span = end - (room.left_wall() + WALL_CLEARANCE);
        if fits_within(dresser_width, span) && placer.is_clear(dresser, center, front) {
            placer.offer(dresser, center, front, true);
            return Ok(());
        }
    }

    // Fall back to the right wall, between whatever stands against the back
    // wall and the front wall in that strip.
    let side = Wall::Right.facing();
    let (strip_width, run) = dresser.dimensions.floor_extent(side);
    let strip_left = room.right_wall() - strip_width;
    let mut start = room.back_wall();
    let mut end = room.front_wall();
    for spot in placer.footprints() {
        if spot.right() <= strip_left + FIT_EPSILON {
            continue;
        }
        if (spot.back() - room.back_wall()).abs() <= FIT_EPSILON {
            start = start.max(spot.front());
        } else if (spot.front() - room.front_wall()).abs() <= FIT_EPSILON {
            end = end.min(spot.back());
        }
    }
    let start = start + WALL_CLEARANCE;
    let end = end - WALL_CLEARANCE;
    placer.offer(
        dresser,
        Position::new(room.right_wall() - strip_width / 2.0, start + run / 2.0),
        side,
        fits_within(run, end - start),
    );

    Ok(())
}

/// Sofa facing a console on the front wall, coffee table between them,
/// armchair beside the sofa and a bookshelf in the console wall's right corner.
pub(super) fn spacious_living_room(placer: &mut Placer<'_>) -> Result<()> {
    let room = placer.room();
    let sofa = placer.archetype(SOFA)?;
    let console = placer.archetype(TV_STAND)?;
    let table = placer.archetype(COFFEE_TABLE)?;
    let armchair = placer.archetype(ARMCHAIR)?;
    let bookshelf = placer.archetype(BOOKSHELF)?;

    let back = Wall::Back.facing();
    let front = Wall::Front.facing();

    let (sofa_width, sofa_depth) = sofa.dimensions.floor_extent(back);
    let (_, console_depth) = console.dimensions.floor_extent(front);
    let console_front = room.front_wall() - console_depth;

    // As far back as the room allows, but never beyond viewing distance.
    let sofa_z = (room.back_wall() + sofa_depth / 2.0)
        .max(console_front - MAX_VIEWING_DISTANCE - sofa_depth / 2.0);
    let sofa_spot = placer.require(sofa, Position::new(0.0, sofa_z), back)?;
    placer.require(
        console,
        Position::new(0.0, room.front_wall() - console_depth / 2.0),
        front,
    )?;

    let (_, table_depth) = table.dimensions.floor_extent(back);
    let viewing_gap = console_front - sofa_spot.front();
    let midpoint = (sofa_spot.front() + console_front) / 2.0;
    let table_z = (midpoint - COFFEE_TABLE_SHIFT)
        .max(sofa_spot.front() + COFFEE_TABLE_CLEARANCE + table_depth / 2.0);
    placer.offer(
        table,
        Position::new(0.0, table_z),
        back,
        fits_within(table_depth + 2.0 * COFFEE_TABLE_CLEARANCE, viewing_gap),
    );

    let (armchair_width, armchair_depth) = armchair.dimensions.floor_extent(back);
    let armchair_right = sofa_spot.left() - ARMCHAIR_GAP;
    placer.offer(
        armchair,
        Position::new(
            armchair_right - armchair_width / 2.0,
            sofa_spot.back() + armchair_depth / 2.0,
        ),
        back,
        fits_within(
            armchair_width,
            armchair_right - (room.left_wall() + WALL_CLEARANCE),
        ),
    );

    let (shelf_width, shelf_depth) = bookshelf.dimensions.floor_extent(front);
    placer.offer(
        bookshelf,
        Position::new(
            room.right_wall() - WALL_CLEARANCE - shelf_width / 2.0,
            room.front_wall() - shelf_depth / 2.0,
        ),
        front,
        fits_within(
            sofa_width + armchair.dimensions.width + shelf_width + BOOKSHELF_MARGIN,
            room.width,
        ),
    );

    Ok(())
}

/// Loveseat on the left wall facing a console on the right wall.
pub(super) fn compact_living_room(placer: &mut Placer<'_>) -> Result<()> {
    let room = placer.room();
    let loveseat = placer.archetype(LOVESEAT)?;
    let console = placer.archetype(TV_STAND)?;

    let left = Wall::Left.facing();
    let right = Wall::Right.facing();

    let (seat_depth, _) = loveseat.dimensions.floor_extent(left);
    placer.require(
        loveseat,
        Position::new(room.left_wall() + seat_depth / 2.0, 0.0),
        left,
    )?;

    let (console_depth, console_run) = console.dimensions.floor_extent(right);
    placer.offer(
        console,
        Position::new(room.right_wall() - console_depth / 2.0, 0.0),
        right,
        fits_within(console_run + 2.0 * WALL_CLEARANCE, room.depth),
    );

    Ok(())
}

/// Desk centered on the back wall with its chair, a filing cabinet to the
/// left and a bookshelf in the front-right corner.
pub(super) fn office(placer: &mut Placer<'_>) -> Result<()> {
    let room = placer.room();
    let desk = placer.archetype(DESK)?;
    let chair = placer.archetype(OFFICE_CHAIR)?;
    let cabinet = placer.archetype(FILING_CABINET)?;
    let bookshelf = placer.archetype(OFFICE_BOOKSHELF)?;

    let back = Wall::Back.facing();
    let front = Wall::Front.facing();

    let (_, desk_depth) = desk.dimensions.floor_extent(back);
    let desk_spot = placer.require(
        desk,
        Position::new(0.0, room.back_wall() + desk_depth / 2.0),
        back,
    )?;

    // The chair faces the desk, not the room.
    let (_, chair_depth) = chair.dimensions.floor_extent(front);
    placer.require(
        chair,
        Position::new(
            desk_spot.center().x,
            desk_spot.front() + CHAIR_CLEARANCE + chair_depth / 2.0,
        ),
        front,
    )?;

    let (cabinet_width, cabinet_depth) = cabinet.dimensions.floor_extent(back);
    let cabinet_right = desk_spot.left() - CABINET_GAP;
    placer.offer(
        cabinet,
        Position::new(
            cabinet_right - cabinet_width / 2.0,
            room.back_wall() + cabinet_depth / 2.0,
        ),
        back,
        fits_within(
            cabinet_width,
            cabinet_right - (room.left_wall() + WALL_CLEARANCE),
        ),
    );

    let (shelf_width, shelf_depth) = bookshelf.dimensions.floor_extent(front);
    placer.require(
        bookshelf,
        Position::new(
            room.right_wall() - WALL_CLEARANCE - shelf_width / 2.0,
            room.front_wall() - shelf_depth / 2.0,
        ),
        front,
    )?;

    Ok(())
}
