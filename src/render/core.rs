use std::io::Write;

use crossterm::style::{Color, Stylize};

use crate::error::Result;
use crate::geometry::{Position, center_to_corner};
use crate::layout::{Layout, PlacedFurniture};
use crate::width::{display_width, pad_to_width};

const VIEWER_GLYPH: char = '@';
const VIEWER_LABEL: &str = "You";
/// Grid caps; larger rooms get coarser cells instead of more of them.
pub const MAX_GRID_COLUMNS: usize = 240;
pub const MAX_GRID_ROWS: usize = 120;

/// Floor-plan rendering parameters.
#[derive(Debug, Clone)]
pub struct FloorPlanSettings {
    pub columns_per_meter: f64,
    pub rows_per_meter: f64,
    pub show_viewer: bool,
    pub color: bool,
}

impl Default for FloorPlanSettings {
    fn default() -> Self {
        Self {
            columns_per_meter: 4.0,
            rows_per_meter: 2.0,
            show_viewer: true,
            color: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Item(usize),
    Viewer,
}

/// Top-down text renderer: back wall at the top, front wall at the bottom.
pub struct FloorPlanRenderer {
    settings: FloorPlanSettings,
}

impl FloorPlanRenderer {
    pub fn new(settings: FloorPlanSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(FloorPlanSettings::default())
    }

    pub fn settings(&self) -> &FloorPlanSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut FloorPlanSettings {
        &mut self.settings
    }

    pub fn render(&self, layout: &Layout) -> String {
        let grid = self.rasterize(layout);
        let columns = grid.first().map_or(0, Vec::len);
        let border = format!("+{}+", "-".repeat(columns));

        let mut lines = Vec::with_capacity(grid.len() + layout.len() + 5);
        lines.push(format!(
            "{} {:.2} x {:.2} m",
            layout.strategy, layout.room.width, layout.room.depth
        ));
        lines.push(border.clone());
        for row in &grid {
            let cells: String = row.iter().map(|cell| self.paint(*cell, layout)).collect();
            lines.push(format!("|{cells}|"));
        }
        lines.push(border);
        lines.push(String::new());
        lines.extend(self.legend(layout));
        lines.push(format!("Total: {}", layout.total_price()));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn render_to(&self, writer: &mut impl Write, layout: &Layout) -> Result<()> {
        writer.write_all(self.render(layout).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn rasterize(&self, layout: &Layout) -> Vec<Vec<Cell>> {
        let room = &layout.room;
        let columns = cell_count(room.width, self.settings.columns_per_meter, MAX_GRID_COLUMNS);
        let rows = cell_count(room.depth, self.settings.rows_per_meter, MAX_GRID_ROWS);
        let column_size = room.width / columns as f64;
        let row_size = room.depth / rows as f64;
        let mut grid = vec![vec![Cell::Empty; columns]; rows];

        for (index, item) in layout.iter().enumerate() {
            let footprint = item.footprint();
            let origin = center_to_corner(
                Position::new(footprint.left(), footprint.back()),
                room.width,
                room.depth,
            );
            let (x_end, z_end) = (origin.x + footprint.width, origin.z + footprint.depth);

            let mut covered = false;
            for (r, row) in grid.iter_mut().enumerate() {
                let cz = (r as f64 + 0.5) * row_size;
                if cz < origin.z || cz > z_end {
                    continue;
                }
                for (c, cell) in row.iter_mut().enumerate() {
                    let cx = (c as f64 + 0.5) * column_size;
                    if cx >= origin.x && cx <= x_end {
                        *cell = Cell::Item(index);
                        covered = true;
                    }
                }
            }

            // Items smaller than a cell still get one glyph.
            if !covered {
                let center = center_to_corner(item.position, room.width, room.depth);
                let c = ((center.x / column_size) as usize).min(columns - 1);
                let r = ((center.z / row_size) as usize).min(rows - 1);
                grid[r][c] = Cell::Item(index);
            }
        }

        if self.settings.show_viewer {
            let viewer = &mut grid[rows / 2][columns / 2];
            if *viewer == Cell::Empty {
                *viewer = Cell::Viewer;
            }
        }

        grid
    }

    fn paint(&self, cell: Cell, layout: &Layout) -> String {
        match cell {
            Cell::Empty => " ".to_string(),
            Cell::Viewer => VIEWER_GLYPH.to_string(),
            Cell::Item(index) => self.glyph_for(index, &layout.items[index]),
        }
    }

    fn glyph_for(&self, index: usize, item: &PlacedFurniture) -> String {
        let glyph = glyph(index);
        match parse_hex_color(&item.archetype.color) {
            Some(color) if self.settings.color => glyph.with(color).to_string(),
            _ => glyph.to_string(),
        }
    }

    fn legend(&self, layout: &Layout) -> Vec<String> {
        let label_width = layout
            .iter()
            .map(|item| display_width(&item.archetype.label))
            .chain(std::iter::once(display_width(VIEWER_LABEL)))
            .max()
            .unwrap_or(0);

        let mut lines: Vec<String> = layout
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let size = item.archetype.dimensions;
                format!(
                    "{}  {}  {:.2} x {:.2} m  {}",
                    self.glyph_for(index, item),
                    pad_to_width(&item.archetype.label, label_width),
                    size.width,
                    size.depth,
                    item.archetype.price
                )
            })
            .collect();

        if self.settings.show_viewer {
            lines.push(format!("{VIEWER_GLYPH}  {VIEWER_LABEL}"));
        }
        lines
    }
}

fn cell_count(meters: f64, per_meter: f64, max: usize) -> usize {
    let count = (meters * per_meter).round();
    if count.is_nan() || count < 1.0 {
        1
    } else if count >= max as f64 {
        max
    } else {
        count as usize
    }
}

fn glyph(index: usize) -> char {
    match index {
        0..=25 => char::from(b'A' + index as u8),
        26..=51 => char::from(b'a' + (index - 26) as u8),
        _ => '#',
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RoomType};
    use crate::layout::{RoomConfig, select_layout};

    fn office() -> Layout {
        let room = RoomConfig::new(3.5, 3.0, RoomType::Office);
        select_layout(&Catalog::builtin(), &room).unwrap()
    }

    #[test]
    fn outline_matches_room_scale() {
        let plan = FloorPlanRenderer::with_default().render(&office());
        let lines: Vec<&str> = plan.lines().collect();
        assert_eq!(lines[0], "office 3.50 x 3.00 m");
        assert_eq!(lines[1], format!("+{}+", "-".repeat(14)));
        assert_eq!(lines[8], lines[1]);
        assert!(lines[2..8].iter().all(|line| line.starts_with('|') && line.ends_with('|')));
    }

    #[test]
    fn footprints_fill_with_glyphs() {
        let plan = FloorPlanRenderer::with_default().render(&office());
        let lines: Vec<&str> = plan.lines().collect();
        // Cabinet then desk along the back wall.
        assert_eq!(lines[2], "| CC AAAAAA    |");
        assert!(lines[3].contains("AAAAAA"));
        assert!(lines[7].contains('D'));
    }

    #[test]
    fn viewer_marks_an_empty_center() {
        let plan = FloorPlanRenderer::with_default().render(&office());
        let lines: Vec<&str> = plan.lines().collect();
        assert_eq!(lines[5], "|       @      |");
        assert!(plan.contains("@  You"));

        let mut renderer = FloorPlanRenderer::with_default();
        renderer.settings_mut().show_viewer = false;
        assert!(!renderer.render(&office()).contains('@'));
    }

    #[test]
    fn legend_aligns_labels() {
        let plan = FloorPlanRenderer::with_default().render(&office());
        assert!(plan.contains("A  Desk       1.60 x 0.80 m  599"));
        assert!(plan.contains("D  Bookshelf  0.80 x 0.35 m  329"));
        assert!(plan.ends_with("Total: 1656\n"));
    }

    #[test]
    fn every_item_is_visible() {
        let catalog = Catalog::builtin();
        for room_type in RoomType::ALL {
            let layout = select_layout(&catalog, &RoomConfig::new(5.0, 4.0, room_type)).unwrap();
            let plan = FloorPlanRenderer::with_default().render(&layout);
            let grid: String = plan.lines().skip(2).take(8).collect();
            for index in 0..layout.len() {
                assert!(grid.contains(glyph(index)), "{room_type}: glyph {index} missing");
            }
        }
    }

    #[test]
    fn color_mode_keeps_visible_width() {
        let layout = office();
        let plain = FloorPlanRenderer::with_default().render(&layout);
        let mut renderer = FloorPlanRenderer::with_default();
        renderer.settings_mut().color = true;
        let colored = renderer.render(&layout);

        assert!(colored.contains("\x1b["));
        for (plain_line, colored_line) in plain.lines().zip(colored.lines()) {
            assert_eq!(display_width(plain_line), display_width(colored_line));
        }
    }

    #[test]
    fn render_to_writes_the_plan() {
        let layout = office();
        let renderer = FloorPlanRenderer::with_default();
        let mut buffer = Vec::new();
        renderer.render_to(&mut buffer, &layout).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), renderer.render(&layout));
    }

    #[test]
    fn huge_rooms_render_on_a_capped_grid() {
        for size in [1e5, 1e18] {
            let room = RoomConfig::new(size, size, RoomType::Office);
            let layout = select_layout(&Catalog::builtin(), &room).unwrap();
            let plan = FloorPlanRenderer::with_default().render(&layout);
            let lines: Vec<&str> = plan.lines().collect();

            assert_eq!(lines[1].len(), MAX_GRID_COLUMNS + 2);
            assert_eq!(lines[MAX_GRID_ROWS + 2], lines[1]);
            // Items far smaller than a cell share one; the far corner stays visible.
            assert!(lines[MAX_GRID_ROWS + 1].ends_with("D|"), "{size}");
            assert!(lines[MAX_GRID_ROWS / 2 + 2].contains('@'), "{size}");
            assert!(plan.ends_with("Total: 1656\n"));
        }
    }

    #[test]
    fn cell_count_is_bounded() {
        assert_eq!(cell_count(3.5, 4.0, MAX_GRID_COLUMNS), 14);
        assert_eq!(cell_count(1e18, 4.0, MAX_GRID_COLUMNS), MAX_GRID_COLUMNS);
        assert_eq!(cell_count(f64::INFINITY, 4.0, MAX_GRID_COLUMNS), MAX_GRID_COLUMNS);
        assert_eq!(cell_count(0.1, 0.0, MAX_GRID_ROWS), 1);
        assert_eq!(cell_count(f64::NAN, 2.0, MAX_GRID_ROWS), 1);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(
            parse_hex_color("#8b7355"),
            Some(Color::Rgb { r: 0x8b, g: 0x73, b: 0x55 })
        );
        assert_eq!(parse_hex_color("8b7355"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
