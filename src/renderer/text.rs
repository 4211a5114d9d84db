//! Character-grid renderer for terminals and logs

use glam::Vec2;

use super::Renderer;
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::Snapshot;

/// Grid dimensions (each cell covers 10x20 playfield units)
pub const GRID_COLS: usize = 40;
pub const GRID_ROWS: usize = 30;

const PLAYER_GLYPH: char = 'U';
const OBSTACLE_GLYPH: char = '#';
const GOOD_GLYPH: char = 'o';
const BAD_GLYPH: char = 'x';

/// Renders snapshots into a string, keeping the most recent frame
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    frame: String,
    frames_rendered: u64,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently rendered frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Rasterize a snapshot: HUD line followed by the playfield grid
    pub fn draw(snapshot: &Snapshot<'_>) -> String {
        let mut grid = vec![['.'; GRID_COLS]; GRID_ROWS];

        for obstacle in snapshot.obstacles {
            plot(&mut grid, obstacle.center(), OBSTACLE_GLYPH);
        }
        for collectible in snapshot.collectibles {
            let glyph = if collectible.bad { BAD_GLYPH } else { GOOD_GLYPH };
            plot(&mut grid, collectible.pos, glyph);
        }
        // Drawn last so the bucket stays visible under overlapping drops
        plot(&mut grid, snapshot.player.pos, PLAYER_GLYPH);

        let mut out = format!(
            "Score: {}  Lives: {}  Time: {}\n",
            snapshot.score, snapshot.lives, snapshot.time_left
        );
        for row in &grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        self.frame = Self::draw(snapshot);
        self.frames_rendered += 1;
    }
}

/// Place a glyph; points off the playfield are skipped
fn plot(grid: &mut [[char; GRID_COLS]], pos: Vec2, glyph: char) {
    if pos.x < 0.0 || pos.y < 0.0 || pos.x >= PLAYFIELD_WIDTH || pos.y >= PLAYFIELD_HEIGHT {
        return;
    }
    let col = (pos.x / PLAYFIELD_WIDTH * GRID_COLS as f32) as usize;
    let row = (pos.y / PLAYFIELD_HEIGHT * GRID_ROWS as f32) as usize;
    grid[row.min(GRID_ROWS - 1)][col.min(GRID_COLS - 1)] = glyph;
}
