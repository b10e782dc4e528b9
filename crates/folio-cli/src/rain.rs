//! Column-drop "digital rain" drawn behind the transcript.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

pub const RAIN_PERIOD: Duration = Duration::from_millis(50);

/// A drop past the bottom restarts only when a uniform draw exceeds this.
const RESET_THRESHOLD: f64 = 0.975;

/// Ticks a glyph stays visible after it was drawn.
pub const TRAIL_TICKS: u8 = 20;

const KATAKANA: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズブプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロヲゴゾドボポヴッン";
const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainCell {
    pub glyph: char,
    /// `TRAIL_TICKS` when fresh, counting down to 1.
    pub intensity: u8,
}

#[derive(Debug)]
pub struct MatrixRain<R = StdRng> {
    rng: R,
    glyphs: Vec<char>,
    columns: u16,
    rows: u16,
    drops: Vec<u32>,
    cells: Vec<Option<RainCell>>,
}

impl MatrixRain<StdRng> {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self::with_rng(StdRng::from_entropy(), columns, rows)
    }
}

impl<R: Rng> MatrixRain<R> {
    pub fn with_rng(rng: R, columns: u16, rows: u16) -> Self {
        let glyphs = KATAKANA.chars().chain(LATIN.chars()).chain(DIGITS.chars()).collect();
        let mut rain = Self {
            rng,
            glyphs,
            columns: 0,
            rows: 0,
            drops: Vec::new(),
            cells: Vec::new(),
        };
        rain.resize(columns, rows);
        rain
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Restarts every column when the grid changes size.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        if columns == self.columns && rows == self.rows {
            return;
        }
        self.columns = columns;
        self.rows = rows;
        self.drops = vec![1; usize::from(columns)];
        self.cells = vec![None; usize::from(columns) * usize::from(rows)];
    }

    pub fn cell(&self, column: u16, row: u16) -> Option<RainCell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[self.index(column, row)]
    }

    pub fn tick(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.and_then(|c| {
                let intensity = c.intensity.saturating_sub(1);
                (intensity > 0).then_some(RainCell { intensity, ..c })
            });
        }

        for column in 0..self.columns {
            let slot = usize::from(column);
            let drop = self.drops[slot];
            if let Ok(row) = u16::try_from(drop) {
                if row < self.rows {
                    let glyph = self.glyphs[self.rng.gen_range(0..self.glyphs.len())];
                    let idx = self.index(column, row);
                    self.cells[idx] = Some(RainCell {
                        glyph,
                        intensity: TRAIL_TICKS,
                    });
                }
            }

            let past_bottom = drop > u32::from(self.rows);
            if past_bottom && self.rng.gen::<f64>() > RESET_THRESHOLD {
                self.drops[slot] = 0;
            }
            self.drops[slot] = self.drops[slot].saturating_add(1);
        }
    }

    fn index(&self, column: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.columns) + usize::from(column)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn seeded(columns: u16, rows: u16) -> MatrixRain<StdRng> {
        MatrixRain::with_rng(StdRng::seed_from_u64(7), columns, rows)
    }

    #[test]
    fn first_tick_draws_one_glyph_per_column() {
        let mut rain = seeded(4, 10);
        rain.tick();
        for column in 0..4 {
            let cell = rain.cell(column, 1).expect("glyph");
            assert_eq!(cell.intensity, TRAIL_TICKS);
            assert_eq!(rain.cell(column, 0), None);
        }
        assert_eq!(rain.drops(), &[2, 2, 2, 2]);
    }

    #[test]
    fn glyphs_fade_out_after_trail() {
        let mut rain = seeded(1, 100);
        rain.tick();
        for _ in 0..TRAIL_TICKS - 1 {
            rain.tick();
        }
        assert_eq!(rain.cell(0, 1).map(|c| c.intensity), Some(1));
        rain.tick();
        assert_eq!(rain.cell(0, 1), None);
    }

    #[test]
    fn drops_past_bottom_eventually_reset() {
        let mut rain = seeded(8, 5);
        let mut resets = 0;
        for _ in 0..2_000 {
            let before = rain.drops().to_vec();
            rain.tick();
            resets += before
                .iter()
                .zip(rain.drops())
                .filter(|(old, new)| **new < **old)
                .count();
        }
        assert!(resets > 0);
    }

    #[test]
    fn drops_never_reset_above_bottom() {
        let mut rain = seeded(3, 50);
        for expected in 2..=40 {
            rain.tick();
            assert!(rain.drops().iter().all(|drop| *drop == expected));
        }
    }

    #[test]
    fn resize_restarts_grid() {
        let mut rain = seeded(2, 2);
        rain.tick();
        rain.resize(3, 4);
        assert_eq!(rain.columns(), 3);
        assert_eq!(rain.rows(), 4);
        assert_eq!(rain.drops(), &[1, 1, 1]);
        assert_eq!(rain.cell(0, 1), None);
    }

    #[test]
    fn empty_grid_ticks_without_panicking() {
        let mut rain = seeded(0, 0);
        rain.tick();
        assert!(rain.drops().is_empty());
    }

    #[test]
    fn glyphs_come_from_the_rain_alphabet() {
        let mut rain = seeded(16, 4);
        for _ in 0..4 {
            rain.tick();
        }
        for row in 0..4 {
            for column in 0..16 {
                if let Some(cell) = rain.cell(column, row) {
                    assert!(
                        KATAKANA.contains(cell.glyph)
                            || LATIN.contains(cell.glyph)
                            || DIGITS.contains(cell.glyph)
                    );
                }
            }
        }
    }
}
