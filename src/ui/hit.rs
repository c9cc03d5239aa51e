use ratatui::layout::{Position, Rect};

use crate::player::Action;

use super::player_bar::quantize;

/// A range control held by the mouse between press and release.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Grab {
    Seek,
    Volume,
}

/// Where the last frame put each interactive element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Hitboxes {
    /// Visible track rows, paired with their track index.
    pub rows: Vec<(Rect, usize)>,
    pub prev: Rect,
    pub toggle: Rect,
    pub next: Rect,
    pub seek: Rect,
    pub volume: Rect,
}

/// Horizontal position of `column` inside `bar`, quantized to the range step.
/// The leftmost cell is 0 and the rightmost is 1.
pub fn fraction_in(bar: Rect, column: u16) -> f64 {
    if bar.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(bar.x).min(bar.width - 1);
    quantize(f64::from(offset) / f64::from(bar.width - 1))
}

impl Hitboxes {
    fn at(rect: Rect, column: u16, row: u16) -> bool {
        rect.contains(Position::new(column, row))
    }

    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(rect, _)| Self::at(*rect, column, row))
            .map(|&(_, index)| index)
    }

    /// The action a left click at `(column, row)` stands for, if any.
    pub fn click(&self, column: u16, row: u16) -> Option<Action> {
        if let Some(index) = self.row_at(column, row) {
            return Some(Action::ActivateRow(index));
        }
        if Self::at(self.prev, column, row) {
            return Some(Action::Previous);
        }
        if Self::at(self.toggle, column, row) {
            return Some(Action::ActivateCurrent);
        }
        if Self::at(self.next, column, row) {
            return Some(Action::Next);
        }
        self.grab(column, row).map(|g| self.drag(g, column))
    }

    /// Pointer movement: hover the row under it, or clear the hover.
    pub fn hover(&self, column: u16, row: u16) -> Action {
        Action::Hover(self.row_at(column, row))
    }

    /// Which range control, if any, a press at `(column, row)` takes hold of.
    pub fn grab(&self, column: u16, row: u16) -> Option<Grab> {
        if Self::at(self.seek, column, row) {
            Some(Grab::Seek)
        } else if Self::at(self.volume, column, row) {
            Some(Grab::Volume)
        } else {
            None
        }
    }

    /// Value of a held range control with the pointer at `column`. Rows are
    /// ignored so a drag may wander off the bar vertically.
    pub fn drag(&self, grab: Grab, column: u16) -> Action {
        match grab {
            Grab::Seek => Action::Seek(fraction_in(self.seek, column)),
            Grab::Volume => Action::Volume(fraction_in(self.volume, column)),
        }
    }
}
