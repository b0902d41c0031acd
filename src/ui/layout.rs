use ratatui::layout::{Position, Rect};

use crate::config::UiConfig;
use crate::deck::CardTransform;

/// Rows kept free below a card at rest, so the stack nudge stays visible.
const CARD_BOTTOM_GAP: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps surface units onto terminal cells inside the body region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub area: Rect,
    /// Surface units per column.
    pub column_units: f64,
    /// Surface units per row.
    pub row_units: f64,
    /// Card inset in surface units.
    pub card_inset: f64,
}

impl Surface {
    pub fn new(area: Rect, ui: &UiConfig, card_inset: f64) -> Self {
        Self {
            area,
            column_units: ui.column_units,
            row_units: ui.row_units,
            card_inset,
        }
    }

    /// Surface width in units; the reference extent for every swipe rule.
    pub fn width_units(&self) -> f64 {
        f64::from(self.area.width) * self.column_units
    }

    /// Card footprint at rest, before scale and translation.
    fn rest_size(&self) -> (f64, f64) {
        let width_cols = (self.width_units() - self.card_inset).max(0.0) / self.column_units;
        let height_rows = self.area.height.saturating_sub(CARD_BOTTOM_GAP).max(3);
        (width_cols, f64::from(height_rows))
    }

    /// Where a card with `transform` lands, clipped to the body.
    ///
    /// `None` when the card is fully off the body or transparent.
    pub fn card_rect(&self, transform: &CardTransform) -> Option<Rect> {
        if transform.opacity <= 0.0 {
            return None;
        }
        let (rest_w, rest_h) = self.rest_size();
        let width = (rest_w * transform.scale).round() as i32;
        let height = (rest_h * transform.scale).round() as i32;

        let center_x = i32::from(self.area.x) + i32::from(self.area.width) / 2;
        let center_y = i32::from(self.area.y) + 1 + (rest_h as i32) / 2;

        let shift_x = cells(transform.translate_x, self.column_units, self.area.width);
        let shift_y = cells(transform.translate_y, self.row_units, self.area.height);
        let x = (center_x - width / 2).saturating_add(shift_x);
        let y = (center_y - height / 2).saturating_add(shift_y);
        clip(x, y, width, height, self.area)
    }
}

/// Converts a unit offset to whole cells.
///
/// Anything past twice the extent is off the body anyway, so the result is
/// clamped there.
fn cells(offset: f64, units_per_cell: f64, extent: u16) -> i32 {
    let limit = 2.0 * f64::from(extent);
    (offset / units_per_cell).round().clamp(-limit, limit) as i32
}

/// Intersects a signed rectangle with `bounds`.
pub fn clip(x: i32, y: i32, width: i32, height: i32, bounds: Rect) -> Option<Rect> {
    let left = x.max(i32::from(bounds.x));
    let top = y.max(i32::from(bounds.y));
    let right = (x + width).min(i32::from(bounds.x) + i32::from(bounds.width));
    let bottom = (y + height).min(i32::from(bounds.y) + i32::from(bounds.height));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}
