use cubelace_core::{CellBounds, ColorId, HitTarget, Point};
use eframe::egui::{Align2, CursorIcon, FontId, Painter, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{
    controller::{ClickOutcome, Controller, CubeSolver, StrategyReport},
    renderer::{BorderStyle, CellRenderer, ViewTransform},
    ui::palette::{BoardPalette, sticker_color},
};

pub const CONTROL_LABEL: &str = "solve and exit >";
pub const TERMINATED_LABEL: &str = "solved";

const CONTROL_FONT_SIZE: f32 = 14.0;
const CONTROL_PADDING: f32 = 4.0;
const BORDER_WIDTH: f32 = 1.0;
const HOVERED_BORDER_WIDTH: f32 = 3.0;

struct PainterRenderer<'a> {
    painter: &'a Painter,
    transform: ViewTransform,
    palette: &'a BoardPalette,
}

impl CellRenderer for PainterRenderer<'_> {
    fn draw_cell(&mut self, bounds: CellBounds, fill: ColorId, border: BorderStyle) {
        let rect = self.transform.to_screen_rect(bounds);
        self.painter.rect_filled(rect, 0.0, sticker_color(fill));

        let (width, color) = match border {
            BorderStyle::Normal => (BORDER_WIDTH, self.palette.border),
            BorderStyle::Hovered => (HOVERED_BORDER_WIDTH, self.palette.border_hovered),
        };
        let width = f32::max(width * self.transform.scale(), 1.0);
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(width, color), StrokeKind::Inside);
    }
}

/// Shows the unfolded cube, forwarding clicks to the controller.
///
/// Returns the reports when this frame's click solved the cube.
pub fn show(
    ui: &mut Ui,
    controller: &mut Controller<'_>,
    solver: &mut dyn CubeSolver,
) -> Option<Vec<StrategyReport>> {
    let geometry = controller.geometry();
    let fit = ViewTransform::fit(geometry, ui.available_rect_before_wrap());
    let size = fit.to_screen_rect(geometry.world_bounds()).size();
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let transform = ViewTransform::new(rect.min, fit.scale());

    let palette = BoardPalette::from_visuals(ui.visuals());
    let painter = ui.painter_at(rect);
    let mut renderer = PainterRenderer {
        painter: &painter,
        transform,
        palette: &palette,
    };

    let mut reports = None;
    if response.clicked()
        && let Some(pos) = response.interact_pointer_pos()
    {
        match controller.click(transform.to_world(pos), solver, &mut renderer) {
            ClickOutcome::Solved(solved) => reports = Some(solved),
            ClickOutcome::Cycled { .. } | ClickOutcome::Ignored => {}
        }
    }

    controller.draw_all(&mut renderer);

    let hovered = if controller.state().is_editing() {
        response
            .hover_pos()
            .and_then(|pos| controller.hit_test(transform.to_world(pos)))
    } else {
        None
    };
    if hovered.is_some() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }
    if let Some(HitTarget::Cell(cell)) = hovered {
        controller.draw_cell(cell, BorderStyle::Hovered, &mut renderer);
    }

    draw_control(
        &painter,
        controller,
        transform,
        &palette,
        matches!(hovered, Some(HitTarget::Control)),
    );

    reports
}

fn draw_control(
    painter: &Painter,
    controller: &Controller<'_>,
    transform: ViewTransform,
    palette: &BoardPalette,
    hovered: bool,
) {
    let region = controller.geometry().control_region();
    let rect = transform.to_screen_rect(region);
    if hovered {
        painter.rect_filled(rect, 0.0, palette.control_bg_hovered);
    }

    let (label, color) = if controller.state().is_terminated() {
        (TERMINATED_LABEL, palette.control_text)
    } else if hovered {
        (CONTROL_LABEL, palette.control_text_hovered)
    } else {
        (CONTROL_LABEL, palette.control_text)
    };
    let anchor = Point::new(region.top_left().x, region.center().y);
    painter.text(
        transform.to_screen(anchor) + vec2(CONTROL_PADDING * transform.scale(), 0.0),
        Align2::LEFT_CENTER,
        label,
        FontId::proportional(CONTROL_FONT_SIZE * transform.scale()),
        color,
    );
}
