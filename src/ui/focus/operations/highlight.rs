// Focus ring rendering (egui-dependent)

use eframe::egui::{self, Color32, EventFilter, Rect, Response, Stroke, StrokeKind, Ui};

use crate::ui::theme;

/// Focus ring styling configuration
pub struct FocusRingStyle {
    pub stroke_width: f32,
    pub color: Color32,
    pub corner_radius: f32,
    pub padding: f32,
}

impl Default for FocusRingStyle {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            color: theme::ACCENT_GLOW,
            corner_radius: 12.0,
            padding: 3.0,
        }
    }
}

/// Draw a focus ring around a rectangle
pub fn draw_focus_ring(ui: &mut Ui, rect: Rect) {
    draw_focus_ring_styled(ui, rect, &FocusRingStyle::default());
}

/// Draw a focus ring with custom styling
pub fn draw_focus_ring_styled(ui: &mut Ui, rect: Rect, style: &FocusRingStyle) {
    let expanded = rect.expand(style.padding);
    let corner_radius = style.corner_radius as u8;
    ui.painter().rect_stroke(
        expanded,
        corner_radius,
        Stroke::new(style.stroke_width, style.color),
        StrokeKind::Outside,
    );
}

/// Pulsing ring for the focused card on TV screens, where a static ring is easy to lose
pub fn draw_pulsing_focus_ring(ui: &mut Ui, rect: Rect, time: f64) {
    let pulse = ((time * 2.5).sin() * 0.25 + 0.75) as f32;
    let style = FocusRingStyle {
        color: theme::ACCENT_GLOW.gamma_multiply(pulse),
        ..Default::default()
    };
    draw_focus_ring_styled(ui, rect, &style);
}

/// Keep arrow keys with the focused widget so egui does not move focus on its own
pub fn lock_arrows(ui: &Ui, response: &Response) {
    if response.has_focus() {
        ui.memory_mut(|m| {
            m.set_focus_lock_filter(
                response.id,
                EventFilter {
                    horizontal_arrows: true,
                    vertical_arrows: true,
                    ..Default::default()
                },
            )
        });
    }
}

/// Focus visuals for a navigable element: ring plus arrow lock
pub fn decorate_focused(ui: &mut Ui, response: &Response, pulsing: bool) {
    lock_arrows(ui, response);
    if pulsing {
        let time = ui.input(|i| i.time);
        draw_pulsing_focus_ring(ui, response.rect, time);
        ui.ctx().request_repaint();
    } else {
        draw_focus_ring(ui, response.rect);
    }
}

/// Scroll `response` into the middle of the enclosing scroll area
pub fn scroll_to(response: &Response) {
    response.scroll_to_me(Some(egui::Align::Center));
}
