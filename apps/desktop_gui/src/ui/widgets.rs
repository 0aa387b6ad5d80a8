//! Small shared widgets and draw helpers used across storefront views.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::controller::events::UiErrorCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Error,
}

/// Persistent banner pinned above the active view until dismissed.
#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

/// Corner notification that expires on its own.
#[derive(Debug, Clone)]
pub struct Toast {
    pub severity: ToastSeverity,
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: ToastSeverity::Success,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_millis(2500),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: ToastSeverity::Error,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_millis(4000),
        }
    }
}

/// Lifecycle of data requested from the backend worker.
pub enum LoadState<T> {
    NotRequested,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

pub enum PageIntent {
    Goto(usize),
    Next,
    Previous,
}

/// Previous / numbered pages / Next. Returns the click, if any; the caller
/// owns the pager and applies it.
pub fn pagination_row(ui: &mut egui::Ui, page: usize, total_pages: usize) -> Option<PageIntent> {
    let mut intent = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(page > 1, egui::Button::new("Previous"))
            .clicked()
        {
            intent = Some(PageIntent::Previous);
        }
        for number in 1..=total_pages {
            if ui
                .selectable_label(number == page, number.to_string())
                .clicked()
            {
                intent = Some(PageIntent::Goto(number));
            }
        }
        if ui
            .add_enabled(page < total_pages, egui::Button::new("Next"))
            .clicked()
        {
            intent = Some(PageIntent::Next);
        }
    });
    intent
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Catalog => "Catalog",
        UiErrorCategory::Checkout => "Checkout",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

pub fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

pub fn icon_btn(icon: &str, color: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(icon).color(color))
        .min_size(egui::vec2(24.0, 24.0))
        .stroke(egui::Stroke::NONE)
        .fill(egui::Color32::TRANSPARENT)
}

pub fn form_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
    error: Option<&str>,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(hint).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);

    // Taller inputs are easier to click and feel "app-like".
    let response = ui.add_sized([ui.available_width(), 34.0], edit);

    if let Some(error) = error {
        ui.label(
            egui::RichText::new(error)
                .size(12.0)
                .color(egui::Color32::from_rgb(220, 90, 90)),
        );
    }

    response
}

/// Smoothstep easing for slide animations. Clamped so callers can feed a raw
/// progress ratio without worrying about overshoot.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_pins_both_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(-0.5), 0.0);
        assert_eq!(ease_in_out(1.5), 1.0);
    }

    #[test]
    fn easing_is_monotonic_across_the_transition() {
        let mut last = 0.0_f32;
        for step in 0..=100 {
            let eased = ease_in_out(step as f32 / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }
}
