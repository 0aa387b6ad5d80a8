//! Profile review history: newest reviews first, five to a page, with a
//! skeleton while the list loads.

use eframe::egui;
use shared::domain::Review;
use storefront_core::reviews::PAGE_SIZE;

use crate::ui::app::StorefrontApp;
use crate::ui::theme::{theme_verdant_palette, verdant_fallback_palette, StorefrontPalette};
use crate::ui::widgets::{pagination_row, LoadState, PageIntent};

const STAR_COLOR: egui::Color32 = egui::Color32::from_rgb(202, 138, 4);

impl StorefrontApp {
    pub(crate) fn show_reviews_view(&mut self, ui: &mut egui::Ui) {
        let palette = theme_verdant_palette(self.theme).unwrap_or_else(verdant_fallback_palette);
        let text_scale = self.readability.text_scale;

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Your Reviews")
                .strong()
                .size(24.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.label(
            egui::RichText::new("What you thought of past orders.").color(palette.muted_text),
        );
        ui.add_space(10.0);

        let rows: Vec<Review>;
        let page;
        let total_pages;
        let shows_pagination;
        match &self.reviews {
            LoadState::NotRequested | LoadState::Loading => {
                review_skeleton(ui, &palette);
                return;
            }
            LoadState::Failed(message) => {
                let message = message.clone();
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Failed to load reviews").strong());
                    ui.label(message);
                });
                return;
            }
            LoadState::Ready(history) => {
                if history.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("No reviews found.").color(palette.muted_text),
                        );
                    });
                    return;
                }
                rows = history.visible().to_vec();
                page = history.page();
                total_pages = history.total_pages();
                shows_pagination = history.shows_pagination();
            }
        }

        egui::Frame::NONE
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(self.popup_corner_radius())
            .inner_margin(egui::Margin::symmetric(4, 4))
            .show(ui, |ui| {
                for (index, review) in rows.iter().enumerate() {
                    // Alternate rows pick up a tint so long lists stay
                    // scannable.
                    let fill = if index % 2 == 1 {
                        palette.chip_fill
                    } else {
                        egui::Color32::TRANSPARENT
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(&review.product_name)
                                        .strong()
                                        .color(palette.heading_text),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if self.readability.show_review_dates {
                                            ui.label(
                                                egui::RichText::new(
                                                    review
                                                        .created_at
                                                        .format("%b %e, %Y")
                                                        .to_string(),
                                                )
                                                .small()
                                                .color(palette.muted_text),
                                            );
                                        }
                                    },
                                );
                            });
                            ui.label(
                                egui::RichText::new(star_row(review.rating)).color(STAR_COLOR),
                            );
                            ui.label(
                                egui::RichText::new(&review.comment).color(palette.body_text),
                            );
                        });
                }
            });

        if shows_pagination {
            ui.add_space(8.0);
            if let Some(intent) = pagination_row(ui, page, total_pages) {
                if let LoadState::Ready(history) = &mut self.reviews {
                    match intent {
                        PageIntent::Goto(number) => history.set_page(number),
                        PageIntent::Next => history.next_page(),
                        PageIntent::Previous => history.previous_page(),
                    }
                }
            }
        }
    }
}

fn star_row(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn review_skeleton(ui: &mut egui::Ui, palette: &StorefrontPalette) {
    for _ in 0..PAGE_SIZE {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 72.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, 8.0, palette.chip_fill);
        ui.add_space(8.0);
    }
}
