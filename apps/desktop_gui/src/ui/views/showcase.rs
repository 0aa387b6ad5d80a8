//! Featured-product showcase: one hero product at a time with a timed slide
//! to its neighbor. Paging requests go through the `ShowcaseController`,
//! which drops re-entrant requests while a slide is in flight.

use std::time::Instant;

use eframe::egui;
use shared::domain::Product;
use storefront_core::{Direction, Phase};

use crate::ui::app::{StoreView, StorefrontApp};
use crate::ui::theme::{theme_verdant_palette, verdant_fallback_palette, StorefrontPalette};
use crate::ui::widgets::{ease_in_out, icon_btn, ui_in_rect, LoadState};

struct ShowcaseSnapshot {
    current: Product,
    incoming: Option<Product>,
    current_index: usize,
    item_count: usize,
    transitioning: bool,
    direction: Option<Direction>,
    progress: f32,
}

/// Where a hero panel sits inside the slide: pixel offset plus fade.
#[derive(Clone, Copy)]
struct SlideFrame {
    offset: egui::Vec2,
    alpha: f32,
}

impl SlideFrame {
    const SETTLED: SlideFrame = SlideFrame {
        offset: egui::Vec2::ZERO,
        alpha: 1.0,
    };
}

impl StorefrontApp {
    pub(crate) fn show_showcase_view(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        let palette = theme_verdant_palette(self.theme).unwrap_or_else(verdant_fallback_palette);
        let text_scale = self.readability.text_scale;

        let snapshot = match &self.showcase {
            LoadState::NotRequested | LoadState::Loading => {
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label("Loading featured products");
                });
                return;
            }
            LoadState::Failed(message) => {
                let message = message.clone();
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("The showcase is unavailable.").strong());
                    ui.label(message);
                });
                return;
            }
            LoadState::Ready(controller) => ShowcaseSnapshot {
                current: controller.current_item().clone(),
                incoming: controller.incoming_item().cloned(),
                current_index: controller.current_index(),
                item_count: controller.item_count(),
                transitioning: controller.phase() == Phase::Transitioning,
                direction: controller.direction(),
                progress: controller.progress(now),
            },
        };

        // Keyboard paging mirrors the on-screen chevrons.
        let (next_pressed, previous_pressed) = ui.ctx().input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::ArrowUp),
            )
        });

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("Featured Harvest")
                .strong()
                .size(24.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.label(
            egui::RichText::new("Hand-picked pantry staples, one highlight at a time.")
                .color(palette.muted_text),
        );
        ui.add_space(10.0);

        let hero_height = if self.readability.compact_density {
            360.0
        } else {
            420.0
        };
        let (hero_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), hero_height),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(hero_rect, 12.0, palette.hero_top);
        ui.painter().rect_stroke(
            hero_rect,
            12.0,
            egui::Stroke::new(1.0, palette.card_stroke),
            egui::StrokeKind::Inside,
        );

        let inner = hero_rect.shrink(18.0);
        let chevron_w = 36.0;
        let content_w = inner.width() - 2.0 * chevron_w;
        let copy_w = content_w * 0.38;
        let art_w = content_w * 0.30;
        let benefits_w = content_w - copy_w - art_w;

        let left_chevron_rect =
            egui::Rect::from_min_size(inner.min, egui::vec2(chevron_w, inner.height()));
        let copy_rect = egui::Rect::from_min_size(
            egui::pos2(inner.min.x + chevron_w, inner.min.y),
            egui::vec2(copy_w, inner.height()),
        );
        let art_rect = egui::Rect::from_min_size(
            egui::pos2(copy_rect.max.x, inner.min.y),
            egui::vec2(art_w, inner.height()),
        );
        let benefits_rect = egui::Rect::from_min_size(
            egui::pos2(art_rect.max.x, inner.min.y),
            egui::vec2(benefits_w, inner.height()),
        );
        let right_chevron_rect = egui::Rect::from_min_size(
            egui::pos2(benefits_rect.max.x, inner.min.y),
            egui::vec2(chevron_w, inner.height()),
        );

        let eased = ease_in_out(snapshot.progress);
        let mut shop_now = false;

        if snapshot.transitioning {
            // The image travels vertically with the slide direction; the copy
            // exits stage left and the benefits exit stage right, while the
            // incoming product rides the same tracks in.
            let dir_sign = match snapshot.direction {
                Some(Direction::Backward) => -1.0,
                _ => 1.0,
            };

            let copy_out = SlideFrame {
                offset: egui::vec2(-60.0 * eased, 0.0),
                alpha: 1.0 - eased,
            };
            let art_out = SlideFrame {
                offset: egui::vec2(0.0, -48.0 * eased * dir_sign),
                alpha: 1.0 - eased,
            };
            let benefits_out = SlideFrame {
                offset: egui::vec2(60.0 * eased, 0.0),
                alpha: 1.0 - eased,
            };

            self.showcase_copy_panel(ui, &palette, copy_rect, &snapshot.current, copy_out, &mut shop_now);
            self.showcase_art_panel(ui, art_rect, &snapshot.current, art_out);
            self.showcase_benefits_panel(ui, &palette, benefits_rect, &snapshot.current, benefits_out);

            if let Some(incoming) = &snapshot.incoming {
                let copy_in = SlideFrame {
                    offset: egui::vec2(-60.0 * (1.0 - eased), 0.0),
                    alpha: eased,
                };
                let art_in = SlideFrame {
                    offset: egui::vec2(0.0, 48.0 * (1.0 - eased) * dir_sign),
                    alpha: eased,
                };
                let benefits_in = SlideFrame {
                    offset: egui::vec2(60.0 * (1.0 - eased), 0.0),
                    alpha: eased,
                };

                self.showcase_copy_panel(ui, &palette, copy_rect, incoming, copy_in, &mut shop_now);
                self.showcase_art_panel(ui, art_rect, incoming, art_in);
                self.showcase_benefits_panel(ui, &palette, benefits_rect, incoming, benefits_in);
            }
        } else {
            self.showcase_copy_panel(
                ui,
                &palette,
                copy_rect,
                &snapshot.current,
                SlideFrame::SETTLED,
                &mut shop_now,
            );
            self.showcase_art_panel(ui, art_rect, &snapshot.current, SlideFrame::SETTLED);
            self.showcase_benefits_panel(
                ui,
                &palette,
                benefits_rect,
                &snapshot.current,
                SlideFrame::SETTLED,
            );
        }

        let mut previous_clicked = false;
        let mut next_clicked = false;
        ui_in_rect(ui, left_chevron_rect, |ui| {
            ui.add_space((left_chevron_rect.height() - 26.0) / 2.0);
            let chevron = icon_btn("\u{25c0}", palette.heading_text);
            if ui.add_enabled(!snapshot.transitioning, chevron).clicked() {
                previous_clicked = true;
            }
        });
        ui_in_rect(ui, right_chevron_rect, |ui| {
            ui.add_space((right_chevron_rect.height() - 26.0) / 2.0);
            let chevron = icon_btn("\u{25b6}", palette.heading_text);
            if ui.add_enabled(!snapshot.transitioning, chevron).clicked() {
                next_clicked = true;
            }
        });

        // Dot rail. Clicks during a slide reach the controller and are
        // dropped there, same as the keyboard shortcuts.
        let mut goto_target = None;
        ui.add_space(12.0);
        let dot_span = snapshot.item_count as f32 * 20.0;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - dot_span) / 2.0).max(0.0));
            for index in 0..snapshot.item_count {
                let selected = index == snapshot.current_index;
                let dot = egui::Button::new("")
                    .min_size(egui::vec2(12.0, 12.0))
                    .corner_radius(6.0)
                    .fill(if selected {
                        self.theme.accent_color
                    } else {
                        palette.chip_fill
                    })
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke));
                if ui.add(dot).clicked() {
                    goto_target = Some(index);
                }
            }
        });

        if next_pressed || next_clicked {
            if let LoadState::Ready(controller) = &mut self.showcase {
                controller.request_next(now);
            }
        }
        if previous_pressed || previous_clicked {
            if let LoadState::Ready(controller) = &mut self.showcase {
                controller.request_previous(now);
            }
        }
        if let Some(target) = goto_target {
            if let LoadState::Ready(controller) = &mut self.showcase {
                controller.request_goto(target, now);
            }
        }
        if shop_now {
            self.view = StoreView::Products;
        }
    }

    fn showcase_copy_panel(
        &self,
        ui: &mut egui::Ui,
        palette: &StorefrontPalette,
        rect: egui::Rect,
        product: &Product,
        slide: SlideFrame,
        shop_now: &mut bool,
    ) {
        let text_scale = self.readability.text_scale;
        let accent = self.theme.accent_color;
        ui_in_rect(ui, rect.translate(slide.offset), |ui| {
            ui.set_opacity(slide.alpha);
            ui.push_id(("showcase-copy", product.id.0), |ui| {
                ui.add_space(16.0);
                egui::Frame::NONE
                    .fill(palette.chip_fill)
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::symmetric(8, 3))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&product.category)
                                .size(12.0 * text_scale)
                                .color(palette.chip_text),
                        );
                    });
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&product.name)
                        .strong()
                        .size(26.0 * text_scale)
                        .color(palette.heading_text),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(shared::domain::format_usd(product.price_cents))
                        .strong()
                        .size(20.0 * text_scale)
                        .color(palette.price_text),
                );
                ui.add_space(10.0);
                ui.label(egui::RichText::new(&product.description).color(palette.body_text));
                ui.add_space(14.0);
                let cta = egui::Button::new(
                    egui::RichText::new("Shop Now")
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(accent)
                .corner_radius(8.0)
                .min_size(egui::vec2(130.0, 36.0));
                if ui.add(cta).clicked() {
                    *shop_now = true;
                }
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("{} reviews", product.review_count))
                        .small()
                        .color(palette.muted_text),
                );
            });
        });
    }

    fn showcase_art_panel(
        &mut self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        product: &Product,
        slide: SlideFrame,
    ) {
        let texture = self.art.texture(ui.ctx(), product);
        ui_in_rect(ui, rect.translate(slide.offset), |ui| {
            ui.set_opacity(slide.alpha);
            let side = rect.width().min(rect.height()) - 16.0;
            ui.add_space((rect.height() - side) / 2.0);
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Image::new(&texture)
                        .fit_to_exact_size(egui::vec2(side, side))
                        .corner_radius(12.0),
                );
            });
        });
    }

    fn showcase_benefits_panel(
        &self,
        ui: &mut egui::Ui,
        palette: &StorefrontPalette,
        rect: egui::Rect,
        product: &Product,
        slide: SlideFrame,
    ) {
        let text_scale = self.readability.text_scale;
        ui_in_rect(ui, rect.translate(slide.offset), |ui| {
            ui.set_opacity(slide.alpha);
            ui.push_id(("showcase-benefits", product.id.0), |ui| {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("Why you'll love it")
                        .strong()
                        .size(15.0 * text_scale)
                        .color(palette.heading_text),
                );
                ui.add_space(6.0);
                for benefit in &product.benefits {
                    egui::Frame::NONE
                        .fill(palette.card_background)
                        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.set_width(rect.width() - 28.0);
                            ui.label(
                                egui::RichText::new(&benefit.title)
                                    .strong()
                                    .size(13.0 * text_scale)
                                    .color(palette.body_text),
                            );
                            ui.label(
                                egui::RichText::new(&benefit.description)
                                    .small()
                                    .color(palette.muted_text),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
        });
    }
}
