//! Product grid page: filter sidebar, sorted card grid, and pagination.

use eframe::egui;
use shared::domain::{format_usd, Product};
use storefront_core::{PriceBand, SortKey};

use crate::ui::app::StorefrontApp;
use crate::ui::theme::{theme_verdant_palette, verdant_fallback_palette, StorefrontPalette};
use crate::ui::widgets::{pagination_row, LoadState, PageIntent, Toast};

/// Right edge of the price slider; treated as open-ended.
const PRICE_SLIDER_CAP_DOLLARS: i64 = 100;

impl StorefrontApp {
    pub(crate) fn show_products_view(&mut self, ui: &mut egui::Ui) {
        let palette = theme_verdant_palette(self.theme).unwrap_or_else(verdant_fallback_palette);

        match &self.grid {
            LoadState::NotRequested | LoadState::Loading => {
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label("Loading products");
                });
                return;
            }
            LoadState::Failed(message) => {
                let message = message.clone();
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Failed to load products").strong());
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("Reload catalog").clicked() {
                        self.request_catalog();
                    }
                });
                return;
            }
            LoadState::Ready(_) => {}
        }

        ui.add_space(4.0);
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(230.0);
                self.products_filter_sidebar(ui, &palette);
            });
            ui.separator();
            ui.vertical(|ui| {
                self.products_grid_content(ui, &palette);
            });
        });
    }

    fn products_filter_sidebar(&mut self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        let text_scale = self.readability.text_scale;
        ui.label(
            egui::RichText::new("Filters")
                .strong()
                .size(16.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.add_space(6.0);

        let Some(grid) = self.grid_mut() else {
            return;
        };

        ui.label(egui::RichText::new("Sort by").strong());
        let mut sort = grid.sort_key();
        egui::ComboBox::from_id_salt("grid_sort")
            .selected_text(sort.label())
            .show_ui(ui, |ui| {
                for key in SortKey::ALL {
                    ui.selectable_value(&mut sort, key, key.label());
                }
            });
        grid.set_sort(sort);

        ui.add_space(10.0);
        ui.label(egui::RichText::new("Categories").strong());
        let categories: Vec<(String, bool)> = grid
            .categories()
            .map(|(name, enabled)| (name.to_string(), enabled))
            .collect();
        for (name, enabled) in categories {
            let mut checked = enabled;
            if ui.checkbox(&mut checked, &name).changed() {
                grid.set_category_enabled(&name, checked);
            }
        }

        ui.add_space(10.0);
        ui.label(egui::RichText::new("Price range ($)").strong());
        let band = grid.price_band();
        let open_ended = band.max_cents == i64::MAX;
        let mut min_dollars = band.min_cents / 100;
        let mut max_dollars = if open_ended {
            PRICE_SLIDER_CAP_DOLLARS
        } else {
            band.max_cents / 100
        };
        ui.add(egui::Slider::new(&mut min_dollars, 0..=PRICE_SLIDER_CAP_DOLLARS).text("Min"));
        ui.add(egui::Slider::new(&mut max_dollars, 0..=PRICE_SLIDER_CAP_DOLLARS).text("Max"));
        if min_dollars > max_dollars {
            min_dollars = max_dollars;
        }
        let new_band = PriceBand {
            min_cents: min_dollars * 100,
            // The cap stays open-ended unless the user drags it down.
            max_cents: if max_dollars == PRICE_SLIDER_CAP_DOLLARS && open_ended {
                i64::MAX
            } else {
                max_dollars * 100
            },
        };
        grid.set_price_band(new_band);

        ui.add_space(12.0);
        if ui.button("Reset filters").clicked() {
            let names: Vec<String> = grid.categories().map(|(name, _)| name.to_string()).collect();
            for name in names {
                grid.set_category_enabled(&name, true);
            }
            grid.set_price_band(PriceBand::default());
            grid.set_sort(SortKey::Price);
        }
    }

    fn products_grid_content(&mut self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        let Some(grid) = self.grid_ref() else {
            return;
        };
        let summary = grid.summary_line();
        let visible: Vec<Product> = grid.visible().into_iter().cloned().collect();
        let page = grid.page();
        let total_pages = grid.total_pages();
        let shows_pagination = grid.shows_pagination();

        ui.label(egui::RichText::new(summary).color(palette.muted_text));
        ui.add_space(8.0);

        if visible.is_empty() {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No products found.").color(palette.body_text));
            });
            return;
        }

        let card_w = 225.0;
        let columns = ((ui.available_width() / (card_w + 12.0)).floor() as usize).max(1);

        let mut added = None;
        let mut page_intent = None;
        egui::ScrollArea::vertical()
            .id_salt("product_grid")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in visible.chunks(columns) {
                    ui.horizontal(|ui| {
                        for product in row {
                            if self.product_card(ui, palette, product, card_w) {
                                added = Some(product.clone());
                            }
                        }
                    });
                    ui.add_space(10.0);
                }

                if shows_pagination {
                    ui.add_space(6.0);
                    page_intent = pagination_row(ui, page, total_pages);
                }
            });

        if let (Some(intent), Some(grid)) = (page_intent, self.grid_mut()) {
            match intent {
                PageIntent::Goto(number) => grid.set_page(number),
                PageIntent::Next => grid.next_page(),
                PageIntent::Previous => grid.previous_page(),
            }
        }
        if let Some(product) = added {
            self.cart.add(&product);
            self.toasts.push(Toast::success("Item added to cart!"));
        }
    }

    fn product_card(
        &mut self,
        ui: &mut egui::Ui,
        palette: &StorefrontPalette,
        product: &Product,
        card_w: f32,
    ) -> bool {
        let text_scale = self.readability.text_scale;
        let texture = self.art.texture(ui.ctx(), product);
        let fill = if self.theme.card_shading {
            palette.card_background
        } else {
            egui::Color32::TRANSPARENT
        };

        let mut clicked = false;
        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(self.popup_corner_radius())
            .inner_margin(egui::Margin::symmetric(10, 10))
            .show(ui, |ui| {
                ui.set_width(card_w);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::new(&texture)
                            .fit_to_exact_size(egui::vec2(card_w - 20.0, 150.0))
                            .corner_radius(8.0),
                    );
                });
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(&product.category)
                        .size(11.0 * text_scale)
                        .color(palette.chip_text),
                );
                ui.label(
                    egui::RichText::new(&product.name)
                        .strong()
                        .size(14.0 * text_scale)
                        .color(palette.heading_text),
                );
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format_usd(product.price_cents))
                            .strong()
                            .color(palette.price_text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} reviews", product.review_count))
                                .small()
                                .color(palette.muted_text),
                        );
                    });
                });
                ui.add_space(6.0);
                let add = egui::Button::new(
                    egui::RichText::new("Add to Cart")
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(self.theme.accent_color)
                .corner_radius(8.0)
                .min_size(egui::vec2(card_w - 20.0, 30.0));
                if ui.add(add).clicked() {
                    clicked = true;
                }
            });
        clicked
    }

    fn grid_ref(&self) -> Option<&storefront_core::ProductGrid> {
        self.grid.ready()
    }

    fn grid_mut(&mut self) -> Option<&mut storefront_core::ProductGrid> {
        match &mut self.grid {
            LoadState::Ready(grid) => Some(grid),
            _ => None,
        }
    }
}
