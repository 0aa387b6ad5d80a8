//! Checkout page: order summary with quantity editing, the delivery address
//! form, and the cash-on-delivery confirmation. Order placement is guarded
//! the same way the showcase guards slides: a submit while one is already in
//! flight is dropped, not queued.

use eframe::egui;
use shared::domain::{format_usd, ProductId};
use storefront_core::checkout::{
    build_cod_draft, AddressField, ADDRESS_FAILED_TOAST, ADDRESS_SAVED_TOAST,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::ui::app::{StoreView, StorefrontApp};
use crate::ui::theme::{
    lighten_color, theme_verdant_palette, verdant_fallback_palette, StorefrontPalette,
};
use crate::ui::widgets::{form_text_field, Toast};

enum LineEdit {
    SetQuantity(ProductId, u32),
    Remove(ProductId),
}

impl StorefrontApp {
    pub(crate) fn show_checkout_view(&mut self, ui: &mut egui::Ui) {
        let palette = theme_verdant_palette(self.theme).unwrap_or_else(verdant_fallback_palette);
        let text_scale = self.readability.text_scale;

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Checkout")
                .strong()
                .size(24.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.label(
            egui::RichText::new("Review your order and tell us where to send it.")
                .color(palette.muted_text),
        );
        ui.add_space(10.0);

        egui::ScrollArea::vertical()
            .id_salt("checkout_page")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let column_w = (ui.available_width() - 28.0) / 2.0;
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(column_w);
                        self.checkout_order_summary(ui, &palette);
                    });
                    ui.separator();
                    ui.vertical(|ui| {
                        ui.set_width(column_w);
                        self.checkout_address_form(ui, &palette);
                        ui.add_space(16.0);
                        self.checkout_payment_section(ui, &palette);
                    });
                });
            });
    }

    fn checkout_order_summary(&mut self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        let text_scale = self.readability.text_scale;
        ui.label(
            egui::RichText::new("Order Summary")
                .strong()
                .size(16.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.add_space(6.0);

        if self.cart.is_empty() {
            ui.label(egui::RichText::new("Your cart is empty.").color(palette.muted_text));
            ui.add_space(6.0);
            if ui.button("Browse products").clicked() {
                self.view = StoreView::Products;
            }
        } else {
            let mut edit = None;
            let lines = self.cart.lines().to_vec();
            for line in &lines {
                egui::Frame::NONE
                    .fill(palette.card_background)
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .corner_radius(self.popup_corner_radius())
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&line.name)
                                    .strong()
                                    .color(palette.heading_text),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let line_total =
                                        line.unit_price_cents * i64::from(line.quantity);
                                    ui.label(
                                        egui::RichText::new(format_usd(line_total))
                                            .strong()
                                            .color(palette.price_text),
                                    );
                                },
                            );
                        });
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} each",
                                    format_usd(line.unit_price_cents)
                                ))
                                .small()
                                .color(palette.muted_text),
                            );
                            ui.add_space(10.0);
                            // Stepping down from one removes the line, same
                            // as the cart's quantity-zero rule.
                            if ui.small_button("-").clicked() {
                                edit = Some(LineEdit::SetQuantity(
                                    line.product_id,
                                    line.quantity.saturating_sub(1),
                                ));
                            }
                            ui.label(line.quantity.to_string());
                            if ui.small_button("+").clicked() {
                                edit = Some(LineEdit::SetQuantity(
                                    line.product_id,
                                    line.quantity + 1,
                                ));
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Remove").clicked() {
                                        edit = Some(LineEdit::Remove(line.product_id));
                                    }
                                },
                            );
                        });
                    });
                ui.add_space(6.0);
            }

            match edit {
                Some(LineEdit::SetQuantity(product_id, quantity)) => {
                    self.cart.set_quantity(product_id, quantity);
                }
                Some(LineEdit::Remove(product_id)) => self.cart.remove(product_id),
                None => {}
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Subtotal ({} items)", self.cart.total_quantity()))
                        .color(palette.body_text),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format_usd(self.cart.subtotal_cents()))
                            .strong()
                            .size(17.0 * text_scale)
                            .color(palette.price_text),
                    );
                });
            });
            ui.label(
                egui::RichText::new("Cash on delivery - nothing is charged online.")
                    .small()
                    .color(palette.muted_text),
            );
        }

        ui.add_space(14.0);
        ui.label(
            egui::RichText::new("Delivering to")
                .strong()
                .size(16.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.add_space(6.0);
        match self.cart.address() {
            Some(address) => {
                egui::Frame::NONE
                    .fill(palette.chip_fill)
                    .corner_radius(self.popup_corner_radius())
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&address.name)
                                .strong()
                                .color(palette.heading_text),
                        );
                        ui.label(egui::RichText::new(&address.address).color(palette.body_text));
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}, {}, {}",
                                address.postal_code, address.city, address.state, address.country
                            ))
                            .color(palette.body_text),
                        );
                        ui.label(
                            egui::RichText::new(format!("{} · {}", address.email, address.phone))
                                .small()
                                .color(palette.muted_text),
                        );
                    });
            }
            None => {
                ui.label(
                    egui::RichText::new("No delivery address saved yet.")
                        .color(palette.muted_text),
                );
            }
        }
    }

    fn checkout_address_form(&mut self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        let text_scale = self.readability.text_scale;
        ui.label(
            egui::RichText::new("Delivery Address")
                .strong()
                .size(16.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.add_space(6.0);

        self.address_field_input(ui, AddressField::Email);
        self.address_field_input(ui, AddressField::Name);
        self.address_field_input(ui, AddressField::Phone);
        self.address_field_input(ui, AddressField::Address);
        ui.columns(2, |cols| {
            self.address_field_input(&mut cols[0], AddressField::City);
            self.address_field_input(&mut cols[1], AddressField::PostalCode);
        });
        ui.columns(2, |cols| {
            self.address_field_input(&mut cols[0], AddressField::State);
            self.address_field_input(&mut cols[1], AddressField::Country);
        });

        ui.add_space(8.0);
        let save = egui::Button::new(
            egui::RichText::new("Save Address")
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(self.theme.accent_color)
        .corner_radius(8.0)
        .min_size(egui::vec2(ui.available_width(), 34.0));
        if ui.add(save).clicked() {
            self.save_address();
        }
    }

    fn address_field_input(&mut self, ui: &mut egui::Ui, field: AddressField) {
        let error = self
            .address_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message);
        let response = form_text_field(
            ui,
            field.id(),
            field.label(),
            field.placeholder(),
            self.address_form.field_mut(field),
            error,
        );
        if field == AddressField::Email && self.focus_checkout_email {
            response.request_focus();
            self.focus_checkout_email = false;
        }
        ui.add_space(4.0);
    }

    fn save_address(&mut self) {
        match self.address_form.validate() {
            Ok(address) => {
                self.cart.set_address(address);
                self.address_errors.clear();
                self.address_form.reset();
                self.toasts.push(Toast::success(ADDRESS_SAVED_TOAST));
            }
            Err(errors) => {
                self.address_errors = errors;
                self.toasts.push(Toast::error(ADDRESS_FAILED_TOAST));
            }
        }
    }

    fn checkout_payment_section(&mut self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        let text_scale = self.readability.text_scale;
        ui.label(
            egui::RichText::new("Payment")
                .strong()
                .size(16.0 * text_scale)
                .color(palette.heading_text),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(
                "Prefer to pay only when your order arrives? With Cash on Delivery you can \
                 shop confidently and pay in cash when the order reaches your doorstep.",
            )
            .color(palette.body_text),
        );
        ui.add_space(4.0);
        for step in [
            "Confirm your shipping details and complete the order.",
            "Pay the total in cash to the delivery agent on arrival.",
            "Kindly prepare the exact amount; the courier may not carry change.",
        ] {
            ui.label(
                egui::RichText::new(format!("  • {step}"))
                    .small()
                    .color(palette.muted_text),
            );
        }

        ui.add_space(10.0);
        let (label, fill) = if self.placing_order {
            ("Processing...", lighten_color(self.theme.accent_color, 0.35))
        } else {
            ("Confirm Order", self.theme.accent_color)
        };
        let confirm = egui::Button::new(
            egui::RichText::new(label)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(fill)
        .corner_radius(8.0)
        .min_size(egui::vec2(ui.available_width(), 38.0));
        if ui.add_enabled(!self.placing_order, confirm).clicked() {
            self.submit_cod_order();
        }

        if let Some(receipt) = &self.last_receipt {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!(
                    "Last order {} · {} · {}",
                    receipt.order_id.0,
                    format_usd(receipt.total_cents),
                    receipt.placed_at.format("%b %e, %H:%M UTC")
                ))
                .small()
                .color(palette.muted_text),
            );
        }
    }

    fn submit_cod_order(&mut self) {
        // The button is disabled while an order is in flight, but the guard
        // also holds on its own.
        if self.placing_order {
            return;
        }
        match build_cod_draft(&self.cart) {
            Ok(draft) => {
                self.placing_order = true;
                self.dispatch(BackendCommand::PlaceCodOrder { draft });
            }
            Err(blocked) => self.toasts.push(Toast::error(blocked.toast())),
        }
    }
}
