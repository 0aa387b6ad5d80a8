//! Top-level egui application: state, event intake, theme application, and
//! the frame loop. Individual pages live in `ui::views`.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::OrderReceipt;
use storefront_core::checkout::{AddressForm, FieldError, ORDER_FAILED_TOAST, ORDER_PLACED_TOAST};
use storefront_core::{Cart, Phase, ProductGrid, ReviewHistory, ShowcaseController};
use tracing::info;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{classify_catalog_failure, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::media::ProductArt;
use crate::ui::theme::{
    scaled_text_styles, theme_verdant_palette, visuals_for_theme, PersistedStorefrontSettings,
    ThemePreset, ThemeSettings, UiReadabilitySettings, SETTINGS_STORAGE_KEY,
};
use crate::ui::widgets::{
    err_label, LoadState, StatusBanner, StatusBannerSeverity, Toast, ToastSeverity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreView {
    Showcase,
    Products,
    Checkout,
    Reviews,
}

pub struct StorefrontApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    pub(crate) view: StoreView,
    pub(crate) showcase: LoadState<ShowcaseController>,
    pub(crate) grid: LoadState<ProductGrid>,
    pub(crate) reviews: LoadState<ReviewHistory>,

    pub(crate) cart: Cart,
    pub(crate) address_form: AddressForm,
    pub(crate) address_errors: Vec<FieldError>,
    pub(crate) placing_order: bool,
    pub(crate) last_receipt: Option<OrderReceipt>,
    pub(crate) focus_checkout_email: bool,

    pub(crate) art: ProductArt,
    pub(crate) status: String,
    pub(crate) status_banner: Option<StatusBanner>,
    pub(crate) toasts: Vec<Toast>,
    settings_open: bool,

    pub(crate) theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
    pub(crate) readability: UiReadabilitySettings,
    applied_readability: Option<UiReadabilitySettings>,
}

impl StorefrontApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted_settings: Option<PersistedStorefrontSettings>,
    ) -> Self {
        let (theme, readability) = persisted_settings.unwrap_or_default().into_runtime();
        let mut app = Self {
            cmd_tx,
            ui_rx,
            view: StoreView::Showcase,
            showcase: LoadState::NotRequested,
            grid: LoadState::NotRequested,
            reviews: LoadState::NotRequested,
            cart: Cart::default(),
            address_form: AddressForm::default(),
            address_errors: Vec::new(),
            placing_order: false,
            last_receipt: None,
            focus_checkout_email: false,
            art: ProductArt::default(),
            status: "Loading catalog".to_string(),
            status_banner: None,
            toasts: Vec::new(),
            settings_open: false,
            theme,
            applied_theme: None,
            readability,
            applied_readability: None,
        };
        app.request_catalog();
        app.request_reviews();
        app
    }

    pub(crate) fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    pub(crate) fn request_catalog(&mut self) {
        self.showcase = LoadState::Loading;
        self.grid = LoadState::Loading;
        self.dispatch(BackendCommand::LoadCatalog);
    }

    pub(crate) fn request_reviews(&mut self) {
        self.reviews = LoadState::Loading;
        self.dispatch(BackendCommand::LoadReviews);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::CatalogLoaded(products) => {
                    info!("storefront: ui received {} products", products.len());
                    self.grid = LoadState::Ready(ProductGrid::new(products.clone()));
                    match ShowcaseController::new(products) {
                        Ok(controller) => {
                            self.showcase = LoadState::Ready(controller);
                            self.status = "Catalog ready".to_string();
                            self.status_banner = None;
                        }
                        Err(err) => {
                            self.showcase = LoadState::Failed(err.to_string());
                            self.status_banner = Some(StatusBanner {
                                severity: StatusBannerSeverity::Error,
                                message: classify_catalog_failure(&err.to_string()),
                            });
                        }
                    }
                }
                UiEvent::CatalogFailed(err) => {
                    self.showcase = LoadState::Failed(err.message().to_string());
                    self.grid = LoadState::Failed(err.message().to_string());
                    self.status = format!("{}: load failed", err_label(err.category()));
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message: classify_catalog_failure(err.message()),
                    });
                }
                UiEvent::ReviewsLoaded(reviews) => {
                    self.reviews = LoadState::Ready(ReviewHistory::new(reviews));
                }
                UiEvent::OrderPlaced(receipt) => {
                    self.placing_order = false;
                    self.status = format!("Order {} placed", receipt.order_id.0);
                    self.cart.clear();
                    self.last_receipt = Some(receipt);
                    self.toasts.push(Toast::success(ORDER_PLACED_TOAST));
                    self.view = StoreView::Products;
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::PlaceOrder {
                        self.placing_order = false;
                        self.toasts.push(Toast::error(ORDER_FAILED_TOAST));
                    }
                    self.status = format!("{}: {}", err_label(err.category()), err.message());
                    if err.context() == UiErrorContext::BackendStartup {
                        self.status_banner = Some(StatusBanner {
                            severity: StatusBannerSeverity::Error,
                            message: err.message().to_string(),
                        });
                    }
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme)
            && self.applied_readability == Some(self.readability)
        {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = scaled_text_styles(self.readability.text_scale);

        // Make text inputs reliably clickable and visible:
        style.visuals.widgets.inactive.bg_stroke =
            egui::Stroke::new(1.0, style.visuals.widgets.noninteractive.bg_stroke.color);
        style.visuals.widgets.hovered.bg_stroke =
            egui::Stroke::new(1.0, style.visuals.widgets.hovered.bg_stroke.color);
        style.visuals.widgets.active.bg_stroke =
            egui::Stroke::new(1.2, style.visuals.selection.bg_fill.gamma_multiply(0.9));

        if self.readability.compact_density {
            style.spacing.item_spacing = egui::vec2(6.0, 4.0);
            style.spacing.button_padding = egui::vec2(8.0, 5.0);
            style.spacing.interact_size = egui::vec2(40.0, 24.0);
        } else {
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
            style.spacing.button_padding = egui::vec2(10.0, 6.0);
            style.spacing.interact_size = egui::vec2(40.0, 30.0);
        }
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
        self.applied_readability = Some(self.readability);
    }

    fn show_top_nav(&mut self, ctx: &egui::Context) {
        let palette = theme_verdant_palette(self.theme);
        let nav_fill = palette
            .as_ref()
            .map(|p| p.card_background)
            .unwrap_or(ctx.style().visuals.panel_fill);
        let heading = palette
            .as_ref()
            .map(|p| p.heading_text)
            .unwrap_or_else(|| ctx.style().visuals.strong_text_color());

        egui::TopBottomPanel::top("store_nav")
            .frame(
                egui::Frame::NONE
                    .fill(nav_fill)
                    .inner_margin(egui::Margin::symmetric(14, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Verdant Harvest")
                            .strong()
                            .size(19.0 * self.readability.text_scale)
                            .color(heading),
                    );
                    ui.add_space(18.0);
                    for (label, target) in [
                        ("Home", StoreView::Showcase),
                        ("Products", StoreView::Products),
                        ("Reviews", StoreView::Reviews),
                    ] {
                        if ui.selectable_label(self.view == target, label).clicked() {
                            self.view = target;
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Settings").clicked() {
                            self.settings_open = !self.settings_open;
                        }
                        let cart_label = if self.cart.is_empty() {
                            "Cart".to_string()
                        } else {
                            format!("Cart ({})", self.cart.total_quantity())
                        };
                        if ui
                            .selectable_label(self.view == StoreView::Checkout, cart_label)
                            .clicked()
                        {
                            self.view = StoreView::Checkout;
                            self.focus_checkout_email = true;
                        }
                        ui.label(
                            egui::RichText::new(&self.status)
                                .small()
                                .color(ui.visuals().weak_text_color()),
                        );
                    });
                });
            });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                            if ui.button("Reload").clicked() {
                                self.status_banner = None;
                                self.request_catalog();
                            }
                        });
                    });
                });
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let window_frame = egui::Frame::NONE
            .fill(ctx.style().visuals.window_fill)
            .stroke(egui::Stroke::new(
                1.0,
                ctx.style().visuals.window_stroke().color,
            ))
            .corner_radius(self.popup_corner_radius())
            .inner_margin(egui::Margin::symmetric(12, 10));

        let mut settings_open = self.settings_open;
        let mut close_requested = false;

        egui::Window::new("settings_window")
            .title_bar(false)
            .frame(window_frame)
            .open(&mut settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                self.apply_popup_menu_style(ui);
                ui.horizontal(|ui| {
                    self.show_popup_section_title(ui, "Settings");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("x").clicked() {
                            close_requested = true;
                        }
                    });
                });
                ui.separator();
                self.show_popup_section_title(ui, "Theme");
                ui.label("Theme preset");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::ALL {
                            ui.selectable_value(&mut self.theme.preset, preset, preset.label());
                        }
                    });

                ui.separator();
                self.show_popup_section_title(ui, "Colors");
                ui.label("Accent color");
                ui.color_edit_button_srgba(&mut self.theme.accent_color);
                ui.small("Used for selected controls, hover emphasis, and primary actions.");
                ui.add(
                    egui::Slider::new(&mut self.theme.panel_rounding, 0..=16)
                        .text("Panel rounding"),
                );
                ui.checkbox(
                    &mut self.theme.card_shading,
                    "Use shaded backgrounds for product cards",
                );
                ui.separator();
                self.show_popup_section_title(ui, "Readability");
                ui.add(
                    egui::Slider::new(&mut self.readability.text_scale, 0.8..=1.4)
                        .text("Text scale")
                        .step_by(0.05),
                );
                ui.checkbox(&mut self.readability.compact_density, "Compact UI density");
                ui.checkbox(
                    &mut self.readability.show_review_dates,
                    "Show review dates",
                );

                if ui.button("Reset all settings to defaults").clicked() {
                    self.theme = ThemeSettings::verdant_default();
                    self.readability = UiReadabilitySettings::default();
                }
            });

        self.settings_open = settings_open && !close_requested;
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.toasts.retain(|toast| toast.expires_at > now);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("storefront_toasts"))
            .anchor(egui::Align2::CENTER_TOP, [0.0, 14.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let (fill, stroke) = match toast.severity {
                        ToastSeverity::Success => (
                            egui::Color32::from_rgb(47, 92, 59),
                            egui::Stroke::new(1.0, egui::Color32::from_rgb(86, 150, 101)),
                        ),
                        ToastSeverity::Error => (
                            egui::Color32::from_rgb(111, 53, 53),
                            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                        ),
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .stroke(stroke)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }

    pub(crate) fn popup_corner_radius(&self) -> egui::CornerRadius {
        egui::CornerRadius::same(self.theme.panel_rounding)
    }

    fn apply_popup_menu_style(&self, ui: &mut egui::Ui) {
        let s = ui.style_mut();
        let radius = self.popup_corner_radius();
        s.spacing.button_padding = egui::vec2(8.0, 4.0);
        s.spacing.item_spacing = egui::vec2(6.0, 4.0);
        s.visuals.widgets.inactive.corner_radius = radius;
        s.visuals.widgets.hovered.corner_radius = radius;
        s.visuals.widgets.active.corner_radius = radius;
        s.visuals.widgets.open.corner_radius = radius;
        s.visuals.widgets.noninteractive.corner_radius = radius;
    }

    fn show_popup_section_title(&self, ui: &mut egui::Ui, title: &str) {
        ui.label(
            egui::RichText::new(title)
                .strong()
                .size(13.0 * self.readability.text_scale),
        );
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        if let LoadState::Ready(showcase) = &mut self.showcase {
            showcase.poll(Instant::now());
        }

        self.show_top_nav(ctx);
        self.show_settings_window(ctx);

        let page_fill = theme_verdant_palette(self.theme)
            .map(|p| p.page_background)
            .unwrap_or(ctx.style().visuals.panel_fill);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(page_fill)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                self.show_status_banner(ui);
                match self.view {
                    StoreView::Showcase => self.show_showcase_view(ui),
                    StoreView::Products => self.show_products_view(ui),
                    StoreView::Checkout => self.show_checkout_view(ui),
                    StoreView::Reviews => self.show_reviews_view(ui),
                }
            });

        self.show_toasts(ctx);

        let animating =
            matches!(&self.showcase, LoadState::Ready(s) if s.phase() == Phase::Transitioning);
        let loading = self.showcase.is_loading() || self.reviews.is_loading();
        if animating || loading || !self.toasts.is_empty() || self.placing_order {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedStorefrontSettings::from_runtime(self.theme, self.readability);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
