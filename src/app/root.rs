use {
    eframe::{
        Frame,
        egui::{CentralPanel, Context, Key, ScrollArea},
    },
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{
        AppState, HitAreas, PageClick, PhaseView, RunningState, SidebarState, route_page_click,
    },
    config::DF,
    domain::{NotificationState, OrdersTable, ThemeController},
    engine::KpiSimulator,
    ui::{
        ChartView, Palette, render_activity, render_dropdown, render_header, render_kpi_cards,
        render_orders, render_overlay, render_side_panel,
    },
    utils::AppInstant,
};

pub struct App {
    pub(crate) theme: ThemeController,
    pub(crate) sidebar: SidebarState,
    pub(crate) kpis: KpiSimulator,
    pub(crate) chart: ChartView,
    pub(crate) orders: OrdersTable,
    pub(crate) notifications: NotificationState,
    state: AppState,
    hits: HitAreas,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let theme = ThemeController::load(cc.storage);
        let period = Duration::from_secs(args.kpi_period_secs.max(1));

        Self {
            theme,
            sidebar: SidebarState::default(),
            kpis: KpiSimulator::new(args.seed, period),
            chart: ChartView::new(AppInstant::now()),
            orders: OrdersTable::default(),
            notifications: NotificationState::default(),
            state: AppState::default(),
            hits: HitAreas::default(),
        }
    }

    /// First frame: start the KPI timer (its first tick is immediate) and arm the chart delay.
    pub(crate) fn boot(&mut self, ctx: &Context) -> AppState {
        let now = AppInstant::now();
        self.kpis.start(now);
        self.chart = ChartView::new(now);
        log::info!(
            "Dashboard started (theme: {}, KPI period: {:?})",
            self.theme.theme(),
            self.kpis.scheduler().period()
        );
        ctx.request_repaint();
        AppState::Running(RunningState)
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context, frame: &mut Frame) {
        let now = AppInstant::now();
        self.kpis.update(now);
        if let Some(wait) = self.kpis.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }

        // Read before any panel claims space.
        let viewport_width = ctx.available_rect().width();
        let mobile = SidebarState::is_mobile(viewport_width);
        let palette = *Palette::for_theme(self.theme.theme());

        let click = ctx.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos().map(PageClick::new)
            } else {
                None
            }
        });
        self.hits = HitAreas::default();

        let bell_clicked = self.show_header(ctx, frame, &palette, mobile);
        self.show_sidebar(ctx, &palette, mobile);
        self.show_central_panel(ctx, &palette, mobile, now);
        self.show_notifications(ctx, &palette);

        if click.is_some() || bell_clicked {
            route_page_click(
                click,
                &self.hits,
                bell_clicked,
                viewport_width,
                &mut self.sidebar,
                &mut self.notifications,
            );
            ctx.request_repaint();
        }
    }

    fn show_header(
        &mut self,
        ctx: &Context,
        frame: &mut Frame,
        palette: &Palette,
        mobile: bool,
    ) -> bool {
        let theme = self.theme.theme();
        let events = render_header(ctx, theme, &self.notifications, palette, mobile);
        self.hits.mobile_toggle = events.mobile_toggle_rect;
        self.hits.bell = events.bell_rect;

        if events.theme_clicked {
            self.theme.toggle(frame.storage_mut());
            ctx.request_repaint();
        }
        if events.mobile_toggle_clicked {
            self.sidebar.toggle_active();
            if DF.log_layout {
                log::info!("Mobile sidebar active: {}", self.sidebar.active);
            }
        }
        events.bell_clicked
    }

    fn show_sidebar(&mut self, ctx: &Context, palette: &Palette, mobile: bool) {
        if mobile {
            if self.sidebar.active {
                self.hits.sidebar = Some(render_overlay(ctx, palette));
            }
            return;
        }
        let (rect, toggled) = render_side_panel(ctx, &self.sidebar, palette);
        self.hits.sidebar = Some(rect);
        if toggled {
            self.sidebar.toggle_collapsed();
            if DF.log_layout {
                log::info!("Sidebar collapsed: {}", self.sidebar.collapsed);
            }
        }
    }

    fn show_central_panel(
        &mut self,
        ctx: &Context,
        palette: &Palette,
        mobile: bool,
        now: AppInstant,
    ) {
        CentralPanel::default()
            .frame(palette.central_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_kpi_cards(ui, &self.kpis, palette, mobile);
                        ui.add_space(16.0);

                        palette.card_frame().show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            self.chart.render(ui, palette, now);
                        });
                        ui.add_space(16.0);

                        if mobile {
                            render_orders(ui, &mut self.orders, palette);
                            ui.add_space(16.0);
                            render_activity(ui, palette);
                        } else {
                            ui.columns(2, |cols| {
                                render_orders(&mut cols[0], &mut self.orders, palette);
                                render_activity(&mut cols[1], palette);
                            });
                        }
                    });
            });
    }

    fn show_notifications(&mut self, ctx: &Context, palette: &Palette) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.notifications.close();
        }
        if let Some(anchor) = self.hits.bell {
            self.hits.dropdown = render_dropdown(ctx, &self.notifications, anchor, palette);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let theme = self.theme.theme();
        ctx.set_visuals(Palette::for_theme(theme).visuals(theme));
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Booting(mut s) => s.tick(self, ctx, frame),
            AppState::Running(mut s) => s.tick(self, ctx, frame),
        };
    }

    /// Only the theme flag is persisted.
    fn persist_egui_memory(&self) -> bool {
        false
    }
}
