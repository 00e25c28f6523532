//! Cubelace desktop application UI.
//!
//! # Design Notes
//! - The board scales the fixed world geometry to the available space; all
//!   editing logic lives in [`Controller`] and works in world coordinates.
//! - Solving happens synchronously on the click that hits the control region.
//!   The reports are printed to stdout, logged and shown in the sidebar.
//! - Only [`Settings`] are persisted; the cube always starts solved.

use std::time::Duration;

use cubelace_core::CubeGeometry;
use cubelace_solver::Solver;
use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, ViewportCommand},
};
use egui_extras::{Size, StripBuilder};

use crate::{
    controller::{Controller, StrategyReport},
    state::Settings,
    ui::{self, sidebar::SidebarViewModel},
    version,
};

const SETTINGS_KEY: &str = "cubelace.settings";

#[derive(Debug)]
pub struct CubelaceApp {
    controller: Controller<'static>,
    solver: Solver,
    settings: Settings,
    reports: Vec<StrategyReport>,
    settings_dirty: bool,
}

impl CubelaceApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        log::info!("starting cubelace {}", version::build_version());
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, SETTINGS_KEY))
            .unwrap_or_default();
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        controller.set_strategies(settings.strategies.strategies());
        Self {
            controller,
            solver: Solver::new(),
            settings,
            reports: Vec::new(),
            settings_dirty: false,
        }
    }

    fn on_solved(&mut self, ctx: &Context, reports: Vec<StrategyReport>) {
        for report in &reports {
            println!("{report}");
            log::info!("{report}");
        }
        self.reports = reports;
        if self.settings.close_on_solve {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    fn apply_settings(&mut self, frame: &mut Frame) {
        if !self.settings_dirty {
            return;
        }
        self.controller
            .set_strategies(self.settings.strategies.strategies());
        if let Some(storage) = frame.storage_mut() {
            self.save(storage);
        }
        self.settings_dirty = false;
    }
}

impl App for CubelaceApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.settings);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut solved = None;

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.75))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        solved = ui::board::show(ui, &mut self.controller, &mut self.solver);
                    });
                    strip.cell(|ui| {
                        let vm = SidebarViewModel::new(self.controller.state(), &self.reports);
                        self.settings_dirty |= ui::sidebar::show(ui, &vm, &mut self.settings);
                    });
                });
        });

        if let Some(reports) = solved {
            self.on_solved(ctx, reports);
        }
        self.apply_settings(frame);
    }
}
