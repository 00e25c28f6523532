use cubelace_solver::SolveStrategy;
use eframe::egui::{CollapsingHeader, RichText, ScrollArea, Ui, widgets};

use crate::{
    controller::{ControllerState, StrategyReport},
    state::{Settings, StrategySet},
};

#[derive(Debug, Clone)]
pub struct SidebarViewModel<'a> {
    state: ControllerState,
    reports: &'a [StrategyReport],
}

impl<'a> SidebarViewModel<'a> {
    pub fn new(state: ControllerState, reports: &'a [StrategyReport]) -> Self {
        Self { state, reports }
    }
}

/// Shows the status, the solutions and the settings.
///
/// Returns `true` if the settings were changed.
pub fn show(ui: &mut Ui, vm: &SidebarViewModel, settings: &mut Settings) -> bool {
    let mut changed = false;
    ui.vertical(|ui| {
        ui.group(|ui| {
            let status = match vm.state {
                ControllerState::Editing => RichText::new("Click a facelet to change its color"),
                ControllerState::Terminated => {
                    RichText::new("Solved").color(ui.visuals().warn_fg_color)
                }
            };
            ui.label(status.size(20.0));
        });

        ScrollArea::vertical().show(ui, |ui| {
            if !vm.reports.is_empty() {
                ui.heading("Solutions");
                ui.indent("sidebar_solutions", |ui| {
                    for report in vm.reports {
                        show_report(ui, report);
                    }
                });
            }

            ui.heading("Settings");
            ui.indent("sidebar_settings", |ui| {
                let Settings {
                    strategies,
                    close_on_solve,
                } = settings;
                CollapsingHeader::new("Strategies")
                    .default_open(true)
                    .show(ui, |ui| {
                        for strategy in SolveStrategy::ALL {
                            let flag = StrategySet::of(strategy);
                            let mut enabled = strategies.contains(flag);
                            // At least one strategy stays selected.
                            let locked = strategies.is_only(strategy);
                            let response = ui
                                .add_enabled_ui(!locked, |ui| {
                                    ui.checkbox(&mut enabled, strategy.name())
                                })
                                .inner;
                            if response.changed() {
                                strategies.set(flag, enabled);
                                changed = true;
                            }
                        }
                    });
                changed |= ui
                    .checkbox(close_on_solve, "Close the window after solving")
                    .changed();

                CollapsingHeader::new("Appearance")
                    .default_open(true)
                    .show(ui, |ui| {
                        widgets::global_theme_preference_buttons(ui);
                    });
            });
        });
    });
    changed
}

fn show_report(ui: &mut Ui, report: &StrategyReport) {
    ui.label(RichText::new(report.strategy.name()).strong());
    match &report.result {
        Ok(solution) if solution.is_empty() => {
            ui.label("Already solved");
        }
        Ok(solution) => {
            ui.label(format!("{} moves", solution.len()));
            ui.label(RichText::new(solution.to_string()).monospace());
        }
        Err(e) => {
            ui.label(RichText::new(e.to_string()).color(ui.visuals().error_fg_color));
        }
    }
    ui.add_space(4.0);
}
