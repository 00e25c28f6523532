//! Cubelace desktop application using egui/eframe.
//!
//! Paint the facelets of a scrambled cube, then click "solve and exit" to
//! print solutions for every enabled strategy.

use cubelace_app::CubelaceApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "cubelace";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 520.0))
            .with_min_inner_size((480.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Cubelace",
        options,
        Box::new(|cc| Ok(Box::new(CubelaceApp::new(cc)))),
    )
}
