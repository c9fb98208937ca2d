mod event;
mod loadbar;

use crate::loadbar::Loadbar;
use anyhow::anyhow;

const INITIAL_WIDTH: usize = 800;
const INITIAL_HEIGHT: usize = 480;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH as f32, INITIAL_HEIGHT as f32])
            .with_min_inner_size([INITIAL_WIDTH as f32 / 2.0, INITIAL_HEIGHT as f32 / 2.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Loadbar",
        native_options,
        Box::new(|cc| Ok(Box::new(Loadbar::new(cc)))),
    )
    .map_err(|e| anyhow!("Unable to start the window: {e}"))?;

    Ok(())
}
