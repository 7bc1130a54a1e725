use eframe::egui;
use graph_matrix_editor::{EditorConfig, GraphEditorApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::from_env()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Graph Matrix Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Graph Matrix Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(GraphEditorApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("Editor window failed: {}", e))
}
