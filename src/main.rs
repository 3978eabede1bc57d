use quiz_coach::QuizApp;
use quiz_coach::data::load_embedded;
use quiz_coach::ui::layout::APP_TITLE;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Arrancando {APP_TITLE} v{}", env!("CARGO_PKG_VERSION"));

    let data = match load_embedded() {
        Ok(data) => data,
        Err(err) => {
            log::error!("No se pudieron cargar los datos del quiz: {err}");
            return Err(eframe::Error::AppCreation(Box::new(err)));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([820.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(QuizApp::new(data)))),
    )
}

// Versión web: se monta sobre el canvas `the_canvas_id` de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    log::info!("Arrancando {APP_TITLE} (web) v{}", env!("CARGO_PKG_VERSION"));

    let data = match load_embedded() {
        Ok(data) => data,
        Err(err) => {
            log::error!("No se pudieron cargar los datos del quiz: {err}");
            return;
        }
    };
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("No se encontró the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id no es un canvas");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(QuizApp::new(data)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar eframe: {e:?}");
        }
    });
}
