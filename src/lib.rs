#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::core::{DieSpinner, GameConfig, Platform, RollMachine, Scoreboard, ShakeDetector, StartGate};
use crate::motion::MotionSampler;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod game;
mod motion;
mod render;
mod report;
mod view;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shake-dice starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let platform = Platform::classify(&user_agent, dom::has_global("MSStream"));
    if !platform.is_mobile() {
        log::info!("desktop user agent, game disabled");
        view::show_desktop_notice(&document);
        return Ok(());
    }
    log::info!("platform: {:?}", platform);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let config = GameConfig::from_attrs(
        canvas.get_attribute("data-report-url"),
        canvas.get_attribute("data-texture-base"),
    );
    log::info!("reporting rolls to {}", config.report_url);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let score = Rc::new(RefCell::new(Scoreboard::default()));
    view::update_scoreboard(&document, &score.borrow());
    let reporter =
        report::HttpRollReporter::new(config.report_url.clone(), score.clone(), document.clone());
    let game = Rc::new(RefCell::new(game::Game {
        machine: RollMachine::new(rand::random(), Box::new(reporter)),
        detector: ShakeDetector::default(),
        gate: StartGate::default(),
        score,
        sampler: MotionSampler::default(),
        document: document.clone(),
    }));

    view::set_start_button_visible(&document, true);
    events::wire_start_button(&document, game.clone());
    events::wire_page_lifecycle(game.clone());

    // Textures are loaded once per mount; the die is drawn only after they resolve
    let face_layers = assets::load_face_layers(&config).await;
    let gpu = frame::init_gpu(&canvas, &face_layers).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        game,
        spinner: DieSpinner::default(),
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
