use crate::core::{FaceValue, GameError, RollReply, RollReport, RollReporter, Scoreboard};
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
fn unavailable(e: JsValue) -> GameError {
    GameError::ReportingUnavailable(format!("{:?}", e))
}

/// Posts each settled face to the reward endpoint and applies the returned
/// balance. Never retries; failures only reach the log.
pub struct HttpRollReporter {
    url: String,
    score: Rc<RefCell<Scoreboard>>,
    document: web::Document,
}

impl HttpRollReporter {
    pub fn new(url: String, score: Rc<RefCell<Scoreboard>>, document: web::Document) -> Self {
        Self {
            url,
            score,
            document,
        }
    }
}

impl RollReporter for HttpRollReporter {
    fn report(&self, face: FaceValue) {
        let url = self.url.clone();
        let score = self.score.clone();
        let document = self.document.clone();
        spawn_local(async move {
            let reply = post_roll(&url, face).await;
            let changed = score.borrow_mut().apply_reply(reply);
            if changed {
                log::info!("[report] balance now {}", score.borrow().balance());
            }
            view::update_scoreboard(&document, &score.borrow());
        });
    }
}

pub async fn post_roll(url: &str, face: FaceValue) -> Result<RollReply, GameError> {
    let body = RollReport::new(face).to_json()?;
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(url, &opts).map_err(unavailable)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(unavailable)?;

    let window = web::window()
        .ok_or_else(|| GameError::ReportingUnavailable("no window".to_string()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(unavailable)?
        .dyn_into()
        .map_err(unavailable)?;
    if !resp.ok() {
        return Err(GameError::ReportingUnavailable(format!(
            "HTTP {} from {url}",
            resp.status()
        )));
    }
    let text = JsFuture::from(resp.text().map_err(unavailable)?)
        .await
        .map_err(unavailable)?;
    let text = text
        .as_string()
        .ok_or_else(|| GameError::MalformedReply("non-text body".to_string()))?;
    RollReply::from_json(&text)
}
