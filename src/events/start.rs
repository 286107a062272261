use crate::constants::START_BUTTON_ID;
use crate::core::StartAction;
use crate::dom;
use crate::game::{on_permission_granted, Game};
use crate::motion::{self, PermissionRequest};
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// "Start game": the first press asks for motion access, a later press enters the game.
pub fn wire_start_button(document: &web::Document, game: Rc<RefCell<Game>>) {
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        let action = game.borrow_mut().gate.press();
        match action {
            StartAction::RequestPermission => request_permission(&game),
            StartAction::EnterGame => {
                log::info!("game started");
                let g = game.borrow();
                view::set_start_button_visible(&g.document, false);
            }
            StartAction::Nothing => {}
        }
    });
}

fn request_permission(game: &Rc<RefCell<Game>>) {
    match motion::begin_permission_request() {
        Ok(PermissionRequest::Implicit) => on_permission_granted(game),
        Ok(PermissionRequest::Pending(promise)) => {
            let game = game.clone();
            spawn_local(async move {
                match motion::await_permission(promise).await {
                    Ok(()) => on_permission_granted(&game),
                    Err(_) => game.borrow_mut().gate.deny(),
                };
            });
        }
        Err(e) => log::error!("[motion] {e}"),
    }
}
