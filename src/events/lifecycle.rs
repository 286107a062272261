use crate::game::{attach_sampler, detach_sampler, Game};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Releases the motion subscription when the page is hidden and restores it
/// when the page comes back from the back/forward cache. Pending roll
/// resolutions are left to complete.
pub fn wire_page_lifecycle(game: Rc<RefCell<Game>>) {
    let Some(window) = web::window() else {
        return;
    };

    let game_hide = game.clone();
    let on_hide = Closure::wrap(Box::new(move || {
        detach_sampler(&game_hide);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show = Closure::wrap(Box::new(move || {
        attach_sampler(&game);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
