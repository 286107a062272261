use crate::constants::{
    BALANCE_ID, CONTAINER_ID, DESKTOP_NOTICE, NOTICE_ID, RESULT_ID, START_BUTTON_ID,
};
use crate::core::Scoreboard;
use crate::dom;
use web_sys as web;

#[inline]
fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1("hidden");
            // fallback for environments without CSS class
            _ = el.set_attribute("style", "display:none");
        } else {
            _ = cl.remove_1("hidden");
            _ = el.set_attribute("style", "");
        }
    }
}

/// Replaces the game with the static desktop message.
pub fn show_desktop_notice(document: &web::Document) {
    set_hidden(document, CONTAINER_ID, true);
    dom::set_text(document, NOTICE_ID, DESKTOP_NOTICE);
    set_hidden(document, NOTICE_ID, false);
}

#[inline]
pub fn set_start_button_visible(document: &web::Document, visible: bool) {
    set_hidden(document, START_BUTTON_ID, !visible);
}

pub fn update_scoreboard(document: &web::Document, score: &Scoreboard) {
    dom::set_text(document, BALANCE_ID, &score.balance_label());
    dom::set_text(document, RESULT_ID, &score.result_label());
}
