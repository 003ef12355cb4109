use super::InputWiring;
use crate::core::GameEvent;
use crate::constants::*;
use crate::dom;
use crate::overlay;
use crate::session::Session;
use instant::Instant;
use web_sys as web;

/// Reflect a game transition on the page.
pub fn present_game_event(document: &web::Document, session: &Session, event: &GameEvent) {
    match event {
        GameEvent::StageStarted { .. } => overlay::hide_stage_solved(document),
        GameEvent::StageSolved(score) => overlay::show_stage_solved(document, score),
        GameEvent::Completed { total } => {
            if let Session::Staged { game } = session {
                overlay::render_breakdown(document, game.scores().breakdown(), *total);
            }
        }
    }
    overlay::sync_screens(document, session.phase());
}

pub fn wire_game_buttons(w: &InputWiring) {
    let w_start = w.clone();
    dom::add_click_listener(&w.document, START_BUTTON_ID, move || {
        let mut sched = w_start.scheduler.clone();
        let event = w_start
            .session
            .borrow_mut()
            .start(Instant::now(), &mut rand::thread_rng(), &mut sched);
        if let Some(ev) = event {
            present_game_event(&w_start.document, &w_start.session.borrow(), &ev);
        }
    });

    let w_restart = w.clone();
    dom::add_click_listener(&w.document, RESTART_BUTTON_ID, move || {
        let mut sched = w_restart.scheduler.clone();
        let event = w_restart
            .session
            .borrow_mut()
            .restart(Instant::now(), &mut rand::thread_rng(), &mut sched);
        if let Some(ev) = event {
            present_game_event(&w_restart.document, &w_restart.session.borrow(), &ev);
        }
    });

    let w_next = w.clone();
    dom::add_click_listener(&w.document, NEXT_BUTTON_ID, move || {
        let mut sched = w_next.scheduler.clone();
        let event = w_next
            .session
            .borrow_mut()
            .next_stage(Instant::now(), &mut rand::thread_rng(), &mut sched);
        if let Some(ev) = event {
            present_game_event(&w_next.document, &w_next.session.borrow(), &ev);
        }
    });

    let w_menu = w.clone();
    dom::add_click_listener(&w.document, MENU_BUTTON_ID, move || {
        let mut sched = w_menu.scheduler.clone();
        w_menu.session.borrow_mut().quit_to_menu(&mut sched);
        overlay::sync_screens(&w_menu.document, w_menu.session.borrow().phase());
    });
}
