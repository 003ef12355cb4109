use crate::constants::*;
use crate::core::{progress_percent, GamePhase, StageScore};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if visible {
        show(document, element_id);
    } else {
        hide(document, element_id);
    }
}

#[inline]
fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Show the screen that belongs to the current phase; `None` is the toy,
/// which only ever shows the HUD.
pub fn sync_screens(document: &web::Document, phase: Option<GamePhase>) {
    let (menu, hud, completed) = match phase {
        None => (false, true, false),
        Some(GamePhase::Menu) => (true, false, false),
        Some(GamePhase::Playing { .. }) => (false, true, false),
        Some(GamePhase::Completed) => (false, false, true),
    };
    set_visible(document, MENU_SCREEN_ID, menu);
    set_visible(document, HUD_ID, hud);
    set_visible(document, COMPLETED_SCREEN_ID, completed);
    // a fresh stage never starts with the solved banner up
    if !matches!(phase, Some(GamePhase::Playing { .. })) {
        hide(document, STAGE_SOLVED_ID);
    }
}

pub struct HudSnapshot {
    pub closeness: f64,
    pub elapsed_sec: f64,
    pub revealed: bool,
    pub stage: Option<(usize, usize)>,
}

pub fn update_hud(document: &web::Document, hud: &HudSnapshot) {
    let percent = progress_percent(hud.closeness);
    if let Some(el) = document.get_element_by_id(PROGRESS_FILL_ID) {
        _ = el.set_attribute("style", &format!("width:{}%", percent));
    }
    set_text(document, PROGRESS_TEXT_ID, &format!("{}%", percent));
    set_text(document, TIMER_ID, &format!("{:.1}s", hud.elapsed_sec));
    if let Some((stage, count)) = hud.stage {
        set_text(document, STAGE_LABEL_ID, &format!("Stage {} / {}", stage + 1, count));
    }
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        let cl = el.class_list();
        _ = if hud.revealed {
            cl.add_1(REVEALED_CLASS)
        } else {
            cl.remove_1(REVEALED_CLASS)
        };
    }
}

pub fn show_stage_solved(document: &web::Document, score: &StageScore) {
    set_text(
        document,
        STAGE_SOLVED_TEXT_ID,
        &format!(
            "Solved in {:.1}s • +{} points",
            score.elapsed_sec, score.points
        ),
    );
    show(document, STAGE_SOLVED_ID);
}

pub fn hide_stage_solved(document: &web::Document) {
    hide(document, STAGE_SOLVED_ID);
}

pub fn render_breakdown(document: &web::Document, scores: &[StageScore], total: u32) {
    if let Some(el) = document.get_element_by_id(SCORE_BREAKDOWN_ID) {
        let rows: String = scores
            .iter()
            .map(|s| {
                format!(
                    "<li><span class='stage'>{}</span><span class='time'>{:.1}s</span><span class='points'>{}</span></li>",
                    escape_html(&s.stage_id),
                    s.elapsed_sec,
                    s.points
                )
            })
            .collect();
        el.set_inner_html(&rows);
    }
    set_text(document, SCORE_TOTAL_ID, &format!("{} points", total));
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
}
