//! Plain-text screens. Every function here is a pure mapping from state to
//! text; nothing in this module changes state.

mod dialog;
mod form;
mod header;
mod home;

pub use dialog::render_dialog;
pub use form::render_form;
pub use header::*;
pub use home::render_tiles;

use crate::app::{AppState, View};

const RULE: &str = "----------------------------------------\n";

/// Renders the whole screen. The call dialog, when open, is drawn as an
/// overlay below the current view.
pub fn render(state: &AppState, header: &HeaderWidget) -> String {
    let mut out = String::new();

    match (state.view(), state.form()) {
        (View::Add | View::Edit, Some(form)) => out.push_str(&render_form(form)),
        _ => {
            out.push_str(&header.render());
            out.push_str(RULE);
            out.push_str(&render_tiles(state.contacts()));
        }
    }

    if let Some(dialog) = state.dialog() {
        out.push_str(RULE);
        out.push_str(&render_dialog(dialog));
    }

    out
}
