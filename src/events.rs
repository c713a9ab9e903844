use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl-C always quits, even while typing in the form
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The form captures plain keystrokes as text input
    if app.current_view == View::AddDomain {
        handle_form_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Direct view access
        KeyCode::Char('1') => app.open_domains(),
        KeyCode::Char('2') => app.open_monitor_tab(),
        KeyCode::Char('3') | KeyCode::Char('a') => app.open_add_form(),

        // List navigation
        KeyCode::Up | KeyCode::Char('k') if app.current_view == View::Domains => {
            app.select_prev()
        }
        KeyCode::Down | KeyCode::Char('j') if app.current_view == View::Domains => {
            app.select_next()
        }
        KeyCode::PageUp if app.current_view == View::Domains => app.select_prev_n(10),
        KeyCode::PageDown if app.current_view == View::Domains => app.select_next_n(10),
        KeyCode::Home if app.current_view == View::Domains => app.select_first(),
        KeyCode::End if app.current_view == View::Domains => app.select_last(),

        // Open the monitor for the selected domain
        KeyCode::Enter if app.current_view == View::Domains => app.open_selected_monitor(),

        // Go back (Esc and Backspace)
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Reload
        KeyCode::Char('r') => app.reload(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the add-domain form is active
fn handle_form_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit
        KeyCode::Enter => app.submit_form(),

        // Leave the form
        KeyCode::Esc => app.go_back(),

        // Backspace
        KeyCode::Backspace => app.form_pop(),

        // Type characters
        KeyCode::Char(c) => app.form_push(c),

        _ => {}
    }
}
