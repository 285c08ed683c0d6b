//! Translating terminal input into selection actions.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use selectfy::{Command, Modifiers};

/// What the app should do in response to one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Left click on a screen row.
    Click { row: u16, modifiers: Modifiers },
    /// Run a public selection command.
    Command(Command),
    /// Terminal resized; redraw.
    Resize,
    Quit,
    Ignore,
}

/// Selection modifiers held in a crossterm modifier set.
pub fn modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

pub fn translate(event: &CrosstermEvent) -> Action {
    match event {
        CrosstermEvent::Mouse(mouse) => translate_mouse(mouse),
        CrosstermEvent::Key(key) => translate_key(key),
        CrosstermEvent::Resize(..) => Action::Resize,
        _ => Action::Ignore,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            row: mouse.row,
            modifiers: modifiers(mouse.modifiers),
        },
        _ => Action::Ignore,
    }
}

fn translate_key(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('a') if ctrl => Action::Command(Command::SelectAll),
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('q') if !ctrl => Action::Quit,
        KeyCode::Esc => Action::Command(Command::UnselectAll),
        _ => Action::Ignore,
    }
}
