use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which part of the app currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Help,
    TitlePrompt,
    Summarize,
    List,
    ArmedList,
    Viewing,
    Editing,
}

#[derive(Debug, Clone)]
pub enum AppAction {
    Quit,
    SwitchTab,
    MoveUp,
    MoveDown,
    Reload,
    OpenNote,
    CloseDetail,
    OpenInBrowser,
    // Edit actions
    StartEdit,
    CancelEdit,
    EditChar(char),
    EditBackspace,
    EditNewline,
    EditSwitchField,
    SaveEdit,
    // Delete actions
    ArmDelete,
    ConfirmDelete,
    CancelDelete,
    // Summarize screen actions
    UrlInputChar(char),
    UrlInputBackspace,
    Summarize,
    SaveSummary,
    // Title prompt actions
    TitleInputChar(char),
    TitleInputBackspace,
    TitleInputConfirm,
    TitleInputCancel,
    ShowHelp,
    HideHelp,
}

pub fn handle_key_event(key: KeyEvent, mode: InputMode) -> Option<AppAction> {
    // Ctrl+C quits from anywhere, including text inputs
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppAction::Quit);
    }

    match mode {
        // Any key closes the help overlay
        InputMode::Help => Some(AppAction::HideHelp),

        InputMode::TitlePrompt => match key.code {
            KeyCode::Enter => Some(AppAction::TitleInputConfirm),
            KeyCode::Esc => Some(AppAction::TitleInputCancel),
            KeyCode::Backspace => Some(AppAction::TitleInputBackspace),
            KeyCode::Char(c) => Some(AppAction::TitleInputChar(c)),
            _ => None,
        },

        InputMode::Summarize => match (key.code, key.modifiers) {
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(AppAction::SaveSummary),
            (KeyCode::Tab, _) => Some(AppAction::SwitchTab),
            (KeyCode::Enter, _) => Some(AppAction::Summarize),
            (KeyCode::Backspace, _) => Some(AppAction::UrlInputBackspace),
            (KeyCode::F(1), _) => Some(AppAction::ShowHelp),
            (KeyCode::Char(c), _) => Some(AppAction::UrlInputChar(c)),
            _ => None,
        },

        InputMode::List => match key.code {
            KeyCode::Char('q') => Some(AppAction::Quit),
            KeyCode::Tab => Some(AppAction::SwitchTab),
            KeyCode::Char('j') | KeyCode::Down => Some(AppAction::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(AppAction::MoveUp),
            KeyCode::Enter => Some(AppAction::OpenNote),
            KeyCode::Char('d') => Some(AppAction::ArmDelete),
            KeyCode::Char('o') => Some(AppAction::OpenInBrowser),
            KeyCode::Char('r') => Some(AppAction::Reload),
            KeyCode::Char('?') | KeyCode::F(1) => Some(AppAction::ShowHelp),
            _ => None,
        },

        InputMode::ArmedList => match key.code {
            KeyCode::Char('y') => Some(AppAction::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(AppAction::CancelDelete),
            KeyCode::Char('d') => Some(AppAction::ArmDelete),
            KeyCode::Char('j') | KeyCode::Down => Some(AppAction::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(AppAction::MoveUp),
            KeyCode::Enter => Some(AppAction::OpenNote),
            KeyCode::Tab => Some(AppAction::SwitchTab),
            KeyCode::Char('q') => Some(AppAction::Quit),
            // Any other interaction stands down the pending delete
            _ => Some(AppAction::CancelDelete),
        },

        InputMode::Viewing => match key.code {
            KeyCode::Char('e') => Some(AppAction::StartEdit),
            KeyCode::Char('o') => Some(AppAction::OpenInBrowser),
            KeyCode::Esc => Some(AppAction::CloseDetail),
            KeyCode::Char('q') => Some(AppAction::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => Some(AppAction::ShowHelp),
            _ => None,
        },

        InputMode::Editing => match (key.code, key.modifiers) {
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(AppAction::SaveEdit),
            (KeyCode::Esc, _) => Some(AppAction::CancelEdit),
            (KeyCode::Tab, _) => Some(AppAction::EditSwitchField),
            (KeyCode::Enter, _) => Some(AppAction::EditNewline),
            (KeyCode::Backspace, _) => Some(AppAction::EditBackspace),
            (KeyCode::Char(c), _) => Some(AppAction::EditChar(c)),
            _ => None,
        },
    }
}
