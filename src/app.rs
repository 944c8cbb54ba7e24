use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use url::Url;

use crate::ai::SummarizerClient;
use crate::config::{Config, Theme};
use crate::db::Repository;
use crate::error::Result;
use crate::models::{FetchStatus, SummaryNote};
use crate::tui::{AppAction, InputMode};

/// A confirm keypress landing this soon after arming is treated as key
/// auto-repeat, not intent.
const CONFIRM_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Summarize,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Body,
}

/// Which note (if any) is open, and whether it is being edited.
///
/// `Viewing` carries the displayed values; `Editing` additionally carries the
/// draft fields, seeded from the displayed values when editing starts, so a
/// cancel can fall back to the pre-edit state without touching storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Idle,
    Viewing {
        id: i64,
        title: String,
        body: String,
    },
    Editing {
        id: i64,
        title: String,
        body: String,
        draft_title: String,
        draft_body: String,
        field: EditField,
    },
}

/// A fetched summary that has not been saved yet.
#[derive(Debug, Clone)]
pub struct PendingSummary {
    pub url: String,
    pub body: String,
}

// Message for a completed summarization request
pub struct SummarizeResult {
    pub url: String,
    pub result: std::result::Result<String, String>,
}

pub struct App {
    // Data
    pub notes: Vec<SummaryNote>,

    // UI state
    pub tab: Tab,
    pub selected_index: usize,
    pub detail: DetailState,
    pub armed_delete: Option<i64>,
    armed_at: Option<Instant>,
    pub show_help: bool,
    pub status: Option<String>,
    pub validation_error: Option<String>,

    // Summarize screen state
    pub url_input: String,
    pub fetch_status: FetchStatus,
    pub fetch_error: Option<String>,
    pub pending_summary: Option<PendingSummary>,
    pub title_input: String,
    pub title_prompt_active: bool,
    pending_request_url: Option<String>,

    // Async state
    summarize_rx: mpsc::Receiver<SummarizeResult>,
    summarize_tx: mpsc::Sender<SummarizeResult>,
    reload_rx: mpsc::Receiver<Vec<SummaryNote>>,
    reload_tx: mpsc::Sender<Vec<SummaryNote>>,

    // Services
    pub repository: Repository,
    summarizer: Option<Arc<SummarizerClient>>,
    pub theme: Theme,
}

impl App {
    pub async fn new(config: &Config) -> Result<Self> {
        let repository = Repository::open(&config.db_path).await?;

        let summarizer = config.summarizer_url.as_ref().map(|endpoint| {
            Arc::new(SummarizerClient::new(
                endpoint.clone(),
                config.request_timeout_secs,
            ))
        });

        let mut app = Self::with_services(repository, summarizer, config.theme.clone());
        app.reload_notes().await;
        Ok(app)
    }

    fn with_services(
        repository: Repository,
        summarizer: Option<Arc<SummarizerClient>>,
        theme: Theme,
    ) -> Self {
        let (summarize_tx, summarize_rx) = mpsc::channel(1);
        let (reload_tx, reload_rx) = mpsc::channel(1);

        Self {
            notes: Vec::new(),
            tab: Tab::Summarize,
            selected_index: 0,
            detail: DetailState::Idle,
            armed_delete: None,
            armed_at: None,
            show_help: false,
            status: None,
            validation_error: None,
            url_input: String::new(),
            fetch_status: FetchStatus::default(),
            fetch_error: None,
            pending_summary: None,
            title_input: String::new(),
            title_prompt_active: false,
            pending_request_url: None,
            summarize_rx,
            summarize_tx,
            reload_rx,
            reload_tx,
            repository,
            summarizer,
            theme,
        }
    }

    pub fn selected_note(&self) -> Option<&SummaryNote> {
        self.notes.get(self.selected_index)
    }

    pub fn input_mode(&self) -> InputMode {
        if self.show_help {
            return InputMode::Help;
        }
        if self.title_prompt_active {
            return InputMode::TitlePrompt;
        }
        match self.detail {
            DetailState::Editing { .. } => InputMode::Editing,
            DetailState::Viewing { .. } => InputMode::Viewing,
            DetailState::Idle => match self.tab {
                Tab::Summarize => InputMode::Summarize,
                Tab::Notes if self.armed_delete.is_some() => InputMode::ArmedList,
                Tab::Notes => InputMode::List,
            },
        }
    }

    /// Replace the cached list with a fresh read. A failed read degrades to
    /// an empty list so the view shows an empty state instead of crashing.
    pub async fn reload_notes(&mut self) {
        match self.repository.get_all_summaries().await {
            Ok(notes) => self.notes = notes,
            Err(e) => {
                tracing::error!("failed to load summaries: {}", e);
                self.notes = Vec::new();
            }
        }
        self.clamp_selection();
    }

    /// The list screen regained focus. The cache may have gone stale behind
    /// a detail view, so it is reloaded unconditionally.
    pub async fn on_notes_visible(&mut self) {
        self.reload_notes().await;
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.notes.len() {
            self.selected_index = self.notes.len().saturating_sub(1);
        }
    }

    pub async fn handle_action(&mut self, action: AppAction) -> Result<bool> {
        self.status = None;

        match action {
            AppAction::Quit => return Ok(true),

            AppAction::SwitchTab => {
                self.disarm_delete();
                self.tab = match self.tab {
                    Tab::Summarize => Tab::Notes,
                    Tab::Notes => Tab::Summarize,
                };
                if self.tab == Tab::Notes {
                    self.on_notes_visible().await;
                }
            }

            AppAction::MoveUp => {
                self.disarm_delete();
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
            }

            AppAction::MoveDown => {
                self.disarm_delete();
                if !self.notes.is_empty() && self.selected_index < self.notes.len() - 1 {
                    self.selected_index += 1;
                }
            }

            AppAction::Reload => {
                self.on_notes_visible().await;
            }

            AppAction::OpenNote => {
                // Dismissing an armed delete takes priority over opening
                if self.armed_delete.is_some() {
                    self.disarm_delete();
                } else if let Some(note) = self.selected_note() {
                    let id = note.id;
                    let title = note.display_title().to_string();
                    let body = note.body.clone();
                    self.detail = DetailState::Viewing { id, title, body };
                }
            }

            AppAction::CloseDetail => {
                self.detail = DetailState::Idle;
                self.validation_error = None;
                self.on_notes_visible().await;
            }

            AppAction::StartEdit => self.start_edit(),
            AppAction::CancelEdit => self.cancel_edit(),
            AppAction::EditChar(c) => self.edit_char(c),
            AppAction::EditBackspace => self.edit_backspace(),
            AppAction::EditNewline => self.edit_newline(),
            AppAction::EditSwitchField => self.edit_switch_field(),
            AppAction::SaveEdit => self.save_edit().await,

            AppAction::ArmDelete => {
                if let Some(note) = self.selected_note() {
                    let id = note.id;
                    self.arm_delete(id);
                }
            }
            AppAction::ConfirmDelete => self.confirm_delete().await,
            AppAction::CancelDelete => self.disarm_delete(),

            AppAction::OpenInBrowser => {
                if let Some(url) = self.open_note_url() {
                    let _ = open::that(&url);
                }
            }

            AppAction::UrlInputChar(c) => {
                self.url_input.push(c);
            }
            AppAction::UrlInputBackspace => {
                self.url_input.pop();
            }
            AppAction::Summarize => self.request_summary(),

            AppAction::SaveSummary => {
                if self.fetch_status == FetchStatus::Ready && self.pending_summary.is_some() {
                    self.title_prompt_active = true;
                    self.title_input.clear();
                    self.validation_error = None;
                }
            }
            AppAction::TitleInputChar(c) => {
                self.title_input.push(c);
            }
            AppAction::TitleInputBackspace => {
                self.title_input.pop();
            }
            AppAction::TitleInputConfirm => self.save_summary().await,
            AppAction::TitleInputCancel => {
                self.title_prompt_active = false;
                self.title_input.clear();
                self.validation_error = None;
            }

            AppAction::ShowHelp => {
                self.show_help = true;
            }
            AppAction::HideHelp => {
                self.show_help = false;
            }
        }

        Ok(false)
    }

    fn open_note_url(&self) -> Option<String> {
        let id = match &self.detail {
            DetailState::Viewing { id, .. } | DetailState::Editing { id, .. } => *id,
            DetailState::Idle => return self.selected_note().map(|n| n.url.clone()),
        };
        self.notes.iter().find(|n| n.id == id).map(|n| n.url.clone())
    }

    fn start_edit(&mut self) {
        let DetailState::Viewing { id, title, body } = &self.detail else {
            return;
        };
        let id = *id;
        let title = title.clone();
        let body = body.clone();

        self.detail = DetailState::Editing {
            id,
            title: title.clone(),
            body: body.clone(),
            draft_title: title,
            draft_body: body,
            field: EditField::Title,
        };
        self.validation_error = None;
    }

    fn cancel_edit(&mut self) {
        let DetailState::Editing { id, title, body, .. } = &self.detail else {
            return;
        };
        let id = *id;
        let title = title.clone();
        let body = body.clone();

        self.detail = DetailState::Viewing { id, title, body };
        self.validation_error = None;
    }

    fn edit_char(&mut self, c: char) {
        if let DetailState::Editing {
            draft_title,
            draft_body,
            field,
            ..
        } = &mut self.detail
        {
            match field {
                EditField::Title => draft_title.push(c),
                EditField::Body => draft_body.push(c),
            }
        }
    }

    fn edit_backspace(&mut self) {
        if let DetailState::Editing {
            draft_title,
            draft_body,
            field,
            ..
        } = &mut self.detail
        {
            match field {
                EditField::Title => draft_title.pop(),
                EditField::Body => draft_body.pop(),
            };
        }
    }

    fn edit_newline(&mut self) {
        if let DetailState::Editing {
            draft_body, field, ..
        } = &mut self.detail
        {
            match field {
                // Enter on the single-line title moves focus to the body
                EditField::Title => *field = EditField::Body,
                EditField::Body => draft_body.push('\n'),
            }
        }
    }

    fn edit_switch_field(&mut self) {
        if let DetailState::Editing { field, .. } = &mut self.detail {
            *field = match field {
                EditField::Title => EditField::Body,
                EditField::Body => EditField::Title,
            };
        }
    }

    /// Commit the draft fields. Both must be non-empty after trimming or the
    /// save is refused and the machine stays in `Editing`.
    async fn save_edit(&mut self) {
        let DetailState::Editing {
            id,
            draft_title,
            draft_body,
            ..
        } = &self.detail
        else {
            return;
        };
        let id = *id;
        let title = draft_title.trim().to_string();
        let body = draft_body.trim().to_string();

        if title.is_empty() || body.is_empty() {
            self.validation_error = Some("Title and body must not be empty".to_string());
            return;
        }

        match self
            .repository
            .update_summary(id, title.clone(), body.clone())
            .await
        {
            Ok(()) => {
                // The write is committed; show the new values right away and
                // let the list catch up in the background.
                self.detail = DetailState::Viewing { id, title, body };
                self.validation_error = None;
                self.status = Some("Saved".to_string());
                self.spawn_reload();
            }
            Err(e) => {
                tracing::error!("failed to save note {}: {}", id, e);
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    /// Refresh the list cache without blocking the detail view. The fresh
    /// list arrives over the reload channel and is applied by the render
    /// loop.
    fn spawn_reload(&self) {
        let repository = self.repository.clone();
        let tx = self.reload_tx.clone();
        tokio::spawn(async move {
            match repository.get_all_summaries().await {
                Ok(notes) => {
                    let _ = tx.send(notes).await;
                }
                Err(e) => tracing::error!("background reload failed: {}", e),
            }
        });
    }

    /// Apply a background reload if one has completed (non-blocking)
    pub fn poll_reload_result(&mut self) {
        if let Ok(notes) = self.reload_rx.try_recv() {
            self.notes = notes;
            self.clamp_selection();
        }
    }

    /// Arm a note for deletion. There is a single armed slot: arming a
    /// second note replaces the first.
    fn arm_delete(&mut self, id: i64) {
        self.armed_delete = Some(id);
        self.armed_at = Some(Instant::now());
    }

    fn disarm_delete(&mut self) {
        self.armed_delete = None;
        self.armed_at = None;
    }

    async fn confirm_delete(&mut self) {
        let Some(id) = self.armed_delete else {
            return;
        };
        if self
            .armed_at
            .is_some_and(|armed| armed.elapsed() < CONFIRM_DEBOUNCE)
        {
            return;
        }

        match self.repository.delete_summary(id).await {
            Ok(()) => {
                self.reload_notes().await;
            }
            Err(e) => {
                tracing::error!("failed to delete note {}: {}", id, e);
                self.status = Some(format!("Delete failed: {}", e));
            }
        }
        self.disarm_delete();
    }

    fn request_summary(&mut self) {
        let input = self.url_input.trim().to_string();
        if input.is_empty() {
            self.status = Some("Enter a video URL first".to_string());
            return;
        }
        if Url::parse(&input).is_err() {
            self.status = Some("That doesn't look like a valid URL".to_string());
            return;
        }
        let Some(summarizer) = &self.summarizer else {
            self.status = Some("No summarizer endpoint configured".to_string());
            return;
        };
        if self.fetch_status == FetchStatus::Requesting {
            return;
        }

        self.fetch_status = FetchStatus::Requesting;
        self.fetch_error = None;
        self.pending_summary = None;
        self.pending_request_url = Some(input.clone());

        // Run the request off the interaction path; the result comes back
        // through the channel and is applied by the render loop.
        let summarizer = Arc::clone(summarizer);
        let tx = self.summarize_tx.clone();
        tokio::spawn(async move {
            let result = summarizer.summarize(&input).await.map_err(|e| e.to_string());
            let _ = tx.send(SummarizeResult { url: input, result }).await;
        });
    }

    /// Apply a completed summarization request if one has finished
    /// (non-blocking)
    pub fn poll_summarize_result(&mut self) {
        if let Ok(result) = self.summarize_rx.try_recv() {
            // Only apply the result still being waited for
            if self.pending_request_url.as_deref() != Some(result.url.as_str()) {
                return;
            }
            self.pending_request_url = None;

            match result.result {
                Ok(body) => {
                    self.pending_summary = Some(PendingSummary {
                        url: result.url,
                        body,
                    });
                    self.fetch_status = FetchStatus::Ready;
                }
                Err(e) => {
                    tracing::error!("summarization failed: {}", e);
                    self.fetch_error = Some(e);
                    self.fetch_status = FetchStatus::Failed;
                }
            }
        }
    }

    /// Persist the fetched summary under the title entered in the prompt.
    async fn save_summary(&mut self) {
        let title = self.title_input.trim().to_string();
        if title.is_empty() {
            self.validation_error = Some("Title must not be empty".to_string());
            return;
        }
        let Some(pending) = self.pending_summary.clone() else {
            self.title_prompt_active = false;
            return;
        };

        match self
            .repository
            .insert_summary(pending.url, Some(title), pending.body)
            .await
        {
            Ok(_) => {
                self.title_prompt_active = false;
                self.title_input.clear();
                self.validation_error = None;
                self.pending_summary = None;
                self.fetch_status = FetchStatus::Idle;
                self.url_input.clear();
                self.status = Some("Summary saved".to_string());
            }
            Err(e) => {
                // The fetched summary is kept so the save can be retried
                tracing::error!("failed to save summary: {}", e);
                self.title_prompt_active = false;
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_app() -> App {
        let repository = Repository::open_in_memory().await.unwrap();
        let mut app = App::with_services(repository, None, Theme::default());
        app.tab = Tab::Notes;
        app
    }

    async fn seed(app: &mut App, url: &str, title: &str, body: &str) -> i64 {
        let id = app
            .repository
            .insert_summary(url.to_string(), Some(title.to_string()), body.to_string())
            .await
            .unwrap();
        app.reload_notes().await;
        id
    }

    fn backdate_arm(app: &mut App) {
        app.armed_at = Some(Instant::now() - Duration::from_millis(500));
    }

    #[tokio::test]
    async fn opening_a_note_seeds_viewed_values() {
        let mut app = test_app().await;
        let id = seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.handle_action(AppAction::OpenNote).await.unwrap();
        assert_eq!(
            app.detail,
            DetailState::Viewing {
                id,
                title: "T1".to_string(),
                body: "Body1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_title_falls_back_to_default_label() {
        let mut app = test_app().await;
        app.repository
            .insert_summary("https://x/1".to_string(), None, "Body1".to_string())
            .await
            .unwrap();
        app.reload_notes().await;

        app.handle_action(AppAction::OpenNote).await.unwrap();
        let DetailState::Viewing { title, .. } = &app.detail else {
            panic!("expected viewing state");
        };
        assert_eq!(title, "Untitled summary");
    }

    #[tokio::test]
    async fn editing_seeds_drafts_from_viewed_values() {
        let mut app = test_app().await;
        seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.handle_action(AppAction::OpenNote).await.unwrap();
        app.handle_action(AppAction::StartEdit).await.unwrap();

        let DetailState::Editing {
            draft_title,
            draft_body,
            ..
        } = &app.detail
        else {
            panic!("expected editing state");
        };
        assert_eq!(draft_title, "T1");
        assert_eq!(draft_body, "Body1");
    }

    #[tokio::test]
    async fn blank_drafts_refuse_to_save() {
        let mut app = test_app().await;
        let id = seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.detail = DetailState::Editing {
            id,
            title: "T1".to_string(),
            body: "Body1".to_string(),
            draft_title: "   ".to_string(),
            draft_body: "Body1".to_string(),
            field: EditField::Title,
        };
        app.handle_action(AppAction::SaveEdit).await.unwrap();

        assert!(matches!(app.detail, DetailState::Editing { .. }));
        assert!(app.validation_error.is_some());

        let notes = app.repository.get_all_summaries().await.unwrap();
        assert_eq!(notes[0].title.as_deref(), Some("T1"));
        assert_eq!(notes[0].body, "Body1");
    }

    #[tokio::test]
    async fn save_commits_trimmed_drafts_and_refreshes_in_background() {
        let mut app = test_app().await;
        let id = seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.detail = DetailState::Editing {
            id,
            title: "T1".to_string(),
            body: "Body1".to_string(),
            draft_title: "  T1-edited  ".to_string(),
            draft_body: "Body1-edited".to_string(),
            field: EditField::Body,
        };
        app.handle_action(AppAction::SaveEdit).await.unwrap();

        // Detail reflects the save without waiting for a reload
        assert_eq!(
            app.detail,
            DetailState::Viewing {
                id,
                title: "T1-edited".to_string(),
                body: "Body1-edited".to_string(),
            }
        );

        let notes = app.repository.get_all_summaries().await.unwrap();
        assert_eq!(notes[0].title.as_deref(), Some("T1-edited"));
        assert_eq!(notes[0].url, "https://x/1");

        // The background refresh delivers the fresh list over the channel
        let refreshed = app.reload_rx.recv().await.unwrap();
        assert_eq!(refreshed[0].title.as_deref(), Some("T1-edited"));
    }

    #[tokio::test]
    async fn cancel_edit_restores_pre_edit_values() {
        let mut app = test_app().await;
        seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.handle_action(AppAction::OpenNote).await.unwrap();
        app.handle_action(AppAction::StartEdit).await.unwrap();
        app.handle_action(AppAction::EditChar('X')).await.unwrap();
        app.handle_action(AppAction::CancelEdit).await.unwrap();

        let DetailState::Viewing { title, body, .. } = &app.detail else {
            panic!("expected viewing state");
        };
        assert_eq!(title, "T1");
        assert_eq!(body, "Body1");
    }

    #[tokio::test]
    async fn arming_a_second_note_replaces_the_first() {
        let mut app = test_app().await;
        let first = seed(&mut app, "https://x/1", "A", "a").await;
        let second = seed(&mut app, "https://x/2", "B", "b").await;

        app.arm_delete(first);
        assert_eq!(app.armed_delete, Some(first));
        app.arm_delete(second);
        assert_eq!(app.armed_delete, Some(second));
    }

    #[tokio::test]
    async fn confirm_right_after_arming_is_ignored() {
        let mut app = test_app().await;
        seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.handle_action(AppAction::ArmDelete).await.unwrap();
        app.handle_action(AppAction::ConfirmDelete).await.unwrap();

        assert!(app.armed_delete.is_some());
        assert_eq!(app.notes.len(), 1);
    }

    #[tokio::test]
    async fn confirm_deletes_and_reloads() {
        let mut app = test_app().await;
        seed(&mut app, "https://x/1", "T1", "Body1").await;
        let kept = seed(&mut app, "https://x/2", "T2", "Body2").await;

        app.selected_index = 1;
        app.handle_action(AppAction::ArmDelete).await.unwrap();
        backdate_arm(&mut app);
        app.handle_action(AppAction::ConfirmDelete).await.unwrap();

        assert_eq!(app.armed_delete, None);
        assert_eq!(app.notes.len(), 1);
        assert_eq!(app.notes[0].id, kept);
        assert!(app.selected_index < app.notes.len());
    }

    #[tokio::test]
    async fn opening_while_armed_dismisses_instead() {
        let mut app = test_app().await;
        seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.handle_action(AppAction::ArmDelete).await.unwrap();
        app.handle_action(AppAction::OpenNote).await.unwrap();

        assert_eq!(app.armed_delete, None);
        assert_eq!(app.detail, DetailState::Idle);
    }

    #[tokio::test]
    async fn moving_the_cursor_disarms() {
        let mut app = test_app().await;
        seed(&mut app, "https://x/1", "T1", "Body1").await;
        seed(&mut app, "https://x/2", "T2", "Body2").await;

        app.handle_action(AppAction::ArmDelete).await.unwrap();
        app.handle_action(AppAction::MoveDown).await.unwrap();

        assert_eq!(app.armed_delete, None);
    }

    #[tokio::test]
    async fn closing_the_detail_reloads_the_list() {
        let mut app = test_app().await;
        seed(&mut app, "https://x/1", "T1", "Body1").await;

        app.handle_action(AppAction::OpenNote).await.unwrap();

        // A second note appears while the detail view is covering the list
        app.repository
            .insert_summary("https://x/2".to_string(), Some("T2".to_string()), "Body2".to_string())
            .await
            .unwrap();
        assert_eq!(app.notes.len(), 1);

        app.handle_action(AppAction::CloseDetail).await.unwrap();
        assert_eq!(app.detail, DetailState::Idle);
        assert_eq!(app.notes.len(), 2);
    }

    #[tokio::test]
    async fn switching_to_the_notes_tab_reloads() {
        let mut app = test_app().await;
        app.tab = Tab::Summarize;

        app.repository
            .insert_summary("https://x/1".to_string(), Some("T1".to_string()), "Body1".to_string())
            .await
            .unwrap();
        assert!(app.notes.is_empty());

        app.handle_action(AppAction::SwitchTab).await.unwrap();
        assert_eq!(app.tab, Tab::Notes);
        assert_eq!(app.notes.len(), 1);
    }

    #[tokio::test]
    async fn blank_title_blocks_saving_a_fetched_summary() {
        let mut app = test_app().await;
        app.pending_summary = Some(PendingSummary {
            url: "https://x/1".to_string(),
            body: "Body1".to_string(),
        });
        app.fetch_status = FetchStatus::Ready;
        app.title_prompt_active = true;
        app.title_input = "   ".to_string();

        app.handle_action(AppAction::TitleInputConfirm).await.unwrap();

        assert!(app.validation_error.is_some());
        assert!(app.title_prompt_active);
        assert!(app.pending_summary.is_some());
        assert!(app.repository.get_all_summaries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn confirming_a_title_saves_the_fetched_summary() {
        let mut app = test_app().await;
        app.pending_summary = Some(PendingSummary {
            url: "https://x/1".to_string(),
            body: "Body1".to_string(),
        });
        app.fetch_status = FetchStatus::Ready;
        app.title_prompt_active = true;
        app.title_input = "T1".to_string();

        app.handle_action(AppAction::TitleInputConfirm).await.unwrap();

        assert!(!app.title_prompt_active);
        assert_eq!(app.fetch_status, FetchStatus::Idle);
        assert!(app.pending_summary.is_none());

        let notes = app.repository.get_all_summaries().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].url, "https://x/1");
        assert_eq!(notes[0].title.as_deref(), Some("T1"));
        assert_eq!(notes[0].body, "Body1");
    }
}
