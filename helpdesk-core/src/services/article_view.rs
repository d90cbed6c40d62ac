//! Article detail view/edit state machine
//!
//! `ArticleView` owns the UI mode of one article page. Transitions never perform I/O:
//! user actions return the [`RemoteCall`] to run, and the driver hands the
//! [`RemoteOutcome`] back through [`ArticleView::apply`], which returns the
//! follow-up [`ViewEffect`]s. State only changes on a received outcome.

use crate::error::{CoreError, CoreResult};
use crate::rich_text::EditorValue;
use crate::services::article_locator::locate_article;
use crate::services::remote::{RemoteCall, RemoteOutcome};
use crate::traits::{ConfirmAction, ConfirmPrompt, ARTICLE_LIST_ROUTE};
use crate::types::{Article, DeleteArticleRequest, EditArticleRequest, Topic, TopicsSnapshot};

/// In-progress edit of an article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: EditorValue,
}

impl ArticleDraft {
    /// Seed a draft from the stored article
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: EditorValue::from_html(&article.content),
        }
    }
}

/// UI mode; the draft only exists while editing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Preview,
    Edit(ArticleDraft),
}

/// What the page should render
#[derive(Debug, PartialEq, Eq)]
pub enum ArticleScreen<'a> {
    Loading,
    NotFound,
    Preview(&'a Article),
    Edit {
        article: &'a Article,
        draft: &'a ArticleDraft,
    },
}

/// Store request issued once when the page mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountRequest {
    /// Warm cache: re-initialize from it
    Initialize,
    /// Cold: fetch everything
    Retrieve,
}

/// User-visible failure of the last remote operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Follow-up work requested after an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    /// Ask the store to retrieve topics again
    RefreshTopics,
    /// Navigate the host router
    Navigate(String),
    /// Surface a notice to the user
    Notify(Notice),
}

/// UI event whose default action a handler may suppress
#[derive(Debug, Default)]
pub struct FormEvent {
    default_prevented: bool,
}

impl FormEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// View/edit state of one article page
#[derive(Debug)]
pub struct ArticleView {
    article_id: String,
    mode: ViewMode,
    /// Bumped on every edit action; edit calls carry the value they were submitted under
    edit_session: u64,
    mounted: bool,
    notice: Option<Notice>,
}

impl ArticleView {
    pub fn new(article_id: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            mode: ViewMode::Preview,
            edit_session: 0,
            mounted: false,
            notice: None,
        }
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ViewMode::Edit(_))
    }

    pub fn draft(&self) -> Option<&ArticleDraft> {
        match &self.mode {
            ViewMode::Edit(draft) => Some(draft),
            ViewMode::Preview => None,
        }
    }

    /// Form change handler target
    pub fn draft_mut(&mut self) -> Option<&mut ArticleDraft> {
        match &mut self.mode {
            ViewMode::Edit(draft) => Some(draft),
            ViewMode::Preview => None,
        }
    }

    pub fn edit_session(&self) -> u64 {
        self.edit_session
    }

    /// Whether an outcome for `call` still belongs to the page's current state.
    ///
    /// An edit call is stale once its draft was cancelled or replaced by a later edit action.
    pub fn is_current(&self, call: &RemoteCall) -> bool {
        match call {
            RemoteCall::EditArticle { session, .. } => {
                self.is_editing() && *session == self.edit_session
            }
            RemoteCall::DeleteArticle(_) => true,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// One-time store request on mount; `None` once the page has mounted
    pub fn mount(&mut self, has_warm_cache: bool) -> Option<MountRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(if has_warm_cache {
            MountRequest::Initialize
        } else {
            MountRequest::Retrieve
        })
    }

    /// Resolve what to render from the current store snapshot
    pub fn screen<'a>(&'a self, snapshot: &'a TopicsSnapshot) -> ArticleScreen<'a> {
        if snapshot.loading {
            return ArticleScreen::Loading;
        }
        let Some(article) = locate_article(&snapshot.topics, &self.article_id) else {
            return ArticleScreen::NotFound;
        };
        match &self.mode {
            ViewMode::Preview => ArticleScreen::Preview(article),
            ViewMode::Edit(draft) => ArticleScreen::Edit { article, draft },
        }
    }

    /// Preview → Edit. A repeated edit action replaces the draft and starts a new session.
    /// Refused when the article is not located.
    pub fn begin_edit(&mut self, topics: &[Topic]) -> bool {
        let Some(article) = locate_article(topics, &self.article_id) else {
            return false;
        };
        self.edit_session += 1;
        self.mode = ViewMode::Edit(ArticleDraft::from_article(article));
        self.notice = None;
        true
    }

    /// Edit → Preview without saving. Suppresses the event's default action.
    pub fn cancel_edit(&mut self, event: &mut FormEvent) -> bool {
        if !self.is_editing() {
            return false;
        }
        event.prevent_default();
        self.mode = ViewMode::Preview;
        self.notice = None;
        true
    }

    /// Form submission: keeps the submitted values as the draft and returns the update call.
    ///
    /// The mode stays `Edit` until the outcome arrives.
    pub fn submit(&mut self, topics: &[Topic], form: ArticleDraft) -> CoreResult<RemoteCall> {
        if !self.is_editing() {
            return Err(CoreError::Validation(
                "article is not being edited".to_string(),
            ));
        }
        let article = locate_article(topics, &self.article_id)
            .ok_or_else(|| CoreError::ArticleNotFound(self.article_id.clone()))?;

        let call = RemoteCall::EditArticle {
            request: EditArticleRequest {
                article_id: article.id.clone(),
                title: form.title.clone(),
                content: form.content.to_html(),
            },
            session: self.edit_session,
        };
        self.mode = ViewMode::Edit(form);
        Ok(call)
    }

    /// Submit the current draft as-is
    pub fn submit_draft(&mut self, topics: &[Topic]) -> CoreResult<RemoteCall> {
        let form = self
            .draft()
            .cloned()
            .ok_or_else(|| CoreError::Validation("article is not being edited".to_string()))?;
        self.submit(topics, form)
    }

    /// Open the delete confirmation for the located article
    pub fn request_delete(
        &self,
        topics: &[Topic],
        prompt: &mut dyn ConfirmPrompt,
        message: &str,
    ) -> bool {
        let Some(article) = locate_article(topics, &self.article_id) else {
            return false;
        };
        prompt.open_modal(
            message,
            ConfirmAction::DeleteArticle {
                article_id: article.id.clone(),
            },
        );
        true
    }

    /// Continuation of an accepted prompt
    pub fn confirm(&self, action: ConfirmAction) -> RemoteCall {
        match action {
            ConfirmAction::DeleteArticle { article_id } => {
                RemoteCall::DeleteArticle(DeleteArticleRequest { article_id })
            }
        }
    }

    /// Apply a received outcome and return the effects the driver must perform
    pub fn apply(&mut self, outcome: &RemoteOutcome) -> Vec<ViewEffect> {
        match (&outcome.call, &outcome.result) {
            (RemoteCall::EditArticle { request, session }, Ok(())) => {
                if self.is_current(&outcome.call) {
                    log::info!("Article {} updated", request.article_id);
                    self.mode = ViewMode::Preview;
                    self.notice = None;
                } else {
                    log::info!(
                        "Article {} updated from edit session {session}, keeping current mode",
                        request.article_id
                    );
                }
                vec![ViewEffect::RefreshTopics]
            }
            (RemoteCall::DeleteArticle(req), Ok(())) => {
                log::info!("Article {} deleted", req.article_id);
                vec![ViewEffect::Navigate(ARTICLE_LIST_ROUTE.to_string())]
            }
            (call, Err(e)) => {
                e.log(&format!("{} failed", call.path()));
                let notice = Notice::error(e.to_string());
                self.notice = Some(notice.clone());
                vec![ViewEffect::Notify(notice)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_topics, RecordingPrompt};

    fn ready() -> TopicsSnapshot {
        TopicsSnapshot::ready(sample_topics())
    }

    fn outcome(call: RemoteCall, result: CoreResult<()>) -> RemoteOutcome {
        RemoteOutcome { call, result }
    }

    fn assert_mode_matches_draft(view: &ArticleView) {
        assert_eq!(view.is_editing(), view.draft().is_some());
    }

    #[test]
    fn loading_gates_everything() {
        let view = ArticleView::new("a1");
        let snapshot = TopicsSnapshot {
            topics: sample_topics(),
            loading: true,
        };
        assert_eq!(view.screen(&snapshot), ArticleScreen::Loading);
    }

    #[test]
    fn preview_renders_located_article() {
        let view = ArticleView::new("a1");
        let snapshot = ready();
        let ArticleScreen::Preview(article) = view.screen(&snapshot) else {
            panic!("expected preview");
        };
        assert_eq!(article.title, "Hi");
        assert_eq!(article.content, "<p>x</p>");
    }

    #[test]
    fn unknown_id_renders_not_found() {
        let view = ArticleView::new("missing");
        assert_eq!(view.screen(&ready()), ArticleScreen::NotFound);
    }

    #[test]
    fn mount_picks_request_once() {
        let mut warm = ArticleView::new("a1");
        assert_eq!(warm.mount(true), Some(MountRequest::Initialize));
        assert_eq!(warm.mount(true), None);

        let mut cold = ArticleView::new("a1");
        assert_eq!(cold.mount(false), Some(MountRequest::Retrieve));
    }

    #[test]
    fn begin_edit_seeds_draft() {
        let mut view = ArticleView::new("a1");
        assert!(view.begin_edit(&sample_topics()));

        let draft = view.draft().unwrap();
        assert_eq!(draft.title, "Hi");
        assert_eq!(draft.content, EditorValue::from_html("<p>x</p>"));
        assert_mode_matches_draft(&view);
    }

    #[test]
    fn begin_edit_refused_for_missing_article() {
        let mut view = ArticleView::new("missing");
        assert!(!view.begin_edit(&sample_topics()));
        assert_eq!(view.mode(), &ViewMode::Preview);
        assert_mode_matches_draft(&view);
    }

    #[test]
    fn second_edit_action_replaces_draft() {
        let mut view = ArticleView::new("a1");
        view.begin_edit(&sample_topics());
        let first = view.edit_session();
        view.draft_mut().unwrap().title.push('!');

        assert!(view.begin_edit(&sample_topics()));
        assert_eq!(view.draft().unwrap().title, "Hi");
        assert!(view.edit_session() > first);
    }

    #[test]
    fn cancel_discards_draft_and_prevents_default() {
        let mut view = ArticleView::new("a1");
        view.begin_edit(&sample_topics());
        let mut event = FormEvent::new();

        assert!(view.cancel_edit(&mut event));

        assert!(event.is_default_prevented());
        assert_eq!(view.mode(), &ViewMode::Preview);
        assert_mode_matches_draft(&view);
    }

    #[test]
    fn cancel_outside_edit_leaves_event_alone() {
        let mut view = ArticleView::new("a1");
        let mut event = FormEvent::new();
        assert!(!view.cancel_edit(&mut event));
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn submit_builds_edit_call_and_stays_in_edit() {
        let topics = sample_topics();
        let mut view = ArticleView::new("a1");
        view.begin_edit(&topics);

        let call = view
            .submit(
                &topics,
                ArticleDraft {
                    title: "Hi2".to_string(),
                    content: EditorValue::from_html("<p>y</p>"),
                },
            )
            .unwrap();

        assert_eq!(
            call,
            RemoteCall::EditArticle {
                request: EditArticleRequest {
                    article_id: "a1".to_string(),
                    title: "Hi2".to_string(),
                    content: "<p>y</p>".to_string(),
                },
                session: view.edit_session(),
            }
        );
        assert!(view.is_editing());
        assert_eq!(view.draft().unwrap().title, "Hi2");
    }

    #[test]
    fn submit_without_draft_is_rejected() {
        let mut view = ArticleView::new("a1");
        assert!(matches!(
            view.submit_draft(&sample_topics()),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn edit_success_returns_to_preview_and_refreshes() {
        let topics = sample_topics();
        let mut view = ArticleView::new("a1");
        view.begin_edit(&topics);
        let call = view.submit_draft(&topics).unwrap();

        let effects = view.apply(&outcome(call, Ok(())));

        assert_eq!(effects, vec![ViewEffect::RefreshTopics]);
        assert_eq!(view.mode(), &ViewMode::Preview);
        assert_mode_matches_draft(&view);
    }

    #[test]
    fn late_save_keeps_newer_draft() {
        let topics = sample_topics();
        let mut view = ArticleView::new("a1");
        view.begin_edit(&topics);
        let first_save = view.submit_draft(&topics).unwrap();

        view.cancel_edit(&mut FormEvent::new());
        view.begin_edit(&topics);
        view.draft_mut().unwrap().title.push('Z');
        assert!(!view.is_current(&first_save));

        let effects = view.apply(&outcome(first_save, Ok(())));

        assert_eq!(effects, vec![ViewEffect::RefreshTopics]);
        assert_eq!(view.draft().unwrap().title, "HiZ");
        assert_mode_matches_draft(&view);
    }

    #[test]
    fn edit_failure_keeps_draft_and_notifies() {
        let topics = sample_topics();
        let mut view = ArticleView::new("a1");
        view.begin_edit(&topics);
        view.draft_mut().unwrap().title = "Unsaved".to_string();
        let call = view.submit_draft(&topics).unwrap();

        let effects = view.apply(&outcome(
            call,
            Err(CoreError::Network("connection reset".to_string())),
        ));

        assert!(matches!(effects.as_slice(), [ViewEffect::Notify(_)]));
        assert_eq!(view.draft().unwrap().title, "Unsaved");
        assert!(view.notice().unwrap().message.contains("connection reset"));
        assert_mode_matches_draft(&view);
    }

    #[test]
    fn delete_goes_through_prompt() {
        let topics = sample_topics();
        let view = ArticleView::new("a1");
        let mut prompt = RecordingPrompt::default();

        assert!(view.request_delete(&topics, &mut prompt, "Delete this article?"));

        let (message, action) = prompt.opened.pop().unwrap();
        assert_eq!(message, "Delete this article?");
        assert_eq!(
            view.confirm(action),
            RemoteCall::DeleteArticle(DeleteArticleRequest {
                article_id: "a1".to_string()
            })
        );
    }

    #[test]
    fn delete_prompt_needs_located_article() {
        let view = ArticleView::new("missing");
        let mut prompt = RecordingPrompt::default();
        assert!(!view.request_delete(&sample_topics(), &mut prompt, "?"));
        assert!(prompt.opened.is_empty());
    }

    #[test]
    fn delete_success_navigates_to_list() {
        let mut view = ArticleView::new("a1");
        let call = view.confirm(ConfirmAction::DeleteArticle {
            article_id: "a1".to_string(),
        });

        let effects = view.apply(&outcome(call, Ok(())));

        assert_eq!(
            effects,
            vec![ViewEffect::Navigate(
                "/admin/panel/articles/list-articles".to_string()
            )]
        );
    }

    #[test]
    fn delete_failure_stays_in_preview() {
        let mut view = ArticleView::new("a1");
        let call = view.confirm(ConfirmAction::DeleteArticle {
            article_id: "a1".to_string(),
        });

        let effects = view.apply(&outcome(
            call,
            Err(CoreError::Api {
                path: "/article/delete".to_string(),
                message: "NO_PERMISSION".to_string(),
            }),
        ));

        assert!(matches!(effects.as_slice(), [ViewEffect::Notify(_)]));
        assert_eq!(view.mode(), &ViewMode::Preview);
    }
}
