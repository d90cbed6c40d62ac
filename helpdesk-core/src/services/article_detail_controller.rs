//! Async driver for [`ArticleView`]
//!
//! Wires the state machine to the injected store, API client and navigator,
//! awaiting each remote call inline and performing the resulting effects.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::article_view::{
    ArticleDraft, ArticleView, FormEvent, MountRequest, ViewEffect,
};
use crate::services::remote::RemoteCall;
use crate::traits::{ApiClient, ArticleStore, ConfirmAction, ConfirmPrompt, Navigator};
use crate::types::TopicsSnapshot;

/// Article detail page controller
pub struct ArticleDetailController {
    store: Arc<dyn ArticleStore>,
    api: Arc<dyn ApiClient>,
    navigator: Arc<dyn Navigator>,
    view: ArticleView,
}

impl ArticleDetailController {
    #[must_use]
    pub fn new(
        article_id: impl Into<String>,
        store: Arc<dyn ArticleStore>,
        api: Arc<dyn ApiClient>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            api,
            navigator,
            view: ArticleView::new(article_id),
        }
    }

    pub fn view(&self) -> &ArticleView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ArticleView {
        &mut self.view
    }

    /// Populate the store: `initialize` when it holds a warm cache, `retrieve` otherwise
    pub async fn mount(&mut self) -> CoreResult<()> {
        let warm = self.store.has_warm_cache().await;
        match self.view.mount(warm) {
            Some(MountRequest::Initialize) => self.store.initialize().await,
            Some(MountRequest::Retrieve) => self.store.retrieve().await,
            None => Ok(()),
        }
    }

    pub async fn snapshot(&self) -> TopicsSnapshot {
        self.store.snapshot().await
    }

    /// Preview → Edit
    pub async fn edit(&mut self) -> bool {
        let snapshot = self.store.snapshot().await;
        self.view.begin_edit(&snapshot.topics)
    }

    /// Edit → Preview without saving
    pub fn cancel(&mut self, event: &mut FormEvent) -> bool {
        self.view.cancel_edit(event)
    }

    /// Submit the edit form; on failure the draft stays in place and the error is returned
    pub async fn submit(&mut self, form: ArticleDraft) -> CoreResult<()> {
        let snapshot = self.store.snapshot().await;
        let call = self.view.submit(&snapshot.topics, form)?;
        self.run(call).await
    }

    /// Open the delete confirmation
    pub async fn delete(&self, prompt: &mut dyn ConfirmPrompt, message: &str) -> bool {
        let snapshot = self.store.snapshot().await;
        self.view.request_delete(&snapshot.topics, prompt, message)
    }

    /// Run an accepted confirmation
    pub async fn confirm(&mut self, action: ConfirmAction) -> CoreResult<()> {
        let call = self.view.confirm(action);
        self.run(call).await
    }

    async fn run(&mut self, call: RemoteCall) -> CoreResult<()> {
        let outcome = call.execute(self.api.as_ref()).await;
        let effects = self.view.apply(&outcome);
        self.perform(effects).await;
        outcome.result
    }

    async fn perform(&self, effects: Vec<ViewEffect>) {
        for effect in effects {
            match effect {
                ViewEffect::RefreshTopics => {
                    if let Err(e) = self.store.retrieve().await {
                        e.log("Refreshing topics failed");
                    }
                }
                ViewEffect::Navigate(route) => self.navigator.push(&route),
                ViewEffect::Notify(notice) => {
                    log::debug!("Notice kept on view: {}", notice.message);
                }
            }
        }
    }
}
