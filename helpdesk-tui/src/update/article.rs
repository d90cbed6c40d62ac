use helpdesk_core::services::{FormEvent, RemoteCall, RemoteOutcome, ViewEffect};
use helpdesk_core::Navigator;

use crate::i18n::t;
use crate::message::ArticleMessage;
use crate::model::{App, EditorField};

/// 处理文章详情页消息
pub fn update(app: &mut App, msg: ArticleMessage) {
    match msg {
        ArticleMessage::Edit => {
            if app.article.begin_edit(&app.topics.topics) {
                app.editor.reset();
            }
        }

        ArticleMessage::Delete => {
            let message = t().article.delete_article_description;
            app.article
                .request_delete(&app.topics.topics, &mut app.modal, message);
        }

        ArticleMessage::NextField => {
            app.editor.focus = app.editor.focus.next();
        }

        ArticleMessage::PrevField => {
            app.editor.focus = app.editor.focus.prev();
        }

        ArticleMessage::Input(ch) => {
            let focus = app.editor.focus;
            let Some(draft) = app.article.draft_mut() else {
                return;
            };
            match focus {
                EditorField::Title => draft.title.push(ch),
                EditorField::Content => draft.content.push(ch),
                EditorField::Save | EditorField::Cancel => {}
            }
        }

        ArticleMessage::Backspace => {
            let focus = app.editor.focus;
            let Some(draft) = app.article.draft_mut() else {
                return;
            };
            match focus {
                EditorField::Title => {
                    draft.title.pop();
                }
                EditorField::Content => draft.content.backspace(),
                EditorField::Save | EditorField::Cancel => {}
            }
        }

        ArticleMessage::Enter => match app.editor.focus {
            EditorField::Title => app.editor.focus = EditorField::Content,
            EditorField::Content => {
                if let Some(draft) = app.article.draft_mut() {
                    draft.content.newline();
                }
            }
            EditorField::Save => submit(app),
            EditorField::Cancel => cancel(app),
        },

        ArticleMessage::Submit => submit(app),
    }
}

fn submit(app: &mut App) {
    if app.editor.submitting {
        return;
    }
    match app.article.submit_draft(&app.topics.topics) {
        Ok(call) => {
            app.editor.submitting = true;
            app.set_status(t().status_bar.saving);
            app.backend.execute(call);
        }
        Err(e) => {
            e.log("Submitting article failed");
            app.modal.show_error(t().modal.error_title, &e.to_string());
        }
    }
}

fn cancel(app: &mut App) {
    let mut event = FormEvent::new();
    if app.article.cancel_edit(&mut event) {
        app.editor.reset();
    }
}

/// 远程调用结果：交给状态机，并执行返回的后续动作
pub fn apply_outcome(app: &mut App, outcome: &RemoteOutcome) {
    // 旧编辑会话的结果不能动当前表单
    let current = app.article.is_current(&outcome.call);
    if current && matches!(outcome.call, RemoteCall::EditArticle { .. }) {
        app.editor.submitting = false;
    }

    for effect in app.article.apply(outcome) {
        match effect {
            ViewEffect::RefreshTopics => app.backend.refresh(),
            // 已删除的文章页不留在历史里，Esc 不会回到它
            ViewEffect::Navigate(route) => match outcome.call {
                RemoteCall::DeleteArticle(_) => app.router.replace(&route),
                RemoteCall::EditArticle { .. } => app.router.push(&route),
            },
            ViewEffect::Notify(notice) => {
                app.set_status(notice.message.clone());
                app.modal.show_error(t().modal.error_title, &notice.message);
            }
        }
    }

    if outcome.is_success() {
        match outcome.call {
            RemoteCall::EditArticle { .. } => {
                if current {
                    app.editor.reset();
                }
                app.set_status(t().status_bar.saved);
            }
            RemoteCall::DeleteArticle(_) => app.clear_status(),
        }
    }
}
