//! Remote article operations
//!
//! A `RemoteCall` describes a write the view wants; whoever drives the view executes it
//! (awaiting inline or on a spawned task) and feeds the `RemoteOutcome` back.

use crate::error::{CoreError, CoreResult};
use crate::traits::ApiClient;
use crate::types::{DeleteArticleRequest, EditArticleRequest};

pub const ARTICLE_EDIT_PATH: &str = "/article/edit";
pub const ARTICLE_DELETE_PATH: &str = "/article/delete";
pub const ARTICLE_GET_ALL_PATH: &str = "/article/get-all";

/// A pending backend write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    /// `session` identifies the edit the draft was submitted from
    EditArticle {
        request: EditArticleRequest,
        session: u64,
    },
    DeleteArticle(DeleteArticleRequest),
}

impl RemoteCall {
    pub fn path(&self) -> &'static str {
        match self {
            Self::EditArticle { .. } => ARTICLE_EDIT_PATH,
            Self::DeleteArticle(_) => ARTICLE_DELETE_PATH,
        }
    }

    pub fn article_id(&self) -> &str {
        match self {
            Self::EditArticle { request, .. } => &request.article_id,
            Self::DeleteArticle(req) => &req.article_id,
        }
    }

    /// JSON payload sent with the call
    pub fn payload(&self) -> CoreResult<serde_json::Value> {
        let value = match self {
            Self::EditArticle { request, .. } => serde_json::to_value(request),
            Self::DeleteArticle(req) => serde_json::to_value(req),
        };
        value.map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// Issue the call through `api`
    pub async fn execute(self, api: &dyn ApiClient) -> RemoteOutcome {
        log::info!("Calling {} for article {}", self.path(), self.article_id());
        let result = match self.payload() {
            Ok(payload) => api.call(self.path(), payload).await.map(|_| ()),
            Err(e) => Err(e),
        };
        RemoteOutcome { call: self, result }
    }
}

/// Result of an executed [`RemoteCall`]
#[derive(Debug)]
pub struct RemoteOutcome {
    pub call: RemoteCall,
    pub result: CoreResult<()>,
}

impl RemoteOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
