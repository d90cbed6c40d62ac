//! Backend 层：组装核心库服务，在 tokio 运行时上执行异步调用
//!
//! 主循环是同步的；每个调用都被 spawn 到运行时，完成后把结果作为
//! [`AppMessage`] 发回主循环，由 Update 层交给 `ArticleView::apply`。

use std::sync::Arc;

use helpdesk_core::adapters::{HttpApiClient, JsonFileTopicCache};
use helpdesk_core::services::{CachedTopicStore, MountRequest, RemoteCall};
use helpdesk_core::{ApiClient, ArticleStore, CoreResult};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::AppConfig;
use crate::message::{AppMessage, StoreMessage};

/// TUI 后端服务
pub struct Backend {
    runtime: Handle,
    store: Arc<dyn ArticleStore>,
    api: Arc<dyn ApiClient>,
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    pub fn new(
        runtime: Handle,
        store: Arc<dyn ArticleStore>,
        api: Arc<dyn ApiClient>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            runtime,
            store,
            api,
            tx,
        }
    }

    /// HTTP 客户端 + JSON 文件缓存
    pub fn connect(
        config: &AppConfig,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> CoreResult<Self> {
        let client = HttpApiClient::new(&config.api_root, config.request_timeout())?;
        log::info!("API root {}", client.api_root());
        let api: Arc<dyn ApiClient> = Arc::new(client);
        let cache = Arc::new(JsonFileTopicCache::default());
        log::info!("Topic cache at {}", cache.path().display());
        let store = Arc::new(CachedTopicStore::new(api.clone(), cache));
        Ok(Self::new(runtime, store, api, tx))
    }

    /// 检查是否有缓存的话题，结果以 [`StoreMessage::CacheProbed`] 返回
    pub fn probe_cache(&self) {
        let store = self.store.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let warm = store.has_warm_cache().await;
            send(&tx, AppMessage::Store(StoreMessage::CacheProbed { warm }));
        });
    }

    /// 按挂载请求加载话题
    pub fn load(&self, request: MountRequest) {
        let store = self.store.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = match request {
                MountRequest::Initialize => store.initialize().await,
                MountRequest::Retrieve => store.retrieve().await,
            };
            report(store.as_ref(), &tx, result).await;
        });
    }

    /// 重新获取话题
    pub fn refresh(&self) {
        self.load(MountRequest::Retrieve);
    }

    /// 执行远程写操作，结果以 [`AppMessage::Remote`] 返回
    pub fn execute(&self, call: RemoteCall) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = call.execute(api.as_ref()).await;
            send(&tx, AppMessage::Remote(outcome));
        });
    }
}

async fn report(store: &dyn ArticleStore, tx: &UnboundedSender<AppMessage>, result: CoreResult<()>) {
    let error = result.err().map(|e| {
        e.log("Loading topics failed");
        e.to_string()
    });
    let snapshot = store.snapshot().await;
    send(tx, AppMessage::Store(StoreMessage::Updated { snapshot, error }));
}

fn send(tx: &UnboundedSender<AppMessage>, msg: AppMessage) {
    if tx.send(msg).is_err() {
        log::debug!("Main loop has exited, dropping backend message");
    }
}
