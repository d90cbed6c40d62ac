use helpdesk_core::types::TopicsSnapshot;

/// 话题数据消息
#[derive(Debug)]
pub enum StoreMessage {
    /// 缓存探测完成
    CacheProbed { warm: bool },

    /// 加载结束，附带最新快照；失败时带错误描述
    Updated {
        snapshot: TopicsSnapshot,
        error: Option<String>,
    },
}
