// ==========================================
// 餐廳營運儀表板 - 應用狀態
// ==========================================
// 職責: 持有協調器與排班服務，注入共用傳輸與持久層
// 設計: 明確的狀態容器取代散落的全域快取 —
//       持久化是容器上成對的「啟動載入 / 變更即寫」操作
// ==========================================

use crate::app::roster_service::RosterService;
use crate::store::JsonStore;
use crate::sync::coordinator::SyncCoordinator;
use crate::sync::transport::{HttpTransport, RemoteTransport};
use std::path::PathBuf;
use std::sync::Arc;

/// 應用狀態
///
/// 所有實體集合由此容器（經協調器）持有並整份持久化
pub struct AppState {
    /// 訂位同步協調器
    pub coordinator: SyncCoordinator,

    /// 排班服務
    pub roster: RosterService,
}

impl AppState {
    /// 以指定資料目錄與傳輸建立應用狀態
    pub fn new(store_dir: impl Into<PathBuf>, transport: Arc<dyn RemoteTransport>) -> Self {
        let dir = store_dir.into();
        let coordinator = SyncCoordinator::new(Arc::clone(&transport), JsonStore::new(&dir));
        let roster = RosterService::new(transport, JsonStore::new(&dir));
        Self { coordinator, roster }
    }

    /// 以 HTTP 傳輸建立應用狀態（正式進入點）
    pub fn with_http(store_dir: impl Into<PathBuf>) -> Self {
        Self::new(store_dir, Arc::new(HttpTransport::new()))
    }
}
