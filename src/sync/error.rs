// ==========================================
// 餐廳營運儀表板 - 同步模組錯誤型別
// ==========================================
// 工具: thiserror 派生宏
// 分類對齊錯誤處理策略: 傳輸失敗可重試、讀取失敗不動既有狀態
// ==========================================

use crate::importer::IngestError;
use thiserror::Error;

/// 同步模組錯誤型別
#[derive(Error, Debug)]
pub enum SyncError {
    // ===== 傳輸錯誤 =====
    #[error("遠端抓取失敗: {0}")]
    Fetch(String),

    #[error("HTTP 狀態非成功: {status}（{url}）")]
    HttpStatus { status: u16, url: String },

    #[error("推送傳輸失敗: {0}")]
    Push(String),

    // ===== 狀態與設定 =====
    #[error("沒有可用的推送目標: 無任何來源設定 write_url")]
    NoWriteTarget,

    #[error("找不到訂位紀錄: {0}")]
    NotFound(String),

    #[error("另一個同步作業進行中")]
    Busy,

    // ===== 通用錯誤 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<IngestError> for SyncError {
    fn from(err: IngestError) -> Self {
        SyncError::Other(anyhow::Error::new(err))
    }
}

/// Result 型別別名
pub type SyncApiResult<T> = Result<T, SyncError>;
