// ==========================================
// 餐廳營運儀表板 - 匯入模組錯誤型別
// ==========================================
// 工具: thiserror 派生宏
// 紅線: 訂位路徑的壞列只跳過不報錯；班表路徑結構壞損必須硬性失敗
// ==========================================

use thiserror::Error;

/// 匯入模組錯誤型別
#[derive(Error, Debug)]
pub enum IngestError {
    // ===== 結構錯誤（班表路徑）=====
    #[error("班表結構不足: 僅 {rows} 列，固定表頭至少需要 6 列")]
    RosterShape { rows: usize },

    // ===== 通用錯誤 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 型別別名
pub type IngestResult<T> = Result<T, IngestError>;
