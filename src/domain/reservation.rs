// ==========================================
// 餐廳營運儀表板 - 訂位領域模型
// ==========================================
// 職責: 訂位紀錄實體與同步狀態定義
// 紅線: 遠端來源的紀錄永不攜帶 sync_status
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// ReservationKind - 訂位類型
// ==========================================
// 開放集合: 已知三類 + 其他（試算表欄位為自由文字）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationKind {
    DineIn,        // 內用
    Takeout,       // 外帶
    Buyout,        // 包場
    Other(String), // 未歸類的原始標籤
}

impl From<String> for ReservationKind {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "" | "內用" => ReservationKind::DineIn,
            "外帶" => ReservationKind::Takeout,
            "包場" => ReservationKind::Buyout,
            other => ReservationKind::Other(other.to_string()),
        }
    }
}

impl From<ReservationKind> for String {
    fn from(kind: ReservationKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationKind::DineIn => write!(f, "內用"),
            ReservationKind::Takeout => write!(f, "外帶"),
            ReservationKind::Buyout => write!(f, "包場"),
            ReservationKind::Other(label) => write!(f, "{}", label),
        }
    }
}

impl Default for ReservationKind {
    fn default() -> Self {
        ReservationKind::DineIn
    }
}

// ==========================================
// SyncStatus - 本地紀錄同步狀態
// ==========================================
// 狀態機: pending → synced | failed（failed 可重試回到 pending 之後再結算）
// 注意: synced 僅代表傳輸層未拋錯，遠端實際結果不可觀測
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Pending,
    Synced,
    Failed,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStatus::Pending => write!(f, "pending"),
            SyncStatus::Synced => write!(f, "synced"),
            SyncStatus::Failed => write!(f, "failed"),
        }
    }
}

// ==========================================
// Reservation - 訂位紀錄
// ==========================================
// 來源二元: 遠端匯入（整批替換）或本地建立（持續存在直到刪除）
// 對齊: 推送端點與本地持久化皆使用 camelCase JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    // ===== 識別 =====
    pub id: String, // 本地會話內唯一

    // ===== 內容欄位 =====
    pub customer_name: String,      // 客人姓名（有效紀錄不可為空）
    pub time: String,               // HH:MM 當地時間，無時區
    pub pax: u32,                   // 人數（正整數）
    pub date: String,               // YYYY-MM-DD
    #[serde(rename = "type")]
    pub kind: ReservationKind,      // 訂位類型
    #[serde(default)]
    pub phone: String,              // 電話（可空）
    #[serde(rename = "table", default)]
    pub table_label: String,        // 桌位標籤（可空）
    #[serde(default)]
    pub notes: String,              // 備註（可空）

    // ===== 來源與同步 =====
    pub is_local: bool, // true = 本裝置建立、尚未確認存在於遠端
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sync_status: Option<SyncStatus>, // 僅 is_local 時有意義
}

/// 建立本地訂位時的輸入欄位（id 與同步狀態由系統指派）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub customer_name: String,
    pub time: String,
    pub pax: u32,
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: ReservationKind,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "table", default)]
    pub table_label: String,
    #[serde(default)]
    pub notes: String,
}

impl Reservation {
    /// 建立本地紀錄: uuid 識別、is_local=true、初始狀態 pending
    pub fn new_local(draft: ReservationDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer_name: draft.customer_name,
            time: draft.time,
            pax: draft.pax.max(1),
            date: draft.date,
            kind: draft.kind,
            phone: draft.phone,
            table_label: draft.table_label,
            notes: draft.notes,
            is_local: true,
            sync_status: Some(SyncStatus::Pending),
        }
    }

    /// 是否為待重試的本地紀錄（pending 或 failed，未成功推送）
    pub fn needs_push(&self) -> bool {
        self.is_local && !matches!(self.sync_status, Some(SyncStatus::Synced))
    }
}
