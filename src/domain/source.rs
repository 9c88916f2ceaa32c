// ==========================================
// 餐廳營運儀表板 - 資料來源領域模型
// ==========================================
// 職責: 讀取/推送端點綁定與試算表分頁識別
// ==========================================

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// DataSource - 具名資料來源
// ==========================================
// 讀取網址必填；推送網址可空（唯讀來源）
// 紅線: 全系統只有一個推送目標 — 第一個帶非空 write_url 的來源
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub read_url: String,
    #[serde(default)]
    pub write_url: Option<String>,
    /// 最近一次整批更新成功的時間
    #[serde(default)]
    pub last_updated: Option<DateTime<Local>>,
}

impl DataSource {
    pub fn new(name: impl Into<String>, read_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            read_url: read_url.into(),
            write_url: None,
            last_updated: None,
        }
    }

    pub fn with_write_url(mut self, write_url: impl Into<String>) -> Self {
        let url = write_url.into();
        self.write_url = if url.trim().is_empty() { None } else { Some(url) };
        self
    }

    /// 是否可作為推送目標
    pub fn has_write_target(&self) -> bool {
        self.write_url
            .as_deref()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false)
    }
}

// ==========================================
// SheetTab - 試算表分頁
// ==========================================
// gid 為發佈頁面上的不透明識別碼；唯一性由使用者自行維護
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTab {
    pub name: String,
    pub gid: String,
}

// ==========================================
// RosterConfig - 排班來源設定
// ==========================================
// 主網址 + 分頁清單 + 目前選取分頁，整份持久化
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterConfig {
    #[serde(default)]
    pub master_url: String,
    #[serde(default)]
    pub tabs: Vec<SheetTab>,
    #[serde(default)]
    pub active_gid: Option<String>,
}
