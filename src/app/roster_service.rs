// ==========================================
// 餐廳營運儀表板 - 排班服務
// ==========================================
// 職責: 主試算表網址與分頁管理、分頁探測、班表載入
// ==========================================

use crate::domain::{RosterConfig, RosterData, SheetTab};
use crate::importer::sheet_tabs::{diagnose, DiscoveryOutcome};
use crate::importer::map_roster;
use crate::store::JsonStore;
use crate::sync::error::{SyncApiResult, SyncError};
use crate::sync::export_url::{to_csv_export_url, to_pubhtml_url};
use crate::sync::transport::RemoteTransport;
use std::sync::Arc;
use tracing::{info, warn};

// ==========================================
// RosterService - 排班服務
// ==========================================
pub struct RosterService {
    transport: Arc<dyn RemoteTransport>,
    store: JsonStore,
    config: RosterConfig,
}

impl RosterService {
    /// 建立服務並自持久層載入排班設定
    pub fn new(transport: Arc<dyn RemoteTransport>, store: JsonStore) -> Self {
        let config = store.load_roster_config();
        Self { transport, store, config }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    // ==========================================
    // 設定管理
    // ==========================================

    pub fn set_master_url(&mut self, url: impl Into<String>) {
        self.config.master_url = url.into();
        self.store.save_roster_config(&self.config);
    }

    /// 手動補登分頁（gid 唯一性由使用者自行維護）
    pub fn add_tab(&mut self, tab: SheetTab) {
        self.config.tabs.push(tab);
        self.store.save_roster_config(&self.config);
    }

    pub fn remove_tab(&mut self, gid: &str) -> SyncApiResult<()> {
        let before = self.config.tabs.len();
        self.config.tabs.retain(|t| t.gid != gid);
        if self.config.tabs.len() == before {
            return Err(SyncError::NotFound(gid.to_string()));
        }
        if self.config.active_gid.as_deref() == Some(gid) {
            self.config.active_gid = None;
        }
        self.store.save_roster_config(&self.config);
        Ok(())
    }

    pub fn select_tab(&mut self, gid: &str) -> SyncApiResult<()> {
        if !self.config.tabs.iter().any(|t| t.gid == gid) {
            return Err(SyncError::NotFound(gid.to_string()));
        }
        self.config.active_gid = Some(gid.to_string());
        self.store.save_roster_config(&self.config);
        Ok(())
    }

    // ==========================================
    // 遠端操作
    // ==========================================

    /// 自發佈頁自動探測分頁
    ///
    /// 找到分頁時整批取代既有清單；零分頁與登入牆以診斷值回報，
    /// 供使用者自行修正或改走手動補登
    pub async fn detect_tabs(&mut self) -> SyncApiResult<DiscoveryOutcome> {
        let url = to_pubhtml_url(&self.config.master_url);
        let html = self.transport.fetch_text(&url).await?;

        let outcome = diagnose(&html);
        match &outcome {
            DiscoveryOutcome::Found(tabs) => {
                info!(count = tabs.len(), "分頁探測完成");
                self.config.tabs = tabs.clone();
                if self.config.active_gid.is_none() {
                    self.config.active_gid = tabs.first().map(|t| t.gid.clone());
                }
                self.store.save_roster_config(&self.config);
            }
            DiscoveryOutcome::NoTabs => {
                warn!("抓取成功但找不到分頁 — 檢查發佈範圍是否包含分頁");
            }
            DiscoveryOutcome::AuthWall => {
                warn!("回應是登入牆而非發佈頁 — 試算表可能未發佈到網路");
            }
        }
        Ok(outcome)
    }

    /// 載入目前選取分頁的班表
    pub async fn load_roster(&self) -> SyncApiResult<RosterData> {
        let gid = self
            .config
            .active_gid
            .clone()
            .or_else(|| self.config.tabs.first().map(|t| t.gid.clone()))
            .unwrap_or_else(|| "0".to_string());

        let url = to_csv_export_url(&self.config.master_url, Some(&gid));
        let text = self.transport.fetch_text(&url).await?;

        let roster = map_roster(&text)?;
        info!(
            staff = roster.staff.len(),
            days = roster.days.len(),
            "班表載入完成"
        );
        Ok(roster)
    }
}
