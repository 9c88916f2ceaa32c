// ==========================================
// 餐廳營運儀表板 - 同步協調器
// ==========================================
// 職責: 遠端 CSV 抓取 → 映射 → 與本地紀錄合併 → 逐筆推送狀態機
// 狀態機: pending → synced | failed；failed 可單筆或整批重試
// 紅線:
//   - 整批重試嚴格逐筆，前一筆結算後才推下一筆
//   - 整批更新任一來源失敗即中止，既有紀錄不動（不做部分替換）
//   - 遠端更新整批替換遠端子集，永不改動本地紀錄的狀態
//   - 遠端與本地串接不去重（已知行為，原樣保留）
// ==========================================

use crate::domain::{DataSource, Reservation, ReservationDraft, SyncStatus};
use crate::importer::map_reservations;
use crate::store::JsonStore;
use crate::sync::error::{SyncApiResult, SyncError};
use crate::sync::export_url::to_csv_export_url;
use crate::sync::transport::{PushOutcome, RemoteTransport};
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, info, warn};

// ==========================================
// SyncCoordinator - 同步協調器
// ==========================================
// 單一邏輯執行緒上運作；網路操作可暫停但互不併發
pub struct SyncCoordinator {
    transport: Arc<dyn RemoteTransport>,
    store: JsonStore,

    // 持有的集合（啟動時自持久層載入）
    reservations: Vec<Reservation>,
    sources: Vec<DataSource>,

    // 整批更新進行中旗標（觸發端依此停用操作）
    refresh_in_flight: bool,
}

impl SyncCoordinator {
    /// 建立協調器並自持久層載入兩份清單
    pub fn new(transport: Arc<dyn RemoteTransport>, store: JsonStore) -> Self {
        let reservations = store.load_reservations();
        let sources = store.load_sources();
        info!(
            reservations = reservations.len(),
            sources = sources.len(),
            "同步協調器載入完成"
        );
        Self {
            transport,
            store,
            reservations,
            sources,
            refresh_in_flight: false,
        }
    }

    // ==========================================
    // 查詢
    // ==========================================

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_in_flight
    }

    /// 依姓名 / 日期 / 電話子字串過濾
    pub fn search(&self, query: &str) -> Vec<&Reservation> {
        let q = query.trim();
        if q.is_empty() {
            return self.reservations.iter().collect();
        }
        self.reservations
            .iter()
            .filter(|r| r.customer_name.contains(q) || r.date.contains(q) || r.phone.contains(q))
            .collect()
    }

    // ==========================================
    // 本地紀錄生命週期
    // ==========================================

    /// 建立本地訂位並立即嘗試推送
    ///
    /// 無推送目標時紀錄保持 pending（加入來源後可整批重試）
    pub async fn create_reservation(
        &mut self,
        draft: ReservationDraft,
    ) -> SyncApiResult<Reservation> {
        let record = Reservation::new_local(draft);
        let id = record.id.clone();
        self.reservations.push(record);
        self.store.save_reservations(&self.reservations);

        match self.attempt_push(&id).await {
            Ok(PushOutcome::AcceptedByTransport) => {
                info!(id = %id, "本地訂位已推送（傳輸層未拋錯）");
            }
            Ok(PushOutcome::TransportFailed(e)) => {
                warn!(id = %id, error = %e, "本地訂位推送失敗，標記 failed");
            }
            Err(SyncError::NoWriteTarget) => {
                warn!(id = %id, "尚無推送目標，紀錄保持 pending");
            }
            Err(e) => return Err(e),
        }

        self.reservations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(SyncError::NotFound(id))
    }

    /// 刪除紀錄（本地或遠端來源皆可自清單移除）
    pub fn delete_reservation(&mut self, id: &str) -> SyncApiResult<()> {
        let before = self.reservations.len();
        self.reservations.retain(|r| r.id != id);
        if self.reservations.len() == before {
            return Err(SyncError::NotFound(id.to_string()));
        }
        self.store.save_reservations(&self.reservations);
        Ok(())
    }

    // ==========================================
    // 推送與重試
    // ==========================================

    /// 重試單筆本地紀錄
    pub async fn retry_one(&mut self, id: &str) -> SyncApiResult<SyncStatus> {
        let record = self
            .reservations
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;
        if !record.is_local {
            // 遠端紀錄沒有同步狀態可言
            return Err(SyncError::NotFound(id.to_string()));
        }

        match self.attempt_push(id).await? {
            PushOutcome::AcceptedByTransport => Ok(SyncStatus::Synced),
            PushOutcome::TransportFailed(_) => Ok(SyncStatus::Failed),
        }
    }

    /// 整批重試所有未成功的本地紀錄
    ///
    /// 嚴格逐筆處理（保留無伺服端排序保證下的送出順序），回傳成功筆數
    pub async fn retry_all(&mut self) -> SyncApiResult<usize> {
        if self.write_url().is_none() {
            return Err(SyncError::NoWriteTarget);
        }

        let ids: Vec<String> = self
            .reservations
            .iter()
            .filter(|r| r.needs_push())
            .map(|r| r.id.clone())
            .collect();

        let mut succeeded = 0usize;
        for id in &ids {
            // 前一筆結算（成功或失敗觀測到）後才推下一筆
            match self.attempt_push(id).await? {
                PushOutcome::AcceptedByTransport => succeeded += 1,
                PushOutcome::TransportFailed(e) => {
                    debug!(id = %id, error = %e, "整批重試中單筆失敗，續推下一筆");
                }
            }
        }

        info!(total = ids.len(), succeeded, "整批重試完成");
        Ok(succeeded)
    }

    /// 對單筆紀錄做一次推送並落盤狀態
    ///
    /// 成功僅代表傳輸層未拋錯 — 遠端實際結果依協議不可觀測
    async fn attempt_push(&mut self, id: &str) -> SyncApiResult<PushOutcome> {
        let url = self.write_url().ok_or(SyncError::NoWriteTarget)?;
        let body = {
            let record = self
                .reservations
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| SyncError::NotFound(id.to_string()))?;
            serde_json::to_string(record).map_err(|e| SyncError::Other(anyhow::Error::new(e)))?
        };

        let transport = Arc::clone(&self.transport);
        let outcome = match transport.push_record(&url, body).await {
            Ok(()) => PushOutcome::AcceptedByTransport,
            Err(e) => PushOutcome::TransportFailed(e.to_string()),
        };

        let status = match outcome {
            PushOutcome::AcceptedByTransport => SyncStatus::Synced,
            PushOutcome::TransportFailed(_) => SyncStatus::Failed,
        };
        if let Some(record) = self.reservations.iter_mut().find(|r| r.id == id) {
            record.sync_status = Some(status);
        }
        self.store.save_reservations(&self.reservations);

        Ok(outcome)
    }

    /// 全域唯一推送目標: 第一個帶非空 write_url 的來源
    fn write_url(&self) -> Option<String> {
        self.sources
            .iter()
            .find(|s| s.has_write_target())
            .and_then(|s| s.write_url.clone())
    }

    // ==========================================
    // 整批更新
    // ==========================================

    /// 自所有來源整批更新遠端子集
    ///
    /// 逐來源依序抓取；任一失敗即中止並保留既有紀錄。
    /// 成功時遠端子集整批替換、本地紀錄原樣串接在後，回傳遠端筆數。
    pub async fn refresh_all(&mut self) -> SyncApiResult<usize> {
        if self.refresh_in_flight {
            return Err(SyncError::Busy);
        }
        self.refresh_in_flight = true;
        let result = self.refresh_inner().await;
        self.refresh_in_flight = false;
        result
    }

    async fn refresh_inner(&mut self) -> SyncApiResult<usize> {
        let mut remote: Vec<Reservation> = Vec::new();

        for (idx, source) in self.sources.iter().enumerate() {
            let url = to_csv_export_url(&source.read_url, None);
            // 任一來源失敗即以 ? 中止 — 既有紀錄未被動過
            let text = self.transport.fetch_text(&url).await?;

            let (mut records, skipped) = map_reservations(&text);
            if skipped > 0 {
                debug!(source = %source.name, skipped, "映射時跳過壞列");
            }
            // 合成識別加上來源序，避免跨來源相撞
            for r in &mut records {
                r.id = format!("s{}-{}", idx, r.id);
            }
            info!(source = %source.name, count = records.len(), "來源抓取完成");
            remote.extend(records);
        }

        let locals: Vec<Reservation> = self
            .reservations
            .drain(..)
            .filter(|r| r.is_local)
            .collect();
        let remote_count = remote.len();

        // 遠端整批替換 + 本地串接（不去重、不改本地狀態）
        self.reservations = remote;
        self.reservations.extend(locals);

        let now = Local::now();
        for source in &mut self.sources {
            source.last_updated = Some(now);
        }

        self.store.save_reservations(&self.reservations);
        self.store.save_sources(&self.sources);

        Ok(remote_count)
    }

    // ==========================================
    // 來源管理
    // ==========================================

    pub fn add_source(&mut self, source: DataSource) {
        self.sources.push(source);
        self.store.save_sources(&self.sources);
    }

    pub fn remove_source(&mut self, id: &str) -> SyncApiResult<()> {
        let before = self.sources.len();
        self.sources.retain(|s| s.id != id);
        if self.sources.len() == before {
            return Err(SyncError::NotFound(id.to_string()));
        }
        self.store.save_sources(&self.sources);
        Ok(())
    }
}
