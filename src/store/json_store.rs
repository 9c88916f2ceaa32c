// ==========================================
// 餐廳營運儀表板 - JSON 文件儲存
// ==========================================
// 職責: 三份獨立 JSON 文件的載入與覆寫
//   reservations.json / sources.json / roster.json
// 紅線: 檔案缺失或壞損 ⇒ 空集合起步，不是錯誤
//       寫入失敗只記日誌不往上拋 — 變更流程不因磁碟問題中斷
// ==========================================

use crate::domain::{DataSource, Reservation, RosterConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RESERVATIONS_FILE: &str = "reservations.json";
const SOURCES_FILE: &str = "sources.json";
const ROSTER_FILE: &str = "roster.json";

/// 預設資料目錄: <系統資料目錄>/resto-ops
pub fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resto-ops")
}

// ==========================================
// JsonStore - JSON 文件儲存
// ==========================================
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// 以指定目錄建立儲存（目錄不存在時建立）
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("資料目錄建立失敗 {}: {}", dir.display(), e);
        }
        Self { dir }
    }

    // ===== 訂位清單 =====

    pub fn load_reservations(&self) -> Vec<Reservation> {
        self.load(RESERVATIONS_FILE)
    }

    pub fn save_reservations(&self, reservations: &[Reservation]) {
        self.save(RESERVATIONS_FILE, &reservations);
    }

    // ===== 資料來源清單 =====

    pub fn load_sources(&self) -> Vec<DataSource> {
        self.load(SOURCES_FILE)
    }

    pub fn save_sources(&self, sources: &[DataSource]) {
        self.save(SOURCES_FILE, &sources);
    }

    // ===== 排班設定 =====

    pub fn load_roster_config(&self) -> RosterConfig {
        self.load(ROSTER_FILE)
    }

    pub fn save_roster_config(&self, config: &RosterConfig) {
        self.save(ROSTER_FILE, config);
    }

    // ===== 內部讀寫 =====

    /// 讀取整份文件；缺失或壞損回傳 Default
    fn load<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.path(name);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!("文件不存在，以空集合起步: {}", path.display());
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("文件壞損，以空集合起步 {}: {}", path.display(), e);
                T::default()
            }
        }
    }

    /// 覆寫整份文件；失敗記日誌不拋錯
    fn save<T: Serialize>(&self, name: &str, value: &T) {
        let path = self.path(name);
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("序列化失敗 {}: {}", name, e);
                return;
            }
        };
        if let Err(e) = fs::write(&path, json) {
            warn!("文件寫入失敗 {}: {}", path.display(), e);
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Reservation, ReservationDraft};
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_start_empty() {
        let tmp = TempDir::new().unwrap();
        let store = JsonStore::new(tmp.path());
        assert!(store.load_reservations().is_empty());
        assert!(store.load_sources().is_empty());
        assert!(store.load_roster_config().master_url.is_empty());
    }

    #[test]
    fn test_restart_round_trip() {
        let tmp = TempDir::new().unwrap();
        {
            let store = JsonStore::new(tmp.path());
            let r = Reservation::new_local(ReservationDraft {
                customer_name: "陳小姐".to_string(),
                time: "18:00".to_string(),
                pax: 4,
                date: "2025-12-18".to_string(),
                ..Default::default()
            });
            store.save_reservations(&[r]);
        }
        // 重啟: 新的儲存實例讀回同一目錄
        let store = JsonStore::new(tmp.path());
        let loaded = store.load_reservations();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].customer_name, "陳小姐");
        assert!(loaded[0].is_local);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("reservations.json"), "{不是 JSON").unwrap();
        let store = JsonStore::new(tmp.path());
        assert!(store.load_reservations().is_empty());
    }
}
