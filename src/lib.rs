// ==========================================
// 餐廳營運儀表板 - 核心庫
// ==========================================
// 技術棧: Rust + reqwest + 本地 JSON 持久層
// 系統定位: 訂位同步與排班檢視的資料層（呈現層另行實作）
// ==========================================

// ==========================================
// 模組宣告
// ==========================================

// 領域層 - 實體與型別
pub mod domain;

// 匯入層 - 外部表格資料
pub mod importer;

// 同步層 - 遠端調和
pub mod sync;

// 持久層 - 本地 JSON 文件
pub mod store;

// 日誌系統
pub mod logging;

// 應用層 - 狀態容器
pub mod app;

// ==========================================
// 重匯出核心型別
// ==========================================

// 領域實體
pub use domain::{
    DataSource, Reservation, ReservationDraft, ReservationKind, RosterConfig, RosterData,
    SheetTab, StaffRoster, SyncStatus,
};

// 匯入層
pub use importer::{
    map_reservations, map_roster, normalize_date, DiscoveryOutcome, IngestError, IngestResult,
};

// 同步層
pub use sync::{
    HttpTransport, PushOutcome, RemoteTransport, SyncApiResult, SyncCoordinator, SyncError,
};

// 應用層
pub use app::{AppState, RosterService};

// ==========================================
// 常量定義
// ==========================================

// 系統版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系統名稱
pub const APP_NAME: &str = "餐廳營運儀表板";
