// ==========================================
// 餐廳營運儀表板 - 同步層
// ==========================================
// 職責: 傳輸抽象、匯出網址改寫、本地/遠端調和狀態機
// ==========================================

// 模組宣告
pub mod coordinator;
pub mod error;
pub mod export_url;
pub mod transport;

// 重匯出核心型別
pub use coordinator::SyncCoordinator;
pub use error::{SyncApiResult, SyncError};
pub use export_url::{to_csv_export_url, to_pubhtml_url};
pub use transport::{HttpTransport, PushOutcome, RemoteTransport};
