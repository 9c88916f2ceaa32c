// ==========================================
// 餐廳營運儀表板 - 匯入層
// ==========================================
// 職責: 外部表格文字 → 內部嚴格結構
// 容忍規則針對本店已知的輸入形狀，不是通用 CSV 函式庫
// ==========================================

// 模組宣告
pub mod date_cleaner;
pub mod error;
pub mod reservation_mapper;
pub mod roster_mapper;
pub mod sheet_tabs;
pub mod table_text;

// 重匯出核心型別
pub use date_cleaner::{normalize_date, normalize_date_with_year};
pub use error::{IngestError, IngestResult};
pub use reservation_mapper::{map_reservations, ColumnLayout, RESERVATION_COLUMNS};
pub use roster_mapper::map_roster;
pub use sheet_tabs::{diagnose, discover_tabs, DiscoveryOutcome};
pub use table_text::{parse_rows, scan_rows};
