// ==========================================
// 餐廳營運儀表板 - 本地持久層
// ==========================================
// 職責: JSON 文件整份讀寫（啟動讀一次、每次變更即寫）
// ==========================================

pub mod json_store;

pub use json_store::{default_store_dir, JsonStore};
