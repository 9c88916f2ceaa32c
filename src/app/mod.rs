// ==========================================
// 餐廳營運儀表板 - 應用層
// ==========================================
// 職責: 狀態容器與服務組裝
// ==========================================

pub mod roster_service;
pub mod state;

pub use roster_service::RosterService;
pub use state::AppState;
