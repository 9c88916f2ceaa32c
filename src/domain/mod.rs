// ==========================================
// 餐廳營運儀表板 - 領域層
// ==========================================
// 職責: 實體與型別定義，不含 I/O
// ==========================================

pub mod reservation;
pub mod roster;
pub mod source;

pub use reservation::{Reservation, ReservationDraft, ReservationKind, SyncStatus};
pub use roster::{RosterData, StaffRoster};
pub use source::{DataSource, RosterConfig, SheetTab};
