// ==========================================
// 餐廳營運儀表板 - 排班領域模型
// ==========================================
// 職責: 班表（員工 × 日期 班別代碼矩陣）結構定義
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// StaffRoster - 單一員工的月班表
// ==========================================
// shifts 為稀疏集合: 無班的日期直接缺席，不以空字串補零
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRoster {
    pub shop_name: String,
    pub staff_name: String,
    /// day-of-month → 班別代碼（BTreeMap 保持日期順序穩定）
    #[serde(default)]
    pub shifts: BTreeMap<u32, String>,
}

// ==========================================
// RosterData - 整月班表
// ==========================================
// year/month 為顯示字串，不再拆解（來源格式由排班者自由書寫）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterData {
    pub year: String,
    pub month: String,
    /// 來源表格實際出現的日期欄位，依欄位順序
    pub days: Vec<u32>,
    pub staff: Vec<StaffRoster>,
}

impl RosterData {
    /// 指定員工某日的班別代碼
    pub fn shift_for(&self, staff_name: &str, day: u32) -> Option<&str> {
        self.staff
            .iter()
            .find(|s| s.staff_name == staff_name)
            .and_then(|s| s.shifts.get(&day))
            .map(|code| code.as_str())
    }
}
