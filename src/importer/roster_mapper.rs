// ==========================================
// 餐廳營運儀表板 - 班表網格映射器
// ==========================================
// 職責: 固定版面的班表 CSV → RosterData
// 版面契約:
//   (0,0) 月份顯示字串   (0,2) 年份顯示字串
//   列 3 自欄 4 起為日期表頭，遇首個非整數即停
//   列 5 起每列一位員工: 欄 0 店別、欄 1 姓名（空則整列跳過）、
//   欄 4 起與日期表頭對位的班別代碼（空 = 當日無班，不補零）
// 紅線: 與訂位路徑相反，整體結構壞損是硬錯誤 — 半份班表沒有意義
// ==========================================

use crate::domain::{RosterData, StaffRoster};
use crate::importer::error::{IngestError, IngestResult};
use crate::importer::table_text::scan_rows;
use std::collections::BTreeMap;

/// 日期表頭起始欄 / 班別代碼起始欄
const DAY_HEADER_COL: usize = 4;
/// 日期表頭所在列
const DAY_HEADER_ROW: usize = 3;
/// 員工資料起始列
const STAFF_START_ROW: usize = 5;

/// 映射班表 CSV 文字
///
/// 使用單趟掃描方言（儲存格保留引號字元）。
/// 總列數不足 6 時回傳結構錯誤。
pub fn map_roster(csv_text: &str) -> IngestResult<RosterData> {
    let rows = scan_rows(csv_text);

    if rows.len() < 6 {
        return Err(IngestError::RosterShape { rows: rows.len() });
    }

    let month = cell(&rows[0], 0).to_string();
    let year = cell(&rows[0], 2).to_string();

    // 日期表頭: 由左至右讀取，尾端殘欄是常態，遇非整數即停不報錯
    let mut days: Vec<u32> = Vec::new();
    for raw in rows[DAY_HEADER_ROW].iter().skip(DAY_HEADER_COL) {
        match raw.trim().parse::<u32>() {
            Ok(day) => days.push(day),
            Err(_) => break,
        }
    }

    let mut staff = Vec::new();
    for row in rows.iter().skip(STAFF_START_ROW) {
        let staff_name = cell(row, 1);
        if staff_name.is_empty() {
            continue; // 姓名空白整列跳過
        }

        let mut shifts = BTreeMap::new();
        for (offset, day) in days.iter().enumerate() {
            let code = cell(row, DAY_HEADER_COL + offset);
            if !code.is_empty() {
                shifts.insert(*day, code.to_string());
            }
        }

        staff.push(StaffRoster {
            shop_name: cell(row, 0).to_string(),
            staff_name: staff_name.to_string(),
            shifts,
        });
    }

    Ok(RosterData { year, month, days, staff })
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.as_str()).unwrap_or("")
}
