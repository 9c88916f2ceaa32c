// ==========================================
// 餐廳營運儀表板 - 訂位資料映射器
// ==========================================
// 職責: 訂位 CSV 文字 → Reservation 序列 + 跳過列數
// 欄位契約: 固定位置制（試算表無表頭，欄序即協議）
// 紅線: 本路徑永不報錯 — 壞列丟棄、缺值補預設，試算表常見空尾列
// ==========================================

use crate::domain::{Reservation, ReservationKind};
use crate::importer::date_cleaner::normalize_date;
use crate::importer::table_text::parse_rows;
use tracing::debug;

// ==========================================
// ColumnLayout - 固定欄位配置
// ==========================================
// 欄 1 與欄 7 在來源表中另作他用，匯入不讀取
pub struct ColumnLayout {
    pub date: usize,
    pub kind: usize,
    pub time: usize,
    pub pax: usize,
    pub name: usize,
    pub phone: usize,
    pub table: usize,
}

/// 訂位表標準欄位位置
pub const RESERVATION_COLUMNS: ColumnLayout = ColumnLayout {
    date: 0,
    kind: 2,
    time: 3,
    pax: 4,
    name: 5,
    phone: 6,
    table: 8,
};

/// 缺姓名時的占位標籤
pub const UNKNOWN_GUEST: &str = "未知客人";

/// 映射訂位 CSV 文字
///
/// 回傳 (紀錄序列, 跳過列數)。列序與輸入一致；日期欄為空或
/// 無法標準化的列靜默丟棄並計入跳過數。
pub fn map_reservations(csv_text: &str) -> (Vec<Reservation>, usize) {
    let rows = parse_rows(csv_text);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, row) in rows.iter().enumerate() {
        let date_raw = cell(row, RESERVATION_COLUMNS.date);
        if date_raw.is_empty() {
            skipped += 1;
            continue;
        }
        let date = match normalize_date(date_raw) {
            Some(d) => d,
            None => {
                debug!(row = row_idx, raw = date_raw, "日期無法標準化，跳過此列");
                skipped += 1;
                continue;
            }
        };

        let pax = cell(row, RESERVATION_COLUMNS.pax)
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(1);

        let name = cell(row, RESERVATION_COLUMNS.name);
        let time = cell(row, RESERVATION_COLUMNS.time);

        records.push(Reservation {
            // 合成識別: 以輸入列位置派生
            id: format!("remote-{}", row_idx),
            customer_name: if name.is_empty() {
                UNKNOWN_GUEST.to_string()
            } else {
                name.to_string()
            },
            time: if time.is_empty() { "00:00".to_string() } else { time.to_string() },
            pax,
            date,
            kind: ReservationKind::from(cell(row, RESERVATION_COLUMNS.kind).to_string()),
            phone: cell(row, RESERVATION_COLUMNS.phone).to_string(),
            table_label: cell(row, RESERVATION_COLUMNS.table).to_string(),
            notes: String::new(),
            is_local: false,
            sync_status: None, // 遠端紀錄永不攜帶同步狀態
        });
    }

    (records, skipped)
}

/// 越界欄位視為空字串（尾欄缺省是常態）
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.as_str()).unwrap_or("")
}
