// ==========================================
// 餐廳營運儀表板 - 表格文字解析器
// ==========================================
// 職責: 原始匯出文字 → 逐列字串儲存格
// 支援兩種方言:
//   1. RFC-4180（csv crate）— 去引號，引號內可含逗號與換行
//   2. 單趟掃描 — 引號字元保留在儲存格文字中，僅逐行處理
// 紅線: 兩個呼叫端依賴不同的去引號行為，方言不可互換
// ==========================================

use csv::ReaderBuilder;

/// RFC-4180 路徑: 訂位 CSV 使用
///
/// - 儲存格外層雙引號剝除，`""` 還原為 `"`
/// - 引號內的逗號與換行不結束儲存格
/// - 每格左右去空白
/// - 空白行不產生資料列
/// - 引號格式壞損不報錯，盡力解析；讀取中斷即回傳已解析的列
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // 允許列長不一致
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => {
                rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
            }
            // 壞損列跳過，後續列繼續
            Err(_) => continue,
        }
    }
    rows
}

/// 單趟掃描路徑: 班表 CSV 使用
///
/// 逐行處理；每遇引號字元切換「引號內」旗標，僅在旗標關閉時以逗號分格。
/// 引號字元「不」自儲存格剝除 — 班表呼叫端依賴原樣文字。
/// 去空白後為空的行產生一個空列（零個儲存格），呼叫端視為無資料。
pub fn scan_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                return Vec::new();
            }

            let mut cells = Vec::new();
            let mut current = String::new();
            let mut in_quotes = false;

            for ch in line.chars() {
                match ch {
                    '"' => {
                        in_quotes = !in_quotes;
                        current.push(ch); // 引號保留
                    }
                    ',' if !in_quotes => {
                        cells.push(current.trim().to_string());
                        current = String::new();
                    }
                    _ => current.push(ch),
                }
            }
            // 未閉合引號直接吃到行尾
            cells.push(current.trim().to_string());
            cells
        })
        .collect()
}
