// ==========================================
// 餐廳營運儀表板 - 日期清洗器
// ==========================================
// 職責: 異質日期字串 → 標準 YYYY-MM-DD
// 輸入來源為人工編輯的試算表，需容忍:
//   - 星期註記 (三) / （三）
//   - 年月日分隔 113年5月1日
//   - 民國年 / 西元兩位年 / 西元四位年
//   - . 與 - 分隔
// 紅線: 任何輸入皆不 panic 不報錯，壞值回傳 None 由呼叫端過濾
// ==========================================

use chrono::{Datelike, Local, NaiveDate};

/// 標準化日期字串，使用系統當前年份補足兩段式輸入
pub fn normalize_date(raw: &str) -> Option<String> {
    normalize_date_with_year(raw, Local::now().year())
}

/// 標準化日期字串（年份外部注入，供測試與補年規則使用）
///
/// 回傳 Some("YYYY-MM-DD") 或 None（無法辨識 / 非法日曆日期）
pub fn normalize_date_with_year(raw: &str, current_year: i32) -> Option<String> {
    let mut s = raw.trim().to_string();
    if s.is_empty() {
        return None;
    }

    // 1. 去除括號註記（半形與全形）
    s = strip_parenthetical(&s, '(', ')');
    s = strip_parenthetical(&s, '（', '）');

    // 2-3. 年月日與 . - 分隔統一為斜線
    s = s
        .replace(['年', '月', '日'], "/")
        .replace(['.', '-'], "/");

    // 4. 丟棄時刻尾巴（第一個空白之後）
    let s = s.split_whitespace().next().unwrap_or("").to_string();

    // 5. 切段，丟空段
    let segments: Vec<&str> = s.split('/').filter(|seg| !seg.is_empty()).collect();

    let (year, month, day) = match segments.len() {
        // 6. 月/日 → 年份補當年
        2 => {
            let month = segments[0].trim().parse::<u32>().ok()?;
            let day = segments[1].trim().parse::<u32>().ok()?;
            (current_year, month, day)
        }
        // 7. 年/月/日 → 年份消歧
        3 => {
            let year = segments[0].trim().parse::<i32>().ok()?;
            let month = segments[1].trim().parse::<u32>().ok()?;
            let day = segments[2].trim().parse::<u32>().ok()?;
            (resolve_year(year), month, day)
        }
        // 8. 其他形狀 → 泛用格式回退
        _ => {
            let parsed = parse_fallback(raw.trim())?;
            (
                resolve_year(parsed.year()),
                parsed.month(),
                parsed.day(),
            )
        }
    };

    // 9. 以日曆重建驗證，阻止 2/30 之類的翻頁
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    // 10. 零填充輸出
    Some(format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()))
}

/// 年份消歧: [100,199] 視為民國年 +1911；<100 視為 2000 年代；其餘照錄
fn resolve_year(year: i32) -> i32 {
    if (100..=199).contains(&year) {
        year + 1911
    } else if year < 100 {
        year + 2000
    } else {
        year
    }
}

/// 去除一組括號及其內容（含未閉合括號: 吃到字串尾）
fn strip_parenthetical(s: &str, open: char, close: char) -> String {
    match s.find(open) {
        None => s.to_string(),
        Some(start) => {
            let head = &s[..start];
            let rest = &s[start + open.len_utf8()..];
            let tail = match rest.find(close) {
                Some(end) => &rest[end + close.len_utf8()..],
                None => "",
            };
            format!("{}{}", head.trim(), tail.trim())
        }
    }
}

/// 泛用日期字串回退解析（非 2/3 段形狀時使用）
fn parse_fallback(raw: &str) -> Option<NaiveDate> {
    const FORMATS: &[&str] = &["%Y%m%d", "%Y-%m-%dT%H:%M:%S", "%b %d, %Y", "%B %d, %Y", "%d %b %Y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
