// ==========================================
// 餐廳營運儀表板 - 試算表匯出網址改寫
// ==========================================
// 職責: 使用者貼上的試算表網址 → 標準 CSV 匯出端點
// 認得的形狀才改寫，其餘網址原樣使用
// ==========================================

use regex::Regex;

/// 改寫為 CSV 匯出端點，gid 為可選的分頁選擇器
///
/// - 發佈連結（/spreadsheets/d/e/<id>/...）→ /pub?single=true&output=csv
/// - 文件連結（/spreadsheets/d/<id>/...）→ /gviz/tq?tqx=out:csv
/// - 其他 → 原樣回傳
pub fn to_csv_export_url(url: &str, gid: Option<&str>) -> String {
    let published = Regex::new(r"docs\.google\.com/spreadsheets/d/e/([A-Za-z0-9_-]+)").unwrap();
    if let Some(cap) = published.captures(url) {
        let mut out = format!(
            "https://docs.google.com/spreadsheets/d/e/{}/pub?single=true&output=csv",
            &cap[1]
        );
        if let Some(g) = gid {
            out.push_str("&gid=");
            out.push_str(g);
        }
        return out;
    }

    let document = Regex::new(r"docs\.google\.com/spreadsheets/d/([A-Za-z0-9_-]+)").unwrap();
    if let Some(cap) = document.captures(url) {
        let mut out = format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv",
            &cap[1]
        );
        if let Some(g) = gid {
            out.push_str("&gid=");
            out.push_str(g);
        }
        return out;
    }

    url.to_string()
}

/// 改寫為發佈總覽頁（分頁探測用）；不認得的網址原樣回傳
pub fn to_pubhtml_url(url: &str) -> String {
    let published = Regex::new(r"docs\.google\.com/spreadsheets/d/e/([A-Za-z0-9_-]+)").unwrap();
    match published.captures(url) {
        Some(cap) => format!(
            "https://docs.google.com/spreadsheets/d/e/{}/pubhtml",
            &cap[1]
        ),
        None => url.to_string(),
    }
}
