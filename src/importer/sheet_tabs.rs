// ==========================================
// 餐廳營運儀表板 - 試算表分頁探測
// ==========================================
// 職責: 「發佈到網路」總覽頁 HTML → 分頁 {name, gid} 清單
// 策略: (1) 頁面導覽選單結構 → (2) 內嵌 script 物件樣板回退
// 診斷: 零分頁 ≠ 例外 — 需區分發佈範圍問題與登入牆
// ==========================================

use crate::domain::SheetTab;
use regex::Regex;

// ==========================================
// DiscoveryOutcome - 探測結果診斷
// ==========================================
// 傳輸層失敗不在此列（由呼叫端的 SyncError 承載）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// 找到至少一個分頁
    Found(Vec<SheetTab>),
    /// 抓取成功但零分頁 — 多半是發佈範圍未含分頁或權限設定
    NoTabs,
    /// 回應內容是登入牆而非發佈頁
    AuthWall,
}

/// 自發佈頁 HTML 列舉分頁，保序；找不到回傳空集合
pub fn discover_tabs(html: &str) -> Vec<SheetTab> {
    let from_menu = parse_sheet_menu(html);
    if !from_menu.is_empty() {
        return from_menu;
    }
    parse_embedded_blob(html)
}

/// 探測 + 三類診斷（呼叫端已確認 HTTP 抓取成功）
pub fn diagnose(html: &str) -> DiscoveryOutcome {
    let tabs = discover_tabs(html);
    if !tabs.is_empty() {
        return DiscoveryOutcome::Found(tabs);
    }
    if looks_like_auth_wall(html) {
        DiscoveryOutcome::AuthWall
    } else {
        DiscoveryOutcome::NoTabs
    }
}

/// 策略 1: 發佈頁底部的分頁選單
/// 形如 <li id="sheet-button-123456"><a href="#">外場班表</a></li>
fn parse_sheet_menu(html: &str) -> Vec<SheetTab> {
    let re = Regex::new(r#"id="sheet-button-(\d+)"[^>]*>\s*<a[^>]*>([^<]+)</a>"#).unwrap();
    re.captures_iter(html)
        .map(|cap| SheetTab {
            gid: cap[1].to_string(),
            name: unescape_entities(cap[2].trim()),
        })
        .collect()
}

/// 策略 2: 內嵌 script 的 {"gid":"...","name":"..."} 物件掃描
fn parse_embedded_blob(html: &str) -> Vec<SheetTab> {
    let re = Regex::new(r#""gid"\s*:\s*"(\d+)"\s*,\s*"name"\s*:\s*"([^"]+)""#).unwrap();
    re.captures_iter(html)
        .map(|cap| SheetTab {
            gid: cap[1].to_string(),
            name: unescape_entities(&cap[2]),
        })
        .collect()
}

/// 登入牆啟發式: 帳號登入端點或密碼欄位出現在回應本體
fn looks_like_auth_wall(html: &str) -> bool {
    html.contains("accounts.google.com")
        || html.contains("ServiceLogin")
        || html.contains(r#"type="password""#)
}

/// 分頁名稱的最小實體還原（發佈頁僅出現這幾種）
fn unescape_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
