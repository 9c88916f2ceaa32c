// ==========================================
// 餐廳營運儀表板 - 遠端傳輸層
// ==========================================
// 職責: CSV 文字抓取 + 單向 JSON 推送
// 紅線: 推送端點依協議不可觀測 — 不檢視回應狀態碼與本體，
//       「無傳輸例外」是唯一的成功訊號，不得推斷更多
// ==========================================

use crate::sync::error::{SyncApiResult, SyncError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

// ==========================================
// RemoteTransport Trait
// ==========================================
// 實作者: HttpTransport（正式）、測試中的 Mock
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    /// 抓取文字本體（CSV 或 HTML）
    ///
    /// 非 2xx 狀態視為硬性失敗
    async fn fetch_text(&self, url: &str) -> SyncApiResult<String>;

    /// 推送單筆 JSON 序列化紀錄（text/plain 本體）
    ///
    /// 成功僅代表傳輸層未拋錯，不代表遠端實際接受
    async fn push_record(&self, url: &str, body: String) -> SyncApiResult<()>;
}

// ==========================================
// PushOutcome - 推送結果
// ==========================================
// 刻意只有兩值: 本協議下不存在「已確認」狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// 傳輸層未拋錯（遠端實際結果不可知）
    AcceptedByTransport,
    /// 傳輸層失敗，可重試
    TransportFailed(String),
}

// ==========================================
// HttpTransport - reqwest 實作
// ==========================================
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteTransport for HttpTransport {
    async fn fetch_text(&self, url: &str) -> SyncApiResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SyncError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SyncError::Fetch(e.to_string()))
    }

    async fn push_record(&self, url: &str, body: String) -> SyncApiResult<()> {
        self.client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| SyncError::Push(e.to_string()))?;

        // 回應狀態碼與本體刻意不檢視（端點契約如此）
        Ok(())
    }
}
