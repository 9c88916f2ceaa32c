// ==========================================
// 餐廳營運儀表板 - 主入口
// ==========================================
// 職責: 啟動載入 + 一次性整批更新（呈現層另行掛載）
// ==========================================

use resto_ops::app::AppState;
use resto_ops::store::default_store_dir;

#[tokio::main]
async fn main() {
    resto_ops::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 訂位同步與排班系統", resto_ops::APP_NAME);
    tracing::info!("系統版本: {}", resto_ops::VERSION);
    tracing::info!("==================================================");

    let store_dir = default_store_dir();
    tracing::info!("資料目錄: {}", store_dir.display());

    let mut state = AppState::with_http(&store_dir);
    tracing::info!(
        reservations = state.coordinator.reservations().len(),
        sources = state.coordinator.sources().len(),
        "啟動載入完成"
    );

    // 已設定來源時做一次整批更新
    if !state.coordinator.sources().is_empty() {
        match state.coordinator.refresh_all().await {
            Ok(count) => tracing::info!(remote = count, "整批更新完成"),
            Err(e) => tracing::warn!("整批更新失敗，既有紀錄未動: {}", e),
        }
    } else {
        tracing::info!("尚未設定任何資料來源");
    }
}
