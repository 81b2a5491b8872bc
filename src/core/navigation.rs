use crate::domain::model::Cuisine;
use crate::domain::ports::SelectionStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 目前顯示的畫面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Selector,
    Results(Cuisine),
}

/// 畫面轉換狀態機。啟動時讀取持久化的選擇決定起始畫面；
/// 點選料理時寫入不等待、直接前往結果畫面。
pub struct Navigator<S: SelectionStore + 'static> {
    store: Arc<S>,
    /// 本行程已導向過結果畫面後，返回選擇畫面不再自動轉向
    routed_once: AtomicBool,
}

impl<S: SelectionStore + 'static> Navigator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            routed_once: AtomicBool::new(false),
        }
    }

    /// 進入選擇畫面時呼叫。第一次進入會非同步查詢儲存的選擇，
    /// 有值就直接轉向結果畫面；讀取失敗視同沒有選擇過。
    pub async fn on_selector_entry(&self) -> Screen {
        if self.routed_once.load(Ordering::Acquire) {
            return Screen::Selector;
        }

        match self.store.get().await {
            Ok(Some(cuisine)) => {
                self.routed_once.store(true, Ordering::Release);
                tracing::info!("Restoring previous selection: {}", cuisine);
                Screen::Results(cuisine)
            }
            Ok(None) => Screen::Selector,
            Err(e) => {
                // 讀取失敗不讓使用者看到，當作沒有選擇過
                tracing::debug!("Selection read failed, showing selector: {}", e);
                Screen::Selector
            }
        }
    }

    /// 使用者點選料理。寫入是射後不理：不等待確認、失敗只記錄，
    /// 畫面立即轉向結果。
    pub fn select(&self, cuisine: Cuisine) -> Screen {
        self.routed_once.store(true, Ordering::Release);

        let store = Arc::clone(&self.store);
        let to_save = cuisine.clone();
        tokio::spawn(async move {
            if let Err(e) = store.set(&to_save).await {
                tracing::warn!("Failed to persist cuisine selection: {}", e);
            }
        });

        Screen::Results(cuisine)
    }
}
