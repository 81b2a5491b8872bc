use crate::core::query;
use crate::domain::model::{Cuisine, QueryDescriptor, QueryShape, Recipe};
use crate::domain::ports::RecipeService;
use crate::utils::error::{RecipeError, Result};
use std::sync::Arc;

/// 結果畫面的狀態機：Idle → Loading → Loaded | Failed
#[derive(Debug)]
pub enum ResultsState {
    Idle,
    Loading,
    Loaded(Vec<Recipe>),
    Failed(RecipeError),
}

impl ResultsState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ResultsState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ResultsState::Failed(_))
    }
}

/// 結果畫面的視圖模型。持有目前的搜尋文字與結果清單，
/// 並以遞增序號保證快速連續送出時只呈現最後一次的結果。
pub struct ResultsViewModel<R: RecipeService> {
    service: Arc<R>,
    cuisine: Cuisine,
    search_text: String,
    shape: QueryShape,
    page_size: usize,
    state: ResultsState,
    /// 最後一次發出的序號；完成的回應序號不等於它就丟棄
    issued_seq: u64,
}

impl<R: RecipeService> ResultsViewModel<R> {
    pub fn new(service: Arc<R>, cuisine: Cuisine, shape: QueryShape, page_size: usize) -> Self {
        Self {
            service,
            cuisine,
            search_text: String::new(),
            shape,
            page_size,
            state: ResultsState::Idle,
            issued_seq: 0,
        }
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn cuisine(&self) -> &Cuisine {
        &self.cuisine
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// 每次鍵入只更新文字，不觸發查詢
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// 清除搜尋文字。不自動重新查詢，需再次明確送出。
    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// 目前條件對應的查詢描述（第一頁視窗）
    pub fn current_descriptor(&self) -> QueryDescriptor {
        query::first_page(
            self.cuisine.clone(),
            self.search_text.clone(),
            self.shape,
            self.page_size,
        )
    }

    /// 發出一次查詢：進入 Loading 並取得新的序號與描述。
    /// 與 [`apply`](Self::apply) 搭配，讓呼叫端能並行發出多次查詢。
    pub fn begin_fetch(&mut self) -> (u64, QueryDescriptor) {
        self.issued_seq += 1;
        self.state = ResultsState::Loading;
        (self.issued_seq, self.current_descriptor())
    }

    /// 套用一次查詢的完成結果。序號不是最新的就丟棄不呈現。
    pub fn apply(&mut self, seq: u64, result: Result<Vec<Recipe>>) {
        if seq != self.issued_seq {
            tracing::debug!(
                "Discarding stale fetch result (seq {}, latest {})",
                seq,
                self.issued_seq
            );
            return;
        }

        self.state = match result {
            Ok(recipes) => ResultsState::Loaded(recipes),
            Err(e) => ResultsState::Failed(e),
        };
    }

    /// 畫面掛載：以空搜尋文字抓第一頁
    pub async fn on_mount(&mut self) {
        self.submit().await;
    }

    /// 明確送出搜尋（按下 enter 或搜尋鍵），取代任何進行中或先前的結果
    pub async fn submit(&mut self) {
        let (seq, descriptor) = self.begin_fetch();
        let result = self.service.search(&descriptor).await;
        self.apply(seq, result);
    }

    /// 失敗後的重試：以相同條件重新送出
    pub async fn retry(&mut self) {
        self.submit().await;
    }
}
