use crate::core::navigation::{Navigator, Screen};
use crate::domain::model::{Cuisine, CUISINE_CATALOG};
use crate::domain::ports::SelectionStore;
use std::sync::Arc;

/// 選擇畫面的視圖模型：依目錄順序列出料理，點選交給狀態機
pub struct SelectorViewModel<S: SelectionStore + 'static> {
    navigator: Arc<Navigator<S>>,
    catalog: Vec<Cuisine>,
}

impl<S: SelectionStore + 'static> SelectorViewModel<S> {
    /// `catalog_override` 為部署變體的目錄（如 21 項清單），
    /// 不給就用內建目錄。
    pub fn new(navigator: Arc<Navigator<S>>, catalog_override: Option<Vec<String>>) -> Self {
        let catalog = match catalog_override {
            Some(entries) => entries.into_iter().map(Cuisine::new).collect(),
            None => CUISINE_CATALOG.iter().map(|&c| Cuisine::from(c)).collect(),
        };
        Self { navigator, catalog }
    }

    pub fn cuisines(&self) -> &[Cuisine] {
        &self.catalog
    }

    /// 以目錄索引點選（CLI 的編號輸入）
    pub fn choose_index(&self, index: usize) -> Option<Screen> {
        self.catalog
            .get(index)
            .cloned()
            .map(|cuisine| self.navigator.select(cuisine))
    }

    /// 點選一個料理。不驗證是否在目錄內。
    pub fn choose(&self, cuisine: Cuisine) -> Screen {
        self.navigator.select(cuisine)
    }
}
