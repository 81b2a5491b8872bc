use clap::Parser;
use recipe_finder::core::{ResultsState, ResultsViewModel};
use recipe_finder::domain::ports::UrlOpener;
use recipe_finder::utils::{logger, validation::Validate};
use recipe_finder::{
    CliConfig, Cuisine, FileSelectionStore, Navigator, RecipeClient, ResolvedConfig, Screen,
    SelectorViewModel, SystemUrlOpener,
};
use std::io::{BufRead, Write};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting recipe-finder CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 合併 CLI / TOML / 預設值
    let config = match ResolvedConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    // 接線：儲存、狀態機、選擇畫面
    let store = Arc::new(FileSelectionStore::new(config.selection_path.clone()));
    let navigator = Arc::new(Navigator::new(Arc::clone(&store)));
    let selector = SelectorViewModel::new(Arc::clone(&navigator), config.catalog_override.clone());

    // 啟動路由：--cuisine 直接選擇，否則看有沒有儲存的選擇
    let screen = match &cli.cuisine {
        Some(name) => navigator.select(Cuisine::new(name.clone())),
        None => navigator.on_selector_entry().await,
    };

    let cuisine = match screen {
        Screen::Results(cuisine) => cuisine,
        Screen::Selector => prompt_selection(&selector)?,
    };

    tracing::info!("🔎 Searching {} recipes", cuisine);

    // 結果畫面：掛載即抓第一頁，--query 則視為已送出的搜尋
    let service = Arc::new(RecipeClient::new(config.clone()));
    let mut results = ResultsViewModel::new(
        service,
        cuisine.clone(),
        config.shape,
        config.page_size,
    );

    match &cli.query {
        Some(query) => {
            results.set_search_text(query.clone());
            results.submit().await;
        }
        None => results.on_mount().await,
    }

    // 失敗畫面帶一次重試
    if results.state().is_failed() {
        if let ResultsState::Failed(e) = results.state() {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
        if prompt_yes_no("Retry?")? {
            tracing::info!("🔁 Retrying search");
            results.retry().await;
        }
    }

    match results.state() {
        ResultsState::Loaded(recipes) => {
            if recipes.is_empty() {
                println!("No recipes found for {}", cuisine);
            } else {
                println!("🍽️  {} recipes for {}:", recipes.len(), cuisine);
                for (i, recipe) in recipes.iter().enumerate() {
                    println!(
                        "{:3}. {} — {} — {}",
                        i + 1,
                        recipe.label,
                        recipe.source,
                        recipe.external_url
                    );
                }

                if let Some(index) = cli.open {
                    open_result(recipes, index);
                }
            }
        }
        ResultsState::Failed(e) => {
            tracing::error!("❌ Recipe search failed: {}", e);
            std::process::exit(1);
        }
        other => {
            tracing::error!("Unexpected results state: {:?}", other);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// 印出目錄並讀取使用者的編號選擇
fn prompt_selection<S>(selector: &SelectorViewModel<S>) -> anyhow::Result<Cuisine>
where
    S: recipe_finder::domain::ports::SelectionStore + 'static,
{
    println!("Cuisine Types");
    for (i, cuisine) in selector.cuisines().iter().enumerate() {
        println!("{:3}. {}", i + 1, cuisine);
    }

    let stdin = std::io::stdin();
    loop {
        print!("Pick a cuisine (1-{}): ", selector.cuisines().len());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("No selection made");
        }

        let choice = line.trim();
        let screen = match choice.parse::<usize>() {
            Ok(n) if n >= 1 => selector.choose_index(n - 1),
            _ => selector
                .cuisines()
                .iter()
                .find(|c| c.as_str().eq_ignore_ascii_case(choice))
                .cloned()
                .map(|c| selector.choose(c)),
        };

        match screen {
            Some(Screen::Results(cuisine)) => return Ok(cuisine),
            _ => println!("Not a valid choice: {}", choice),
        }
    }
}

fn prompt_yes_no(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

/// --open N：把第 N 筆結果交給系統瀏覽器，開不成只記錄
fn open_result(recipes: &[recipe_finder::Recipe], index: usize) {
    let opener = SystemUrlOpener::new();
    match index.checked_sub(1).and_then(|i| recipes.get(i)) {
        Some(recipe) => {
            println!("🔗 Opening: {}", recipe.external_url);
            if let Err(e) = opener.open(&recipe.external_url) {
                tracing::warn!("Failed to open external URL: {}", e);
            }
        }
        None => tracing::warn!("--open {} is out of range", index),
    }
}
