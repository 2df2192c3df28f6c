use clap::Parser;
use menu_render::core::ConfigProvider;
use menu_render::utils::error::ErrorSeverity;
use menu_render::utils::{logger, validation::Validate};
use menu_render::{BrowserViewer, CliConfig, LocalStorage, MenuEngine, MenuPipeline, NoopViewer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting menu-render");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let json_summary = config.json_summary;
    let result = if config.open_in_browser() {
        let pipeline = MenuPipeline::new(LocalStorage::default(), BrowserViewer, config);
        MenuEngine::new(pipeline).run().await
    } else {
        let pipeline = MenuPipeline::new(LocalStorage::default(), NoopViewer, config);
        MenuEngine::new(pipeline).run().await
    };

    match result {
        Ok(summary) => {
            if json_summary {
                println!("{}", summary.to_json()?);
            } else {
                println!("✅ Rendered {} menu page(s)", summary.menus.len());
                for menu in &summary.menus {
                    println!("📁 Menu {}: {} items -> {}", menu.menu_index, menu.items, menu.path);
                }
                if summary.records_dropped > 0 {
                    println!(
                        "⚠️ {} item(s) skipped: menu index not configured",
                        summary.records_dropped
                    );
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
