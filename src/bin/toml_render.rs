use clap::Parser;
use menu_render::core::loader::load_from_path;
use menu_render::core::partition::partition;
use menu_render::core::sorter::sort_for_display;
use menu_render::core::template::Template;
use menu_render::core::ConfigProvider;
use menu_render::utils::{logger, validation::Validate};
use menu_render::{BrowserViewer, LocalStorage, MenuEngine, MenuPipeline, NoopViewer, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-render")]
#[command(about = "Render menu pages from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "menu-render.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Never open a browser, whatever the config says
    #[arg(long)]
    no_open: bool,

    /// Dry run - show what would be rendered without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based menu render");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if args.no_open {
        config.output.open_in_browser = Some(false);
        tracing::info!("🔧 Browser opening disabled from the command line");
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        return perform_dry_run(&config);
    }

    let summary = if config.open_in_browser() {
        MenuEngine::new(MenuPipeline::new(LocalStorage::default(), BrowserViewer, config))
            .run()
            .await
    } else {
        MenuEngine::new(MenuPipeline::new(LocalStorage::default(), NoopViewer, config))
            .run()
            .await
    };

    match summary {
        Ok(summary) => {
            println!("✅ Rendered {} menu page(s)", summary.menus.len());
            for menu in &summary.menus {
                println!("📁 Menu {}: {} items -> {}", menu.menu_index, menu.items, menu.path);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Input: {}", config.input_path());
    tracing::info!("  Template: {}", config.template_path());
    tracing::info!("  Output: {}/{}", config.output_dir(), config.file_pattern());
    tracing::info!("  Menus: {:?}", config.menu_indices());
    tracing::info!("  Open in browser: {}", config.open_in_browser());
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let records = load_from_path(config.input_path())?;
    let template_source = std::fs::read_to_string(config.template_path())?;
    Template::parse(template_source)?;

    let groups = partition(sort_for_display(records), config.menu_indices());
    for (menu_index, records) in &groups.groups {
        println!(
            "Would write menu {} ({} items) to {}/{}",
            menu_index,
            records.len(),
            config.output_dir(),
            config.output_file_name(*menu_index)
        );
        for record in records {
            let marker = if record.is_vegetarian() { " (v)" } else { "" };
            println!("  {:>8}  {}{}", record.price_text(), record.name, marker);
        }
    }
    if groups.dropped > 0 {
        println!("{} item(s) would be skipped: menu index not configured", groups.dropped);
    }
    Ok(())
}
