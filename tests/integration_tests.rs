use menu_render::{CliConfig, LocalStorage, MenuEngine, MenuError, MenuPipeline, NoopViewer};
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = "<!DOCTYPE html>\n<html><head><title>Menu</title></head>\n\
<body>\n<div class=\"menuWrap\">\n</div>\n</body></html>\n";

fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn config() -> CliConfig {
    CliConfig {
        no_open: true,
        ..CliConfig::default()
    }
}

async fn run_in(dir: &Path, config: CliConfig) -> menu_render::Result<menu_render::RunSummary> {
    let pipeline = MenuPipeline::new(LocalStorage::new(dir), NoopViewer, config);
    MenuEngine::new(pipeline).run().await
}

fn item_names(html: &str) -> Vec<String> {
    html.split("<span class=\"itemName")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find('>')? + 1;
            let end = chunk.find("</span>")?;
            Some(chunk[start..end].to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_end_to_end_render() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "menu/menu.csv",
        "Sandwich_Name,Ingredients,Menu_Index,Price,Flag\n\
Turkey Club,\"Turkey, bacon\",1,7.50,\n\
Veggie Delight,\"Hummus, greens\",1,6.00,v\n\
BLT,\"Bacon, lettuce\",1,6.00,\n\
Reuben,\"Corned beef\",2,8.25,\n\
Falafel,\"Chickpea, tahini\",2,7.00,V\n\
Soup of the Day,Ask staff,3,4.00,v\n",
    );
    write(temp_dir.path(), "template/index.html", TEMPLATE);

    let summary = run_in(temp_dir.path(), config()).await.unwrap();

    assert_eq!(summary.records_loaded, 6);
    assert_eq!(summary.records_dropped, 1);
    assert_eq!(summary.menus.len(), 2);

    let menu_1 = std::fs::read_to_string(temp_dir.path().join("output/menu_1.html")).unwrap();
    let menu_2 = std::fs::read_to_string(temp_dir.path().join("output/menu_2.html")).unwrap();

    assert_eq!(item_names(&menu_1), vec!["Veggie Delight", "BLT", "Turkey Club"]);
    assert_eq!(item_names(&menu_2), vec!["Falafel", "Reuben"]);

    assert!(menu_1.contains("<span class=\"itemName vegetarian\">Veggie Delight</span>"));
    assert!(menu_1.contains("<span class=\"itemName\">BLT</span>"));
    assert!(menu_1.contains("<span class=\"itemDescription\">Hummus, greens</span>"));
    assert!(menu_2.contains("<span class=\"itemPrice\">8.25</span>"));

    for page in [&menu_1, &menu_2] {
        assert!(!page.contains("Soup of the Day"));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Menu</title>"));
    }
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "menu/menu.csv",
        "Sandwich_Name,Ingredients,Menu_Index,Price,Flag\nBLT,Bacon,1,6.00,\nCaprese,Tomato,2,5.00,v\n",
    );
    write(temp_dir.path(), "template/index.html", TEMPLATE);

    run_in(temp_dir.path(), config()).await.unwrap();
    let first = std::fs::read_to_string(temp_dir.path().join("output/menu_1.html")).unwrap();
    run_in(temp_dir.path(), config()).await.unwrap();
    let second = std::fs::read_to_string(temp_dir.path().join("output/menu_1.html")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_custom_paths_and_pattern() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "data/lunch.csv",
        "Sandwich_Name,Ingredients,Menu_Index,Price,Flag\nBLT,Bacon,3,6.00\n",
    );
    write(temp_dir.path(), "layout/board.htm", TEMPLATE);

    let config = CliConfig {
        input: "data/lunch.csv".to_string(),
        template: "layout/board.htm".to_string(),
        output_dir: "boards".to_string(),
        file_pattern: "board-{index}.html".to_string(),
        menu_indices: vec![3],
        ..config()
    };

    let summary = run_in(temp_dir.path(), config).await.unwrap();
    assert_eq!(summary.menus.len(), 1);
    assert_eq!(summary.records_dropped, 0);
    assert!(temp_dir.path().join("boards/board-3.html").exists());
    assert!(!temp_dir.path().join("boards/board-1.html").exists());
}

#[tokio::test]
async fn test_negative_menu_index_is_skipped_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "menu/menu.csv",
        "Sandwich_Name,Ingredients,Menu_Index,Price,Flag\nBLT,Bacon,1,6.00,\nOld,Gone,-1,5.00,\nClub,Ham,2.0,7.00,\n",
    );
    write(temp_dir.path(), "template/index.html", TEMPLATE);

    let summary = run_in(temp_dir.path(), config()).await.unwrap();
    assert_eq!(summary.records_loaded, 3);
    assert_eq!(summary.records_dropped, 1);

    let menu_1 = std::fs::read_to_string(temp_dir.path().join("output/menu_1.html")).unwrap();
    let menu_2 = std::fs::read_to_string(temp_dir.path().join("output/menu_2.html")).unwrap();
    assert_eq!(item_names(&menu_1), vec!["BLT"]);
    assert_eq!(item_names(&menu_2), vec!["Club"]);
}

#[tokio::test]
async fn test_malformed_price_aborts_before_output() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "menu/menu.csv",
        "Sandwich_Name,Ingredients,Menu_Index,Price,Flag\nBLT,Bacon,1,six dollars,\n",
    );
    write(temp_dir.path(), "template/index.html", TEMPLATE);

    let err = run_in(temp_dir.path(), config()).await.unwrap_err();

    assert!(matches!(err, MenuError::MalformedInput { .. }));
    assert!(!temp_dir.path().join("output").exists());
}

#[tokio::test]
async fn test_template_without_insertion_point() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "menu/menu.csv",
        "Sandwich_Name,Ingredients,Menu_Index,Price,Flag\nBLT,Bacon,1,6.00,\n",
    );
    write(temp_dir.path(), "template/index.html", "<html><body><p>empty</p></body></html>");

    let err = run_in(temp_dir.path(), config()).await.unwrap_err();

    assert!(matches!(err, MenuError::Template { .. }));
    assert!(!temp_dir.path().join("output/menu_1.html").exists());
}

#[tokio::test]
async fn test_summary_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "menu/menu.csv",
        "Sandwich_Name,Ingredients,Menu_Index,Price,Flag\nBLT,Bacon,1,6.00,\n",
    );
    write(temp_dir.path(), "template/index.html", TEMPLATE);

    let summary = run_in(temp_dir.path(), config()).await.unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["records_loaded"], 1);
    assert_eq!(json["menus"][0]["menu_index"], 1);
    assert_eq!(json["menus"][1]["items"], 0);
}
