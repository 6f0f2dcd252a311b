//! ブラウズ操作のシナリオテスト
//!
//! 読み込みからページ送り、モーダル表示までを通しで検証

use report_browser_common::{
    loader, BrowseState, CompareView, Dataset, Error, ModalSet, PaginationView, Price, Report,
    TableBody,
};

/// RUST_LOG=debug でページング時のログを確認できる
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn numbered_reports(n: usize) -> Vec<Report> {
    (1..=n)
        .map(|i| Report {
            query: Some(format!("report {}", i)),
            usd_value: Some(Price::Number(i as f64)),
            ..Default::default()
        })
        .collect()
}

fn visible_queries(state: &BrowseState) -> Vec<String> {
    state.body().rows().iter().map(|r| r.query.clone()).collect()
}

/// 任意のページサイズ・件数でページ範囲が正しいこと
#[test]
fn test_slices_match_collection_for_all_sizes() {
    init_tracing();

    for size in 1..=7 {
        for n in 0..=23 {
            let reports = numbered_reports(n);
            let mut state = BrowseState::new(size);
            state.loaded(Dataset::from(reports.clone()));

            let expected_pages = std::cmp::max(1, n.div_ceil(size));
            assert_eq!(state.total_pages(), expected_pages, "size={} n={}", size, n);

            for page in 1..=expected_pages {
                state.show_page(page);
                let start = ((page - 1) * size).min(n);
                let end = (page * size).min(n);
                let expected: Vec<String> = reports[start..end]
                    .iter()
                    .map(|r| r.query.clone().unwrap_or_default())
                    .collect();

                assert_eq!(visible_queries(&state), expected, "size={} n={} page={}", size, n, page);
                assert!(state.showing_count() <= size);
            }
        }
    }
}

/// 同じページを2回描画しても結果が変わらない
#[test]
fn test_show_page_is_idempotent() {
    let mut state = BrowseState::new(5);
    state.loaded(Dataset::from(numbered_reports(12)));

    state.show_page(2);
    let first = state.body().clone();
    state.show_page(2);
    assert_eq!(state.body(), &first);
}

/// 空コレクションは「結果なし」でエラーにならない
#[test]
fn test_empty_collection_shows_no_results() {
    let mut state = BrowseState::new(5);
    state.loaded(Dataset::default());

    assert_eq!(state.body(), &TableBody::Empty);
    assert_eq!(state.showing_count(), 0);
    let placeholder = state.body().placeholder().expect("プレースホルダがあるはず");
    assert_eq!(placeholder.message, "No results found");
    assert_eq!(state.pagination(), PaginationView::new(1, 1));
}

/// prev/next の無効化はページ位置と一致する
#[test]
fn test_controls_disabled_exactly_at_bounds() {
    let mut state = BrowseState::new(3);
    state.loaded(Dataset::from(numbered_reports(10)));

    for page in 1..=state.total_pages() {
        state.show_page(page);
        let pagination = state.pagination();
        assert_eq!(pagination.prev_disabled, page == 1);
        assert_eq!(pagination.next_disabled, page == state.total_pages());
    }
}

/// 12件・5件表示で next を2回押す
#[test]
fn test_twelve_reports_page_through() {
    let mut state = BrowseState::new(5);
    state.loaded(Dataset::from(numbered_reports(12)));

    assert_eq!(state.total_pages(), 3);
    assert_eq!(
        visible_queries(&state),
        (1..=5).map(|i| format!("report {}", i)).collect::<Vec<_>>()
    );

    assert!(state.go_to_next());
    assert_eq!(state.current_page(), 2);
    assert_eq!(
        visible_queries(&state),
        (6..=10).map(|i| format!("report {}", i)).collect::<Vec<_>>()
    );

    assert!(state.go_to_next());
    assert_eq!(state.current_page(), 3);
    assert_eq!(visible_queries(&state), vec!["report 11", "report 12"]);
    assert!(state.pagination().next_disabled);

    // 最終ページで next は何もしない
    assert!(!state.go_to_next());
    assert_eq!(state.current_page(), 3);
}

/// 404 は終端エラー行になり件数は0
#[test]
fn test_http_404_shows_terminal_error() {
    let mut state = BrowseState::new(5);
    match loader::parse_response(404, "Not Found") {
        Ok(dataset) => state.loaded(dataset),
        Err(e) => {
            assert!(matches!(e, Error::HttpStatus(404)));
            state.load_failed(&e);
        }
    }

    assert_eq!(state.body(), &TableBody::LoadFailed);
    assert_eq!(state.showing_count(), 0);
    assert_eq!(state.pagination(), PaginationView::new(1, 1));
    let placeholder = state.body().placeholder().expect("エラー行があるはず");
    assert_eq!(placeholder.class, "error");
}

/// トップレベルがオブジェクトだとページング時にエラー行
#[test]
fn test_non_array_document_renders_inline_error() {
    let mut state = BrowseState::new(5);
    let dataset = loader::parse_response(200, r#"{"items": []}"#).expect("パースは成功する");
    state.loaded(dataset);

    let placeholder = state.body().placeholder().expect("エラー行があるはず");
    assert_eq!(placeholder.message, "Error loading results: Local data is not an array");
    assert_eq!(state.showing_count(), 0);
}

/// dbUsdValue が null のレポートで比較モーダルを開く
#[test]
fn test_compare_modal_placeholder_for_null_db_value() {
    let body = r#"[{
        "query": "Pocket Watch",
        "usdValue": 45.5,
        "lowestPrice": 30,
        "highestPrice": 60,
        "dbUsdValue": null,
        "dbLowestPrice": 28,
        "dbHighestPrice": "65"
    }]"#;
    let mut state = BrowseState::new(5);
    state.loaded(loader::parse_response(200, body).expect("パース失敗"));

    let row = state.body().rows().first().expect("1行あるはず").clone();
    let mut modals = ModalSet::default();
    modals.compare.open(row.compare);

    assert_eq!(
        modals.compare.payload(),
        Some(&CompareView {
            query: "Pocket Watch".to_string(),
            actual_value: "$45.5".to_string(),
            actual_low: "$30".to_string(),
            actual_high: "$60".to_string(),
            db_value: "-".to_string(),
            db_low: "$28".to_string(),
            db_high: "$65".to_string(),
        })
    );

    modals.handle_key("Escape");
    assert!(!modals.compare.is_open());
}

/// 型の合わないフィールドがあっても他のセルはそのまま表示される
#[test]
fn test_row_with_mistyped_field_keeps_other_cells() {
    let body = r#"[{"query": 123, "usdValue": 10, "lowestPrice": 5, "highestPrice": {}, "ebayLink": "https://e/x"}]"#;
    let mut state = BrowseState::new(5);
    state.loaded(loader::parse_response(200, body).expect("パース失敗"));

    let row = state.body().rows().first().expect("1行あるはず");
    assert_eq!(row.query, "123");
    assert_eq!(row.usd_value, "$10");
    assert_eq!(row.lowest_price, "$5");
    assert_eq!(row.highest_price, "-");
    assert_eq!(row.ebay_link.as_deref(), Some("https://e/x"));
}
