//! Command-line front end: runs list views and server searches against a
//! live records API.

mod args;

pub use args::{Cli, Command, ListArgs, SearchArgs};

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{bail, Context};
use serde_json::Value;

use crate::api::{build_client, Page, RecordsClient};
use crate::config::{Config, ConfigStore};
use crate::logging;
use crate::model::Entity;
use crate::search::{HttpSearchSource, SearchOptions, SearchSource, ServerSearch};
use crate::ui::list_view::{page_window, render_window, ListViewStore, SortOrder};

/// Load config, apply CLI overrides and run the chosen command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path)?;
    if let Some(base_url) = &cli.base_url {
        store.update(|c| c.api.base_url = base_url.clone());
    }
    let config = store.get();
    config.validate()?;

    logging::init_tracing(&config.logging.level);

    match cli.command {
        Command::Search(args) => run_search(&config, args).await,
        Command::List(args) => run_list(&config, args).await,
    }
}

async fn run_search(config: &Config, args: SearchArgs) -> anyhow::Result<()> {
    let entity: Entity = args.entity.parse()?;
    let client = build_client(&config.api)?;
    let source: Arc<dyn SearchSource> = Arc::new(HttpSearchSource::new(
        client,
        config.api.endpoint(entity.path()),
    ));

    let mut options = SearchOptions::from(&config.search);
    if let Some(key) = args.result_key {
        options.result_key = key;
    }
    let deadline = options.debounce + config.api.timeout();

    let search: ServerSearch<Value> = ServerSearch::new(source, options);
    search.set_term(args.term);

    let mut state = search.subscribe();
    let settled = state.wait_for(|s| s.revision > 0 && !s.is_loading);
    let settled = tokio::time::timeout(deadline, settled)
        .await
        .context("Search timed out")?
        .context("Search stopped before settling")?
        .clone();

    if let Some(error) = settled.last_error {
        bail!("Search for '{}' failed: {}", entity, error);
    }

    tracing::info!(entity = %entity, count = settled.results.len(), "Search settled");
    for item in &settled.results {
        println!("{}", format_row(item, args.field.as_deref()));
    }
    Ok(())
}

async fn run_list(config: &Config, args: ListArgs) -> anyhow::Result<()> {
    let entity: Entity = args.entity.parse()?;
    let page_size = args.page_size.unwrap_or(config.list.page_size);

    let mut view: ListViewStore<Value> = ListViewStore::for_entity(entity, page_size);
    view.set_page(args.page);
    if let Some(search) = args.search {
        view.set_search(search);
    }
    if let Some(field) = args.sort_by {
        view.set_sort_by(field);
    }
    if args.desc {
        view.set_sort_order(SortOrder::Desc);
    }
    for (field, values) in group_filters(&args.filters)? {
        view.set_filter(field, values);
    }

    let records = RecordsClient::from_config(&config.api)?
        .with_result_key(config.search.result_key.clone());

    let requested = view.state().page();
    let mut page: Page<Value> = records.list(entity, &view.query()).await?;
    view.set_total_pages(page.total_pages(view.state().page_size()));

    if view.state().page() != requested {
        tracing::info!(
            requested,
            page = view.state().page(),
            "Requested page out of range, refetching"
        );
        page = records.list(entity, &view.query()).await?;
    }

    for item in &page.items {
        println!("{}", format_row(item, args.field.as_deref()));
    }

    let current = view.state().page();
    let total_pages = view.state().total_pages().unwrap_or(0);
    println!(
        "{}: page {}/{} ({} records)",
        entity.label(),
        current,
        total_pages,
        page.total
    );
    let window = page_window(current, total_pages, config.list.max_page_buttons);
    if !window.is_empty() {
        println!("{}", render_window(&window, current));
    }
    Ok(())
}

/// One output line: the chosen field's value, or the whole record as JSON.
fn format_row(item: &Value, field: Option<&str>) -> String {
    match field.and_then(|f| item.get(f)) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => item.to_string(),
    }
}

/// Collect `field=value` arguments into one value list per field.
fn group_filters(raw: &[String]) -> anyhow::Result<BTreeMap<String, Vec<String>>> {
    let mut filters: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for item in raw {
        let Some((field, value)) = item.split_once('=') else {
            bail!("Invalid filter '{}', expected FIELD=VALUE", item);
        };
        if field.is_empty() {
            bail!("Invalid filter '{}', field name is empty", item);
        }
        filters
            .entry(field.to_string())
            .or_default()
            .push(value.to_string());
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filters_group_by_field() {
        let raw = vec![
            "gender=male".to_string(),
            "major_id=3".to_string(),
            "gender=female".to_string(),
        ];
        let filters = group_filters(&raw).unwrap();
        assert_eq!(filters["gender"], vec!["male", "female"]);
        assert_eq!(filters["major_id"], vec!["3"]);
    }

    #[test]
    fn filter_without_equals_is_rejected() {
        assert!(group_filters(&["gender".to_string()]).is_err());
        assert!(group_filters(&["=x".to_string()]).is_err());
    }

    #[test]
    fn format_row_picks_field() {
        let item = json!({"student_code": "SV001", "student_id": 4});
        assert_eq!(format_row(&item, Some("student_code")), "SV001");
        assert_eq!(format_row(&item, Some("student_id")), "4");
        assert_eq!(format_row(&item, Some("missing")), item.to_string());
        assert_eq!(format_row(&item, None), item.to_string());
    }
}
