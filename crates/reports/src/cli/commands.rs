use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDateTime;
use contracts::dashboards::sales_summary::{dashboard_sections, DashboardSection, DashboardSummary};
use contracts::shared::document::{format_document, is_valid_document, strip_non_digits, DocumentKind};
use contracts::shared::export::build_export;
use contracts::shared::format::format_money;
use contracts::shared::list_query::{
    run_query, run_unpaged, FieldFilter, FilterState, QueryConfig, SortDirection, SortState,
};
use contracts::shared::record::Record;
use contracts::shared::table::{ColumnSpec, EntityPreset, TableRenderer};

use super::text_table::render_text_table;
use super::{ExportArgs, ListArgs, QueryArgs, SummaryArgs};
use crate::shared::config::{resolve_path, Config};
use crate::shared::export::{export_to_dir, writer_for};
use crate::shared::loader::load_records;

/// Filter, sort and engine settings for one invocation
struct Query {
    preset: EntityPreset,
    filter: FilterState,
    sort: SortState,
    config: QueryConfig,
}

impl Query {
    fn from_args(args: &QueryArgs, config: &Config) -> anyhow::Result<Self> {
        let preset = EntityPreset::for_kind(args.entity);

        let mut filter = FilterState::default()
            .with_search(args.search.clone())
            .with_status(args.status.clone());
        for (field, value) in &args.filters {
            filter = filter.with_field_filter(FieldFilter::exact(field.clone(), value.clone()));
        }
        for (field, value) in &args.contains_filters {
            filter = filter.with_field_filter(FieldFilter::contains(field.clone(), value.clone()));
        }

        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let sort = match &args.sort {
            Some(field) => {
                let sortable = preset.column(field).map_or(false, |column| column.sortable);
                if !sortable {
                    let known: Vec<&str> = preset
                        .columns
                        .iter()
                        .filter(|column| column.sortable)
                        .map(|column| column.field.as_str())
                        .collect();
                    bail!(
                        "cannot sort {} by `{}`, sortable fields: {}",
                        preset.kind.code(),
                        field,
                        known.join(", ")
                    );
                }
                SortState::new(field.clone(), direction)
            }
            None if args.desc => SortState::new(preset.default_sort.field.clone(), direction),
            None => preset.default_sort.clone(),
        };

        let mut query_config = preset.query.clone();
        query_config.min_search_len = config.list.min_search_len;

        Ok(Self {
            preset,
            filter,
            sort,
            config: query_config,
        })
    }
}

/// `reports list`: one page rendered as a text table, followed by the page info
pub fn run_list(args: &ListArgs, config: &Config) -> anyhow::Result<String> {
    let records = load_records(&args.query.input)?;
    let mut query = Query::from_args(&args.query, config)?;
    let page_size = args.page_size.unwrap_or(config.list.page_size);
    query.filter = query.filter.with_page(args.page, page_size);

    let page = run_query(&records, &query.filter, &query.sort, &query.config);
    tracing::debug!(
        "list {}: {} of {} records match",
        query.preset.kind.code(),
        page.total_items,
        records.len()
    );

    let renderer = TableRenderer::new(&query.preset.columns)
        .with_status_field(&query.config.status_field);
    let table = renderer.render(&page.items, args.query.role, &query.sort);

    let mut output = String::new();
    let _ = writeln!(output, "{}", query.preset.kind.display_name());
    if page.is_empty() {
        let _ = writeln!(output, "Nenhum registro encontrado.");
    } else {
        let _ = writeln!(output, "{}", render_text_table(&table));
    }
    let _ = write!(
        output,
        "{} | Página {} de {}",
        page.range_label(),
        page.page,
        page.total_pages
    );
    Ok(output)
}

/// `reports export`: the whole filtered, sorted set with the columns the role may see
pub fn run_export(args: &ExportArgs, config: &Config, now: NaiveDateTime) -> anyhow::Result<PathBuf> {
    let records = load_records(&args.query.input)?;
    let query = Query::from_args(&args.query, config)?;
    let rows = run_unpaged(&records, &query.filter, &query.sort, &query.config);

    let columns: Vec<ColumnSpec> = TableRenderer::new(&query.preset.columns)
        .visible_columns(args.query.role)
        .into_iter()
        .cloned()
        .collect();
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| query.preset.kind.display_name().to_string());
    let table = build_export(rows.iter().copied(), &columns, &title);

    let dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => resolve_path(&config.export.dir),
    };
    let writer = writer_for(args.format, &config.export).context("invalid export settings")?;
    let path = export_to_dir(&table, writer.as_ref(), &dir, now)
        .with_context(|| format!("cannot export {} to {}", title, dir.display()))?;
    Ok(path)
}

/// `reports check-doc`: masked value, detected kind and checksum result
pub fn run_check_doc(value: &str) -> String {
    let kind = DocumentKind::detect(value);
    let valid = is_valid_document(value);
    let digits = strip_non_digits(value);

    let mut output = String::new();
    let _ = writeln!(output, "Documento: {}", format_document(value, kind));
    let _ = writeln!(output, "Tipo: {}", kind.display_name());
    let _ = writeln!(output, "Dígitos: {}/{}", digits.len(), kind.digit_count());
    let _ = write!(output, "Válido: {}", if valid { "sim" } else { "não" });
    output
}

/// `reports summary`: the dashboard sections the role is allowed to see
pub fn run_summary(args: &SummaryArgs) -> anyhow::Result<String> {
    let records = load_records(&args.input)?;
    let summary = DashboardSummary::compute(&records, &args.status_field, &args.amount_field);

    let mut output = String::new();
    for section in dashboard_sections(args.role) {
        let _ = writeln!(output, "== {} ==", section.title());
        match section {
            DashboardSection::SalesOverview => {
                let _ = writeln!(output, "Total de registros: {}", summary.total_records);
                for entry in &summary.by_status {
                    let _ = writeln!(output, "  {}: {}", entry.label, entry.count);
                }
            }
            DashboardSection::Finance => {
                let _ = writeln!(output, "Valor total: {}", format_money(summary.total_amount));
            }
            DashboardSection::Users => {
                for (user, count) in count_by_user(&records, &args.user_field) {
                    let _ = writeln!(output, "  {}: {}", user, count);
                }
            }
        }
    }
    Ok(output.trim_end().to_string())
}

fn count_by_user(records: &[Record], field: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let user = record
            .text(field)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Sem responsável".to_string());
        *counts.entry(user).or_insert(0) += 1;
    }
    counts
}
