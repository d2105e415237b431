//! Command-line interface of the `reports` binary

mod commands;
mod text_table;

pub use commands::{run_check_doc, run_export, run_list, run_summary};
pub use text_table::render_text_table;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use contracts::enums::{EntityKind, Role};
use contracts::shared::export::ExportFormat;
use contracts::shared::list_query::STATUS_ALL;

/// Listas, exportação e validação de documentos do painel de vendas
#[derive(Parser, Debug)]
#[command(name = "reports")]
#[command(version)]
#[command(about = "Filter, sort, export and validate dashboard records")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to config.toml (default: next to the executable, then built-in)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of a list as a text table
    List(ListArgs),

    /// Write the whole filtered and sorted list to a file
    Export(ExportArgs),

    /// Mask and validate a CPF or CNPJ
    CheckDoc {
        /// Document in any format, e.g. 529.982.247-25 or 11222333000181
        value: String,
    },

    /// Print the dashboard summary of a sales dump
    Summary(SummaryArgs),
}

/// Filters and sorting shared by `list` and `export`
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// customers, sales, cost-types, payment-methods, service-types, service-providers, users
    #[arg(value_parser = parse_entity)]
    pub entity: EntityKind,

    /// JSON dump of the REST list endpoint
    pub input: PathBuf,

    /// Free-text search over the list's search fields
    #[arg(long, default_value = "")]
    pub search: String,

    /// Status code, or `all`
    #[arg(long, default_value = STATUS_ALL)]
    pub status: String,

    /// Exact filter, `field=value` (repeatable)
    #[arg(long = "filter", value_parser = parse_key_value)]
    pub filters: Vec<(String, String)>,

    /// Substring filter, `field=value` (repeatable)
    #[arg(long = "filter-contains", value_parser = parse_key_value)]
    pub contains_filters: Vec<(String, String)>,

    /// Sort field (default: the list's own default sort)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Role of the viewer; unknown roles get viewer permissions
    #[arg(long, default_value = "viewer", value_parser = parse_role)]
    pub role: Role,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (default: `[list] page_size`)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// csv (Excel), json or html (print / PDF)
    #[arg(long, default_value = "csv", value_parser = parse_format)]
    pub format: ExportFormat,

    /// Report title, also used for the file name (default: entity name)
    #[arg(long)]
    pub title: Option<String>,

    /// Output directory (default: `[export] dir`)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// JSON dump of the sales list
    pub input: PathBuf,

    #[arg(long, default_value = "status")]
    pub status_field: String,

    #[arg(long, default_value = "totalAmount")]
    pub amount_field: String,

    /// Field naming the user who made the sale
    #[arg(long, default_value = "seller.name")]
    pub user_field: String,

    #[arg(long, default_value = "viewer", value_parser = parse_role)]
    pub role: Role,
}

fn parse_entity(value: &str) -> Result<EntityKind, String> {
    EntityKind::from_code(value).ok_or_else(|| {
        let known: Vec<&str> = EntityKind::all().iter().map(|kind| kind.code()).collect();
        format!("unknown entity `{}`, expected one of: {}", value, known.join(", "))
    })
}

fn parse_role(value: &str) -> Result<Role, String> {
    Ok(Role::parse(value))
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    ExportFormat::from_code(value)
        .ok_or_else(|| format!("unknown format `{}`, expected csv, json or html", value))
}

fn parse_key_value(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((field, val)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), val.to_string()))
        }
        _ => Err(format!("expected `field=value`, got `{}`", value)),
    }
}
