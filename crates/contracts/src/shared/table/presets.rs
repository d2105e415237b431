//! Column sets of the dashboard lists.
//!
//! Each entity used to carry its own copy of list scaffolding; here every
//! list is just data: columns, search fields and the default sort.

use crate::enums::{EntityKind, Role};
use crate::shared::list_query::{QueryConfig, SortState};
use crate::shared::record::DISPLAY_DATE_FIELD;

use super::column::{ColumnFormat, ColumnSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct EntityPreset {
    pub kind: EntityKind,
    pub columns: Vec<ColumnSpec>,
    pub query: QueryConfig,
    pub default_sort: SortState,
}

impl EntityPreset {
    pub fn for_kind(kind: EntityKind) -> Self {
        let (columns, search_fields, default_sort) = match kind {
            EntityKind::Customers => (
                vec![
                    ColumnSpec::new("name", "Nome").with_width(220),
                    ColumnSpec::new("document", "CPF/CNPJ")
                        .with_format(ColumnFormat::Document)
                        .with_width(160),
                    ColumnSpec::new("email", "E-mail").with_width(200),
                    ColumnSpec::new("phone", "Telefone")
                        .with_format(ColumnFormat::Phone)
                        .with_width(140),
                    ColumnSpec::new("city", "Cidade"),
                    ColumnSpec::new("status", "Status").with_format(ColumnFormat::Status),
                ],
                vec!["name", "document", "email", "phone"],
                SortState::ascending("name"),
            ),
            EntityKind::Sales => (
                vec![
                    ColumnSpec::new("id", "Nº").with_width(70),
                    ColumnSpec::new(DISPLAY_DATE_FIELD, "Data")
                        .with_format(ColumnFormat::Date)
                        .with_width(100),
                    ColumnSpec::new("customer.name", "Cliente").with_width(200),
                    ColumnSpec::new("serviceType.name", "Serviço"),
                    ColumnSpec::new("paymentMethod.name", "Pagamento"),
                    ColumnSpec::new("totalAmount", "Valor")
                        .with_format(ColumnFormat::Money)
                        .summable(),
                    ColumnSpec::new("financialSummary.totalPaid", "Pago")
                        .with_format(ColumnFormat::Money)
                        .summable()
                        .visible_to(&[Role::Admin, Role::Manager, Role::Finance]),
                    ColumnSpec::new("financialSummary.totalCost", "Custo")
                        .with_format(ColumnFormat::Money)
                        .summable()
                        .visible_to(&[Role::Admin, Role::Finance]),
                    ColumnSpec::new("status", "Status").with_format(ColumnFormat::Status),
                ],
                vec!["id", "customer.name", "customer.document", "serviceType.name", "seller.name"],
                SortState::descending(DISPLAY_DATE_FIELD),
            ),
            EntityKind::CostTypes => (
                vec![
                    ColumnSpec::new("name", "Nome"),
                    ColumnSpec::new("description", "Descrição").unsortable(),
                    ColumnSpec::new("category", "Categoria"),
                    ColumnSpec::new("active", "Ativo").with_format(ColumnFormat::YesNo),
                ],
                vec!["name", "description", "category"],
                SortState::ascending("name"),
            ),
            EntityKind::PaymentMethods => (
                vec![
                    ColumnSpec::new("name", "Nome"),
                    ColumnSpec::new("fee", "Taxa").with_format(ColumnFormat::Percent { decimals: 2 }),
                    ColumnSpec::new("installments", "Parcelas")
                        .with_format(ColumnFormat::Number { decimals: 0 }),
                    ColumnSpec::new("active", "Ativo").with_format(ColumnFormat::YesNo),
                ],
                vec!["name"],
                SortState::ascending("name"),
            ),
            EntityKind::ServiceTypes => (
                vec![
                    ColumnSpec::new("name", "Nome"),
                    ColumnSpec::new("description", "Descrição").unsortable(),
                    ColumnSpec::new("price", "Preço").with_format(ColumnFormat::Money),
                    ColumnSpec::new("active", "Ativo").with_format(ColumnFormat::YesNo),
                ],
                vec!["name", "description"],
                SortState::ascending("name"),
            ),
            EntityKind::ServiceProviders => (
                vec![
                    ColumnSpec::new("name", "Nome"),
                    ColumnSpec::new("document", "CPF/CNPJ").with_format(ColumnFormat::Document),
                    ColumnSpec::new("phone", "Telefone").with_format(ColumnFormat::Phone),
                    ColumnSpec::new("email", "E-mail"),
                    ColumnSpec::new("serviceType.name", "Serviço"),
                    ColumnSpec::new("status", "Status").with_format(ColumnFormat::Status),
                ],
                vec!["name", "document", "email", "serviceType.name"],
                SortState::ascending("name"),
            ),
            EntityKind::Users => (
                vec![
                    ColumnSpec::new("name", "Nome"),
                    ColumnSpec::new("email", "E-mail"),
                    ColumnSpec::new("role", "Perfil"),
                    ColumnSpec::new("lastLoginAt", "Último acesso")
                        .with_format(ColumnFormat::DateTime)
                        .visible_to(&[Role::Admin]),
                    ColumnSpec::new("active", "Ativo").with_format(ColumnFormat::YesNo),
                ],
                vec!["name", "email", "role"],
                SortState::ascending("name"),
            ),
        };

        let mut query = QueryConfig::default().with_search_fields(&search_fields);
        query.sort_kinds = columns
            .iter()
            .filter(|column| column.sortable)
            .map(|column| (column.field.clone(), column.sort))
            .collect();

        Self {
            kind,
            columns,
            query,
            default_sort,
        }
    }

    pub fn column(&self, field: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.field == field)
    }
}
