use serde::{Deserialize, Serialize};

/// Справочники и документы, которые показываются в таблицах дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customers,
    Sales,
    CostTypes,
    PaymentMethods,
    ServiceTypes,
    ServiceProviders,
    Users,
}

impl EntityKind {
    /// Код сущности (совпадает с сегментом REST-пути)
    pub fn code(&self) -> &'static str {
        match self {
            EntityKind::Customers => "customers",
            EntityKind::Sales => "sales",
            EntityKind::CostTypes => "cost_types",
            EntityKind::PaymentMethods => "payment_methods",
            EntityKind::ServiceTypes => "service_types",
            EntityKind::ServiceProviders => "service_providers",
            EntityKind::Users => "users",
        }
    }

    /// Человекочитаемое название списка
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Customers => "Clientes",
            EntityKind::Sales => "Vendas",
            EntityKind::CostTypes => "Tipos de custo",
            EntityKind::PaymentMethods => "Formas de pagamento",
            EntityKind::ServiceTypes => "Tipos de serviço",
            EntityKind::ServiceProviders => "Prestadores de serviço",
            EntityKind::Users => "Usuários",
        }
    }

    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Customers,
            EntityKind::Sales,
            EntityKind::CostTypes,
            EntityKind::PaymentMethods,
            EntityKind::ServiceTypes,
            EntityKind::ServiceProviders,
            EntityKind::Users,
        ]
    }

    /// Парсинг из строки; `-` и `_` взаимозаменяемы
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase().replace('-', "_");
        EntityKind::all().into_iter().find(|kind| kind.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrips_all_kinds() {
        for kind in EntityKind::all() {
            assert_eq!(EntityKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(
            EntityKind::from_code("payment-methods"),
            Some(EntityKind::PaymentMethods)
        );
        assert_eq!(EntityKind::from_code("orders"), None);
    }
}
