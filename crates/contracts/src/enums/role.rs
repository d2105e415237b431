use serde::{Deserialize, Serialize};

/// Роль пользователя дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Seller,
    Finance,
    Viewer,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Seller => "seller",
            Role::Finance => "finance",
            Role::Viewer => "viewer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Manager => "Gerente",
            Role::Seller => "Vendedor",
            Role::Finance => "Financeiro",
            Role::Viewer => "Visualizador",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::Manager,
            Role::Seller,
            Role::Finance,
            Role::Viewer,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "seller" => Some(Role::Seller),
            "finance" => Some(Role::Finance),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    /// Like `from_code`, but an unknown or missing token falls back to `Viewer`
    pub fn parse(token: &str) -> Self {
        Role::from_code(token).unwrap_or(Role::Viewer)
    }
}
