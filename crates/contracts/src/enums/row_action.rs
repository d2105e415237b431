use serde::{Deserialize, Serialize};

/// Действия над строкой таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    ChangeStatus,
    Return,
    Correct,
    Cancel,
    RegisterPayment,
}

impl RowAction {
    pub fn code(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::ChangeStatus => "change_status",
            RowAction::Return => "return",
            RowAction::Correct => "correct",
            RowAction::Cancel => "cancel",
            RowAction::RegisterPayment => "register_payment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "Visualizar",
            RowAction::Edit => "Editar",
            RowAction::Delete => "Excluir",
            RowAction::ChangeStatus => "Alterar status",
            RowAction::Return => "Devolver",
            RowAction::Correct => "Corrigir",
            RowAction::Cancel => "Cancelar",
            RowAction::RegisterPayment => "Registrar pagamento",
        }
    }

    /// All actions in the order they are shown in a row
    pub fn all() -> Vec<RowAction> {
        vec![
            RowAction::View,
            RowAction::Edit,
            RowAction::ChangeStatus,
            RowAction::RegisterPayment,
            RowAction::Return,
            RowAction::Correct,
            RowAction::Cancel,
            RowAction::Delete,
        ]
    }
}
