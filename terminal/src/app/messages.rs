//! User-facing messages shown in toasts and inline views

pub const MSG_OPEN_LINK_FIRST: &str = "Você precisa acessar o link antes de confirmar.";
pub const MSG_NO_COMPATIBLE_ACTION: &str = "Nenhuma ação compatível disponível";
pub const MSG_OPENING_LINK: &str = "Abrindo link…";
pub const MSG_CLAIM_SUBMITTED: &str = "Ação enviada para confirmação.";
pub const MSG_CLAIM_SKIPPED: &str = "Ação pulada";
pub const MSG_CLAIM_EXPIRED: &str = "Tempo expirado. Volte para pegar outra ação.";
pub const MSG_CLAIM_NOT_ACTIVE: &str = "Nenhuma ação em andamento";
pub const MSG_INVALID_DEADLINE: &str = "Prazo da ação inválido";
pub const MSG_INVALID_ACTION: &str = "Ação inválida";
pub const MSG_LOGGED_OUT: &str = "Saiu";
pub const MSG_SETTINGS_SAVED: &str = "Salvo!";
pub const MSG_INVALID_AMOUNT: &str = "Valor inválido";
pub const MSG_INVALID_LIMIT: &str = "Limite inválido";
pub const MSG_WITHDRAWAL_REQUESTED: &str = "Saque solicitado com sucesso.";
pub const MSG_NOT_ON_VIEW: &str = "Opção indisponível nesta página";
pub const MSG_UNDER_CONSTRUCTION: &str = "Em construção";
