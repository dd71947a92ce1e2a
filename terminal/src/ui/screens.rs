//! Per-view text bodies

use shared::utils::{format_brl, format_reais};

use crate::app::claim::ClaimPhase;
use crate::app::messages::{MSG_CLAIM_EXPIRED, MSG_UNDER_CONSTRUCTION};
use crate::app::state::{
    ActionListView, DashboardView, HistoryView, SettingsView, WithdrawalsView, HISTORY_LIMITS,
};
use crate::app::{ClaimSession, View};

use super::widgets::{control, table};

pub fn render_view(view: &View) -> Vec<String> {
    match view {
        View::Loading => vec!["Carregando…".to_string()],
        View::Dashboard(dashboard) => render_dashboard(dashboard),
        View::Earn => vec![
            "Escolha uma origem:".to_string(),
            "  Instagram (go /ganhar/instagram)".to_string(),
        ],
        View::ActionList(list) => render_action_list(list),
        View::ExecuteAction(session) => render_claim(session),
        View::History(history) => render_history(history),
        View::Withdrawals(withdrawals) => render_withdrawals(withdrawals),
        View::Settings(settings) => render_settings(settings),
        View::Placeholder { path } => vec![format!("{} ({})", MSG_UNDER_CONSTRUCTION, path)],
        View::Error { message } => vec![format!("Erro: {}", message)],
    }
}

fn render_dashboard(view: &DashboardView) -> Vec<String> {
    let mut lines = vec![
        view.greeting(),
        String::new(),
        format!("Saldo disponível: {}", format_reais(view.available, 2)),
        format!("Saldo bloqueado:  {}", format_reais(view.blocked, 2)),
        String::new(),
        "Ganhos diários:".to_string(),
    ];

    if view.daily_earnings.is_empty() {
        lines.push("  Sem dados ainda".to_string());
    } else {
        lines.extend(
            view.daily_earnings
                .iter()
                .map(|day| format!("  {}: {}", day.date, format_reais(day.amount, 2))),
        );
    }
    lines
}

fn render_action_list(view: &ActionListView) -> Vec<String> {
    if let Some(error) = &view.error {
        return vec![error.clone()];
    }
    if view.actions.is_empty() {
        return vec!["Nenhuma ação disponível no momento".to_string()];
    }

    let rows: Vec<Vec<String>> = view
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            vec![
                (i + 1).to_string(),
                action.tipo.clone(),
                format_reais(view.payout, 3),
                action.target_url.clone(),
            ]
        })
        .collect();

    let mut lines = table(&["#", "Tipo", "Ganho", "Link"], &rows);
    lines.push(String::new());
    lines.push("start <n> para pegar uma ação".to_string());
    lines
}

fn render_claim(session: &ClaimSession) -> Vec<String> {
    let mut lines = vec![format!("Ação #{}", session.claim_id)];

    match session.phase {
        ClaimPhase::Loading => {
            lines.push("Carregando…".to_string());
            return lines;
        }
        ClaimPhase::LoadFailed => {
            lines.push(format!(
                "Erro: {}",
                session.error.as_deref().unwrap_or_default()
            ));
            return lines;
        }
        _ => {}
    }

    if let Some(details) = &session.details {
        lines.push(format!(
            "Tipo: {}",
            details.action_tipo.as_deref().unwrap_or("-")
        ));
        lines.push(format!("Ganho: {}", format_reais(details.payout_amount, 3)));
    }

    let minutes = session.seconds_left / 60;
    let seconds = session.seconds_left % 60;
    lines.push(format!("Tempo restante: {:02}:{:02}", minutes, seconds));
    if session.phase == ClaimPhase::Confirmed {
        lines.push("Ação confirmada".to_string());
    }
    if session.expiry_notice {
        lines.push(MSG_CLAIM_EXPIRED.to_string());
    }

    lines.push(String::new());
    lines.push(control("Acessar perfil", "profile", session.controls.access_profile));
    lines.push(control("Acesso direto", "direct", session.controls.direct_access));
    lines.push(control("Confirmar", "confirm", session.controls.confirm));
    lines.push(control("Pular", "skip", session.controls.skip));
    lines
}

fn render_history(view: &HistoryView) -> Vec<String> {
    let limits = HISTORY_LIMITS
        .iter()
        .map(|l| {
            if *l == view.limit {
                format!("[{}]", l)
            } else {
                l.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![format!(
        "Limite: {}   Busca: {}",
        limits,
        if view.query.is_empty() { "-" } else { view.query.as_str() }
    )];

    if let Some(error) = &view.error {
        lines.push(format!("Erro: {}", error));
    }

    if view.items.is_empty() {
        lines.push("Nenhuma ação encontrada".to_string());
        return lines;
    }

    let rows: Vec<Vec<String>> = view
        .items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.date().to_string(),
                item.type_code.clone().unwrap_or_else(|| "TT".to_string()),
                item.profile_username.clone().unwrap_or_else(|| "-".to_string()),
                format_brl(item.payout_amount, 3),
                item.validity().label().to_string(),
            ]
        })
        .collect();

    lines.extend(table(
        &["ID", "Data", "Tipo", "Perfil", "Valor", "Validade"],
        &rows,
    ));
    lines
}

fn render_withdrawals(view: &WithdrawalsView) -> Vec<String> {
    let payout = &view.payout;
    let method = payout.payout_method.as_deref().unwrap_or("PIX");
    let mut lines = vec![
        format!("Saldo disponível: {}", format_reais(view.available, 2)),
        String::new(),
        format!("Método: {}", method),
    ];

    if !payout.is_pix() {
        lines.push(format!("Banco: {}", payout.bank_name.as_deref().unwrap_or("-")));
        lines.push(format!("Agência: {}", payout.agency.as_deref().unwrap_or("-")));
        lines.push(format!("Conta: {}", payout.account.as_deref().unwrap_or("-")));
    }
    lines.push(format!("CPF: {}", payout.cpf.as_deref().unwrap_or("-")));
    lines.push(String::new());

    if view.withdrawals.is_empty() {
        lines.push("Nenhum saque ainda".to_string());
    } else {
        let rows: Vec<Vec<String>> = view
            .withdrawals
            .iter()
            .map(|w| {
                vec![
                    w.id.to_string(),
                    w.requested_at.clone(),
                    format_reais(w.amount, 2),
                    w.status.clone(),
                ]
            })
            .collect();
        lines.extend(table(&["ID", "Data", "Valor", "Status"], &rows));
    }

    lines.push(String::new());
    lines.push("withdraw <valor> para solicitar um saque".to_string());
    lines
}

fn render_settings(view: &SettingsView) -> Vec<String> {
    let form = &view.form;
    let or_dash = |v: &str| {
        if v.trim().is_empty() {
            "-".to_string()
        } else {
            v.to_string()
        }
    };
    let token = if form.token.trim().is_empty() {
        "-".to_string()
    } else {
        "•".repeat(8)
    };

    let mut lines = vec![
        format!("API_BASE_URL:       {}", or_dash(&form.base_url)),
        format!("ACTIONS_API_URL:    {}", or_dash(&form.actions_url)),
        format!("API_TOKEN:          {}", token),
        format!("USE_NGROK:          {}", form.use_ngrok),
        format!("SKIP_NOTIFY_SERVER: {}", form.skip_notify_server),
    ];
    if view.dirty {
        lines.push(String::new());
        lines.push("Alterações pendentes (save para salvar)".to_string());
    }
    lines
}
