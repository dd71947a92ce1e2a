use crate::app::state::{DashboardView, View};
use crate::core::error::Result;
use crate::core::service::ApiService;

pub async fn render_dashboard(api: &dyn ApiService) -> Result<View> {
    let data = api.dashboard().await?;

    Ok(View::Dashboard(DashboardView {
        user_name: data.user.name,
        available: data.wallet.saldo_disponivel,
        blocked: data.wallet.saldo_bloqueado,
        daily_earnings: data.daily_earnings,
    }))
}
