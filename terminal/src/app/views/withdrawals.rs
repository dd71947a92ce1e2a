use crate::app::state::{View, WithdrawalsView};
use crate::core::error::Result;
use crate::core::service::ApiService;

/// Balance, payout destination and past withdrawals.
///
/// The three requests are issued together; any failure fails the page.
pub async fn render_withdrawals(api: &dyn ApiService) -> Result<View> {
    let (dashboard, payout, withdrawals) =
        tokio::try_join!(api.dashboard(), api.payout_profile(), api.withdrawals())?;

    Ok(View::Withdrawals(WithdrawalsView {
        available: dashboard.wallet.saldo_disponivel,
        payout,
        withdrawals: withdrawals.items,
    }))
}
