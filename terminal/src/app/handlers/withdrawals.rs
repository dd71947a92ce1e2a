use crate::app::messages::{MSG_INVALID_AMOUNT, MSG_WITHDRAWAL_REQUESTED};
use crate::app::router::WITHDRAWALS_PATH;
use crate::app::App;
use crate::utils::validation::parse_amount;

impl App {
    /// Request a withdrawal of `raw_amount` (comma or dot decimals)
    pub async fn request_withdrawal(&self, raw_amount: &str) {
        let Some(amount) = parse_amount(raw_amount) else {
            self.notify(MSG_INVALID_AMOUNT);
            return;
        };

        match self.services.api.request_withdrawal(amount).await {
            Ok(_) => {
                tracing::info!(amount, "Withdrawal requested");
                self.notify(MSG_WITHDRAWAL_REQUESTED);
                self.navigate(WITHDRAWALS_PATH).await;
            }
            Err(e) => {
                tracing::warn!(amount, error = %e, "Withdrawal failed");
                self.notify(e.user_message());
            }
        }
    }
}
