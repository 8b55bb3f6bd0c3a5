/// Alert delivery contract.
///
/// Two implementations ship with the sample on purpose: registering the
/// contract is ambiguous and demonstrates the registry refusing to pick one.
pub trait Alerts: Send {
    /// Dispatches one alert.
    fn send_alert(&mut self, message: &str);

    /// How many alerts went out.
    fn delivered(&self) -> usize;
}

/// Email-backed alert delivery.
#[derive(Debug, Default)]
pub struct EmailAlerts {
    delivered: usize,
}

impl Alerts for EmailAlerts {
    fn send_alert(&mut self, _message: &str) {
        self.delivered += 1;
    }

    fn delivered(&self) -> usize {
        self.delivered
    }
}

/// Pager-backed alert delivery.
#[derive(Debug, Default)]
pub struct PagerAlerts {
    delivered: usize,
}

impl Alerts for PagerAlerts {
    fn send_alert(&mut self, _message: &str) {
        self.delivered += 1;
    }

    fn delivered(&self) -> usize {
        self.delivered
    }
}

/// Audit trail contract. Recording runs out of process, so no implementation
/// ships with the sample and the kind registers unbound.
pub trait Audit: Send {
    fn record(&mut self, event: &str);
}
