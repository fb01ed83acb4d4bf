use crate::{
    notification::notify_upcoming_events::NotifyUpcomingEventsUseCase, shared::usecase::execute,
};
use actix_web::rt::time::interval;
use std::time::Duration;
use volunteer_hub_infra::HubContext;

/// Sweep period, never shorter than a second
pub fn get_sweep_period(interval_secs: u64) -> Duration {
    Duration::from_secs(interval_secs.max(1))
}

pub fn start_upcoming_events_job(ctx: HubContext) {
    actix_web::rt::spawn(async move {
        let mut interval = interval(get_sweep_period(
            ctx.config.upcoming_events_sweep_interval_secs,
        ));
        loop {
            interval.tick().await;

            let usecase = NotifyUpcomingEventsUseCase {
                lookahead_secs: ctx.config.upcoming_events_lookahead_secs,
            };
            // Failures are logged by the use case and retried on the next tick
            let _ = execute(usecase, &ctx).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_period_works() {
        assert_eq!(get_sweep_period(300), Duration::from_secs(300));
        assert_eq!(get_sweep_period(1), Duration::from_secs(1));
        assert_eq!(get_sweep_period(0), Duration::from_secs(1));
    }
}
