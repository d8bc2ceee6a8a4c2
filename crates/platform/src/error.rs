#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("timer run stopped after {limit} callbacks; timers keep scheduling new timers")]
    TimerStepLimit { limit: usize },
}
