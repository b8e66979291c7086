use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

pub const CONNECTION_ERROR: &str = "Error connecting to server. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    Success,
    Error,
    #[default]
    Info,
}

impl Level {
    pub const fn colour(self) -> &'static str {
        match self {
            Self::Success => "#27ae60",
            Self::Error => "#e74c3c",
            Self::Info => "#3498db",
        }
    }

    pub const fn class_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

///One transient notification. Removal is scheduled by the controller when it is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: Level,
    pub created: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: Level) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
            created: Instant::now(),
        }
    }

    ///How much of `ttl` is left, so a re-rendered toast doesn't start its countdown over.
    pub fn remaining(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.created.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn remaining_time_counts_down_from_creation() {
        let toast = Toast::new("Saved", Level::Info);
        let ttl = Duration::from_secs(3);
        assert_eq!(toast.remaining(ttl), ttl);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(toast.remaining(ttl), Duration::from_secs(1));

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(toast.remaining(ttl), Duration::ZERO);
    }
}
