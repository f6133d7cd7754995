use rand::Rng;

/// Figures shown on the dashboard that are not derived from stored logs.
pub trait PlaceholderMetrics: Send + Sync {
    /// Milliseconds, in `100..=149`.
    fn avg_response_time(&self) -> u32;
    /// In `50..=99`.
    fn users_online(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlaceholderMetrics;

impl PlaceholderMetrics for RandomPlaceholderMetrics {
    fn avg_response_time(&self) -> u32 {
        rand::rng().random_range(100..150)
    }

    fn users_online(&self) -> u32 {
        rand::rng().random_range(50..100)
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedPlaceholderMetrics {
    pub avg_response_time: u32,
    pub users_online: u32,
}

#[cfg(test)]
impl PlaceholderMetrics for FixedPlaceholderMetrics {
    fn avg_response_time(&self) -> u32 {
        self.avg_response_time
    }

    fn users_online(&self) -> u32 {
        self.users_online
    }
}
