use serde::Deserialize;
use utoipa::IntoParams;

/// Caller-supplied cap on list endpoints. The caps the pages use (5 on the
/// landing page, 10 on the dashboard, 3 on a competition page) are
/// presentation choices, so they arrive as a query parameter.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    const DEFAULT_LIMIT: i64 = 50;
    const MAX_LIMIT: i64 = 100;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(LimitParams { limit: None }.limit(), 50);
        assert_eq!(LimitParams { limit: Some(5) }.limit(), 5);
        assert_eq!(LimitParams { limit: Some(0) }.limit(), 1);
        assert_eq!(LimitParams { limit: Some(1000) }.limit(), 100);
    }
}
