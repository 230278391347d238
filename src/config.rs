// Planner configuration

/// Knobs for the plan enumeration phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlannerConfig {
    /// Assemble plans on the rayon thread pool
    pub parallel: bool,

    /// Reject fleets whose plan count exceeds this limit
    pub max_plans: Option<usize>,
}

impl PlannerConfig {
    pub fn new(parallel: bool, max_plans: Option<usize>) -> Self {
        Self { parallel, max_plans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential_and_unlimited() {
        let config = PlannerConfig::default();
        assert!(!config.parallel);
        assert_eq!(config.max_plans, None);
        assert_eq!(PlannerConfig::new(false, None), config);
    }
}
