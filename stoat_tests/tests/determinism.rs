mod determinism {
    use stoat_sat::{
        config::Config,
        context::Context,
        domains::DomainContext,
        reports::Solution,
    };
    use stoat_tests::general::pigeonhole;

    /// Identical formulas yield identical models: the search order is fixed by insertion order alone.
    #[test]
    fn models_repeat() {
        let first = Context::from_formula(pigeonhole(4, 4), Config::default()).solve();
        let second = Context::from_formula(pigeonhole(4, 4), Config::default()).solve();

        assert!(first.is_satisfiable());
        assert_eq!(first, second);
    }

    #[test]
    fn domain_values_repeat() {
        let run = || {
            let mut ctx = DomainContext::default();
            let domains: Vec<_> = (0..4).map(|_| ctx.new_domain(0, 3).unwrap()).collect();
            ctx.distinct(&domains).unwrap();

            match ctx.solve() {
                Solution::Satisfiable(model) => {
                    domains.iter().map(|d| model.value_of(*d)).collect()
                }
                Solution::Unsatisfiable => Vec::new(),
            }
        };

        let first: Vec<i32> = run();
        assert_eq!(first.len(), 4);
        assert_eq!(first, run());
    }
}
