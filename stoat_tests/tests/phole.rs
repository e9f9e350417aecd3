mod phole {
    use stoat_sat::{
        config::Config,
        context::Context,
        reports::Solution,
    };
    use stoat_tests::general::{pigeonhole, satisfies_all};

    #[test]
    fn perfect_fit() {
        let formula = pigeonhole(3, 3);
        let clauses = formula.clauses().to_vec();

        let mut ctx = Context::from_formula(formula, Config::default());
        match ctx.solve() {
            Solution::Satisfiable(model) => assert!(satisfies_all(&model, &clauses)),
            Solution::Unsatisfiable => panic!("three pigeons fit three holes"),
        }
    }

    #[test]
    fn normal() {
        for holes in [2, 3, 4] {
            let formula = pigeonhole(holes + 1, holes);
            let mut ctx = Context::from_formula(formula, Config::default());
            assert_eq!(ctx.solve(), Solution::Unsatisfiable);
        }
    }

    #[test]
    fn tough_five() {
        let formula = pigeonhole(6, 5);
        let mut ctx = Context::from_formula(formula, Config::default());
        assert_eq!(ctx.solve(), Solution::Unsatisfiable);
    }

    #[test]
    #[ignore = "expensive"]
    fn tough_six() {
        let formula = pigeonhole(7, 6);
        let mut ctx = Context::from_formula(formula, Config::default());
        assert_eq!(ctx.solve(), Solution::Unsatisfiable);
    }

    /// The same verdicts with the pure literal scan switched off.
    #[test]
    fn verdicts_survive_configuration() {
        let config = Config {
            pure_literals: false,
        };

        let mut sat = Context::from_formula(pigeonhole(3, 3), config);
        assert!(sat.solve().is_satisfiable());

        let mut unsat = Context::from_formula(pigeonhole(4, 3), config);
        assert_eq!(unsat.solve(), Solution::Unsatisfiable);
    }
}
