use stoat_sat::{
    config::Config, context::Context, formula::Formula, reports::{Report, Solution},
    structures::literal::Literal,
};

mod basic {

    use super::*;

    #[test]
    fn one_literal() {
        let mut formula = Formula::default();
        let p = formula.fresh_literal().unwrap();

        formula.add_clause(vec![p]).unwrap();

        let mut ctx = Context::from_formula(formula, Config::default());

        match ctx.solve() {
            Solution::Satisfiable(model) => assert!(model.value_of(p.atom())),
            Solution::Unsatisfiable => panic!("a unit clause alone is satisfiable"),
        }
        assert_eq!(ctx.report(), Report::Satisfiable);
    }

    #[test]
    fn unit_forcing() {
        let mut formula = Formula::default();
        let p = formula.fresh_literal().unwrap();
        let q = formula.fresh_literal().unwrap();

        formula.add_clause(vec![p, q]).unwrap();
        formula.add_clause(vec![-p]).unwrap();

        let mut ctx = Context::from_formula(formula, Config::default());

        let model = ctx.solve().model().expect("forced, but satisfiable");
        assert!(!model.value_of(p.atom()));
        assert!(model.value_of(q.atom()));

        // Everything was forced.
        assert_eq!(ctx.counters.decisions, 0);
    }

    #[test]
    fn conflict() {
        let mut formula = Formula::default();
        let p = formula.fresh_literal().unwrap();
        let q = formula.fresh_literal().unwrap();

        formula.add_clause(vec![p, q]).unwrap();
        formula.add_clause(vec![-p, -q]).unwrap();
        formula.add_clause(vec![p, -q]).unwrap();
        formula.add_clause(vec![-p, q]).unwrap();

        let mut ctx = Context::from_formula(formula, Config::default());

        assert_eq!(ctx.solve(), Solution::Unsatisfiable);
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn empty_formula() {
        let formula = Formula::default();
        let mut ctx = Context::from_formula(formula, Config::default());

        assert!(ctx.solve().is_satisfiable());
    }

    #[test]
    fn empty_clause() {
        let mut formula = Formula::default();
        let _ = formula.fresh_literal().unwrap();
        formula.add_clause(vec![]).unwrap();

        let mut ctx = Context::from_formula(formula, Config::default());

        assert_eq!(ctx.solve(), Solution::Unsatisfiable);
    }

    #[test]
    fn repeated_solves_agree() {
        let mut formula = Formula::default();
        let p = formula.fresh_literal().unwrap();
        let q = formula.fresh_literal().unwrap();
        formula.add_clause(vec![p, q]).unwrap();

        let mut ctx = Context::from_formula(formula, Config::default());

        let first = ctx.solve();
        let again = ctx.solve();
        assert_eq!(first, again);
    }
}

mod chains {

    use super::*;

    /// An implication chain 1 → 2 → … → 5 closed with ¬5 ∨ ¬1, satisfied by valuing all atoms false.
    #[test]
    fn implication_chain() {
        let mut formula = Formula::default();
        let _ = formula.fresh_literals(5).unwrap();

        let clauses: Vec<Vec<i32>> = vec![
            vec![-1, 2],
            vec![-2, 3],
            vec![-3, 4],
            vec![-4, 5],
            vec![-5, -1],
        ];
        for clause in clauses.clone() {
            formula.add_clause(clause).unwrap();
        }

        let mut ctx = Context::from_formula(formula, Config::default());

        match ctx.solve() {
            Solution::Satisfiable(model) => {
                for clause in &clauses {
                    assert!(model.satisfies(clause));
                }
            }
            Solution::Unsatisfiable => panic!("the chain is satisfiable"),
        }
    }

    /// Forcing 3 false forces 1, which forces 5 both ways.
    #[test]
    fn forced_conflict() {
        let mut formula = Formula::default();
        let _ = formula.fresh_literals(5).unwrap();

        for clause in [
            vec![-1, -2],
            vec![1, 3],
            vec![2, -3],
            vec![-2, 4],
            vec![-3, -4],
            vec![3, 5],
            vec![3, -5],
        ] {
            formula.add_clause(clause).unwrap();
        }

        let mut ctx = Context::from_formula(formula, Config::default());

        assert_eq!(ctx.solve(), Solution::Unsatisfiable);
    }

    /// The chain again, with the pure literal scan switched off.
    #[test]
    fn implication_chain_without_pure() {
        let mut formula = Formula::default();
        let _ = formula.fresh_literals(5).unwrap();

        let clauses: Vec<Vec<i32>> = vec![
            vec![-1, 2],
            vec![-2, 3],
            vec![-3, 4],
            vec![-4, 5],
            vec![-5, -1],
        ];
        for clause in clauses.clone() {
            formula.add_clause(clause).unwrap();
        }

        let config = Config {
            pure_literals: false,
        };
        let mut ctx = Context::from_formula(formula, config);

        match ctx.solve() {
            Solution::Satisfiable(model) => {
                for clause in &clauses {
                    assert!(model.satisfies(clause));
                }
                assert_eq!(ctx.counters.pure_literals, 0);
            }
            Solution::Unsatisfiable => panic!("the chain is satisfiable"),
        }
    }
}

mod formulas {

    use stoat_sat::types::err::{self};

    use super::*;

    #[test]
    fn unknown_atoms_are_rejected() {
        let mut formula = Formula::default();
        let p = formula.fresh_literal().unwrap();

        assert_eq!(
            formula.add_clause(vec![p, 2]),
            Err(err::ErrorKind::Formula(err::FormulaError::InvalidLiteral))
        );
        assert_eq!(
            formula.add_clause(vec![0]),
            Err(err::ErrorKind::Formula(err::FormulaError::InvalidLiteral))
        );

        // The failed additions left nothing behind.
        assert_eq!(formula.clause_count(), 0);
    }

    #[test]
    fn fresh_atoms_are_dense() {
        let mut formula = Formula::default();
        assert_eq!(formula.fresh_atom().unwrap(), 1);
        assert_eq!(formula.fresh_atom().unwrap(), 2);
        assert_eq!(formula.atom_count(), 2);
    }
}
