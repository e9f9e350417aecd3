mod sudoku {
    use stoat_tests::sudoku::{respects_givens, solve, valid_solution, EASY};

    #[test]
    fn easy_puzzle() {
        let solution = solve(&EASY).expect("the puzzle has a solution");

        assert!(valid_solution(&solution));
        assert!(respects_givens(&EASY, &solution));
    }

    #[test]
    fn contradictory_givens() {
        // Two nines in the first row.
        let mut puzzle = EASY;
        puzzle[0][0] = 9;
        puzzle[0][1] = 9;

        assert!(solve(&puzzle).is_none());
    }

    #[test]
    fn blank_grid_has_a_solution() {
        let blank = [[0; 9]; 9];
        let solution = solve(&blank).expect("an empty grid constrains nothing");

        assert!(valid_solution(&solution));
    }
}
