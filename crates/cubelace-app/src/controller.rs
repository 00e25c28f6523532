//! Click handling for the facelet editor.
//!
//! The controller owns the [`CubeLayout`] and turns clicks in world
//! coordinates into edits. A click on a facelet advances its color and
//! redraws that one facelet. A click on the control region serializes the
//! layout, runs every configured strategy and ends the session; from then
//! on, clicks are ignored.

use std::fmt;

use cubelace_core::{CellId, ColorId, CubeGeometry, CubeLayout, HitTarget, Point, hit_test};
use cubelace_solver::{MoveSequence, SolveError, SolveStrategy, Solver};

use crate::renderer::{BorderStyle, CellRenderer};

/// The solving engine as seen by the controller.
pub trait CubeSolver {
    /// Solves a 54-character facelet string with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if the string is not a solvable cube or the
    /// strategy fails.
    fn solve(
        &mut self,
        facelets: &str,
        strategy: SolveStrategy,
    ) -> Result<MoveSequence, SolveError>;
}

impl CubeSolver for Solver {
    fn solve(
        &mut self,
        facelets: &str,
        strategy: SolveStrategy,
    ) -> Result<MoveSequence, SolveError> {
        Solver::solve(self, facelets, strategy)
    }
}

/// Lifecycle of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ControllerState {
    /// Clicks edit the layout.
    Editing,
    /// The cube has been handed to the solver; clicks are ignored.
    Terminated,
}

/// The outcome of one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    /// The strategy that was run.
    pub strategy: SolveStrategy,
    /// Its solution, or why it failed.
    pub result: Result<MoveSequence, SolveError>,
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(solution) if solution.is_empty() => {
                write!(f, "{}: already solved", self.strategy)
            }
            Ok(solution) => write!(f, "{}: {solution}", self.strategy),
            Err(e) => write!(f, "{}: error: {e}", self.strategy),
        }
    }
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// Nothing was hit, or the session is over.
    Ignored,
    /// A facelet changed to `color`.
    Cycled {
        /// The clicked facelet.
        cell: CellId,
        /// Its new color.
        color: ColorId,
    },
    /// The cube was solved with every configured strategy.
    Solved(Vec<StrategyReport>),
}

/// Owns the layout and dispatches clicks.
///
/// # Examples
///
/// ```
/// use cubelace_app::{
///     controller::Controller,
///     renderer::{BorderStyle, CellRenderer},
/// };
/// use cubelace_core::{CellBounds, ColorId, CubeGeometry, Point};
/// use cubelace_solver::Solver;
///
/// struct NoopRenderer;
/// impl CellRenderer for NoopRenderer {
///     fn draw_cell(&mut self, _: CellBounds, _: ColorId, _: BorderStyle) {}
/// }
///
/// let mut controller = Controller::new(&CubeGeometry::STANDARD);
/// let mut solver = Solver::new();
///
/// // The top-left facelet of the up face.
/// let outcome = controller.click(Point::new(175.0, 25.0), &mut solver, &mut NoopRenderer);
/// assert!(outcome.is_cycled());
/// ```
#[derive(Debug, Clone)]
pub struct Controller<'a> {
    geometry: &'a CubeGeometry,
    layout: CubeLayout,
    state: ControllerState,
    strategies: Vec<SolveStrategy>,
}

impl<'a> Controller<'a> {
    /// Creates a controller over a solved layout, running every strategy on
    /// solve.
    #[must_use]
    pub fn new(geometry: &'a CubeGeometry) -> Self {
        Self {
            geometry,
            layout: CubeLayout::new(geometry),
            state: ControllerState::Editing,
            strategies: SolveStrategy::ALL.to_vec(),
        }
    }

    /// Returns the geometry the layout was built from.
    #[must_use]
    pub fn geometry(&self) -> &'a CubeGeometry {
        self.geometry
    }

    /// Returns the current layout.
    #[must_use]
    pub fn layout(&self) -> &CubeLayout {
        &self.layout
    }

    /// Returns the session state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Returns the strategies run on solve, in order.
    #[must_use]
    pub fn strategies(&self) -> &[SolveStrategy] {
        &self.strategies
    }

    /// Replaces the strategies run on solve.
    ///
    /// An empty selection runs every strategy.
    pub fn set_strategies(&mut self, strategies: impl IntoIterator<Item = SolveStrategy>) {
        self.strategies = strategies.into_iter().collect();
        if self.strategies.is_empty() {
            log::warn!("no strategy selected, running all of them");
            self.strategies = SolveStrategy::ALL.to_vec();
        }
    }

    /// Resolves what `point` would hit, without acting on it.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        hit_test::hit_test(&self.layout, self.geometry, point)
    }

    /// Handles a click at `point` in world coordinates.
    pub fn click<S, R>(&mut self, point: Point, solver: &mut S, renderer: &mut R) -> ClickOutcome
    where
        S: CubeSolver + ?Sized,
        R: CellRenderer + ?Sized,
    {
        if self.state.is_terminated() {
            return ClickOutcome::Ignored;
        }
        match self.hit_test(point) {
            Some(HitTarget::Control) => ClickOutcome::Solved(self.solve(solver)),
            Some(HitTarget::Cell(cell)) => {
                let color = self.layout.cycle(cell);
                log::debug!("{cell:?} -> {}", color.name());
                self.draw_cell(cell, BorderStyle::Normal, renderer);
                ClickOutcome::Cycled { cell, color }
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Runs every configured strategy on the current layout and ends the
    /// session. A failing strategy does not stop the others.
    fn solve<S>(&mut self, solver: &mut S) -> Vec<StrategyReport>
    where
        S: CubeSolver + ?Sized,
    {
        let facelets = self.layout.serialize();
        log::info!("solving {facelets}");
        let reports = self
            .strategies
            .iter()
            .map(|&strategy| {
                let result = solver.solve(&facelets, strategy);
                if let Err(e) = &result {
                    log::warn!("{strategy} failed: {e}");
                }
                StrategyReport { strategy, result }
            })
            .collect();
        self.state = ControllerState::Terminated;
        reports
    }

    /// Draws one facelet.
    pub fn draw_cell<R>(&self, cell: CellId, border: BorderStyle, renderer: &mut R)
    where
        R: CellRenderer + ?Sized,
    {
        let face = self.layout.face(cell.face);
        let pos = cell.position;
        renderer.draw_cell(face.screen_bounds(pos.row(), pos.col()), face.color(pos), border);
    }

    /// Draws all 54 facelets in layout order.
    pub fn draw_all<R>(&self, renderer: &mut R)
    where
        R: CellRenderer + ?Sized,
    {
        for (cell, _) in self.layout.cells() {
            self.draw_cell(cell, BorderStyle::Normal, renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use cubelace_core::{CellBounds, CellPosition, FaceSlot};

    use super::*;

    #[derive(Debug, Default)]
    struct CountingSolver {
        calls: Vec<(String, SolveStrategy)>,
    }

    impl CubeSolver for CountingSolver {
        fn solve(
            &mut self,
            facelets: &str,
            strategy: SolveStrategy,
        ) -> Result<MoveSequence, SolveError> {
            self.calls.push((facelets.to_owned(), strategy));
            match strategy {
                SolveStrategy::Cfop => Err(SolveError::Unsolved),
                _ => Ok(MoveSequence::new()),
            }
        }
    }

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        cells: Vec<(CellBounds, ColorId, BorderStyle)>,
    }

    impl CellRenderer for RecordingRenderer {
        fn draw_cell(&mut self, bounds: CellBounds, fill: ColorId, border: BorderStyle) {
            self.cells.push((bounds, fill, border));
        }
    }

    fn center_of(controller: &Controller<'_>, cell: CellId) -> Point {
        let pos = cell.position;
        controller
            .layout()
            .face(cell.face)
            .screen_bounds(pos.row(), pos.col())
            .center()
    }

    fn control_point(controller: &Controller<'_>) -> Point {
        controller.geometry().control_region().center()
    }

    #[test]
    fn test_cell_click_cycles_and_redraws_one_cell() {
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        let mut solver = CountingSolver::default();
        let mut renderer = RecordingRenderer::default();
        let cell = CellId::new(FaceSlot::Front, CellPosition::CENTER);
        let before = controller.layout().serialize();

        let outcome = controller.click(center_of(&controller, cell), &mut solver, &mut renderer);

        assert_eq!(
            outcome,
            ClickOutcome::Cycled {
                cell,
                color: ColorId::Blue,
            }
        );
        assert_eq!(renderer.cells.len(), 1);
        assert_eq!(renderer.cells[0].1, ColorId::Blue);
        let after = controller.layout().serialize();
        let changed: Vec<usize> = (0..after.len())
            .filter(|&i| before.as_bytes()[i] != after.as_bytes()[i])
            .collect();
        assert_eq!(changed, vec![cell.serial_index()]);
        assert!(solver.calls.is_empty());
    }

    #[test]
    fn test_six_clicks_restore_the_color() {
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        let mut solver = CountingSolver::default();
        let mut renderer = RecordingRenderer::default();
        let cell = CellId::new(FaceSlot::Front, CellPosition::CENTER);
        let point = center_of(&controller, cell);

        for _ in 0..6 {
            controller.click(point, &mut solver, &mut renderer);
        }
        assert_eq!(controller.layout().color(cell), ColorId::Orange);
        assert_eq!(renderer.cells.len(), 6);
    }

    #[test]
    fn test_boundary_and_dead_space_clicks_do_nothing() {
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        let mut solver = CountingSolver::default();
        let mut renderer = RecordingRenderer::default();
        let before = controller.layout().serialize();

        // Between the first two facelets of the up face.
        let boundary = Point::new(200.0, 25.0);
        // Left of the up face, above the left face.
        let dead = Point::new(25.0, 25.0);
        for point in [boundary, dead] {
            assert_eq!(
                controller.click(point, &mut solver, &mut renderer),
                ClickOutcome::Ignored
            );
        }
        assert_eq!(controller.layout().serialize(), before);
        assert!(renderer.cells.is_empty());
        assert!(controller.state().is_editing());
    }

    #[test]
    fn test_control_click_runs_every_strategy_once() {
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        let mut solver = CountingSolver::default();
        let mut renderer = RecordingRenderer::default();
        let expected = controller.layout().serialize();

        let outcome = controller.click(control_point(&controller), &mut solver, &mut renderer);

        let ClickOutcome::Solved(reports) = outcome else {
            panic!("expected reports, got {outcome:?}");
        };
        assert_eq!(solver.calls.len(), 3);
        assert!(solver.calls.iter().all(|(facelets, _)| *facelets == expected));
        let strategies: Vec<SolveStrategy> = reports.iter().map(|r| r.strategy).collect();
        assert_eq!(strategies, SolveStrategy::ALL);
        // The failing strategy does not hide the others.
        assert!(reports[0].result.is_ok());
        assert_eq!(reports[1].result, Err(SolveError::Unsolved));
        assert!(reports[2].result.is_ok());
        assert!(controller.state().is_terminated());
        assert!(renderer.cells.is_empty());
    }

    #[test]
    fn test_clicks_after_termination_are_ignored() {
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        let mut solver = CountingSolver::default();
        let mut renderer = RecordingRenderer::default();
        controller.click(control_point(&controller), &mut solver, &mut renderer);
        let before = controller.layout().serialize();

        let cell = CellId::new(FaceSlot::Up, CellPosition::new(0, 0));
        for point in [center_of(&controller, cell), control_point(&controller)] {
            assert_eq!(
                controller.click(point, &mut solver, &mut renderer),
                ClickOutcome::Ignored
            );
        }
        assert_eq!(solver.calls.len(), 3);
        assert_eq!(controller.layout().serialize(), before);
        assert!(renderer.cells.is_empty());
    }

    #[test]
    fn test_configured_strategies() {
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        controller.set_strategies([SolveStrategy::Kociemba]);
        let mut solver = CountingSolver::default();
        let mut renderer = RecordingRenderer::default();
        controller.click(control_point(&controller), &mut solver, &mut renderer);
        assert_eq!(solver.calls.len(), 1);
        assert_eq!(solver.calls[0].1, SolveStrategy::Kociemba);
    }

    #[test]
    fn test_empty_strategy_selection_runs_all() {
        let mut controller = Controller::new(&CubeGeometry::STANDARD);
        controller.set_strategies(Vec::new());
        assert_eq!(controller.strategies(), SolveStrategy::ALL);
        let mut solver = CountingSolver::default();
        let mut renderer = RecordingRenderer::default();
        let outcome = controller.click(control_point(&controller), &mut solver, &mut renderer);
        let ClickOutcome::Solved(reports) = outcome else {
            panic!("expected solved, got {outcome:?}");
        };
        assert_eq!(reports.len(), SolveStrategy::ALL.len());
        assert_eq!(solver.calls.len(), SolveStrategy::ALL.len());
        assert!(controller.state().is_terminated());
    }

    #[test]
    fn test_draw_all_draws_every_facelet_in_order() {
        let controller = Controller::new(&CubeGeometry::STANDARD);
        let mut renderer = RecordingRenderer::default();
        controller.draw_all(&mut renderer);
        assert_eq!(renderer.cells.len(), CubeLayout::FACELET_COUNT);
        let colors: String = renderer.cells.iter().map(|c| c.1.as_char()).collect();
        assert_eq!(colors, controller.layout().serialize());
    }

    #[test]
    fn test_report_display() {
        let ok = StrategyReport {
            strategy: SolveStrategy::Kociemba,
            result: "R U'".parse().map_err(|_| SolveError::Unsolved),
        };
        assert_eq!(ok.to_string(), "Kociemba: R U'");
        let solved = StrategyReport {
            strategy: SolveStrategy::Beginner,
            result: Ok(MoveSequence::new()),
        };
        assert_eq!(solved.to_string(), "Beginner: already solved");
        let failed = StrategyReport {
            strategy: SolveStrategy::Cfop,
            result: Err(SolveError::Unsolved),
        };
        assert_eq!(
            failed.to_string(),
            "CFOP: error: the produced sequence does not solve the cube"
        );
    }
}
