use crate::FaceletError;

/// Errors that can occur while solving a cube.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolveError {
    /// The facelet string does not describe a solvable cube.
    #[display("invalid cube: {_0}")]
    InvalidCube(#[from] FaceletError),
    /// A stage of a staged method found no sequence reaching its goal.
    #[display("stage {stage:?} found no solution")]
    StageFailed {
        /// Name of the stage.
        stage: &'static str,
    },
    /// No solution exists within the configured length limit.
    #[display("no solution within {max_length} moves")]
    NoSolution {
        /// The length limit.
        max_length: usize,
    },
    /// The produced sequence does not solve the cube.
    #[display("the produced sequence does not solve the cube")]
    Unsolved,
}
