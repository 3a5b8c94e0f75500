use crate::error::EnvError;

/// Outcome of a single [`Env::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f64,
    /// The episode ended in failure (crash or leaving the arena).
    pub terminated: bool,
    /// The episode ended by reaching the goal.
    pub truncated: bool,
}

impl<O> Step<O> {
    /// Whether the caller should reset before continuing.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one discrete action and returns the new observation, a
/// reward signal, and the two end-of-episode flags.
///
/// [`step`]: Env::step
pub trait Env {
    type Action;
    type Observation;

    /// Start a new episode and return its initial observation.
    fn reset(&mut self) -> Self::Observation;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UninitializedEpisode`] when called before
    /// [`Env::reset`].
    fn step(&mut self, action: Self::Action) -> Result<Step<Self::Observation>, EnvError>;

    /// Length of the flattened observation vector.
    fn observation_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_count(&self) -> usize;
}
