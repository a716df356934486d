use crate::errors::Result;
use crate::goals::goal_types::GoalTypePreset;
use crate::goals::goals_model::{Goal, GoalParameters, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Transformation applied to a goal's parameters inside the repository's writer.
///
/// Returning `Err` aborts the update and leaves the stored goal untouched.
pub type GoalMutation = Box<dyn FnOnce(GoalParameters) -> Result<GoalParameters> + Send + 'static>;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: i64) -> Result<Goal>;
    /// Stores a goal under a freshly assigned id.
    async fn insert_new_goal(&self, parameters: GoalParameters) -> Result<Goal>;
    /// Applies `mutation` and re-solves the goal as one serialized write.
    async fn update_goal(&self, goal_id: i64, mutation: GoalMutation) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: i64) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: i64) -> Result<Goal>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: i64, goal_update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: i64) -> Result<usize>;
    fn get_goal_types(&self) -> &'static [GoalTypePreset];
}
