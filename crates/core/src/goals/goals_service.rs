use log::debug;
use std::sync::Arc;

use super::goal_types::{GoalTypePreset, GOAL_TYPE_PRESETS};
use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;

/// Service for managing goals and keeping their calculations current.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn get_goal(&self, goal_id: i64) -> Result<Goal> {
        self.goal_repo.get_goal(goal_id)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let parameters = new_goal.into_parameters()?;
        let goal = self.goal_repo.insert_new_goal(parameters).await?;
        debug!(
            "Created goal {} ({}), primary {} investment {}",
            goal.id,
            goal.parameters().name,
            goal.parameters().investment_frequency.as_str(),
            goal.primary_investment()
        );
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: i64, goal_update: GoalUpdate) -> Result<Goal> {
        if goal_update.is_empty() {
            debug!("Recalculating goal {} with unchanged parameters", goal_id);
        }
        let goal = self
            .goal_repo
            .update_goal(goal_id, Box::new(move |current| goal_update.apply(current)))
            .await?;
        debug!(
            "Updated goal {}, remaining needed {}",
            goal.id,
            goal.calculations().remaining_needed
        );
        Ok(goal)
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<usize> {
        let deleted = self.goal_repo.delete_goal(goal_id).await?;
        debug!("Deleted {} goal(s) with id {}", deleted, goal_id);
        Ok(deleted)
    }

    fn get_goal_types(&self) -> &'static [GoalTypePreset] {
        GOAL_TYPE_PRESETS
    }
}
