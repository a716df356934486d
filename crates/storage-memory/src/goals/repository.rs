use goalplan_core::goals::{Goal, GoalMutation, GoalParameters, GoalRepositoryTrait};
use goalplan_core::{Error, Result};

use crate::db::{self, DbHandle, WriteHandle};
use async_trait::async_trait;

pub struct GoalRepository {
    db: DbHandle,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(db: DbHandle, writer: WriteHandle) -> Self {
        GoalRepository { db, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        db::read(&self.db, |db| Ok(db.goals.clone()))
    }

    fn get_goal(&self, goal_id: i64) -> Result<Goal> {
        db::read(&self.db, |db| {
            db.goals
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::goal_not_found(goal_id))
        })
    }

    async fn insert_new_goal(&self, parameters: GoalParameters) -> Result<Goal> {
        self.writer
            .exec(move |db| {
                let goal = Goal::new(db.next_goal_id(), parameters);
                db.goals.push(goal.clone());
                Ok(goal)
            })
            .await
    }

    async fn update_goal(&self, goal_id: i64, mutation: GoalMutation) -> Result<Goal> {
        self.writer
            .exec(move |db| {
                let goal = db
                    .goals
                    .iter_mut()
                    .find(|g| g.id == goal_id)
                    .ok_or_else(|| Error::goal_not_found(goal_id))?;
                let parameters = mutation(goal.parameters().clone())?;
                goal.set_parameters(parameters);
                Ok(goal.clone())
            })
            .await
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<usize> {
        self.writer
            .exec(move |db| {
                let before = db.goals.len();
                db.goals.retain(|g| g.id != goal_id);
                Ok(before - db.goals.len())
            })
            .await
    }
}
