//! Unit tests for the goal service.

use super::*;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockGoalRepository {
    goals: Mutex<Vec<Goal>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.lock().unwrap().clone())
    }

    fn get_goal(&self, goal_id: i64) -> Result<Goal> {
        self.goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| Error::goal_not_found(goal_id))
    }

    async fn insert_new_goal(&self, parameters: GoalParameters) -> Result<Goal> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let goal = Goal::new(*next_id, parameters);
        self.goals.lock().unwrap().push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: i64, mutation: GoalMutation) -> Result<Goal> {
        let mut goals = self.goals.lock().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::goal_not_found(goal_id))?;
        let next = mutation(goal.parameters().clone())?;
        goal.set_parameters(next);
        Ok(goal.clone())
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<usize> {
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        Ok(before - goals.len())
    }
}

fn service() -> GoalService {
    GoalService::new(Arc::new(MockGoalRepository::default()))
}

fn million_goal() -> NewGoal {
    NewGoal {
        name: "Million".to_string(),
        target_amount: 1_000_000.0,
        current_savings: 0.0,
        time_horizon_years: Some(10.0),
        expected_return_rate: Some(0.08),
        ..NewGoal::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_goal_attaches_calculations() {
    let service = service();
    let goal = service.create_goal(million_goal()).await.unwrap();

    assert_eq!(goal.id, 1);
    assert_eq!(goal.calculations().monthly_investment, 5466.09);
    assert_eq!(goal.calculations().remaining_needed, 1_000_000.0);
    assert_eq!(service.get_goals().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_goal_rejects_invalid_input() {
    let service = service();
    let result = service
        .create_goal(NewGoal {
            name: "".to_string(),
            ..million_goal()
        })
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(service.get_goals().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_goal_with_invalid_horizon_is_stored_with_flagged_result() {
    let service = service();
    let goal = service
        .create_goal(NewGoal {
            time_horizon_years: Some(0.0),
            ..million_goal()
        })
        .await
        .unwrap();

    assert!(goal.calculations().is_error());
    assert_eq!(goal.calculations().monthly_investment, 0.0);
}

#[tokio::test]
async fn test_update_goal_recalculates() {
    let service = service();
    let goal = service.create_goal(million_goal()).await.unwrap();

    let updated = service
        .update_goal(
            goal.id,
            GoalUpdate {
                expected_return_rate: Some(0.0),
                time_horizon_years: Some(2.0),
                target_amount: Some(50_000.0),
                ..GoalUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, goal.id);
    assert_eq!(updated.calculations().monthly_investment, 2083.33);
    assert_eq!(service.get_goal(goal.id).unwrap(), updated);
}

#[tokio::test]
async fn test_empty_update_keeps_calculations() {
    let service = service();
    let goal = service.create_goal(million_goal()).await.unwrap();

    let recalculated = service
        .update_goal(goal.id, GoalUpdate::default())
        .await
        .unwrap();
    assert_eq!(recalculated, goal);
}

#[tokio::test]
async fn test_failed_update_leaves_goal_untouched() {
    let service = service();
    let goal = service.create_goal(million_goal()).await.unwrap();

    let result = service
        .update_goal(
            goal.id,
            GoalUpdate {
                current_savings: Some(-1.0),
                ..GoalUpdate::default()
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(service.get_goal(goal.id).unwrap(), goal);
}

#[tokio::test]
async fn test_update_missing_goal() {
    let service = service();
    let result = service.update_goal(42, GoalUpdate::default()).await;
    assert!(matches!(result, Err(Error::NotFound { id: 42, .. })));
}

#[tokio::test]
async fn test_delete_goal() {
    let service = service();
    let goal = service.create_goal(million_goal()).await.unwrap();

    assert_eq!(service.delete_goal(goal.id).await.unwrap(), 1);
    assert_eq!(service.delete_goal(goal.id).await.unwrap(), 0);
    assert!(service.get_goals().unwrap().is_empty());
}

#[test]
fn test_goal_types_catalog() {
    let service = service();
    let types = service.get_goal_types();
    assert!(types.iter().any(|t| t.id == "retirement"));
    assert_eq!(types.len(), GOAL_TYPE_PRESETS.len());
}
