use crate::environment::storage::AppState;
use crate::environment::types::{MealPlanDraft, MealPlanPost};
use crate::event::AppEvent;

use super::resource::catalog::MEAL_PLAN_EVENTS;
use super::resource::{
    Endpoints, EventCatalog, ResourceAction, ResourceFamily, ResourceReducer, ResourceState,
};

pub type MealPlanAction = ResourceAction<MealPlanPost>;
pub type State = ResourceState<MealPlanPost>;
pub type MealPlanReducer = ResourceReducer<MealPlanFamily>;

pub struct MealPlanFamily;

impl ResourceFamily for MealPlanFamily {
    type Item = MealPlanPost;

    type Draft = MealPlanDraft;

    const CATALOG: EventCatalog = MEAL_PLAN_EVENTS;

    const ENDPOINTS: Endpoints = Endpoints {
        collection: "/api/mealplans",
        comments: "/api/comments/mealplan",
    };

    fn project(event: &AppEvent) -> Option<&MealPlanAction> {
        match event {
            AppEvent::MealPlan(action) => Some(action),
            _ => None,
        }
    }

    fn wrap(action: MealPlanAction) -> AppEvent {
        AppEvent::MealPlan(action)
    }

    fn state(app: &AppState) -> &State {
        &app.meal_plans
    }
}
