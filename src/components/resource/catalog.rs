use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The parallel content families. Each one has its own state and its own
/// reducer instance.
#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Resource {
    Post,
    MealPlanPost,
    StatusPost,
}

#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Operation {
    Create,
    ReadAll,
    Like,
    Delete,
    Update,
    CreateComment,
}

#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Phase {
    Request,
    Success,
    Failure,
}

/// The concrete event kind names for one operation. `None` means the kind
/// does not exist for this family.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PhaseKinds {
    pub request: Option<&'static str>,
    pub success: Option<&'static str>,
    pub failure: Option<&'static str>,
}

impl PhaseKinds {
    const fn all(request: &'static str, success: &'static str, failure: &'static str) -> Self {
        Self {
            request: Some(request),
            success: Some(success),
            failure: Some(failure),
        }
    }

    // Comments only report success
    const fn comment(success: &'static str) -> Self {
        Self {
            request: None,
            success: Some(success),
            failure: None,
        }
    }

    pub fn get(&self, phase: Phase) -> Option<&'static str> {
        match phase {
            Phase::Request => self.request,
            Phase::Success => self.success,
            Phase::Failure => self.failure,
        }
    }
}

/// Maps (operation, phase) to the event kind of one resource family.
/// The reducer only reacts to events that have a kind in here.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EventCatalog {
    pub resource: Resource,
    pub create: PhaseKinds,
    pub read_all: PhaseKinds,
    pub like: PhaseKinds,
    pub delete: PhaseKinds,
    pub update: PhaseKinds,
    pub create_comment: PhaseKinds,
}

pub const POST_EVENTS: EventCatalog = EventCatalog {
    resource: Resource::Post,
    create: PhaseKinds::all(
        "CREATE_POST_REQUEST",
        "CREATE_POST_SUCCESS",
        "CREATE_POST_FAILURE",
    ),
    read_all: PhaseKinds::all(
        "GET_ALL_POST_REQUEST",
        "GET_ALL_POST_SUCCESS",
        "GET_ALL_POST_FAILURE",
    ),
    like: PhaseKinds::all(
        "LIKE_POST_REQUEST",
        "LIKE_POST_SUCCESS",
        "LIKE_POST_FAILURE",
    ),
    delete: PhaseKinds::all(
        "DELETE_POST_REQUEST",
        "DELETE_POST_SUCCESS",
        "DELETE_POST_FAILURE",
    ),
    update: PhaseKinds::all(
        "UPDATE_POST_REQUEST",
        "UPDATE_POST_SUCCESS",
        "UPDATE_POST_FAILURE",
    ),
    create_comment: PhaseKinds::comment("CREATE_COMMENT_SUCCESS"),
};

// The meal plan names are irregular, the server side uses them as is
pub const MEAL_PLAN_EVENTS: EventCatalog = EventCatalog {
    resource: Resource::MealPlanPost,
    create: PhaseKinds::all(
        "CREATE_MEAL_PLAN_POST_REQUEST",
        "CREATE_MEAL_PLAN_POST_SUCCESS",
        "CREATE_MEAL_PLAN_POST_FAILURE",
    ),
    read_all: PhaseKinds::all(
        "GET_ALL_MEAL_PLAN_POST_REQUEST",
        "GET_ALL_MEAL_PLAN_POST_SUCCESS",
        "GET_ALL_MEAL_PLAN_POST_FAILURE",
    ),
    like: PhaseKinds::all(
        "LIKE_MEAL_PLAN_POST_REQUEST",
        "LIKE_MEAL_PLAN_POST_SUCCESS",
        "LIKE_MEAL_PLAN_POST_FAILURE",
    ),
    delete: PhaseKinds::all(
        "DELETE_MEAL_POST_REQUEST",
        "DELETE_MEAL_POST_SUCCESS",
        "DELETE_MEAL_POST_FAILURE",
    ),
    update: PhaseKinds::all(
        "UPDATE_MEAL_POST_REQUEST",
        "UPDATE_MEAL_POST_SUCCESS",
        "UPDATE_MEAL_POST_FAILURE",
    ),
    create_comment: PhaseKinds::comment("CREATE_MEAL_PLAN_COMMENT_SUCCESS"),
};

pub const STATUS_EVENTS: EventCatalog = EventCatalog {
    resource: Resource::StatusPost,
    create: PhaseKinds::all(
        "CREATE_STATUS_POST_REQUEST",
        "CREATE_STATUS_POST_SUCCESS",
        "CREATE_STATUS_POST_FAILURE",
    ),
    read_all: PhaseKinds::all(
        "GET_ALL_STATUS_POST_REQUEST",
        "GET_ALL_STATUS_POST_SUCCESS",
        "GET_ALL_STATUS_POST_FAILURE",
    ),
    like: PhaseKinds::all(
        "LIKE_STATUS_POST_REQUEST",
        "LIKE_STATUS_POST_SUCCESS",
        "LIKE_STATUS_POST_FAILURE",
    ),
    delete: PhaseKinds::all(
        "DELETE_STATUS_POST_REQUEST",
        "DELETE_STATUS_POST_SUCCESS",
        "DELETE_STATUS_POST_FAILURE",
    ),
    update: PhaseKinds::all(
        "UPDATE_STATUS_POST_REQUEST",
        "UPDATE_STATUS_POST_SUCCESS",
        "UPDATE_STATUS_POST_FAILURE",
    ),
    create_comment: PhaseKinds::comment("CREATE_STATUS_COMMENT_SUCCESS"),
};

impl EventCatalog {
    pub fn kinds(&self, operation: Operation) -> &PhaseKinds {
        match operation {
            Operation::Create => &self.create,
            Operation::ReadAll => &self.read_all,
            Operation::Like => &self.like,
            Operation::Delete => &self.delete,
            Operation::Update => &self.update,
            Operation::CreateComment => &self.create_comment,
        }
    }

    pub fn kind(&self, operation: Operation, phase: Phase) -> Option<&'static str> {
        self.kinds(operation).get(phase)
    }

    /// Every kind of this family, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (Operation, Phase, &'static str)> + '_ {
        use strum::IntoEnumIterator;
        Operation::iter().flat_map(move |operation| {
            Phase::iter().filter_map(move |phase| {
                self.kind(operation, phase)
                    .map(|kind| (operation, phase, kind))
            })
        })
    }

    /// Reverse lookup of a kind name
    pub fn lookup(&self, kind: &str) -> Option<(Operation, Phase)> {
        self.entries()
            .find(|(_, _, name)| *name == kind)
            .map(|(operation, phase, _)| (operation, phase))
    }
}
