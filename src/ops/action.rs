use crate::model::position::{AnchoredLeft, AnchoredRight};
use crate::model::settings::{
    GeneralKey, OrderingCriterion, OrderingDirection, PageKey, SmartListKey, ThemeColor,
};
use crate::model::task::{SubStepPatch, TaskDraft, TaskPatch};

/// Every intent the presentation layer can dispatch. This enum is the
/// entire write surface of the store.
#[derive(Debug, Clone)]
pub enum Action {
    // Task CRUD
    CreateTodoItem(TaskDraft),
    RemoveTodoItem { id: String },
    UpdateTodoItem { id: String, patch: TaskPatch },

    // Completion. Both complete variants stamp `completed_at` (the stamp is
    // the completed list's ordering flag); the two intents are kept
    // distinct to mirror the action table the UI dispatches from.
    MarkAsComplete { id: String },
    MarkAsCompleteWithOrderingFlag { id: String },
    MarkAsIncomplete { id: String },

    // Importance
    MarkAsImportant { id: String },
    MarkAsImportantWithOrderingFlag { id: String },
    MarkAsUnimportant { id: String },

    // My Day
    MarkAsTodayTaskWithOrderingFlag { id: String },
    MarkAsNonTodayTask { id: String },

    // Sub-steps
    CreateSubStep { task_id: String, title: String },
    UpdateSubStep { task_id: String, step_id: String, patch: SubStepPatch },
    RemoveSubStep { task_id: String, step_id: String },

    // Deadline
    SetDeadline { id: String, deadline: i64 },
    UnsetDeadline { id: String },

    // Global settings
    TurnOnGeneral(GeneralKey),
    TurnOffGeneral(GeneralKey),
    TurnOnSmartList(SmartListKey),
    TurnOffSmartList(SmartListKey),

    // Per-page settings
    ShowCompletedItems(PageKey),
    HideCompletedItems(PageKey),
    SetThemeColor { page: PageKey, color: ThemeColor },
    SetOrderingCriterion {
        page: PageKey,
        criterion: OrderingCriterion,
        direction: OrderingDirection,
    },
    ReverseOrderingCriterion(PageKey),
    UnsetOrderingCriterion(PageKey),

    // Panels
    OpenSearchBox,
    CloseSearchBox,
    OpenSidebar,
    CloseSidebar,
    OpenSettingPanel,
    CloseSettingPanel,
    OpenDetailPanel { id: String },
    CloseDetailPanel,

    // Floating menus (commit phase; positions come from the geometry module)
    OpenListOption(AnchoredLeft),
    CloseListOption,
    OpenThemePalette(AnchoredLeft),
    CloseThemePalette,
    OpenOrderingCriterion(AnchoredLeft),
    CloseOrderingCriterion,
    OpenDeadlinePicker(AnchoredRight),
    CloseDeadlinePicker,
    OpenDeadlineCalendar(AnchoredRight),
    CloseDeadlineCalendar,
}
