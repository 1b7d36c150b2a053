use crate::model::settings::{
    GeneralKey, Ordering, OrderingCriterion, OrderingDirection, PageKey, PageSettings, Settings,
    SmartListKey, ThemeColor,
};
use crate::ops::ActionError;

// ---------------------------------------------------------------------------
// Global settings
// ---------------------------------------------------------------------------

pub fn set_general(settings: &mut Settings, key: GeneralKey, value: bool) {
    match key {
        GeneralKey::ConfirmBeforeRemoving => settings.general.confirm_before_removing = value,
        GeneralKey::MoveImportantTask => settings.general.move_important_task = value,
    }
}

pub fn set_smart_list(settings: &mut Settings, key: SmartListKey, value: bool) {
    match key {
        SmartListKey::Important => settings.smart_list.important = value,
        SmartListKey::Planned => settings.smart_list.planned = value,
        SmartListKey::All => settings.smart_list.all = value,
        SmartListKey::Completed => settings.smart_list.completed = value,
        SmartListKey::AutoHideEmptyLists => settings.smart_list.auto_hide_empty_lists = value,
    }
}

// ---------------------------------------------------------------------------
// Per-page settings
// ---------------------------------------------------------------------------

// Each page exposes a fixed subset of the page settings; the slot helpers
// encode which pages carry which slot, and everything else is a
// PageUnsupported error (a core/presentation contract mismatch).

fn hide_completed_slot(
    pages: &mut PageSettings,
    page: PageKey,
) -> Result<&mut bool, ActionError> {
    match page {
        PageKey::Important => Ok(&mut pages.important.is_hide_completed_items),
        PageKey::Planned => Ok(&mut pages.planned.is_hide_completed_items),
        PageKey::Search => Ok(&mut pages.search.is_hide_completed_items),
        PageKey::SearchResult => Ok(&mut pages.search_result.is_hide_completed_items),
        _ => Err(ActionError::PageUnsupported {
            page,
            feature: "hide completed items",
        }),
    }
}

fn theme_slot(pages: &mut PageSettings, page: PageKey) -> Result<&mut ThemeColor, ActionError> {
    match page {
        PageKey::All => Ok(&mut pages.all.theme_color),
        PageKey::Completed => Ok(&mut pages.completed.theme_color),
        PageKey::Inbox => Ok(&mut pages.inbox.theme_color),
        _ => Err(ActionError::PageUnsupported {
            page,
            feature: "theme color",
        }),
    }
}

fn ordering_slot(
    pages: &mut PageSettings,
    page: PageKey,
) -> Result<&mut Option<Ordering>, ActionError> {
    match page {
        PageKey::MyDay => Ok(&mut pages.myday.ordering),
        PageKey::Inbox => Ok(&mut pages.inbox.ordering),
        _ => Err(ActionError::PageUnsupported {
            page,
            feature: "ordering criterion",
        }),
    }
}

pub fn show_completed_items(pages: &mut PageSettings, page: PageKey) -> Result<(), ActionError> {
    *hide_completed_slot(pages, page)? = false;
    Ok(())
}

pub fn hide_completed_items(pages: &mut PageSettings, page: PageKey) -> Result<(), ActionError> {
    *hide_completed_slot(pages, page)? = true;
    Ok(())
}

pub fn set_theme_color(
    pages: &mut PageSettings,
    page: PageKey,
    color: ThemeColor,
) -> Result<(), ActionError> {
    *theme_slot(pages, page)? = color;
    Ok(())
}

pub fn set_ordering_criterion(
    pages: &mut PageSettings,
    page: PageKey,
    criterion: OrderingCriterion,
    direction: OrderingDirection,
) -> Result<(), ActionError> {
    *ordering_slot(pages, page)? = Some(Ordering {
        criterion,
        direction,
    });
    Ok(())
}

/// Flip the direction of the page's existing ordering.
pub fn reverse_ordering_criterion(
    pages: &mut PageSettings,
    page: PageKey,
) -> Result<(), ActionError> {
    let slot = ordering_slot(pages, page)?;
    let ordering = slot.as_mut().ok_or(ActionError::OrderingNotSet(page))?;
    ordering.direction = ordering.direction.reversed();
    Ok(())
}

pub fn unset_ordering_criterion(
    pages: &mut PageSettings,
    page: PageKey,
) -> Result<(), ActionError> {
    *ordering_slot(pages, page)? = None;
    Ok(())
}
