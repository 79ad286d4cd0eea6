use crate::{
    info,
    platform::{BarPosition, PlatformVariant, WidgetType},
    DEBUG_NAME,
};

pub const SLOT_COUNT: usize = 4;

/// Fixed-length slot assignment, index = physical slot position. Unused
/// slots hold `Empty`, never an absence sentinel.
pub type WidgetSlots = [WidgetType; SLOT_COUNT];

pub const EMPTY_SLOTS: WidgetSlots = [WidgetType::Empty; SLOT_COUNT];

/// Applies the per-platform/per-layout constraints to the requested slot
/// assignment:
///
/// 1. hidden sidebar clears every slot;
/// 2. vertical layouts have no slot 3;
/// 3. round displays only have slots 0 and 2;
/// 4. horizontal non-round layouts are left-compacted so the renderer draws
///    populated slots contiguously (a single forward pass; at most one
///    interior gap can exist in a 4-slot request).
///
/// A form that never set the sidebar position leaves the layout unknown:
/// no constraint applies and no compaction runs.
pub fn normalize_slots(
    requested: [Option<WidgetType>; SLOT_COUNT],
    position: Option<BarPosition>,
    platform: PlatformVariant,
) -> WidgetSlots {
    let mut slots: WidgetSlots = requested.map(|w| w.unwrap_or(WidgetType::Empty));

    if position == Some(BarPosition::None) {
        return EMPTY_SLOTS;
    }

    if position.is_some_and(BarPosition::is_vertical) {
        slots[3] = WidgetType::Empty;
    }

    let caps = platform.capabilities();
    if caps.round_layout {
        slots[1] = WidgetType::Empty;
        slots[3] = WidgetType::Empty;
        return slots;
    }

    if position.is_some_and(BarPosition::is_horizontal) {
        if slots[1] == WidgetType::Empty {
            slots[1] = slots[2];
            slots[2] = WidgetType::Empty;
        }
        if slots[2] == WidgetType::Empty {
            slots[2] = slots[3];
            slots[3] = WidgetType::Empty;
        }
    }

    slots
}

/// Picks the one slot the watch may overwrite with dynamically refreshed
/// content (weather rotation) without a settings round-trip. `None` iff the
/// sidebar is hidden.
///
/// Preference order: sacrifice an unused slot first, then a weather slot
/// (weather is exactly what the substitution refreshes), and only then fall
/// back to a fixed slot. User-chosen non-weather content is never evicted
/// while an empty or weather slot exists.
pub fn replaceable_slot(
    slots: &WidgetSlots,
    position: Option<BarPosition>,
    platform: PlatformVariant,
) -> Option<usize> {
    if position == Some(BarPosition::None) {
        return None;
    }

    let caps = platform.capabilities();
    let index = if caps.round_layout {
        replaceable_on_round(slots)
    } else {
        replaceable_on_rect(slots, position)
    };

    info!("[{}][SLOTS] Replaceable slot resolved to {index}", DEBUG_NAME);
    Some(index)
}

fn replaceable_on_round(slots: &WidgetSlots) -> usize {
    if slots[0] == WidgetType::Empty {
        return 0;
    }
    if slots[2] == WidgetType::Empty {
        return 2;
    }
    if let Some(i) = index_of(slots, WidgetType::WeatherCurrent) {
        return i;
    }
    if let Some(i) = index_of(slots, WidgetType::WeatherForecastToday) {
        return i;
    }
    0
}

fn replaceable_on_rect(slots: &WidgetSlots, position: Option<BarPosition>) -> usize {
    if let Some(i) = slots[..3].iter().position(|w| *w == WidgetType::Empty) {
        return i;
    }

    let horizontal = position.is_some_and(BarPosition::is_horizontal);
    if slots[3] == WidgetType::Empty && horizontal {
        return 3;
    }
    if let Some(i) = index_of(slots, WidgetType::WeatherCurrent) {
        return i;
    }
    if let Some(i) = index_of(slots, WidgetType::WeatherForecastToday) {
        return i;
    }
    1
}

fn index_of(slots: &WidgetSlots, widget: WidgetType) -> Option<usize> {
    slots.iter().position(|w| *w == widget)
}

pub fn contains(slots: &WidgetSlots, widget: WidgetType) -> bool {
    slots.iter().any(|w| *w == widget)
}

pub fn contains_any(slots: &WidgetSlots, widgets: &[WidgetType]) -> bool {
    widgets.iter().any(|w| contains(slots, *w))
}
