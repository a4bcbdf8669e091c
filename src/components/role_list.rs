//! Role List Component
//!
//! Career cards laid out as role items: the most recent ones always shown,
//! older ones inside the collapsible region. Once rendered, the list is
//! handed to the role-collapse controller.

use leptos::prelude::*;
use role_collapse::{dom, CollapseConfig};

use crate::components::CareerCard;
use crate::models::CareerEntry;
use crate::store::{is_open, toggle_open};

/// Split entries at the visibility threshold
pub fn split_recent(entries: Vec<CareerEntry>, max_visible: u32) -> (Vec<CareerEntry>, Vec<CareerEntry>) {
    entries.into_iter().partition(|e| e.id < max_visible as usize)
}

fn role_item(
    entry: CareerEntry,
    open_cards: ReadSignal<Vec<usize>>,
    set_open_cards: WriteSignal<Vec<usize>>,
) -> impl IntoView {
    let id = entry.id;
    view! {
        <li class="role" data-index=id.to_string()>
            <CareerCard
                entry=entry
                is_open=Signal::derive(move || open_cards.with(|open| is_open(open, id)))
                on_toggle=move |_| set_open_cards.update(|open| toggle_open(open, id))
            />
        </li>
    }
}

#[component]
pub fn RoleList(entries: Vec<CareerEntry>) -> impl IntoView {
    let (open_cards, set_open_cards) = signal(Vec::<usize>::new());
    let config = CollapseConfig::default();
    let (recent, older) = split_recent(entries, config.max_visible);
    let region_id = config.region_id.clone();

    // Dropping the handle detaches the toggle listener
    let mounted = StoredValue::new_local(None::<dom::MountedRoles>);
    on_cleanup(move || {
        mounted.try_update_value(|handle| handle.take());
    });

    // Enhance after the markup is in the document
    request_animation_frame(move || {
        match dom::mount(&config) {
            Some(handle) => {
                // Page already left: the handle comes back and is dropped
                let _ = mounted.try_set_value(Some(handle));
            }
            None => log::debug!("older roles left expanded"),
        }
    });

    view! {
        <ol class="roles">
            {recent.into_iter().map(|e| role_item(e, open_cards, set_open_cards)).collect_view()}
        </ol>
        <ol id=region_id.clone() class="roles older-roles">
            {older.into_iter().map(|e| role_item(e, open_cards, set_open_cards)).collect_view()}
        </ol>
        <button class="collapse-toggle" type="button" aria-controls=region_id aria-expanded="true">
            "Show less"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: usize) -> CareerEntry {
        CareerEntry {
            id,
            title: format!("Role {}", id),
            company: "Acme".to_string(),
            from: String::new(),
            to: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_split_recent() {
        let entries = (0..7).map(entry).collect();
        let (recent, older) = split_recent(entries, 4);

        let recent: Vec<usize> = recent.iter().map(|e| e.id).collect();
        let older: Vec<usize> = older.iter().map(|e| e.id).collect();
        assert_eq!(recent, vec![0, 1, 2, 3]);
        assert_eq!(older, vec![4, 5, 6]);
    }

    #[test]
    fn test_split_recent_short_list() {
        let (recent, older) = split_recent((0..2).map(entry).collect(), 4);
        assert_eq!(recent.len(), 2);
        assert!(older.is_empty());
    }
}
