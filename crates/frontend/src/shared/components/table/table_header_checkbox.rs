//! Компонент чекбокса в заголовке таблицы для выбора всех строк
//!
//! # Примеры
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || state.with(|s| s.selection.checkbox_state(total)))
//!     on_change=Callback::new(move |check_all: bool| toggle_all(check_all))
//! />
//! ```

use crate::shared::selection::CheckboxState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Компонент чекбокса в заголовке таблицы
///
/// Показывает три состояния: unchecked, checked, indeterminate.
/// При клике переключает между "выбрать все" и "снять все".
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние, вычисленное из текущего выбора
    #[prop(into)]
    state: Signal<CheckboxState>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate нельзя задать атрибутом, только через DOM свойство
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="select all absences"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
