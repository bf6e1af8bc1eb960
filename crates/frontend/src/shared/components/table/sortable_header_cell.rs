//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Type of absence"
//!     active=Signal::derive(move || state.with(|s| s.sort.is_active(AbsenceColumn::Type)))
//!     direction=Signal::derive(move || state.with(|s| s.sort.direction))
//!     on_sort=Callback::new(move |_| request_sort(AbsenceColumn::Type))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_announcement, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Добавляет индикатор сортировки (▲▼)
/// - Озвучивает направление для скринридеров на активной колонке
/// - Обрабатывает клики для изменения сортировки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Колонка сейчас является ключом сортировки
    #[prop(into)]
    active: Signal<bool>,

    /// Направление сортировки из state
    #[prop(into)]
    direction: Signal<SortDirection>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                data-testid="filter"
                role="button"
                aria-sort=move || {
                    if !active.get() {
                        "none"
                    } else if direction.get().is_ascending() {
                        "ascending"
                    } else {
                        "descending"
                    }
                }
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || get_sort_class(active.get())>
                    {move || get_sort_indicator(active.get(), direction.get())}
                </span>
                {move || {
                    active.get().then(|| view! {
                        <span class="visually-hidden">{sort_announcement(direction.get())}</span>
                    })
                }}
            </div>
        </TableHeaderCell>
    }
}
