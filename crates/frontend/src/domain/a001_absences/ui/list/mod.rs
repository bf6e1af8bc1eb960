mod state;

pub use state::AbsencesListState;

use crate::domain::a001_absences::calendar_export::export_row;
use crate::domain::a001_absences::projection::{AbsenceColumn, AbsenceRow};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableHeaderCheckbox};
use crate::shared::config::{ExportConfig, TableConfig};
use crate::shared::ical::IcsEncoder;
use crate::shared::icons::icon;
use crate::shared::list_utils::sort_list;
use crate::shared::pagination::window;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use state::create_state;
use thaw::*;

// Ведущая колонка аватара + чекбокс + данные + скачивание
const COLUMN_COUNT: usize = AbsenceColumn::ALL.len() + 3;

#[component]
pub fn AbsencesList(
    /// Строки, построенные один раз при старте
    rows: Vec<AbsenceRow>,
    /// Начальное состояние (сортировка и размер страницы из конфигурации)
    initial_state: AbsencesListState,
    table_config: TableConfig,
    export_config: ExportConfig,
) -> impl IntoView {
    let total_rows = rows.len();
    let rows = StoredValue::new(rows);
    let export_config = StoredValue::new(export_config);
    let state = create_state(initial_state);

    // Искусственная задержка загрузки; таймер отменяется при размонтировании
    let loading_timer = StoredValue::new_local(None::<Timeout>);
    if table_config.loading_delay_ms > 0 {
        let timeout = Timeout::new(table_config.loading_delay_ms, move || {
            state.update(|s| s.finish_loading());
        });
        loading_timer.set_value(Some(timeout));
    } else {
        state.update(|s| s.finish_loading());
    }
    on_cleanup(move || {
        loading_timer.update_value(|timer| {
            if let Some(timer) = timer.take() {
                timer.cancel();
            }
        });
    });

    let sort = Memo::new(move |_| state.with(|s| s.sort));
    let page = Memo::new(move |_| state.with(|s| s.page));

    let sorted_rows = Memo::new(move |_| {
        let sort = sort.get();
        log::debug!("Sorting by {} {}", sort.field.id(), sort.direction.as_str());
        rows.with_value(|rows| sort_list(rows, &sort))
    });

    let page_rows = Memo::new(move |_| {
        let page = page.get();
        sorted_rows.with(|rows| {
            let w = window(rows, page.index, page.size);
            (w.visible.to_vec(), w.padding)
        })
    });

    let num_selected = Signal::derive(move || state.with(|s| s.selection.len()));
    let checkbox_state =
        Signal::derive(move || state.with(|s| s.selection.checkbox_state(total_rows)));

    let toggle_all = move |check_all: bool| {
        rows.with_value(|rows| state.update(|s| s.toggle_all(check_all, rows)));
    };

    let on_export = move |row: AbsenceRow| {
        let result = export_config
            .with_value(|config| export_row(&row, total_rows, &IcsEncoder, config));
        match result {
            Ok(()) => state.update(|s| s.export_error = None),
            Err(e) => {
                log::error!("Failed to export absence #{}: {}", row.key, e);
                state.update(|s| s.export_error = Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="absences-paper">
            <AbsencesToolbar total=total_rows num_selected=num_selected />

            {move || state.with(|s| s.export_error.clone()).map(|e| view! {
                <div class="alert alert--error" role="alert">
                    <span>{format!("Could not create the calendar file: {}", e)}</span>
                    <button
                        class="pagination-btn"
                        title="Dismiss"
                        on:click=move |_| state.update(|s| s.export_error = None)
                    >
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="table-wrapper" style="position: relative;">
                <Table attr:aria-labelledby="tableTitle" attr:style="min-width: 750px; width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=checkbox_state
                                on_change=Callback::new(toggle_all)
                            />
                            <TableHeaderCell resizable=false min_width=48.0></TableHeaderCell>
                            {AbsenceColumn::ALL.into_iter().map(|column| view! {
                                <SortableHeaderCell
                                    label=column.label()
                                    active=Signal::derive(move || sort.get().is_active(column))
                                    direction=Signal::derive(move || sort.get().direction)
                                    on_sort=Callback::new(move |_| state.update(|s| s.request_sort(column)))
                                    align=column.align()
                                />
                            }).collect_view()}
                            <TableHeaderCell resizable=false min_width=80.0>"Download"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || page_rows.get().0
                            key=|row| row.key
                            children=move |row| {
                                let key = row.key;
                                let is_selected =
                                    Signal::derive(move || state.with(|s| s.selection.is_selected(&key)));
                                let row_for_export = row.clone();
                                let avatar = (!row.image.is_empty()).then(|| view! {
                                    <img class="table__avatar" src=row.image.clone() alt="avatar" />
                                });
                                view! {
                                    <TableRow
                                        attr:role="checkbox"
                                        attr:aria-checked=move || is_selected.get().to_string()
                                        attr:data-selected=move || is_selected.get().to_string()
                                    >
                                        <TableCell></TableCell>
                                        <TableCell>{avatar}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span id=format!("enhanced-table-name-{}", key)>{row.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell attr:style="text-align: right; text-transform: capitalize;">
                                            {row.absence_type.clone()}
                                        </TableCell>
                                        <TableCell attr:style="text-align: right; width: 20%;">
                                            {row.period.clone()}
                                        </TableCell>
                                        <TableCell attr:style="text-align: right;">
                                            {row.member_note.clone()}
                                        </TableCell>
                                        <TableCell attr:style="text-align: right;">
                                            {row.status.as_str()}
                                        </TableCell>
                                        <TableCell attr:style="text-align: right; width: 20%;">
                                            {row.admitter_note.clone()}
                                        </TableCell>
                                        <TableCell attr:style="text-align: center;">
                                            <button
                                                class="table__download"
                                                title="Download iCal file"
                                                aria-label="Download iCal file"
                                                on:click=move |_| on_export(row_for_export.clone())
                                            >
                                                {icon("download")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                        {move || {
                            let padding = page_rows.with(|(_, padding)| *padding);
                            (padding > 0).then(|| {
                                let height = state.with(|s| s.padding_row_height()) * padding;
                                view! {
                                    <tr style=format!("height: {}px;", height)>
                                        <td colspan=COLUMN_COUNT.to_string()></td>
                                    </tr>
                                }
                            })
                        }}
                    </TableBody>
                </Table>

                <div
                    class="loader-container"
                    style=move || if state.with(|s| s.is_loading) { "display: grid;" } else { "display: none;" }
                >
                    <div class="lds-roller">
                        <div></div><div></div><div></div><div></div>
                        <div></div><div></div><div></div><div></div>
                    </div>
                </div>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.get().index)
                total_count=total_rows
                page_size=Signal::derive(move || page.get().size)
                on_page_change=Callback::new(move |index| state.update(|s| s.go_to_page(index)))
                on_page_size_change=Callback::new(move |size| state.update(|s| s.change_page_size(size)))
                page_size_options=table_config.page_size_options.clone()
            />
        </div>

        <label class="dense-switch">
            <input
                type="checkbox"
                prop:checked=move || state.with(|s| s.dense)
                on:change=move |ev| {
                    let dense = event_target_checked(&ev);
                    state.update(|s| s.dense = dense);
                }
            />
            " Dense padding"
        </label>
    }
}

#[component]
fn AbsencesToolbar(
    total: usize,
    #[prop(into)]
    num_selected: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class=move || {
            if num_selected.get() > 0 {
                "table-toolbar table-toolbar--selected"
            } else {
                "table-toolbar"
            }
        }>
            {move || {
                let selected = num_selected.get();
                if selected > 0 {
                    view! { <div class="table-toolbar__title">{format!("{} selected", selected)}</div> }.into_any()
                } else {
                    view! { <div class="table-toolbar__title" id="tableTitle">{format!("Absences ({})", total)}</div> }.into_any()
                }
            }}
        </div>
    }
}
