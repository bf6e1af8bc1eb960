use crate::shared::icons::icon;
use crate::shared::pagination::{pager_text_parts, PageState};
use leptos::prelude::*;

/// PaginationControls component - "Rows per page: N  X–Y of Z  < >"
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let page_state = move || PageState {
        index: current_page.get(),
        size: page_size.get(),
    };
    let parts = move || pager_text_parts(total_count.get(), current_page.get(), page_size.get());
    let menu_open = RwSignal::new(false);

    view! {
        <div class="pagination-bar">
            <div class="pagination-controls" data-testid="paginate">
                <span class="pagination-label">{move || parts()[0].clone()}</span>
                <button
                    class="page-size-toggle"
                    aria-haspopup="listbox"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || parts()[1].clone()}
                </button>
                <span class="pagination-info">
                    {move || parts()[2].clone()}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 0 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || !page_state().has_previous()
                    title="Go to previous page"
                    aria-label="Go to previous page"
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if page_state().has_next(total_count.get()) {
                            on_page_change.run(current_page.get() + 1);
                        }
                    }
                    disabled=move || !page_state().has_next(total_count.get())
                    title="Go to next page"
                    aria-label="Go to next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
            // Меню размеров вне области пейджера: в его тексте только текущий размер
            <Show when=move || menu_open.get()>
                <ul class="page-size-menu" role="listbox">
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <li
                                role="option"
                                aria-selected=move || (page_size.get() == size).to_string()
                                on:click=move |_| {
                                    menu_open.set(false);
                                    on_page_size_change.run(size);
                                }
                            >
                                {size.to_string()}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
